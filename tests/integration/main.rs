//! Integration tests for the ansiart binary

mod cli_test;
mod decode_test;
mod helpers;
mod render_test;
