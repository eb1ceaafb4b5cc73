//! Subcommand handlers for the `ansiart` binary.

pub mod completions;
pub mod config;
pub mod inspect;
pub mod render;
