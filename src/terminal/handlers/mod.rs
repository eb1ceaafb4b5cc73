//! Terminal escape sequence handlers.
//!
//! Organized by category:
//! - cursor: Cursor positioning (CUP)
//! - editing: Erase operations (ED, EL)
//! - style: SGR (Select Graphic Rendition) handling
//!
//! Every other sequence is consumed by the performer in
//! [`super::buffer`] and ignored.

pub mod cursor;
pub mod editing;
pub mod style;
