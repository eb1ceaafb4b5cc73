//! Canvas construction errors.

/// Errors that can occur when creating a canvas.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanvasError {
    #[error("Invalid screen size {width}x{height}: both dimensions must be positive")]
    InvalidSize { width: i32, height: i32 },
}
