//! Error types for the reconstruction pipeline.

use thiserror::Error;

/// Errors raised while reconstructing a page.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// A raster or document dimension pair was zero or negative, so the
    /// detector-space table boxes cannot be normalized.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },
}

/// Result type alias for layout reconstruction operations.
pub type Result<T> = std::result::Result<T, LayoutError>;
