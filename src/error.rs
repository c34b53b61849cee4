//! Error types for chart construction and rendering.

use thiserror::Error;

/// Errors that can occur when building or drawing a chart.
#[derive(Error, Debug)]
pub enum ChartError {
    /// Explicit bar position outside `0..len`
    #[error("bar position {pos} out of range (bar count {len})")]
    BarIndexOutOfRange { pos: usize, len: usize },

    /// Units must sit at a non-negative X position to be inserted
    #[error("unit X position must be non-negative, got {0}")]
    NegativeXPosition(i32),

    /// Axis unit divisors must be positive
    #[error("axis unit must be positive, got {0}")]
    InvalidUnit(i32),

    /// Color string that is not `#rrggbb`
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Wide string that is not valid UTF-16
    #[error("invalid text encoding: {0}")]
    InvalidEncoding(String),

    /// Drawing backend failure
    #[error("rendering error: {0}")]
    Render(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for chart operations
pub type ChartResult<T> = Result<T, ChartError>;
