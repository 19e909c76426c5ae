use thiserror::Error;

/// Errors originating from the core module.
///
/// Drawing primitives never produce errors for out-of-bounds targets: the
/// clip-not-fail policy silently skips those pixels. Only the conditions
/// below surface as explicit failures.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Bounds-checked cell access outside the canvas rectangle.
    #[error("coordinates ({x}, {y}) out of range for {width}x{height} canvas")]
    OutOfRange {
        /// Requested column.
        x: i32,
        /// Requested row.
        y: i32,
        /// Canvas width.
        width: i32,
        /// Canvas height.
        height: i32,
    },

    /// Convolution kernel constructed with an even size.
    #[error("kernel size must be odd, got {size}")]
    InvalidKernel {
        /// The rejected size.
        size: usize,
    },

    /// Invalid configuration value or structure.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Directory creation or stream write failure while persisting.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}
