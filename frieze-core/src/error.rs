//! Error types for frieze generation

/// Errors raised while building or streaming a frieze mesh
#[derive(Debug, thiserror::Error)]
pub enum FriezeError {
    /// Radii are not finite, not positive, or outer does not exceed inner
    #[error("invalid cylinder radii: inner={inner}, outer={outer} (need 0 < inner < outer)")]
    InvalidRadii { inner: f64, outer: f64 },

    /// Grid cannot form a single cell
    #[error("pixel grid {width}x{height} is too small (need at least 2x2)")]
    GridTooSmall { width: u32, height: u32 },

    /// Sample buffer does not match the declared grid size
    #[error("grid {width}x{height} needs {expected} samples, got {actual}")]
    SampleCount {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Output sink failed mid-stream
    #[error("failed to write mesh: {0}")]
    Write(#[from] std::io::Error),
}
