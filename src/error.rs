//! Error types for the geometry buffering and export core.
//!
//! Only genuinely recoverable conditions surface as errors. Hot-path misuse
//! (writing a finalized export buffer, reading a buffer before `flip`) is a
//! programming error and panics with a clear message instead.

/// Result alias for fallible geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("export buffer dimension count must be at least 1")]
    InvalidDims,

    #[error("no accessor type for {0}-component vectors")]
    UnsupportedAccessorDims(usize),
}
