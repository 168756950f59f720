use thiserror::Error;

/// Top-level error type for the sphaera kernel.
#[derive(Debug, Error)]
pub enum SphaeraError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("arc endpoints are antipodal; the great-circle axis is undefined")]
    AntipodalArc,

    #[error("an arc needs at least 2 samples, got {0}")]
    InsufficientSamples(usize),
}

/// Errors related to the triangle store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("index {index} is out of range for a store of {len} triangles")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("triangle not found in store")]
    TriangleNotFound,
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`SphaeraError`].
pub type Result<T> = std::result::Result<T, SphaeraError>;
