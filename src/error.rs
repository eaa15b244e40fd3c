use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    /// Max below min, or a non-positive extent.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// A coordinate or value outside the domain a scale was built for.
    #[error("out of bounds: {0}")]
    OutOfBounds(String),

    /// The canvas cannot hold the axes, their labels and at least one graph cell.
    #[error("insufficient space: {0}")]
    InsufficientSpace(String),

    #[error("geometry mismatch: {0}")]
    GeometryMismatch(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
