use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("degenerate vector: both endpoints are ({x}, {y})")]
    DegenerateVector { x: f64, y: f64 },
    #[error("invalid binomial coefficient C({n}, {k}): requires n >= k >= 1")]
    InvalidBinomial { n: u64, k: u64 },
}

pub type Result<T> = std::result::Result<T, GeometryError>;
