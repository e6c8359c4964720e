use thiserror::Error;
use tiepoint_geometry::GeometryError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TiePointError {
    #[error("no CONTROL or CONTROL_CHECK tie-points to compute origins from")]
    NoControlPoints,
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

pub type Result<T> = std::result::Result<T, TiePointError>;
