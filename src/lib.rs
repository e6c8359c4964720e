pub mod config;
pub mod error;
pub mod evaluation;
pub mod pipeline;
pub mod tie_point;

// Re-export commonly used types
pub use error::{Result, TiePointError};
pub use evaluation::EvaluationMeasurements;
pub use pipeline::EvaluationReport;
pub use tie_point::{TiePoint, TiePointRole};
pub use tiepoint_geometry::{math, GeometryError, Point, Vector2D};
