//! Planar geometry primitives shared by the tie-point tooling.
//!
//! - `point`: 2D coordinate with per-axis uncertainty
//! - `vector`: directed segment between two distinct points
//! - `math`: scalar helpers (binomial coefficient, distances, angle conversion)

pub mod error;
pub mod math;
pub mod point;
pub mod vector;

// Re-export commonly used types
pub use error::{GeometryError, Result};
pub use point::Point;
pub use vector::Vector2D;
