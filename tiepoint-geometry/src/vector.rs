use crate::error::{GeometryError, Result};
use crate::point::Point;

/// Directed segment `p1 -> p2` between two distinct points.
///
/// The endpoints are borrowed; a vector only lives for the computation that
/// needs it.
#[derive(Debug, Clone, Copy)]
pub struct Vector2D<'a> {
    p1: &'a Point,
    p2: &'a Point,
}

fn ensure_distinct(p1: &Point, p2: &Point) -> Result<()> {
    if p1 == p2 {
        log::debug!("rejecting degenerate vector at {}", p1);
        return Err(GeometryError::DegenerateVector { x: p1.x, y: p1.y });
    }
    Ok(())
}

impl<'a> Vector2D<'a> {
    pub fn new(p1: &'a Point, p2: &'a Point) -> Result<Self> {
        ensure_distinct(p1, p2)?;
        Ok(Self { p1, p2 })
    }

    /// Redefine both endpoints. The vector is unchanged on error.
    pub fn set(&mut self, p1: &'a Point, p2: &'a Point) -> Result<()> {
        ensure_distinct(p1, p2)?;
        self.p1 = p1;
        self.p2 = p2;
        Ok(())
    }

    pub fn set_p1(&mut self, p1: &'a Point) -> Result<()> {
        ensure_distinct(p1, self.p2)?;
        self.p1 = p1;
        Ok(())
    }

    pub fn set_p2(&mut self, p2: &'a Point) -> Result<()> {
        ensure_distinct(self.p1, p2)?;
        self.p2 = p2;
        Ok(())
    }

    pub fn p1(&self) -> &'a Point {
        self.p1
    }

    pub fn p2(&self) -> &'a Point {
        self.p2
    }

    pub fn points(&self) -> (&'a Point, &'a Point) {
        (self.p1, self.p2)
    }

    /// Components of `p2 - p1`.
    pub fn direction(&self) -> (f64, f64) {
        (self.p2.x - self.p1.x, self.p2.y - self.p1.y)
    }

    /// Euclidean length; does not depend on direction.
    pub fn length(&self) -> f64 {
        let (dx, dy) = self.direction();
        (dx * dx + dy * dy).sqrt()
    }

    /// Unsigned angle in radians, in `[0, pi]`, between the directions of
    /// `self` and `other`.
    pub fn angle_between(&self, other: &Vector2D<'_>) -> f64 {
        let (x1, y1) = self.direction();
        let (x2, y2) = other.direction();

        let dot = x1 * x2 + y1 * y2;
        let norms = (x1 * x1 + y1 * y1).sqrt() * (x2 * x2 + y2 * y2).sqrt();

        // Rounding can push |cos| slightly past 1 for (anti)parallel vectors
        (dot / norms).clamp(-1.0, 1.0).acos()
    }
}
