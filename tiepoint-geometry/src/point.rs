use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

const DEFAULT_SIGMA: f64 = 1.0;

/// 2D coordinate with per-axis precision.
///
/// Equality and ordering only look at `(x, y)`; the sigma fields are metadata.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default = "default_sigma")]
    pub sigma_x: f64,
    #[serde(default = "default_sigma")]
    pub sigma_y: f64,
}

fn default_sigma() -> f64 {
    DEFAULT_SIGMA
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self::with_sigma(x, y, DEFAULT_SIGMA, DEFAULT_SIGMA)
    }

    pub fn with_sigma(x: f64, y: f64, sigma_x: f64, sigma_y: f64) -> Self {
        Self {
            x,
            y,
            sigma_x,
            sigma_y,
        }
    }

    /// Overwrite coordinates and precision at once.
    pub fn set(&mut self, x: f64, y: f64, sigma_x: f64, sigma_y: f64) {
        *self = Self::with_sigma(x, y, sigma_x, sigma_y);
    }

    pub fn set_xy(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    pub fn set_sigma(&mut self, sigma_x: f64, sigma_y: f64) {
        self.sigma_x = sigma_x;
        self.sigma_y = sigma_y;
    }

    pub fn xy(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn sigma(&self) -> (f64, f64) {
        (self.sigma_x, self.sigma_y)
    }

    /// Round both coordinates to the nearest integer, halves away from zero.
    pub fn round(&mut self) {
        self.x = self.x.round();
        self.y = self.y.round();
    }

    /// Exchange the full state (coordinates and sigma) with `other`.
    pub fn swap(&mut self, other: &mut Point) {
        std::mem::swap(self, other);
    }

    /// Lexicographic comparison on `x`, then `y`.
    ///
    /// Incomparable values (NaN) are reported as equal so the result can drive
    /// `sort_by`.
    pub fn cmp_xy(&self, other: &Point) -> Ordering {
        self.x
            .partial_cmp(&other.x)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.y.partial_cmp(&other.y).unwrap_or(Ordering::Equal))
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.x.partial_cmp(&other.x)? {
            Ordering::Equal => self.y.partial_cmp(&other.y),
            ord => Some(ord),
        }
    }
}

// Binary operators produce a fresh point: the operands' sigma describes
// neither the sum nor the difference.
impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

// In-place translation keeps the receiver's own precision.
impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.0},{:.0})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_point() {
        let p = Point::default();
        assert_eq!(p.xy(), (0.0, 0.0));
        assert_eq!(p.sigma(), (1.0, 1.0));
    }

    #[test]
    fn test_equality_ignores_sigma() {
        let a = Point::with_sigma(1.0, 2.0, 0.1, 0.2);
        let b = Point::with_sigma(1.0, 2.0, 5.0, 5.0);
        assert_eq!(a, b);
        assert_ne!(a, Point::new(1.0, 2.5));
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        assert!(Point::new(1.0, 9.0) < Point::new(2.0, 0.0));
        assert!(Point::new(1.0, 1.0) < Point::new(1.0, 2.0));
        assert!(!(Point::new(1.0, 2.0) < Point::new(1.0, 2.0)));
        assert_eq!(
            Point::new(3.0, 1.0).cmp_xy(&Point::new(3.0, 1.0)),
            Ordering::Equal
        );
        assert_eq!(
            Point::new(3.0, 0.0).cmp_xy(&Point::new(2.0, 7.0)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_round() {
        let mut p = Point::with_sigma(1.5, -2.5, 0.3, 0.3);
        p.round();
        assert_eq!(p.xy(), (2.0, -3.0));
        assert_eq!(p.sigma(), (0.3, 0.3));

        let mut q = Point::new(0.49, -0.49);
        q.round();
        assert_eq!(q.xy(), (0.0, 0.0));
    }

    #[test]
    fn test_arithmetic_resets_sigma() {
        let a = Point::with_sigma(3.0, 4.0, 0.5, 0.5);
        let b = Point::with_sigma(1.0, 1.0, 0.25, 0.25);

        let sum = a + b;
        assert_eq!(sum.xy(), (4.0, 5.0));
        assert_eq!(sum.sigma(), (1.0, 1.0));

        let diff = a - b;
        assert_eq!(diff.xy(), (2.0, 3.0));
        assert_eq!(diff.sigma(), (1.0, 1.0));

        assert_eq!((-a).xy(), (-3.0, -4.0));
    }

    #[test]
    fn test_compound_assign_keeps_sigma() {
        let mut a = Point::with_sigma(3.0, 4.0, 0.5, 0.75);
        a -= Point::new(1.0, 2.0);
        assert_eq!(a.xy(), (2.0, 2.0));
        assert_eq!(a.sigma(), (0.5, 0.75));

        a += Point::new(10.0, 10.0);
        assert_eq!(a.xy(), (12.0, 12.0));
        assert_eq!(a.sigma(), (0.5, 0.75));
    }

    #[test]
    fn test_swap() {
        let mut a = Point::with_sigma(1.0, 2.0, 0.1, 0.2);
        let mut b = Point::with_sigma(3.0, 4.0, 0.3, 0.4);
        a.swap(&mut b);
        assert_eq!(a.xy(), (3.0, 4.0));
        assert_eq!(a.sigma(), (0.3, 0.4));
        assert_eq!(b.xy(), (1.0, 2.0));
        assert_eq!(b.sigma(), (0.1, 0.2));
    }

    #[test]
    fn test_setters() {
        let mut p = Point::default();
        p.set(1.0, 2.0, 3.0, 4.0);
        assert_eq!(p.xy(), (1.0, 2.0));
        assert_eq!(p.sigma(), (3.0, 4.0));

        p.set_xy(-1.0, -2.0);
        p.set_sigma(0.5, 0.5);
        assert_eq!(p.xy(), (-1.0, -2.0));
        assert_eq!(p.sigma(), (0.5, 0.5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(12.4, -3.6).to_string(), "(12,-4)");
    }
}
