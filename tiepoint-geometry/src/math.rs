//! Scalar helpers used for normalisation and distance computations.

use crate::error::{GeometryError, Result};

/// Same tolerance as C's `FLT_EPSILON`.
pub const DEFAULT_EPSILON: f64 = f32::EPSILON as f64;

/// Absolute difference between two values.
pub fn difference(lhs: f64, rhs: f64) -> f64 {
    if lhs * rhs < 0.0 {
        lhs.abs() + rhs.abs()
    } else {
        (lhs.abs() - rhs.abs()).abs()
    }
}

/// Exact equality, or difference within `eps`.
pub fn is_equal(lhs: f64, rhs: f64, eps: f64) -> bool {
    debug_assert!(eps >= 0.0, "epsilon must be non-negative");
    lhs == rhs || difference(lhs, rhs) <= eps
}

pub fn is_equal_default(lhs: f64, rhs: f64) -> bool {
    is_equal(lhs, rhs, DEFAULT_EPSILON)
}

/// Drop decimal digits beyond `digits`, rounding toward zero.
///
/// `truncate(1.211, 1) == 1.2`, `truncate(-1.211, 2) == -1.21`.
pub fn truncate(value: f64, digits: i32) -> f64 {
    let p = 10f64.powi(digits);
    (value * p).trunc() / p
}

/// Non-negative remainder of `a / b` for `a >= 0`, `b > 0`.
pub fn modulus(a: f64, b: f64) -> f64 {
    debug_assert!(a >= 0.0 && b > 0.0, "modulus requires a >= 0 and b > 0");
    a - b * (a / b).floor()
}

pub fn factorial(n: u64) -> f64 {
    (2..=n).fold(1.0, |acc, i| acc * i as f64)
}

/// Number of `k`-subsets of an `n`-set; defined for `n >= k >= 1`.
pub fn binomial(n: u64, k: u64) -> Result<u64> {
    if k == 0 || n < k {
        return Err(GeometryError::InvalidBinomial { n, k });
    }

    // Multiplicative form stays exact where the factorial ratio would not
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        acc = acc * (n - i) as u128 / (i + 1) as u128;
    }
    Ok(acc as u64)
}

pub fn squared_distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x1 - x2;
    let dy = y1 - y2;
    dx * dx + dy * dy
}

pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    squared_distance(x1, y1, x2, y2).sqrt()
}

/// Polar angle of `(x, y)` in degrees, in `(-180, 180]`.
pub fn cartesian_angle(x: f64, y: f64) -> f64 {
    radians_to_degrees(y.atan2(x))
}

pub fn radians_to_degrees(rad: f64) -> f64 {
    rad.to_degrees()
}

pub fn degrees_to_radians(deg: f64) -> f64 {
    deg.to_radians()
}
