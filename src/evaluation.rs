//! Geometric consistency measurements over a set of tie-points.
//!
//! Each estimator compares the work and reference coordinate systems over all
//! pairs (or triples) of tie-points:
//!
//! - length variation: mean ratio of work to reference inter-point distance
//! - anisomorphism: mean ratio of per-axis distance ratios, 1.0 when the
//!   mapping scales both axes alike
//! - similarity: mean ratio of work to reference angles, 1.0 when relative
//!   angles are preserved
//!
//! Too few points is an expected condition while a tie-point set is being
//! built, so estimators report it with `false` and keep the previous value.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use tiepoint_geometry::{math, Vector2D};

use crate::error::Result;
use crate::tie_point::TiePoint;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationMeasurements {
    length_variation: f64,
    anisomorphism: f64,
    similarity: f64,
}

impl EvaluationMeasurements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn length_variation(&self) -> f64 {
        self.length_variation
    }

    pub fn anisomorphism(&self) -> f64 {
        self.anisomorphism
    }

    pub fn similarity(&self) -> f64 {
        self.similarity
    }

    /// Average over all pairs of `|work_i - work_j| / |reference_i - reference_j|`.
    ///
    /// Duplicate tie-points are merged first. Returns `false`, leaving the
    /// stored value as it was, with fewer than two distinct tie-points or when
    /// two of them share a work or a reference point.
    pub fn estimate_length_variation(&mut self, points: &[TiePoint]) -> bool {
        let mut unique = points.to_vec();
        unique.sort_by(TiePoint::cmp_key);
        unique.dedup();

        let n = unique.len();
        if n < 2 {
            debug!("length variation needs 2 distinct tie-points, got {}", n);
            return false;
        }

        let Ok(pairs) = math::binomial(n as u64, 2) else {
            return false;
        };
        let den = pairs as f64;
        let mut sum = 0.0;
        for (i, a) in unique.iter().enumerate() {
            for b in &unique[i + 1..] {
                if a.work == b.work || a.reference == b.reference {
                    warn!("length variation undefined: {} and {} share a point", a, b);
                    return false;
                }

                let work = Vector2D::new(&a.work, &b.work).map(|v| v.length());
                let reference = Vector2D::new(&a.reference, &b.reference).map(|v| v.length());
                match (work, reference) {
                    (Ok(work), Ok(reference)) => sum += (work / reference) / den,
                    _ => return false,
                }
            }
        }

        self.length_variation = sum;
        true
    }

    /// Average over all pairs of `(|dx_work| * |dy_ref|) / (|dx_ref| * |dy_work|)`.
    ///
    /// Works on the list as given, without merging duplicates. A pair whose
    /// denominator vanishes does not contribute and is taken out of the pair
    /// count; when no pair contributes the result is 1.0.
    pub fn estimate_anisomorphism(&mut self, points: &[TiePoint]) -> bool {
        let n = points.len();
        if n < 2 {
            debug!("anisomorphism needs 2 tie-points, got {}", n);
            return false;
        }

        let Ok(pairs) = math::binomial(n as u64, 2) else {
            return false;
        };
        // Running count, decremented for every pair that cannot contribute
        let mut den = pairs as f64;
        let mut sum = 0.0;
        let mut skipped = 0usize;
        for (i, a) in points.iter().enumerate() {
            for b in &points[i + 1..] {
                let num_x = (a.work.x - b.work.x).abs();
                let den_x = (a.reference.x - b.reference.x).abs();
                let num_y = (a.work.y - b.work.y).abs();
                let den_y = (a.reference.y - b.reference.y).abs();

                if den_x * num_y != 0.0 {
                    sum += (num_x * den_y) / (den_x * num_y);
                } else {
                    den -= 1.0;
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            debug!("anisomorphism skipped {} degenerate pairs", skipped);
        }

        self.anisomorphism = if den != 0.0 { sum / den } else { 1.0 };
        true
    }

    /// Average over all triples `i < j < k` of the angle `(j - i, k - i)` in
    /// work space divided by the same angle in reference space.
    ///
    /// Works on the list as given. Returns `Ok(false)` with fewer than three
    /// tie-points. Coincident points within a triple are a caller error
    /// (prune duplicates first) and fail with a degenerate vector error; the
    /// stored value is left untouched in both cases.
    pub fn estimate_similarity(&mut self, points: &[TiePoint]) -> Result<bool> {
        let n = points.len();
        if n < 3 {
            debug!("similarity needs 3 tie-points, got {}", n);
            return Ok(false);
        }

        let den = math::binomial(n as u64, 3)? as f64;
        let mut sum = 0.0;
        for (i, a) in points.iter().enumerate() {
            for (j, b) in points.iter().enumerate().skip(i + 1) {
                for c in &points[j + 1..] {
                    let work_ab = Vector2D::new(&a.work, &b.work)?;
                    let work_ac = Vector2D::new(&a.work, &c.work)?;
                    let reference_ab = Vector2D::new(&a.reference, &b.reference)?;
                    let reference_ac = Vector2D::new(&a.reference, &c.reference)?;

                    sum += (work_ab.angle_between(&work_ac)
                        / reference_ab.angle_between(&reference_ac))
                        / den;
                }
            }
        }

        self.similarity = sum;
        Ok(true)
    }
}
