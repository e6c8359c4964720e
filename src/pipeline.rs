use log::{info, warn};
use serde::{Deserialize, Serialize};
use tiepoint_geometry::Point;

use crate::config::EvaluationConfig;
use crate::error::Result;
use crate::evaluation::EvaluationMeasurements;
use crate::tie_point::TiePoint;

/// Measurements gathered for one tie-point set. `None` means the estimator
/// did not have enough usable tie-points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub num_points: usize,
    pub length_variation: Option<f64>,
    pub anisomorphism: Option<f64>,
    pub similarity: Option<f64>,
}

impl EvaluationReport {
    /// True when every available measurement looks like a consistent mapping.
    ///
    /// Anisomorphism and similarity must be within `tolerance` of 1.0; the
    /// anisomorphism check assumes the two systems have roughly aligned axes,
    /// a rotated but otherwise similar mapping can still fail it. Length
    /// variation carries the unknown scale between both systems, so it only
    /// has to be finite and positive.
    pub fn is_consistent(&self, config: &EvaluationConfig) -> bool {
        let near_one = |v: Option<f64>| v.map_or(true, |v| (v - 1.0).abs() <= config.tolerance);

        self.length_variation
            .map_or(true, |v| v.is_finite() && v > 0.0)
            && near_one(self.anisomorphism)
            && near_one(self.similarity)
    }
}

/// Clean up a tie-point set in place before evaluation.
///
/// Prunes duplicate correspondences and, when configured, moves both
/// coordinate systems onto the control-point centroids. Returns the
/// `(work, reference)` origins that were subtracted.
pub fn prepare(
    points: &mut Vec<TiePoint>,
    config: &EvaluationConfig,
) -> Result<Option<(Point, Point)>> {
    if config.remove_duplicates {
        TiePoint::remove_duplicate_points(points, config.max_dif);
    }

    if !config.recenter {
        return Ok(None);
    }

    let (work_origin, reference_origin) = TiePoint::compute_origins(points)?;
    TiePoint::change_origins(points, work_origin, reference_origin);
    Ok(Some((work_origin, reference_origin)))
}

/// Run all three estimators over `points`.
pub fn evaluate(points: &[TiePoint]) -> Result<EvaluationReport> {
    let mut measurements = EvaluationMeasurements::new();

    let length_variation = measurements
        .estimate_length_variation(points)
        .then(|| measurements.length_variation());
    let anisomorphism = measurements
        .estimate_anisomorphism(points)
        .then(|| measurements.anisomorphism());
    let similarity = measurements
        .estimate_similarity(points)?
        .then(|| measurements.similarity());

    let report = EvaluationReport {
        num_points: points.len(),
        length_variation,
        anisomorphism,
        similarity,
    };

    if length_variation.is_none() || anisomorphism.is_none() || similarity.is_none() {
        warn!(
            "incomplete evaluation of {} tie-points: {:?}",
            points.len(),
            report
        );
    } else {
        info!(
            "evaluated {} tie-points: length variation {:.4}, anisomorphism {:.4}, similarity {:.4}",
            report.num_points,
            measurements.length_variation(),
            measurements.anisomorphism(),
            measurements.similarity()
        );
    }

    Ok(report)
}

/// `prepare` followed by `evaluate`.
pub fn prepare_and_evaluate(
    points: &mut Vec<TiePoint>,
    config: &EvaluationConfig,
) -> Result<EvaluationReport> {
    prepare(points, config)?;
    evaluate(points)
}
