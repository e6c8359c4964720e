//! Tie-points: correspondences between the work and the reference coordinate
//! systems, plus the set-maintenance routines run before evaluation.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use tiepoint_geometry::Point;

use crate::error::{Result, TiePointError};

/// How a tie-point takes part in fitting and validating a transformation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TiePointRole {
    #[default]
    ControlCheck,
    Control,
    Check,
    None,
}

impl TiePointRole {
    /// Control points are the ones that define the coordinate origins.
    pub fn is_control(self) -> bool {
        matches!(self, TiePointRole::Control | TiePointRole::ControlCheck)
    }
}

/// A work point (image space) paired with a reference point (map or other
/// image).
///
/// Equality and ordering use `(work, reference)` only; the role is not part
/// of the key.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TiePoint {
    pub work: Point,
    pub reference: Point,
    #[serde(default)]
    pub role: TiePointRole,
}

impl TiePoint {
    pub fn new(work: Point, reference: Point, role: TiePointRole) -> Self {
        Self {
            work,
            reference,
            role,
        }
    }

    pub fn control_check(work: Point, reference: Point) -> Self {
        Self::new(work, reference, TiePointRole::ControlCheck)
    }

    pub fn set(&mut self, work: Point, reference: Point, role: TiePointRole) {
        *self = Self::new(work, reference, role);
    }

    pub fn set_work(&mut self, work: Point) {
        self.work = work;
    }

    pub fn set_reference(&mut self, reference: Point) {
        self.reference = reference;
    }

    pub fn set_role(&mut self, role: TiePointRole) {
        self.role = role;
    }

    pub fn work(&self) -> Point {
        self.work
    }

    pub fn reference(&self) -> Point {
        self.reference
    }

    pub fn role(&self) -> TiePointRole {
        self.role
    }

    pub fn points(&self) -> (Point, Point) {
        (self.work, self.reference)
    }

    /// Lexicographic comparison on `(work, reference)`, usable with `sort_by`.
    pub fn cmp_key(&self, other: &TiePoint) -> Ordering {
        self.work
            .cmp_xy(&other.work)
            .then_with(|| self.reference.cmp_xy(&other.reference))
    }

    /// Removes tie-points sharing a reference point.
    ///
    /// Scanning forward, every later entry whose reference point equals the
    /// current one is dropped. When one of those had a work point further than
    /// `max_dif` away on either axis, the correspondence is ambiguous and the
    /// current entry is dropped as well.
    pub fn remove_duplicate_points(points: &mut Vec<TiePoint>, max_dif: f64) {
        let before = points.len();

        let mut i = 0;
        while i + 1 < points.len() {
            let (work, reference) = points[i].points();
            let mut ambiguous = false;

            let mut j = i + 1;
            while j < points.len() {
                if points[j].reference != reference {
                    j += 1;
                    continue;
                }

                let other = points.remove(j);
                if (work.x - other.work.x).abs() > max_dif
                    || (work.y - other.work.y).abs() > max_dif
                {
                    ambiguous = true;
                }
                debug!("removed duplicate tie-point {}", other);
            }

            if ambiguous {
                let dropped = points.remove(i);
                debug!("removed ambiguous tie-point {}", dropped);
            } else {
                i += 1;
            }
        }

        if points.len() != before {
            debug!(
                "duplicate removal kept {} of {} tie-points (max_dif {})",
                points.len(),
                before,
                max_dif
            );
        }
    }

    /// Centroids of the work and reference points of the control tie-points.
    ///
    /// `Check` and `None` entries do not contribute.
    pub fn compute_origins(points: &[TiePoint]) -> Result<(Point, Point)> {
        let mut work_sum = (0.0, 0.0);
        let mut reference_sum = (0.0, 0.0);
        let mut n = 0usize;

        for tp in points.iter().filter(|tp| tp.role.is_control()) {
            work_sum.0 += tp.work.x;
            work_sum.1 += tp.work.y;
            reference_sum.0 += tp.reference.x;
            reference_sum.1 += tp.reference.y;
            n += 1;
        }

        if n == 0 {
            warn!(
                "cannot compute origins: none of {} tie-points is a control point",
                points.len()
            );
            return Err(TiePointError::NoControlPoints);
        }

        let n = n as f64;
        let work_origin = Point::new(work_sum.0 / n, work_sum.1 / n);
        let reference_origin = Point::new(reference_sum.0 / n, reference_sum.1 / n);
        debug!(
            "origins: work {:?}, reference {:?}",
            work_origin.xy(),
            reference_origin.xy()
        );

        Ok((work_origin, reference_origin))
    }

    /// Moves both coordinate systems so the given origins become `(0, 0)`.
    /// Applies to every tie-point regardless of role.
    pub fn change_origins(points: &mut [TiePoint], work_origin: Point, reference_origin: Point) {
        for tp in points.iter_mut() {
            tp.work -= work_origin;
            tp.reference -= reference_origin;
        }
    }
}

impl PartialEq for TiePoint {
    fn eq(&self, other: &Self) -> bool {
        self.work == other.work && self.reference == other.reference
    }
}

impl PartialOrd for TiePoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.work.partial_cmp(&other.work)? {
            Ordering::Equal => self.reference.partial_cmp(&other.reference),
            ord => Some(ord),
        }
    }
}

impl fmt::Display for TiePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Work Point:{} Reference Point:{}", self.work, self.reference)
    }
}
