//! Kurven-Operationen hinter der Werkzeugpalette: Grad-Erhöhung (Elevate),
//! Unterteilung (Slice) und Verbinden (Join).
//!
//! Alle Operationen sind rein: sie nehmen Kurven per Referenz und liefern
//! neue Kurven zurück — die Mutation der Kurvenliste erfolgt beim Aufrufer.
//! Rationale Kurven werden durchgängig in homogenen Koordinaten behandelt,
//! damit die Gewichte mit den Punkten mitwandern.

mod elevate;
mod join;
mod subdivide;

pub use elevate::elevate;
pub use join::{JoinContinuity, join};
pub use subdivide::subdivide;

use crate::algorithms::{EvalError, WEIGHT_EPSILON};
use crate::core::Curve;
use glam::{DVec2, DVec3};

/// Hebt die Kontrollpunkte in homogene Koordinaten: (x·w, y·w, w).
pub(crate) fn to_homogeneous(curve: &Curve) -> Vec<DVec3> {
    curve
        .control_points()
        .iter()
        .zip(curve.weights())
        .map(|(p, &w)| DVec3::new(p.x * w, p.y * w, w))
        .collect()
}

/// Projiziert homogene Punkte zurück in Punkte und Gewichte.
///
/// Gewichte mit Betrag unter [`WEIGHT_EPSILON`] degenerieren die Projektion
/// und schlagen mit [`EvalError::NumericalDegeneracy`] fehl.
pub(crate) fn from_homogeneous(
    homogeneous: &[DVec3],
    operation: &str,
) -> Result<(Vec<DVec2>, Vec<f64>), EvalError> {
    let mut points = Vec::with_capacity(homogeneous.len());
    let mut weights = Vec::with_capacity(homogeneous.len());
    for h in homogeneous {
        if h.z.abs() < WEIGHT_EPSILON {
            return Err(EvalError::NumericalDegeneracy {
                context: operation.to_string(),
                weight: h.z,
            });
        }
        points.push(DVec2::new(h.x / h.z, h.y / h.z));
        weights.push(h.z);
    }
    Ok((points, weights))
}
