//! Verbinden (Join): zwei Kurven zu einer zusammenfassen.

use crate::algorithms::{EvalError, WEIGHT_EPSILON};
use crate::core::Curve;

/// Stetigkeit am Übergang (Checkbox "C1 continuity" im Editor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinContinuity {
    /// Positionsstetig: die zweite Kurve wird so verschoben, dass ihr
    /// Startpunkt auf dem Endpunkt der ersten liegt.
    C0,
    /// Zusätzlich werden die Kontrollpolygon-Kanten am Übergang kollinear
    /// ausgerichtet (gradgewichtetes Tangenten-Matching).
    C1,
}

/// Verbindet zwei Kurven zu einer einzelnen Kurve.
///
/// Die zweite Kurve wird auf den Endpunkt der ersten verschoben, der
/// geteilte Punkt nur einmal übernommen; die Kontrollpolygone werden
/// konkateniert. Bei [`JoinContinuity::C1`] wird der erste innere
/// Kontrollpunkt der zweiten Kurve auf die verlängerte Endkante der ersten
/// gelegt: b₁ = b₀ + (deg_a / deg_b)·(aₙ − aₙ₋₁).
///
/// Gewichte der zweiten Kurve werden so skaliert, dass der geteilte Punkt
/// ein eindeutiges Gewicht behält; ein Startgewicht nahe Null schlägt mit
/// [`EvalError::NumericalDegeneracy`] fehl.
pub fn join(
    first: &Curve,
    second: &Curve,
    continuity: JoinContinuity,
) -> Result<Curve, EvalError> {
    if first.point_count() == 0 || second.point_count() == 0 {
        return Err(EvalError::invalid(
            "join: beide Kurven brauchen mindestens einen Kontrollpunkt",
        ));
    }
    if continuity == JoinContinuity::C1
        && (first.point_count() < 2 || second.point_count() < 2)
    {
        return Err(EvalError::invalid(
            "join: C1-Stetigkeit braucht mindestens zwei Kontrollpunkte pro Kurve",
        ));
    }

    let a_points = first.control_points();
    let joint = a_points[a_points.len() - 1];

    // Zweite Kurve an den Übergang verschieben
    let offset = joint - second.control_points()[0];
    let mut b_points: Vec<_> = second
        .control_points()
        .iter()
        .map(|p| *p + offset)
        .collect();

    if continuity == JoinContinuity::C1 {
        let degree_a = (first.point_count() - 1) as f64;
        let degree_b = (second.point_count() - 1) as f64;
        b_points[1] = joint + (degree_a / degree_b) * (joint - a_points[a_points.len() - 2]);
    }

    // Gewichts-Skalierung: der geteilte Punkt behält das Gewicht der ersten Kurve
    let joint_weight = first.weights()[first.point_count() - 1];
    let b_start_weight = second.weights()[0];
    if b_start_weight.abs() < WEIGHT_EPSILON {
        return Err(EvalError::NumericalDegeneracy {
            context: "join: Startgewicht der zweiten Kurve".to_string(),
            weight: b_start_weight,
        });
    }
    let scale = joint_weight / b_start_weight;

    let mut points = a_points.to_vec();
    let mut weights = first.weights().to_vec();
    points.extend_from_slice(&b_points[1..]);
    weights.extend(second.weights()[1..].iter().map(|w| w * scale));

    Curve::from_parts(
        format!("{} + {}", first.name(), second.name()),
        points,
        weights,
    )
}
