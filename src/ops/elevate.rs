//! Grad-Erhöhung: N Kontrollpunkte → N+1 bei identischem Kurvenverlauf.

use super::{from_homogeneous, to_homogeneous};
use crate::algorithms::EvalError;
use crate::core::Curve;

/// Erhöht den Grad der Kurve um eins (Elevate-Werkzeug).
///
/// Die neuen Kontrollpunkte sind Konvexkombinationen benachbarter alter
/// Punkte: Q_i = (i/n)·P_{i−1} + (1 − i/n)·P_i. Rationale Kurven werden in
/// homogenen Koordinaten erhöht, die Gewichte wandern mit; der
/// Kurvenverlauf bleibt in beiden Fällen unverändert.
pub fn elevate(curve: &Curve) -> Result<Curve, EvalError> {
    let n = curve.point_count();
    if n == 0 {
        return Err(EvalError::invalid("elevate: Kurve ohne Kontrollpunkte"));
    }

    let homogeneous = to_homogeneous(curve);
    let mut elevated = Vec::with_capacity(n + 1);
    for i in 0..=n {
        let value = if i == 0 {
            homogeneous[0]
        } else if i == n {
            homogeneous[n - 1]
        } else {
            let alpha = i as f64 / n as f64;
            alpha * homogeneous[i - 1] + (1.0 - alpha) * homogeneous[i]
        };
        elevated.push(value);
    }

    let (points, weights) = from_homogeneous(&elevated, "elevate")?;
    Curve::from_parts(curve.name(), points, weights)
}
