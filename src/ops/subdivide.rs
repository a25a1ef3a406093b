//! Unterteilung (Slice): eine Kurve am Parameter t in zwei Teilkurven zerlegen.

use super::{from_homogeneous, to_homogeneous};
use crate::algorithms::EvalError;
use crate::core::Curve;

/// Zerlegt die Kurve am Parameter `t` in zwei Teilkurven, die zusammen
/// exakt den originalen Verlauf nachzeichnen (Slice-Werkzeug).
///
/// Die Kontrollpunkte der Teilkurven fallen als Randwerte des
/// de-Casteljau-Dreiecks ab: die linke Kurve sammelt die jeweils ersten,
/// die rechte die jeweils letzten Punkte jeder Interpolationsstufe.
/// `t` außerhalb [0, 1] ist zulässig und extrapoliert.
pub fn subdivide(curve: &Curve, t: f64) -> Result<(Curve, Curve), EvalError> {
    let n = curve.point_count();
    if n == 0 {
        return Err(EvalError::invalid("subdivide: Kurve ohne Kontrollpunkte"));
    }

    let mut level = to_homogeneous(curve);
    let mut left = vec![level[0]];
    let mut right = vec![level[n - 1]];
    while level.len() > 1 {
        for j in 0..level.len() - 1 {
            level[j] = (1.0 - t) * level[j] + t * level[j + 1];
        }
        level.pop();
        left.push(level[0]);
        right.push(level[level.len() - 1]);
    }
    right.reverse();

    let (left_points, left_weights) = from_homogeneous(&left, "subdivide")?;
    let (right_points, right_weights) = from_homogeneous(&right, "subdivide")?;
    Ok((
        Curve::from_parts(format!("{} [links]", curve.name()), left_points, left_weights)?,
        Curve::from_parts(
            format!("{} [rechts]", curve.name()),
            right_points,
            right_weights,
        )?,
    ))
}
