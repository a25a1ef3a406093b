//! Eine einzelne Bézier-Kurve: Kontrollpunkte plus ein Gewicht pro Punkt.
//!
//! Kontrollpunkte und Gewichte sind immer gleich lang — jede Mutation hält
//! beide Folgen synchron. Neue Punkte starten mit [`DEFAULT_WEIGHT`]; eine
//! Kurve gilt als rational, sobald irgendein Gewicht davon abweicht.

use crate::algorithms::{EvalError, EvalMode, Matrix, casteljau};
use glam::DVec2;

/// Standard-Gewicht für neu angelegte Kontrollpunkte.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Bézier-Kurve vom Grad N−1 (N Kontrollpunkte), optional rational.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    name: String,
    control_points: Vec<DVec2>,
    weights: Vec<f64>,
}

impl Curve {
    /// Erstellt eine leere Kurve ohne Kontrollpunkte.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            control_points: Vec::new(),
            weights: Vec::new(),
        }
    }

    /// Baut eine Kurve aus Punkten und Gewichten.
    ///
    /// Gewichtsanzahl muss der Punktanzahl entsprechen, alle Gewichte
    /// müssen endlich sein.
    pub fn from_parts(
        name: impl Into<String>,
        control_points: Vec<DVec2>,
        weights: Vec<f64>,
    ) -> Result<Self, EvalError> {
        if weights.len() != control_points.len() {
            return Err(EvalError::invalid(format!(
                "Curve::from_parts: {} Gewichte für {} Kontrollpunkte",
                weights.len(),
                control_points.len()
            )));
        }
        if let Some(w) = weights.iter().find(|w| !w.is_finite()) {
            return Err(EvalError::invalid(format!(
                "Curve::from_parts: Gewicht {w} ist nicht endlich"
            )));
        }
        Ok(Self {
            name: name.into(),
            control_points,
            weights,
        })
    }

    /// Anzeigename der Kurve.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Setzt den Anzeigenamen (Reindizierung der Kurvenliste).
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Anzahl der Kontrollpunkte.
    pub fn point_count(&self) -> usize {
        self.control_points.len()
    }

    /// Grad der Kurve (N−1), `None` für die leere Kurve.
    pub fn degree(&self) -> Option<usize> {
        self.control_points.len().checked_sub(1)
    }

    /// Die Kontrollpunkte in Einfüge-Reihenfolge.
    pub fn control_points(&self) -> &[DVec2] {
        &self.control_points
    }

    /// Die Gewichte, ein Eintrag pro Kontrollpunkt.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Hängt einen Kontrollpunkt mit Standard-Gewicht an.
    pub fn add_point(&mut self, position: DVec2) {
        self.control_points.push(position);
        self.weights.push(DEFAULT_WEIGHT);
    }

    /// Fügt einen Kontrollpunkt mit Standard-Gewicht an `index` ein.
    pub fn insert_point(&mut self, index: usize, position: DVec2) -> Result<(), EvalError> {
        if index > self.control_points.len() {
            return Err(EvalError::invalid(format!(
                "insert_point: Index {} außerhalb von 0..={}",
                index,
                self.control_points.len()
            )));
        }
        self.control_points.insert(index, position);
        self.weights.insert(index, DEFAULT_WEIGHT);
        Ok(())
    }

    /// Entfernt den Kontrollpunkt an `index` samt Gewicht.
    pub fn remove_point(&mut self, index: usize) -> Option<DVec2> {
        if index >= self.control_points.len() {
            return None;
        }
        self.weights.remove(index);
        Some(self.control_points.remove(index))
    }

    /// Verschiebt einen Kontrollpunkt. `false` wenn der Index ungültig ist.
    pub fn move_point(&mut self, index: usize, position: DVec2) -> bool {
        let Some(point) = self.control_points.get_mut(index) else {
            return false;
        };
        *point = position;
        true
    }

    /// Setzt das Gewicht eines Kontrollpunkts (Weight-Tabelle).
    pub fn set_weight(&mut self, index: usize, weight: f64) -> Result<(), EvalError> {
        if !weight.is_finite() {
            return Err(EvalError::invalid(format!(
                "set_weight: Gewicht {weight} ist nicht endlich"
            )));
        }
        if index >= self.weights.len() {
            return Err(EvalError::invalid(format!(
                "set_weight: Index {} außerhalb von 0..{}",
                index,
                self.weights.len()
            )));
        }
        self.weights[index] = weight;
        Ok(())
    }

    /// Ersetzt alle Gewichte auf einmal.
    pub fn set_weights(&mut self, weights: Vec<f64>) -> Result<(), EvalError> {
        if weights.len() != self.control_points.len() {
            return Err(EvalError::invalid(format!(
                "set_weights: {} Gewichte für {} Kontrollpunkte",
                weights.len(),
                self.control_points.len()
            )));
        }
        if let Some(w) = weights.iter().find(|w| !w.is_finite()) {
            return Err(EvalError::invalid(format!(
                "set_weights: Gewicht {w} ist nicht endlich"
            )));
        }
        self.weights = weights;
        Ok(())
    }

    /// `true` sobald irgendein Gewicht vom Standard abweicht.
    pub fn is_rational(&self) -> bool {
        self.weights.iter().any(|&w| w != DEFAULT_WEIGHT)
    }

    /// Wertet die Kurve an `resolution` gleichverteilten Parameterwerten
    /// auf [0, 1] aus. `resolution = 0` liefert die leere Folge.
    ///
    /// Rationale Kurven werden automatisch im gewichteten Modus ausgewertet.
    pub fn sample(&self, resolution: usize) -> Result<Vec<DVec2>, EvalError> {
        let t = linspace(resolution);
        let mode = if self.is_rational() {
            EvalMode::Rational(&self.weights)
        } else {
            EvalMode::Polynomial
        };
        let samples = casteljau(&t, &self.control_matrix()?, mode)?;
        Ok(points_from_rows(&samples.points))
    }

    /// Wie [`sample`](Curve::sample), zusätzlich mit der normalisierten
    /// Koeffizientenmatrix (K×N) — immer im rationalen Modus ausgewertet,
    /// auch bei uniformen Gewichten.
    pub fn sample_with_coefficients(
        &self,
        resolution: usize,
    ) -> Result<(Vec<DVec2>, Matrix), EvalError> {
        let t = linspace(resolution);
        let samples = casteljau(
            &t,
            &self.control_matrix()?,
            EvalMode::Rational(&self.weights),
        )?;
        let coefficients = samples
            .coefficients
            .ok_or_else(|| EvalError::invalid("rationaler Modus ohne Koeffizienten"))?;
        Ok((points_from_rows(&samples.points), coefficients))
    }

    /// Kontrollpunkte als dimension-major 2×N-Matrix.
    fn control_matrix(&self) -> Result<Matrix, EvalError> {
        let n = self.control_points.len();
        if n == 0 {
            return Err(EvalError::invalid(format!(
                "Kurve '{}' hat keine Kontrollpunkte",
                self.name
            )));
        }
        let mut matrix = Matrix::zeros(2, n);
        for (i, point) in self.control_points.iter().enumerate() {
            matrix.set(0, i, point.x);
            matrix.set(1, i, point.y);
        }
        Ok(matrix)
    }
}

/// `count` gleichverteilte Werte auf [0, 1].
fn linspace(count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => (0..count)
            .map(|i| i as f64 / (count - 1) as f64)
            .collect(),
    }
}

/// Entpackt eine point-major K×2-Matrix in `DVec2`-Punkte.
fn points_from_rows(points: &Matrix) -> Vec<DVec2> {
    (0..points.rows())
        .map(|k| DVec2::new(points.get(k, 0), points.get(k, 1)))
        .collect()
}
