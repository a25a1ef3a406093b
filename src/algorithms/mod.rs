//! Numerischer Kern: de-Casteljau-Auswertung plus Produkt-Primitiven.
//!
//! Alle Funktionen sind rein, zustandslos und re-entrant — keine globalen
//! Objekte, keine Seiteneffekte, identische Eingaben liefern bit-identische
//! Ergebnisse.
//!
//! **Speicher-Konventionen** (einheitlich über alle Operationen):
//! - Kontrollpunkte dimension-major: D×N, eine Zeile pro Raumdimension,
//!   eine Spalte pro Kontrollpunkt.
//! - Kurvenpunkte point-major: K×D, eine Zeile pro Parameterwert.
//! - Koeffizientenmatrix: K×N, eine Zeile pro Parameterwert.

mod error;
mod matrix;
#[cfg(test)]
mod tests;

pub use error::EvalError;
pub use matrix::Matrix;

/// Untergrenze für interpolierte Gewichte in der rationalen Projektion.
/// Beträge darunter gelten als degeneriert (Division wäre instabil).
pub const WEIGHT_EPSILON: f64 = 1e-12;

/// Auswertungsmodus — explizite Variante statt eines impliziten
/// "Extra-Argument vorhanden"-Protokolls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EvalMode<'a> {
    /// Polynomiale Bézier-Auswertung (entspricht uniformen Gewichten).
    Polynomial,
    /// Rationale (NURBS-artige) Auswertung: ein Gewicht pro Kontrollpunkt.
    Rational(&'a [f64]),
}

/// Ergebnis einer Kurvenauswertung.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSamples {
    /// Kurvenpunkte, point-major (K×D) — eine Zeile pro Parameterwert.
    pub points: Matrix,
    /// Normalisierte rationale Blending-Koeffizienten (K×N).
    /// Nur im rationalen Modus gesetzt; jede Zeile summiert zu 1.
    pub coefficients: Option<Matrix>,
}

/// Arithmetisches Produkt einer nicht-leeren Skalarfolge.
///
/// Einzelelement-Folgen liefern das Element unverändert; die leere Folge
/// ist nicht definiert und schlägt mit [`EvalError::InvalidArgument`] fehl.
pub fn prod(values: &[f64]) -> Result<f64, EvalError> {
    if values.is_empty() {
        return Err(EvalError::invalid("prod: leere Eingabefolge"));
    }
    Ok(values.iter().product())
}

/// Paarweises Produkt zweier nicht-leerer Folgen als M×N-Matrix.
///
/// Eintrag (i, j) = a\[i\] · b\[j\]; Zeilen entsprechen `a`, Spalten `b`.
pub fn outer(a: &[f64], b: &[f64]) -> Result<Matrix, EvalError> {
    if a.is_empty() || b.is_empty() {
        return Err(EvalError::invalid(format!(
            "outer: beide Folgen müssen nicht-leer sein (len(a) = {}, len(b) = {})",
            a.len(),
            b.len()
        )));
    }
    let mut result = Matrix::zeros(a.len(), b.len());
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            result.set(i, j, x * y);
        }
    }
    Ok(result)
}

/// Wertet eine Bézier-Kurve vom Grad N−1 an allen Parameterwerten `t` aus.
///
/// `points` ist dimension-major (D×N). Das Ergebnis ist point-major (K×D),
/// eine Zeile pro Parameterwert — die Anzahl der Ergebnispunkte ist immer
/// `t.len()`, auch für den leeren Parametervektor.
///
/// Im Modus [`EvalMode::Rational`] wird in homogenen Koordinaten
/// interpoliert (Punkt·Gewicht und Gewicht getrennt) und anschließend
/// durch das interpolierte Gewicht projiziert. Zusätzlich enthält das
/// Ergebnis die normalisierten Blending-Koeffizienten (K×N).
///
/// Parameterwerte außerhalb \[0, 1\] extrapolieren — die lineare
/// Interpolation bleibt definiert, es gibt keinen Bereichs-Check.
///
/// Fehler:
/// - [`EvalError::InvalidArgument`] bei leerer Kontrollpunktmatrix oder
///   wenn die Gewichtsanzahl nicht der Kontrollpunktanzahl entspricht;
/// - [`EvalError::NumericalDegeneracy`] wenn ein interpoliertes Gewicht
///   betragsmäßig unter [`WEIGHT_EPSILON`] fällt (fail-fast statt NaN).
pub fn casteljau(t: &[f64], points: &Matrix, mode: EvalMode) -> Result<CurveSamples, EvalError> {
    let dims = points.rows();
    let n = points.cols();
    if dims == 0 || n == 0 {
        return Err(EvalError::invalid(
            "casteljau: Kontrollpunktmatrix darf nicht leer sein",
        ));
    }

    match mode {
        EvalMode::Polynomial => {
            let mut result = Matrix::zeros(t.len(), dims);
            for (k, &tk) in t.iter().enumerate() {
                for d in 0..dims {
                    result.set(k, d, interpolate(points.row(d), tk));
                }
            }
            Ok(CurveSamples {
                points: result,
                coefficients: None,
            })
        }
        EvalMode::Rational(weights) => {
            if weights.len() != n {
                return Err(EvalError::invalid(format!(
                    "casteljau: {} Gewichte für {} Kontrollpunkte",
                    weights.len(),
                    n
                )));
            }

            // Homogene Kontrollwerte: pro Dimension Punkt·Gewicht
            let weighted: Vec<Vec<f64>> = (0..dims)
                .map(|d| {
                    points
                        .row(d)
                        .iter()
                        .zip(weights)
                        .map(|(p, w)| p * w)
                        .collect()
                })
                .collect();

            let mut result = Matrix::zeros(t.len(), dims);
            for (k, &tk) in t.iter().enumerate() {
                let w_t = interpolate(weights, tk);
                if w_t.abs() < WEIGHT_EPSILON {
                    return Err(EvalError::NumericalDegeneracy {
                        context: format!("casteljau: t = {tk}"),
                        weight: w_t,
                    });
                }
                for d in 0..dims {
                    result.set(k, d, interpolate(&weighted[d], tk) / w_t);
                }
            }

            let coefficients = rational_coefficients(t, weights)?;
            Ok(CurveSamples {
                points: result,
                coefficients: Some(coefficients),
            })
        }
    }
}

/// Ein de-Casteljau-Durchlauf für eine Dimension: N−1 Stufen linearer
/// Interpolation, bis genau ein Wert übrig bleibt.
fn interpolate(values: &[f64], t: f64) -> f64 {
    let mut level = values.to_vec();
    while level.len() > 1 {
        for j in 0..level.len() - 1 {
            level[j] = (1.0 - t) * level[j] + t * level[j + 1];
        }
        level.pop();
    }
    level[0]
}

/// Normalisierte rationale Blending-Koeffizienten (K×N).
///
/// Bernstein-Basismatrix (Binomialkoeffizienten über [`prod`]), elementweise
/// mit dem Gewichtsvektor skaliert (Broadcast über [`outer`]), dann
/// zeilenweise normiert — jede Zeile summiert zu 1.
fn rational_coefficients(t: &[f64], weights: &[f64]) -> Result<Matrix, EvalError> {
    let n = weights.len();
    if t.is_empty() {
        return Ok(Matrix::zeros(0, n));
    }

    let degree = n - 1;
    let mut binomials = Vec::with_capacity(n);
    for i in 0..n {
        // C(degree, i) = prod(degree−i+1 ..= degree) / prod(1 ..= i)
        let coefficient = if i == 0 {
            1.0
        } else {
            let numerator: Vec<f64> = ((degree - i + 1)..=degree).map(|v| v as f64).collect();
            let denominator: Vec<f64> = (1..=i).map(|v| v as f64).collect();
            prod(&numerator)? / prod(&denominator)?
        };
        binomials.push(coefficient);
    }

    // Gewichts-Broadcast: jede der K Zeilen trägt den Gewichtsvektor
    let weight_rows = outer(&vec![1.0; t.len()], weights)?;

    let mut coefficients = Matrix::zeros(t.len(), n);
    for (k, &tk) in t.iter().enumerate() {
        let mut row_sum = 0.0;
        for i in 0..n {
            let basis = binomials[i] * tk.powi(i as i32) * (1.0 - tk).powi((degree - i) as i32);
            let value = basis * weight_rows.get(k, i);
            coefficients.set(k, i, value);
            row_sum += value;
        }
        // row_sum ist das interpolierte Gesamtgewicht an tk
        if row_sum.abs() < WEIGHT_EPSILON {
            return Err(EvalError::NumericalDegeneracy {
                context: format!("rational_coefficients: t = {tk}"),
                weight: row_sum,
            });
        }
        for i in 0..n {
            coefficients.set(k, i, coefficients.get(k, i) / row_sum);
        }
    }
    Ok(coefficients)
}
