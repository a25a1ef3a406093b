//! Dichter f64-Matrix-Container für Auswertungs-Ergebnisse.
//!
//! Zeilenweise (row-major) in einem flachen `Vec<f64>` gespeichert — dieselbe
//! Konvention wie die Ergebnismatrizen von [`casteljau`](super::casteljau):
//! Kontrollpunkte dimension-major (D×N), Kurvenpunkte point-major (K×D).

use super::EvalError;

/// Dichte Matrix, zeilenweise gespeichert.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Erstellt eine mit Nullen gefüllte Matrix.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Baut eine Matrix aus Zeilen-Slices. Alle Zeilen müssen gleich lang sein.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, EvalError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(EvalError::invalid(format!(
                    "Matrix::from_rows: Zeile {} hat Länge {}, erwartet {}",
                    i,
                    row.len(),
                    cols
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Anzahl der Zeilen.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Anzahl der Spalten.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Liest den Eintrag (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Schreibt den Eintrag (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    /// Eine Zeile als Slice.
    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Die flachen Rohdaten (zeilenweise).
    pub fn data(&self) -> &[f64] {
        &self.data
    }
}
