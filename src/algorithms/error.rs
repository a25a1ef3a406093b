//! Fehlertypen des numerischen Kerns.

use thiserror::Error;

/// Fehler der reinen Auswertungsfunktionen.
///
/// Alle Funktionen sind Blatt-Berechnungen: Fehler werden sofort an den
/// Aufrufer gereicht, nie verschluckt oder wiederholt.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Leere Eingabefolge, inkonsistente Formen oder ungültiger Index.
    #[error("Ungültiges Argument: {context}")]
    InvalidArgument {
        /// Beschreibung der verletzten Vorbedingung
        context: String,
    },

    /// Interpoliertes Gewicht zu nah an Null — die rationale Projektion
    /// wäre numerisch instabil. Fail-fast statt NaN-Propagation.
    #[error("Numerische Degeneration in {context}: Gewicht {weight:e} zu nah an Null")]
    NumericalDegeneracy {
        /// Ort der Degeneration (Operation und Parameterwert)
        context: String,
        /// Der degenerierte Gewichtswert
        weight: f64,
    },
}

impl EvalError {
    /// Kurzform für `InvalidArgument` mit formatiertem Kontext.
    pub(crate) fn invalid(context: impl Into<String>) -> Self {
        EvalError::InvalidArgument {
            context: context.into(),
        }
    }
}
