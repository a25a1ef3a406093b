//! Core-Domänentypen: Kurven mit Kontrollpunkten und Gewichten, Kurvenliste.

pub mod curve;
pub mod curve_set;

pub use curve::{Curve, DEFAULT_WEIGHT};
pub use curve_set::CurveSet;
