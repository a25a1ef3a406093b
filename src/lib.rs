//! Curve-Editor-Engine.
//! Numerischer Kern (de Casteljau, rationale Kurven) plus Kurven-Datenmodell,
//! als Library exportiert für den UI-Layer und Tests.

pub mod algorithms;
pub mod core;
pub mod ops;

pub use algorithms::{CurveSamples, EvalError, EvalMode, Matrix, casteljau, outer, prod};
pub use core::{Curve, CurveSet, DEFAULT_WEIGHT};
pub use ops::{JoinContinuity, elevate, join, subdivide};
