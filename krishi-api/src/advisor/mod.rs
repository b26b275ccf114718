//! Advisory rule tables
//!
//! Deterministic lookups behind the advisory routes: crop recommendation,
//! fertilizer advice, irrigation thresholds, and the per-label disease
//! message table. No state, no concurrency concerns.

pub mod advice;
pub mod crop;
pub mod fertilizer;
pub mod irrigation;

pub use advice::{disease_advice, unknown_advice};
pub use crop::{crop_message, recommend_crops, AreaUnit, SoilType};
pub use fertilizer::{fertilizer_advice, SoilReading};
pub use irrigation::{irrigation_advice, IrrigationAdvice, PumpAction};
