//! Irrigation advice rules
//!
//! Moisture thresholds pick a pump action and duration; an expected rain
//! forecast overrides everything and holds the pump.

use serde::Serialize;

/// Moisture below this is critically dry
const VERY_LOW_MOISTURE: f64 = 20.0;
/// Moisture below this still warrants a short run
const LOW_MOISTURE: f64 = 35.0;

/// What the pump should do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PumpAction {
    PumpOn,
    Hold,
}

/// Advice returned to the irrigation route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IrrigationAdvice {
    pub action: PumpAction,
    #[serde(rename = "durationMinutes")]
    pub duration_minutes: u32,
    pub reason: &'static str,
}

/// Decide pump action from soil moisture and the rain forecast.
pub fn irrigation_advice(moisture: f64, forecast_rain: bool) -> IrrigationAdvice {
    if forecast_rain {
        return IrrigationAdvice {
            action: PumpAction::Hold,
            duration_minutes: 0,
            reason: "rain_expected",
        };
    }
    if moisture < VERY_LOW_MOISTURE {
        return IrrigationAdvice {
            action: PumpAction::PumpOn,
            duration_minutes: 20,
            reason: "very_low_moisture",
        };
    }
    if moisture < LOW_MOISTURE {
        return IrrigationAdvice {
            action: PumpAction::PumpOn,
            duration_minutes: 12,
            reason: "low_moisture",
        };
    }
    IrrigationAdvice {
        action: PumpAction::Hold,
        duration_minutes: 0,
        reason: "sufficient_moisture",
    }
}
