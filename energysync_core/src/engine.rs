//! Assessment engine.
//!
//! Runs the caffeine model and the productivity scorer in sequence for one
//! set of inputs:
//! 1. Active caffeine right now
//! 2. Projection of the dose to the target hour
//! 3. Score and mood from sleep, caffeine and time of day

use crate::caffeine::{project, remaining};
use crate::scoring::evaluate;
use crate::{EffectProjection, ScoreInputs, ScoreResult};
use chrono::{DateTime, TimeDelta, TimeZone};
use serde::Serialize;

/// Everything derived for one set of inputs
#[derive(Clone, Debug, Serialize)]
pub struct Assessment {
    pub inputs: ScoreInputs,
    pub target_hour: u8,
    pub caffeine_now_mg: f64,
    pub result: ScoreResult,
    pub projection: EffectProjection,
}

/// Score the inputs and project the dose to `target_hour`
///
/// The projection starts from `inputs.hour_of_day`.
pub fn assess(inputs: &ScoreInputs, target_hour: u8) -> Assessment {
    let caffeine_now_mg = remaining(inputs.dose);
    let projection = project(inputs.dose, target_hour, inputs.hour_of_day);
    let result = evaluate(inputs);

    tracing::info!(
        "Assessed score {:.1} ({}) with {:.1} mg active, {} effect at {:02}:00",
        result.score,
        result.mood,
        caffeine_now_mg,
        projection.effect_level,
        target_hour
    );

    Assessment {
        inputs: *inputs,
        target_hour,
        caffeine_now_mg,
        result,
        projection,
    }
}

/// Wall-clock time `hours` after `now`, to the nearest minute
///
/// Returns `None` when the result can't be represented as a date.
pub fn clock_after<Tz: TimeZone>(now: DateTime<Tz>, hours: f64) -> Option<DateTime<Tz>> {
    if !hours.is_finite() {
        return None;
    }
    let minutes = (hours.max(0.0) * 60.0).round() as i64;
    now.checked_add_signed(TimeDelta::try_minutes(minutes)?)
}
