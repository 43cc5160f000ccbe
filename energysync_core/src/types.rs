//! Core domain types for the energysync system.
//!
//! All of these are plain value objects: built per invocation, never
//! mutated, never persisted.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Caffeine Types
// ============================================================================

/// One caffeine intake event, already aggregated across drink sources
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Dose {
    pub amount_mg: f64,
    pub hours_elapsed: f64,
}

impl Dose {
    pub fn new(amount_mg: f64, hours_elapsed: f64) -> Self {
        Self {
            amount_mg,
            hours_elapsed,
        }
    }
}

/// Qualitative bucket for the projected caffeine level at a future hour
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum EffectLevel {
    None,
    Small,
    Mild,
    Heavy,
}

impl EffectLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectLevel::None => "none",
            EffectLevel::Small => "small",
            EffectLevel::Mild => "mild",
            EffectLevel::Heavy => "heavy",
        }
    }
}

impl fmt::Display for EffectLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Projection of a dose forward to a target hour
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct EffectProjection {
    pub effect_level: EffectLevel,
    pub hours_until_wearoff: f64,
    pub hours_until_light_effect: f64,
    pub caffeine_at_target: f64,
}

// ============================================================================
// Scoring Types
// ============================================================================

/// Everything the productivity scorer consumes
///
/// No range checks happen here; out-of-range values are scored
/// arithmetically. Validation lives in [`crate::input`].
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScoreInputs {
    pub sleep_hours: f64,
    pub sleep_quality: i32,
    pub dose: Dose,
    pub hour_of_day: u8,
}

/// Qualitative label for a productivity score
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Low,
    Moderate,
    Productive,
    Peak,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Peak => "peak",
            Mood::Productive => "productive",
            Mood::Moderate => "moderate",
            Mood::Low => "low",
        }
    }

    /// One-line advice shown alongside the score
    pub fn advice(&self) -> &'static str {
        match self {
            Mood::Peak => "🚀 Peak mode! Perfect time to focus.",
            Mood::Productive => "⚡ Productive window open. Ride the wave!",
            Mood::Moderate => "😐 Moderate focus. Maybe hydrate or take a quick break.",
            Mood::Low => "🌙 Low energy. Consider resting or minimizing distractions.",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bounded score plus its mood label
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScoreResult {
    pub score: f64,
    pub mood: Mood,
}
