//! Productivity scoring.
//!
//! Three independently capped components are summed and clamped to 0-100:
//! - Sleep: `hours * 7 + quality * 1.5`, up to 40 points
//! - Caffeine: active mg / 4, up to 20 points
//! - Circadian: +10 inside the 9-12 and 15-17 windows, -5 otherwise

use crate::caffeine::remaining;
use crate::{Mood, ScoreInputs, ScoreResult};

/// Upper bound of the score
pub const MAX_SCORE: f64 = 100.0;

const SLEEP_SCORE_CAP: f64 = 40.0;
const CAFFEINE_SCORE_CAP: f64 = 20.0;
const PEAK_HOUR_BOOST: f64 = 10.0;
const OFF_PEAK_PENALTY: f64 = -5.0;

/// Whether `hour` falls inside one of the typical alertness windows
pub fn is_peak_hour(hour: u8) -> bool {
    matches!(hour, 9..=12 | 15..=17)
}

/// Circadian adjustment for the given hour
pub fn circadian_boost(hour: u8) -> f64 {
    if is_peak_hour(hour) {
        PEAK_HOUR_BOOST
    } else {
        OFF_PEAK_PENALTY
    }
}

/// Points contributed by currently active caffeine (mg)
pub fn caffeine_score(caffeine_now_mg: f64) -> f64 {
    (caffeine_now_mg / 4.0).min(CAFFEINE_SCORE_CAP)
}

/// Points contributed by last night's sleep
pub fn sleep_score(sleep_hours: f64, sleep_quality: i32) -> f64 {
    (sleep_hours * 7.0 + f64::from(sleep_quality) * 1.5).min(SLEEP_SCORE_CAP)
}

/// Composite productivity score in `[0, 100]`
pub fn score(inputs: &ScoreInputs) -> f64 {
    let sleep = sleep_score(inputs.sleep_hours, inputs.sleep_quality);
    let caffeine = caffeine_score(remaining(inputs.dose));
    let circadian = circadian_boost(inputs.hour_of_day);

    tracing::debug!(
        "Score components: sleep {:.1}, caffeine {:.1}, circadian {:+}",
        sleep,
        caffeine,
        circadian
    );

    (sleep + caffeine + circadian).clamp(0.0, MAX_SCORE)
}

/// Mood band for a score; each band includes its lower edge
pub fn mood(score: f64) -> Mood {
    if score >= 80.0 {
        Mood::Peak
    } else if score >= 60.0 {
        Mood::Productive
    } else if score >= 40.0 {
        Mood::Moderate
    } else {
        Mood::Low
    }
}

/// Score the inputs and attach the mood label
pub fn evaluate(inputs: &ScoreInputs) -> ScoreResult {
    let score = score(inputs);
    ScoreResult {
        score,
        mood: mood(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dose;

    fn inputs(sleep_hours: f64, sleep_quality: i32, mg: f64, elapsed: f64, hour: u8) -> ScoreInputs {
        ScoreInputs {
            sleep_hours,
            sleep_quality,
            dose: Dose::new(mg, elapsed),
            hour_of_day: hour,
        }
    }

    #[test]
    fn test_peak_windows_inclusive() {
        for hour in [9, 10, 11, 12, 15, 16, 17] {
            assert_eq!(circadian_boost(hour), 10.0, "hour {}", hour);
        }
        for hour in [0, 8, 13, 14, 18, 23] {
            assert_eq!(circadian_boost(hour), -5.0, "hour {}", hour);
        }
    }

    #[test]
    fn test_component_caps() {
        assert_eq!(caffeine_score(400.0), 20.0);
        assert_eq!(caffeine_score(40.0), 10.0);
        assert_eq!(sleep_score(8.0, 8), 40.0);
        assert_eq!(sleep_score(4.0, 2), 31.0);
    }

    #[test]
    fn test_one_coffee_morning_scenario() {
        let result = evaluate(&inputs(8.0, 8, 95.0, 1.0, 10));
        assert!((result.score - 70.0).abs() < 1e-9);
        assert_eq!(result.mood, Mood::Productive);
    }

    #[test]
    fn test_score_is_bounded() {
        let cases = [
            inputs(0.0, 0, 0.0, 0.0, 3),
            inputs(-20.0, -10, -500.0, -2.0, 23),
            inputs(1e9, 1_000_000, 1e12, 0.0, 10),
            inputs(24.0, 10, 1000.0, 0.0, 16),
            inputs(2.0, 1, 0.0, 0.0, 2),
        ];
        for case in cases {
            let s = score(&case);
            assert!((0.0..=100.0).contains(&s), "score {} for {:?}", s, case);
        }
    }

    #[test]
    fn test_off_peak_penalty_floors_at_zero() {
        assert_eq!(score(&inputs(0.0, 0, 0.0, 0.0, 2)), 0.0);
    }

    #[test]
    fn test_mood_lower_edges() {
        assert_eq!(mood(100.0), Mood::Peak);
        assert_eq!(mood(80.0), Mood::Peak);
        assert_eq!(mood(79.999), Mood::Productive);
        assert_eq!(mood(60.0), Mood::Productive);
        assert_eq!(mood(40.0), Mood::Moderate);
        assert_eq!(mood(39.999), Mood::Low);
        assert_eq!(mood(0.0), Mood::Low);
    }
}
