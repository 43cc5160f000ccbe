//! Caffeine elimination model.
//!
//! First-order exponential decay with a fixed 5 hour half-life:
//! `remaining = amount * exp(-k * t)` where `k = ln(2) / half_life`.
//! Projection classifies the level at a target hour into fixed alertness
//! bands and inverts the curve to find how long until the dose fades.

use crate::{Dose, EffectLevel, EffectProjection};

/// Caffeine half-life in hours
pub const HALF_LIFE_HOURS: f64 = 5.0;

/// Below this level (mg) the caffeine is considered worn off
pub const WEAROFF_THRESHOLD_MG: f64 = 10.0;

/// Below this level (mg) only a light effect remains
pub const LIGHT_EFFECT_THRESHOLD_MG: f64 = 40.0;

/// Lower bounds (mg) of the effect bands, checked from heaviest down
const HEAVY_EFFECT_MG: f64 = 200.0;
const MILD_EFFECT_MG: f64 = 100.0;
const SMALL_EFFECT_MG: f64 = 40.0;

/// Elimination rate constant per hour
pub fn elimination_constant() -> f64 {
    std::f64::consts::LN_2 / HALF_LIFE_HOURS
}

/// Active caffeine (mg) left from a dose
///
/// Zero or negative amounts yield 0; zero or negative elapsed time returns
/// the amount unchanged.
pub fn remaining(dose: Dose) -> f64 {
    if dose.amount_mg <= 0.0 {
        return 0.0;
    }
    if dose.hours_elapsed <= 0.0 {
        return dose.amount_mg;
    }
    dose.amount_mg * (-elimination_constant() * dose.hours_elapsed).exp()
}

/// Forward distance in hours from `current_hour` to `target_hour` on a 24h clock
pub fn hours_until(current_hour: u8, target_hour: u8) -> f64 {
    let (current, target) = (f64::from(current_hour), f64::from(target_hour));
    if current <= target {
        target - current
    } else {
        24.0 - (current - target)
    }
}

/// Map a caffeine level (mg) to its effect band
pub fn effect_level(caffeine_mg: f64) -> EffectLevel {
    if caffeine_mg >= HEAVY_EFFECT_MG {
        EffectLevel::Heavy
    } else if caffeine_mg >= MILD_EFFECT_MG {
        EffectLevel::Mild
    } else if caffeine_mg >= SMALL_EFFECT_MG {
        EffectLevel::Small
    } else {
        EffectLevel::None
    }
}

/// Hours from now until the dose decays to `threshold_mg`
///
/// The amount check keeps the log argument strictly above 1, so the result
/// is never NaN.
pub fn time_until_threshold(dose: Dose, threshold_mg: f64) -> f64 {
    if dose.amount_mg <= threshold_mg || threshold_mg <= 0.0 {
        return 0.0;
    }
    let total_hours = (dose.amount_mg / threshold_mg).ln() / elimination_constant();
    (total_hours - dose.hours_elapsed).max(0.0)
}

/// Project a dose forward to `target_hour`, starting from `current_hour`
pub fn project(dose: Dose, target_hour: u8, current_hour: u8) -> EffectProjection {
    let hours_to_target = hours_until(current_hour, target_hour);
    let caffeine_at_target = remaining(Dose {
        amount_mg: dose.amount_mg,
        hours_elapsed: dose.hours_elapsed + hours_to_target,
    });
    let effect_level = effect_level(caffeine_at_target);

    tracing::debug!(
        "Projected {:.1} mg at {:02}:00 ({} h ahead): {}",
        caffeine_at_target,
        target_hour,
        hours_to_target,
        effect_level
    );

    EffectProjection {
        effect_level,
        hours_until_wearoff: time_until_threshold(dose, WEAROFF_THRESHOLD_MG),
        hours_until_light_effect: time_until_threshold(dose, LIGHT_EFFECT_THRESHOLD_MG),
        caffeine_at_target,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_half_life() {
        assert!((remaining(Dose::new(100.0, 5.0)) - 50.0).abs() < EPS);
        assert!((remaining(Dose::new(100.0, 10.0)) - 25.0).abs() < EPS);
    }

    #[test]
    fn test_zero_amount_and_zero_elapsed() {
        for t in [0.0, 1.0, 7.5, 100.0, -3.0] {
            assert_eq!(remaining(Dose::new(0.0, t)), 0.0);
        }
        for m in [0.5, 95.0, 400.0] {
            assert_eq!(remaining(Dose::new(m, 0.0)), m);
        }
    }

    #[test]
    fn test_negative_inputs_clamped() {
        assert_eq!(remaining(Dose::new(-50.0, 2.0)), 0.0);
        assert_eq!(remaining(Dose::new(80.0, -4.0)), 80.0);
    }

    #[test]
    fn test_remaining_is_non_increasing() {
        let mut previous = f64::INFINITY;
        for step in 0..200 {
            let now = remaining(Dose::new(250.0, step as f64 * 0.25));
            assert!(now <= previous);
            previous = now;
        }
    }

    #[test]
    fn test_hours_until_wraps_midnight() {
        assert_eq!(hours_until(20, 22), 2.0);
        assert_eq!(hours_until(22, 22), 0.0);
        assert_eq!(hours_until(23, 1), 2.0);
        assert_eq!(hours_until(10, 9), 23.0);
    }

    #[test]
    fn test_effect_level_band_edges() {
        assert_eq!(effect_level(200.0), EffectLevel::Heavy);
        assert_eq!(effect_level(199.9), EffectLevel::Mild);
        assert_eq!(effect_level(100.0), EffectLevel::Mild);
        assert_eq!(effect_level(40.0), EffectLevel::Small);
        assert_eq!(effect_level(39.9), EffectLevel::None);
    }

    #[test]
    fn test_project_evening_coffee() {
        let projection = project(Dose::new(175.0, 0.0), 22, 20);
        // 175 * 0.5^(2/5)
        assert!((projection.caffeine_at_target - 132.6).abs() < 0.1);
        assert_eq!(projection.effect_level, EffectLevel::Mild);
    }

    #[test]
    fn test_project_empty_dose() {
        let projection = project(Dose::new(0.0, 3.0), 22, 8);
        assert_eq!(projection.effect_level, EffectLevel::None);
        assert_eq!(projection.hours_until_wearoff, 0.0);
        assert_eq!(projection.hours_until_light_effect, 0.0);
        assert_eq!(projection.caffeine_at_target, 0.0);
    }

    #[test]
    fn test_time_until_threshold_inverts_decay() {
        // 160 mg -> 10 mg is four half-lives
        let dose = Dose::new(160.0, 0.0);
        assert!((time_until_threshold(dose, 10.0) - 20.0).abs() < EPS);

        // Already six hours in
        let dose = Dose::new(160.0, 6.0);
        assert!((time_until_threshold(dose, 10.0) - 14.0).abs() < EPS);

        // Already past the threshold
        let dose = Dose::new(160.0, 30.0);
        assert_eq!(time_until_threshold(dose, 10.0), 0.0);
    }

    #[test]
    fn test_time_until_threshold_guards() {
        assert_eq!(time_until_threshold(Dose::new(10.0, 0.0), 10.0), 0.0);
        assert_eq!(time_until_threshold(Dose::new(5.0, 0.0), 10.0), 0.0);
        assert_eq!(time_until_threshold(Dose::new(50.0, 0.0), 0.0), 0.0);
        assert_eq!(time_until_threshold(Dose::new(50.0, 0.0), -1.0), 0.0);
        assert!(!time_until_threshold(Dose::new(-5.0, 0.0), 10.0).is_nan());
    }
}
