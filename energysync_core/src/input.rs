//! Parse-and-validate helpers for raw user input.
//!
//! Each function takes the text a user typed (or passed as a flag) and
//! returns either a validated value or an [`Error::InvalidInput`]. The
//! interactive shell calls these repeatedly until one succeeds.

use crate::{Error, Result};

fn parse_number(raw: &str, what: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| Error::InvalidInput(format!("{} must be a number, got '{}'", what, raw.trim())))?;
    if !value.is_finite() {
        return Err(Error::InvalidInput(format!("{} must be finite", what)));
    }
    Ok(value)
}

fn parse_integer(raw: &str, what: &str) -> Result<i64> {
    raw.trim()
        .parse()
        .map_err(|_| Error::InvalidInput(format!("{} must be a whole number, got '{}'", what, raw.trim())))
}

/// Hours slept last night (0-24)
pub fn parse_sleep_hours(raw: &str) -> Result<f64> {
    let hours = parse_number(raw, "sleep hours")?;
    if !(0.0..=24.0).contains(&hours) {
        return Err(Error::InvalidInput(format!(
            "sleep hours must be between 0 and 24, got {}",
            hours
        )));
    }
    Ok(hours)
}

/// Sleep quality rating (1-10)
pub fn parse_sleep_quality(raw: &str) -> Result<i32> {
    let quality = parse_integer(raw, "sleep quality")?;
    if !(1..=10).contains(&quality) {
        return Err(Error::InvalidInput(format!(
            "sleep quality must be between 1 and 10, got {}",
            quality
        )));
    }
    Ok(quality as i32)
}

/// Hours since caffeine was taken (>= 0)
pub fn parse_hours_elapsed(raw: &str) -> Result<f64> {
    let hours = parse_number(raw, "hours since caffeine")?;
    if hours < 0.0 {
        return Err(Error::InvalidInput(format!(
            "hours since caffeine cannot be negative, got {}",
            hours
        )));
    }
    Ok(hours)
}

/// Hour of day on a 24h clock (0-23)
pub fn parse_hour(raw: &str) -> Result<u8> {
    let hour = parse_integer(raw, "hour")?;
    u8::try_from(hour)
        .ok()
        .filter(|h| *h <= 23)
        .ok_or_else(|| Error::InvalidInput(format!("hour must be between 0 and 23, got {}", hour)))
}

/// Like [`parse_hour`], but blank input means "use the current hour"
pub fn parse_optional_hour(raw: &str) -> Result<Option<u8>> {
    if raw.trim().is_empty() {
        Ok(None)
    } else {
        parse_hour(raw).map(Some)
    }
}

/// Number of servings of a drink; blank means none
pub fn parse_units(raw: &str) -> Result<u32> {
    if raw.trim().is_empty() {
        return Ok(0);
    }
    let units = parse_integer(raw, "servings")?;
    u32::try_from(units).map_err(|_| {
        Error::InvalidInput(format!("servings cannot be negative, got {}", units))
    })
}

/// Extra caffeine (mg) outside the drink table; blank means none
pub fn parse_extra_mg(raw: &str) -> Result<f64> {
    if raw.trim().is_empty() {
        return Ok(0.0);
    }
    let mg = parse_number(raw, "extra caffeine")?;
    if mg < 0.0 {
        return Err(Error::InvalidInput(format!(
            "extra caffeine cannot be negative, got {}",
            mg
        )));
    }
    Ok(mg)
}

/// A `name=units` drink spec, e.g. `coffee=2`. A bare name counts as one serving.
pub fn parse_drink_spec(raw: &str) -> Result<(String, u32)> {
    let (name, units) = match raw.split_once('=') {
        Some((name, units)) => (name.trim(), parse_units(units)?),
        None => (raw.trim(), 1),
    };
    if name.is_empty() {
        return Err(Error::InvalidInput(format!(
            "drink spec '{}' is missing a drink name",
            raw
        )));
    }
    Ok((name.to_string(), units))
}
