//! Caffeine reference values per drink.
//!
//! The table maps a drink name to the caffeine (mg) in one serving and is
//! used to turn "two coffees and a cola" into a single dose amount. The
//! built-in values can be replaced through the `[drinks]` config section.

use crate::{Error, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Cached default table - built once and reused
static DEFAULT_DRINKS: Lazy<DrinkTable> = Lazy::new(DrinkTable::builtin);

/// Get a reference to the built-in drink table
pub fn default_drink_table() -> &'static DrinkTable {
    &DEFAULT_DRINKS
}

/// Drink name -> caffeine mg per serving
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct DrinkTable {
    entries: BTreeMap<String, f64>,
}

impl Default for DrinkTable {
    fn default() -> Self {
        default_drink_table().clone()
    }
}

/// Canonical form of a drink name: lowercase, `-` and spaces become `_`
pub fn normalize_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '-' || c.is_whitespace() { '_' } else { c })
        .collect()
}

impl DrinkTable {
    /// Built-in reference values
    pub fn builtin() -> Self {
        Self::from_entries([
            ("coffee", 95.0),
            ("energy_drink", 80.0),
            ("tea", 47.0),
            ("cola", 20.0),
        ])
    }

    /// Build a table from `(name, mg_per_unit)` pairs
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, mg)| (normalize_name(name.as_ref()), mg))
                .collect(),
        }
    }

    /// Caffeine per serving for a drink, if known
    pub fn mg_per_unit(&self, name: &str) -> Option<f64> {
        let wanted = normalize_name(name);
        self.entries
            .iter()
            .find(|(key, _)| normalize_name(key) == wanted)
            .map(|(_, mg)| *mg)
    }

    /// Iterate drinks in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, mg)| (name.as_str(), *mg))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check table contents, returning a list of problems (empty if valid)
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (name, mg) in &self.entries {
            if name.trim().is_empty() {
                errors.push("Drink has empty name".to_string());
            }
            if !mg.is_finite() || *mg < 0.0 {
                errors.push(format!(
                    "Drink '{}' has invalid caffeine amount {}",
                    name, mg
                ));
            }
        }

        errors
    }

    /// Total caffeine (mg) for the given servings plus `extra_mg`
    ///
    /// Fails on a drink the table doesn't know, a negative extra amount, or
    /// a total too large to represent.
    pub fn total_mg(&self, servings: &[(String, u32)], extra_mg: f64) -> Result<f64> {
        if !extra_mg.is_finite() || extra_mg < 0.0 {
            return Err(Error::InvalidInput(format!(
                "extra caffeine must be a non-negative number of mg, got {}",
                extra_mg
            )));
        }

        let mut total = extra_mg;
        for (name, units) in servings {
            let mg = self
                .mg_per_unit(name)
                .ok_or_else(|| Error::UnknownDrink(name.clone()))?;
            total += mg * f64::from(*units);
        }

        if !total.is_finite() {
            return Err(Error::InvalidInput(format!(
                "total caffeine is too large to compute ({} mg)",
                total
            )));
        }

        tracing::debug!("Aggregated {} drink entries into {:.1} mg", servings.len(), total);
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_values() {
        let table = default_drink_table();
        assert_eq!(table.len(), 4);
        assert_eq!(table.mg_per_unit("coffee"), Some(95.0));
        assert_eq!(table.mg_per_unit("energy_drink"), Some(80.0));
        assert_eq!(table.mg_per_unit("tea"), Some(47.0));
        assert_eq!(table.mg_per_unit("cola"), Some(20.0));
        assert!(table.validate().is_empty());
    }

    #[test]
    fn test_name_lookup_is_normalized() {
        let table = DrinkTable::builtin();
        assert_eq!(table.mg_per_unit("Energy Drink"), Some(80.0));
        assert_eq!(table.mg_per_unit("energy-drink"), Some(80.0));
        assert_eq!(table.mg_per_unit(" COFFEE "), Some(95.0));
        assert_eq!(table.mg_per_unit("mate"), None);
    }

    #[test]
    fn test_total_mg() {
        let table = DrinkTable::builtin();
        let servings = vec![
            ("coffee".to_string(), 2),
            ("cola".to_string(), 1),
            ("tea".to_string(), 0),
        ];
        let total = table.total_mg(&servings, 15.0).unwrap();
        assert_eq!(total, 95.0 * 2.0 + 20.0 + 15.0);
    }

    #[test]
    fn test_total_mg_unknown_drink() {
        let table = DrinkTable::builtin();
        let servings = vec![("espresso".to_string(), 1)];
        let err = table.total_mg(&servings, 0.0).unwrap_err();
        assert!(matches!(err, Error::UnknownDrink(name) if name == "espresso"));
    }

    #[test]
    fn test_total_mg_rejects_negative_extra() {
        let table = DrinkTable::builtin();
        assert!(matches!(
            table.total_mg(&[], -1.0),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_total_mg_rejects_overflow() {
        let table = DrinkTable::from_entries([("rocket", 1e308)]);
        assert!(table.validate().is_empty());

        let servings = vec![("rocket".to_string(), 10)];
        assert!(matches!(
            table.total_mg(&servings, 0.0),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            table.total_mg(&[("rocket".to_string(), 1)], 1e308),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_substitute_table() {
        let table = DrinkTable::from_entries([("espresso", 63.0), ("Mate", 80.0)]);
        let servings = vec![("espresso".to_string(), 3), ("mate".to_string(), 1)];
        assert_eq!(table.total_mg(&servings, 0.0).unwrap(), 63.0 * 3.0 + 80.0);
        assert_eq!(table.mg_per_unit("coffee"), None);
    }

    #[test]
    fn test_validate_flags_bad_amounts() {
        let table = DrinkTable::from_entries([("decaf", -2.0), ("mystery", f64::NAN)]);
        assert_eq!(table.validate().len(), 2);
    }
}
