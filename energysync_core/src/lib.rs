#![forbid(unsafe_code)]

//! Core domain model and calculations for energysync.
//!
//! This crate provides:
//! - Domain types (doses, projections, score inputs and results)
//! - Caffeine decay model and effect projection
//! - Productivity scoring
//! - Drink reference table and caffeine aggregation
//! - Input parsing and validation
//! - Configuration

pub mod types;
pub mod error;
pub mod caffeine;
pub mod scoring;
pub mod drinks;
pub mod input;
pub mod config;
pub mod logging;
pub mod engine;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use drinks::{default_drink_table, DrinkTable};
pub use engine::{assess, clock_after, Assessment};
