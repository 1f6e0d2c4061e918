//! # gownlca-core
//!
//! Foundation crate for the gown lifecycle cost simulator.
//! Defines all types, traits, errors, config, tracing setup, and constants.
//! The simulation engine and fixture loader depend on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::SimulationConfig;
pub use errors::{GownlcaError, GownlcaResult};
pub use models::{
    EmissionBreakdown, EmissionFactors, Gown, InvestmentParameters, InvestmentResult, Pollutant,
};
