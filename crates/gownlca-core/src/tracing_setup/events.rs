//! Structured log events for simulator operations.
//!
//! Each function emits a `tracing` event with structured fields.

use crate::models::Pollutant;

/// Log a completed projection run.
pub fn simulation_completed(gown_count: usize, total_uses: u64, planning_horizon: u32) {
    tracing::info!(
        event = "simulation_completed",
        gown_count = gown_count,
        total_uses = total_uses,
        planning_horizon = planning_horizon,
        "simulation completed"
    );
}

/// Log a reusable fleet that cannot cover demand on its own.
pub fn shortfall_detected(gown_id: &str, extra_disposable_gowns: u64, utilization_rate: f64) {
    tracing::debug!(
        event = "shortfall_detected",
        gown_id = %gown_id,
        extra_disposable_gowns = extra_disposable_gowns,
        utilization_rate = utilization_rate,
        "reusable fleet shortfall"
    );
}

/// Log one pollutant's projected total for a gown, with its unit.
pub fn emissions_projected(gown_id: &str, pollutant: Pollutant, total_emissions: u64) {
    tracing::trace!(
        event = "emissions_projected",
        gown_id = %gown_id,
        pollutant = ?pollutant,
        total_emissions = total_emissions,
        unit = pollutant.unit(),
        "emissions projected"
    );
}

/// Log substitution of the configured default disposable gown.
pub fn disposable_fallback_used(gown_id: &str, extra_disposable_gowns: u64) {
    tracing::warn!(
        event = "disposable_fallback_used",
        gown_id = %gown_id,
        extra_disposable_gowns = extra_disposable_gowns,
        "no disposable gown in input set, using configured default"
    );
}

/// Log a configuration load.
pub fn config_loaded(source: &str, loss_fraction: f64) {
    tracing::info!(
        event = "config_loaded",
        source = %source,
        loss_fraction = loss_fraction,
        "configuration loaded"
    );
}
