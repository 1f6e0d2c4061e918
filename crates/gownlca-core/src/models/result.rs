use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::emission::{EmissionBreakdown, Pollutant};

/// Projection for one gown. Fixed shape: every field is always present.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentResult {
    pub gown_id: String,
    pub gown_name: String,
    pub is_reusable: bool,

    pub number_of_gowns_to_invest: u32,
    pub planning_horizon: u32,
    pub annual_gown_use: u32,
    #[ts(type = "number")]
    pub total_uses_over_horizon: u64,

    /// Fleet capacity after the reduction factor. Zero for disposable gowns.
    #[ts(type = "number")]
    pub max_gown_uses_with_reduction: u64,
    /// Uses served by the reusable fleet (or by the gown itself when disposable).
    #[ts(type = "number")]
    pub actual_uses_for_opex: u64,
    #[ts(type = "number")]
    pub extra_disposable_gowns_needed: u64,

    pub capex: f64,
    pub opex: f64,
    pub extra_disposable_cost: f64,
    pub total_expenses: f64,
    /// Percent, capped at 100.
    pub utilization_rate: f64,
    pub cost_per_use: f64,

    pub co2_emissions: EmissionBreakdown,
    pub water_emissions: EmissionBreakdown,
    pub energy_emissions: EmissionBreakdown,
}

impl InvestmentResult {
    /// Breakdown for a single pollutant.
    pub fn emissions(&self, pollutant: Pollutant) -> &EmissionBreakdown {
        match pollutant {
            Pollutant::Co2 => &self.co2_emissions,
            Pollutant::Water => &self.water_emissions,
            Pollutant::Energy => &self.energy_emissions,
        }
    }

    /// Whether the result came out of the reusable-fleet projection: a
    /// reusable gown with at least one unit invested in.
    pub fn projected_as_reusable(&self) -> bool {
        self.is_reusable && self.number_of_gowns_to_invest > 0
    }

    /// Whether single-use gowns had to cover part of a reusable fleet's demand.
    pub fn has_shortfall(&self) -> bool {
        self.projected_as_reusable() && self.extra_disposable_gowns_needed > 0
    }
}
