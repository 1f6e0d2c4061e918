use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Pollutants tracked per gown use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Pollutant {
    /// kg CO2-eq.
    #[serde(rename = "CO2")]
    Co2,
    /// Liters.
    Water,
    /// MJ.
    Energy,
}

impl Pollutant {
    pub const ALL: [Pollutant; 3] = [Pollutant::Co2, Pollutant::Water, Pollutant::Energy];

    pub fn unit(self) -> &'static str {
        match self {
            Self::Co2 => "kg CO2-eq",
            Self::Water => "L",
            Self::Energy => "MJ",
        }
    }
}

/// Per-use emission factors of a gown.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EmissionFactors {
    #[serde(rename = "CO2", default)]
    pub co2: f64,
    #[serde(rename = "Water", default)]
    pub water: f64,
    #[serde(rename = "Energy", default)]
    pub energy: f64,
}

impl EmissionFactors {
    pub fn new(co2: f64, water: f64, energy: f64) -> Self {
        Self { co2, water, energy }
    }

    /// Factor for a single pollutant.
    pub fn factor(&self, pollutant: Pollutant) -> f64 {
        match pollutant {
            Pollutant::Co2 => self.co2,
            Pollutant::Water => self.water,
            Pollutant::Energy => self.energy,
        }
    }
}

/// Emissions of one pollutant over the planning horizon, split between the
/// reusable fleet and disposable gowns. Values are truncated to whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EmissionBreakdown {
    #[ts(type = "number")]
    pub reusable_emissions: u64,
    #[ts(type = "number")]
    pub disposable_emissions: u64,
    #[ts(type = "number")]
    pub total_emissions: u64,
}

impl EmissionBreakdown {
    /// Build a breakdown; the total is always the sum of both shares.
    pub fn new(reusable_emissions: u64, disposable_emissions: u64) -> Self {
        Self {
            reusable_emissions,
            disposable_emissions,
            total_emissions: reusable_emissions + disposable_emissions,
        }
    }

    /// Breakdown with only a disposable share.
    pub fn disposable_only(disposable_emissions: u64) -> Self {
        Self::new(0, disposable_emissions)
    }
}
