use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::{EmissionFactors, Gown};

/// Single-use gown assumed when a reusable fleet falls short and the input
/// set contains no disposable gown of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultDisposableConfig {
    /// Unit purchase cost.
    pub cost: f64,
    /// Disposal cost per unit.
    pub waste_cost: f64,
    /// kg CO2-eq per use.
    pub co2: f64,
    /// Liters per use.
    pub water: f64,
    /// MJ per use.
    pub energy: f64,
}

impl Default for DefaultDisposableConfig {
    fn default() -> Self {
        Self {
            cost: defaults::DEFAULT_DISPOSABLE_COST,
            waste_cost: defaults::DEFAULT_DISPOSABLE_WASTE_COST,
            co2: defaults::DEFAULT_DISPOSABLE_CO2,
            water: defaults::DEFAULT_DISPOSABLE_WATER,
            energy: defaults::DEFAULT_DISPOSABLE_ENERGY,
        }
    }
}

impl DefaultDisposableConfig {
    /// Materialize the configured figures as a gown descriptor.
    pub fn to_gown(&self) -> Gown {
        Gown::disposable(
            defaults::DEFAULT_DISPOSABLE_ID,
            defaults::DEFAULT_DISPOSABLE_NAME,
            self.cost,
        )
        .with_waste_cost(self.waste_cost)
        .with_emissions(EmissionFactors::new(self.co2, self.water, self.energy))
    }
}
