use gownlca_core::config::SimulationConfig;
use gownlca_core::errors::GownlcaResult;
use gownlca_core::models::{Gown, InvestmentParameters, InvestmentResult, Pollutant, Scenario};
use gownlca_core::traits::{IGownCatalog, ILifecycleSimulator};
use gownlca_core::tracing_setup::events;
use tracing::instrument;

use crate::investment;

/// Lifecycle simulation engine.
///
/// Holds only validated, immutable configuration, so one engine can serve
/// concurrent callers. Every call builds its results from scratch.
#[derive(Debug, Clone, Default)]
pub struct SimulationEngine {
    config: SimulationConfig,
}

impl SimulationEngine {
    /// Create an engine with the compiled default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a custom configuration, rejecting invalid values.
    pub fn with_config(config: SimulationConfig) -> GownlcaResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Project one result per gown, in input order.
    ///
    /// Every gown is validated before any is projected; an empty slice yields
    /// an empty result list.
    #[instrument(skip_all, fields(gown_count = gowns.len(), horizon = params.planning_horizon()))]
    pub fn calculate_investment_results(
        &self,
        gowns: &[Gown],
        params: &InvestmentParameters,
    ) -> GownlcaResult<Vec<InvestmentResult>> {
        for gown in gowns {
            gown.validate()?;
        }

        let fallback = self.config.default_disposable.to_gown();
        let results = investment::calculate_investment_results(
            gowns,
            params,
            &fallback,
            self.config.reduction.reduction_factor(),
        );

        for result in &results {
            for pollutant in Pollutant::ALL {
                events::emissions_projected(
                    &result.gown_id,
                    pollutant,
                    result.emissions(pollutant).total_emissions,
                );
            }
        }

        let has_own_disposable = investment::first_disposable(gowns).is_some();
        for result in results.iter().filter(|r| r.has_shortfall()) {
            events::shortfall_detected(
                &result.gown_id,
                result.extra_disposable_gowns_needed,
                result.utilization_rate,
            );
            if !has_own_disposable {
                events::disposable_fallback_used(
                    &result.gown_id,
                    result.extra_disposable_gowns_needed,
                );
            }
        }
        events::simulation_completed(
            results.len(),
            params.total_uses_over_horizon(),
            params.planning_horizon(),
        );

        Ok(results)
    }

    /// Pull the gown list from a catalog and project it.
    pub fn simulate_catalog(
        &self,
        catalog: &dyn IGownCatalog,
        params: &InvestmentParameters,
    ) -> GownlcaResult<Vec<InvestmentResult>> {
        let gowns = catalog.list_gowns()?;
        self.calculate_investment_results(&gowns, params)
    }

    /// Project a self-contained scenario.
    pub fn simulate_scenario(&self, scenario: &Scenario) -> GownlcaResult<Vec<InvestmentResult>> {
        self.calculate_investment_results(&scenario.gowns, &scenario.parameters)
    }
}

impl ILifecycleSimulator for SimulationEngine {
    fn simulate(
        &self,
        gowns: &[Gown],
        params: &InvestmentParameters,
    ) -> GownlcaResult<Vec<InvestmentResult>> {
        self.calculate_investment_results(gowns, params)
    }
}
