use gownlca_core::constants::FULL_UTILIZATION_PERCENT;
use gownlca_core::models::{Gown, InvestmentParameters, InvestmentResult};

use super::base_result;
use crate::emissions;

/// Single-use branch: every use consumes one unit bought and disposed of.
///
/// Also taken by a reusable gown when no units are invested in, in which case
/// the gown's own purchase and waste figures price each use.
pub fn compute(gown: &Gown, params: &InvestmentParameters) -> InvestmentResult {
    let mut result = base_result(gown, params);
    let total_uses = params.total_uses_over_horizon();

    result.extra_disposable_gowns_needed = total_uses;
    result.actual_uses_for_opex = total_uses;
    result.opex = total_uses as f64 * gown.disposable_unit_cost();

    let (co2, water, energy) = emissions::disposable_breakdowns(total_uses, &gown.emissions);
    result.co2_emissions = co2;
    result.water_emissions = water;
    result.energy_emissions = energy;

    result.utilization_rate = FULL_UTILIZATION_PERCENT;
    result
}
