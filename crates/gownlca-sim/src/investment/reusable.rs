use gownlca_core::constants::FULL_UTILIZATION_PERCENT;
use gownlca_core::models::{Gown, InvestmentParameters, InvestmentResult};

use super::base_result;
use crate::emissions;

/// Reusable-fleet branch.
///
/// ```text
/// maxUses    = floor(invest × washes × reductionFactor)
/// capex      = invest × cost
/// extra      = max(0, totalUses − maxUses)
/// actualUses = min(totalUses, maxUses)
/// opex       = (laundry + waste − residual) × actualUses
/// extraCost  = extra × (shortfall.cost + shortfall.waste)
/// ```
pub fn compute(
    gown: &Gown,
    params: &InvestmentParameters,
    shortfall_gown: &Gown,
    reduction_factor: f64,
) -> InvestmentResult {
    let mut result = base_result(gown, params);
    let invest = f64::from(params.number_of_gowns_to_invest());
    let total_uses = params.total_uses_over_horizon();

    let max_uses = (invest * f64::from(gown.wash_count()) * reduction_factor).floor() as u64;
    let extra = total_uses.saturating_sub(max_uses);
    let actual_uses = total_uses.min(max_uses);

    result.max_gown_uses_with_reduction = max_uses;
    result.extra_disposable_gowns_needed = extra;
    result.actual_uses_for_opex = actual_uses;

    result.capex = invest * gown.cost;
    result.opex = gown.per_use_operating_cost() * actual_uses as f64;
    if extra > 0 {
        result.extra_disposable_cost = extra as f64 * shortfall_gown.disposable_unit_cost();
    }

    let (co2, water, energy) = emissions::all_breakdowns(
        actual_uses,
        &gown.emissions,
        extra,
        &shortfall_gown.emissions,
    );
    result.co2_emissions = co2;
    result.water_emissions = water;
    result.energy_emissions = energy;

    // A loss fraction can floor capacity to zero; the fleet is then saturated.
    result.utilization_rate = if max_uses == 0 {
        FULL_UTILIZATION_PERCENT
    } else {
        (total_uses as f64 / max_uses as f64 * 100.0).min(FULL_UTILIZATION_PERCENT)
    };

    result
}
