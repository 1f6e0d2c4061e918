//! Per-gown projection: dispatches to the reusable-fleet or single-use branch
//! and finalizes the totals shared by both.

pub mod disposable;
pub mod reusable;

use gownlca_core::models::{Gown, InvestmentParameters, InvestmentResult};

/// First single-use gown in the input set, used to price a reusable shortfall.
pub fn first_disposable(gowns: &[Gown]) -> Option<&Gown> {
    gowns.iter().find(|g| !g.reusable)
}

/// Project every gown, preserving input order.
///
/// `fallback_disposable` prices shortfall when `gowns` has no single-use gown.
/// `reduction_factor` scales reusable fleet capacity. Inputs are assumed
/// validated; the computation itself cannot fail.
pub fn calculate_investment_results(
    gowns: &[Gown],
    params: &InvestmentParameters,
    fallback_disposable: &Gown,
    reduction_factor: f64,
) -> Vec<InvestmentResult> {
    let shortfall_gown = first_disposable(gowns).unwrap_or(fallback_disposable);
    gowns
        .iter()
        .map(|gown| calculate_one(gown, params, shortfall_gown, reduction_factor))
        .collect()
}

/// Project a single gown.
pub fn calculate_one(
    gown: &Gown,
    params: &InvestmentParameters,
    shortfall_gown: &Gown,
    reduction_factor: f64,
) -> InvestmentResult {
    let uses_reusable_branch =
        gown.reusable && gown.wash_count() > 0 && params.number_of_gowns_to_invest() > 0;

    let result = if uses_reusable_branch {
        reusable::compute(gown, params, shortfall_gown, reduction_factor)
    } else {
        disposable::compute(gown, params)
    };
    finalize(result)
}

/// Result skeleton echoing the gown and scenario, every computed field zeroed.
pub(crate) fn base_result(gown: &Gown, params: &InvestmentParameters) -> InvestmentResult {
    InvestmentResult {
        gown_id: gown.id.clone(),
        gown_name: gown.name.clone(),
        is_reusable: gown.reusable,
        number_of_gowns_to_invest: params.number_of_gowns_to_invest(),
        planning_horizon: params.planning_horizon(),
        annual_gown_use: params.annual_gown_use(),
        total_uses_over_horizon: params.total_uses_over_horizon(),
        ..InvestmentResult::default()
    }
}

/// Fill in `total_expenses` and `cost_per_use`.
fn finalize(mut result: InvestmentResult) -> InvestmentResult {
    result.total_expenses = result.capex + result.opex + result.extra_disposable_cost;
    result.cost_per_use = if result.total_uses_over_horizon == 0 {
        0.0
    } else {
        result.total_expenses / result.total_uses_over_horizon as f64
    };
    result
}
