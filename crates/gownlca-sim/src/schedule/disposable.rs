use gownlca_core::constants::LEGACY_DISPOSABLE_WASTE_FRACTION;
use gownlca_core::models::{DisposableExpenseEntry, Gown, InvestmentResult};

/// Expense schedule for a single-use gown. Reusable results yield an empty
/// schedule.
///
/// Every unit for the whole horizon is bought up front in year 1; disposal is
/// paid each year for that year's usage. `gown` must be the gown the result
/// was computed from: aggregate opex alone cannot be split back into purchase
/// and disposal cost.
pub fn calculate_disposable_schedule_with_gown_data(
    result: &InvestmentResult,
    gown: &Gown,
) -> Vec<DisposableExpenseEntry> {
    if result.is_reusable {
        return Vec::new();
    }
    if gown.id != result.gown_id {
        tracing::warn!(
            result_gown = %result.gown_id,
            schedule_gown = %gown.id,
            "disposable schedule built from a different gown than the result"
        );
    }

    let upfront_purchase = result.total_uses_over_horizon as f64 * gown.cost;
    let annual_waste = f64::from(result.annual_gown_use) * gown.waste_cost;
    build(result.planning_horizon, upfront_purchase, annual_waste)
}

/// Expense schedule inferred from aggregate opex alone.
///
/// Assumes disposal is 10% of opex to recover per-unit purchase and waste
/// cost, which is wrong for any gown whose real split differs.
#[deprecated(note = "lossy inference; use calculate_disposable_schedule_with_gown_data")]
pub fn calculate_disposable_schedule(result: &InvestmentResult) -> Vec<DisposableExpenseEntry> {
    if result.is_reusable || result.total_uses_over_horizon == 0 {
        return Vec::new();
    }

    let total_uses = result.total_uses_over_horizon as f64;
    let unit_waste = result.opex * LEGACY_DISPOSABLE_WASTE_FRACTION / total_uses;
    let unit_cost = result.opex / total_uses - unit_waste;

    let upfront_purchase = total_uses * unit_cost;
    let annual_waste = f64::from(result.annual_gown_use) * unit_waste;
    build(result.planning_horizon, upfront_purchase, annual_waste)
}

fn build(horizon: u32, upfront_purchase: f64, annual_waste: f64) -> Vec<DisposableExpenseEntry> {
    (1..=horizon)
        .map(|year| {
            let purchase_costs = if year == 1 { upfront_purchase } else { 0.0 };
            DisposableExpenseEntry {
                year,
                purchase_costs,
                waste_costs: annual_waste,
                total_annual_costs: purchase_costs + annual_waste,
            }
        })
        .collect()
}
