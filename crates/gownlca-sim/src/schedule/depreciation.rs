use gownlca_core::models::{DepreciationEntry, InvestmentResult};

/// Straight-line depreciation of a reusable fleet's capex over the horizon,
/// with opex amortized evenly alongside.
///
/// Opex is spread level across years even though real laundry spend may not
/// be; this is a reporting view, not a cash-flow model. Any reusable result
/// spans the full horizon, including one with no units invested (all-zero
/// depreciation); single-use results yield an empty schedule.
pub fn calculate_depreciation_schedule(result: &InvestmentResult) -> Vec<DepreciationEntry> {
    if !result.is_reusable {
        return Vec::new();
    }

    let horizon = f64::from(result.planning_horizon);
    let annual_depreciation = result.capex / horizon;
    let operational_costs = result.opex / horizon;

    (1..=result.planning_horizon)
        .map(|year| DepreciationEntry {
            year,
            book_value: (result.capex - annual_depreciation * f64::from(year - 1)).max(0.0),
            annual_depreciation,
            operational_costs,
        })
        .collect()
}
