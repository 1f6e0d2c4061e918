use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One year of straight-line depreciation for a reusable fleet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DepreciationEntry {
    pub year: u32,
    /// Book value at the start of the year.
    pub book_value: f64,
    pub annual_depreciation: f64,
    /// Opex amortized evenly over the horizon.
    pub operational_costs: f64,
}

/// One year of spend on single-use gowns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DisposableExpenseEntry {
    pub year: u32,
    pub purchase_costs: f64,
    pub waste_costs: f64,
    pub total_annual_costs: f64,
}
