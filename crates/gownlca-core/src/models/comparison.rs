use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Savings of one result relative to the baseline. Positive means the result
/// is cheaper or cleaner than the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ResultSavings {
    pub gown_id: String,
    pub cost_savings: f64,
    /// Percent of the baseline's total expenses. Zero when the baseline costs nothing.
    pub cost_savings_percent: f64,
    #[ts(type = "number")]
    pub co2_savings: i64,
    #[ts(type = "number")]
    pub water_savings: i64,
    #[ts(type = "number")]
    pub energy_savings: i64,
}

/// A result set compared against its cheapest single-use option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BaselineComparison {
    pub baseline_gown_id: String,
    pub baseline_total_expenses: f64,
    pub savings: Vec<ResultSavings>,
}
