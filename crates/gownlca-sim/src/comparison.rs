use gownlca_core::models::{BaselineComparison, InvestmentResult, ResultSavings};

/// Compare every result against the cheapest single-use gown in the set.
///
/// Ties on total expenses go to the first such gown. Returns `None` when the
/// set contains no single-use gown.
pub fn compare_to_baseline(results: &[InvestmentResult]) -> Option<BaselineComparison> {
    let baseline = results
        .iter()
        .filter(|r| !r.is_reusable)
        .min_by(|a, b| a.total_expenses.total_cmp(&b.total_expenses))?;

    let savings = results
        .iter()
        .map(|result| savings_against(baseline, result))
        .collect();

    Some(BaselineComparison {
        baseline_gown_id: baseline.gown_id.clone(),
        baseline_total_expenses: baseline.total_expenses,
        savings,
    })
}

fn savings_against(baseline: &InvestmentResult, result: &InvestmentResult) -> ResultSavings {
    let cost_savings = baseline.total_expenses - result.total_expenses;
    let cost_savings_percent = if baseline.total_expenses > 0.0 {
        cost_savings / baseline.total_expenses * 100.0
    } else {
        0.0
    };

    ResultSavings {
        gown_id: result.gown_id.clone(),
        cost_savings,
        cost_savings_percent,
        co2_savings: signed_delta(
            baseline.co2_emissions.total_emissions,
            result.co2_emissions.total_emissions,
        ),
        water_savings: signed_delta(
            baseline.water_emissions.total_emissions,
            result.water_emissions.total_emissions,
        ),
        energy_savings: signed_delta(
            baseline.energy_emissions.total_emissions,
            result.energy_emissions.total_emissions,
        ),
    }
}

/// `baseline − value`, saturating at the `i64` range.
fn signed_delta(baseline: u64, value: u64) -> i64 {
    let delta = i128::from(baseline) - i128::from(value);
    delta.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}
