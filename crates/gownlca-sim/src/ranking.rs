use std::cmp::Ordering;
use std::str::FromStr;

use gownlca_core::errors::ParameterError;
use gownlca_core::models::InvestmentResult;

/// Field a result list is ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Total expenses.
    #[default]
    Total,
    Capex,
    Opex,
    /// Total CO2 emissions.
    Emissions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl FromStr for SortKey {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "total" => Ok(Self::Total),
            "capex" => Ok(Self::Capex),
            "opex" => Ok(Self::Opex),
            "emissions" => Ok(Self::Emissions),
            _ => Err(ParameterError::UnknownSortKey {
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for SortOrder {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(ParameterError::UnknownSortOrder {
                value: s.to_string(),
            }),
        }
    }
}

/// Rank results into a new list; the input is left untouched.
///
/// Stable: results comparing equal keep their input order in both directions.
pub fn sort_investment_results(
    results: &[InvestmentResult],
    key: SortKey,
    order: SortOrder,
) -> Vec<InvestmentResult> {
    let mut sorted = results.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare(a, b, key);
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
    sorted
}

fn compare(a: &InvestmentResult, b: &InvestmentResult, key: SortKey) -> Ordering {
    match key {
        SortKey::Total => a.total_expenses.total_cmp(&b.total_expenses),
        SortKey::Capex => a.capex.total_cmp(&b.capex),
        SortKey::Opex => a.opex.total_cmp(&b.opex),
        SortKey::Emissions => a
            .co2_emissions
            .total_emissions
            .cmp(&b.co2_emissions.total_emissions),
    }
}
