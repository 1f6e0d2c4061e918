use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::MAX_PLANNING_HORIZON_YEARS;
use crate::errors::ParameterError;

/// Usage scenario for a projection.
///
/// Only constructible through [`InvestmentParameters::new`] (or
/// deserialization, which goes through the same checks), so the horizon and
/// annual use are always positive and `total_uses_over_horizon` is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", try_from = "RawInvestmentParameters")]
pub struct InvestmentParameters {
    number_of_gowns_to_invest: u32,
    planning_horizon: u32,
    annual_gown_use: u32,
}

/// Unchecked wire shape.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawInvestmentParameters {
    #[serde(default)]
    number_of_gowns_to_invest: u32,
    planning_horizon: u32,
    annual_gown_use: u32,
}

impl TryFrom<RawInvestmentParameters> for InvestmentParameters {
    type Error = ParameterError;

    fn try_from(raw: RawInvestmentParameters) -> Result<Self, Self::Error> {
        Self::new(
            raw.number_of_gowns_to_invest,
            raw.planning_horizon,
            raw.annual_gown_use,
        )
    }
}

impl InvestmentParameters {
    /// Validate and build a parameter set.
    ///
    /// `number_of_gowns_to_invest` may be zero: the gown is then projected as
    /// if every use were served by single-use units.
    pub fn new(
        number_of_gowns_to_invest: u32,
        planning_horizon: u32,
        annual_gown_use: u32,
    ) -> Result<Self, ParameterError> {
        if planning_horizon == 0 {
            return Err(ParameterError::NonPositiveHorizon);
        }
        if planning_horizon > MAX_PLANNING_HORIZON_YEARS {
            return Err(ParameterError::HorizonTooLong {
                years: planning_horizon,
                max: MAX_PLANNING_HORIZON_YEARS,
            });
        }
        if annual_gown_use == 0 {
            return Err(ParameterError::NonPositiveUsage);
        }
        Ok(Self {
            number_of_gowns_to_invest,
            planning_horizon,
            annual_gown_use,
        })
    }

    /// Build from the dashboard's "uses per day × working days per year" input.
    pub fn from_daily_usage(
        number_of_gowns_to_invest: u32,
        planning_horizon: u32,
        uses_per_day: u32,
        working_days_per_year: u32,
    ) -> Result<Self, ParameterError> {
        let annual = uses_per_day.checked_mul(working_days_per_year).ok_or(
            ParameterError::Overflow {
                uses_per_day,
                working_days_per_year,
            },
        )?;
        Self::new(number_of_gowns_to_invest, planning_horizon, annual)
    }

    pub fn number_of_gowns_to_invest(&self) -> u32 {
        self.number_of_gowns_to_invest
    }

    pub fn planning_horizon(&self) -> u32 {
        self.planning_horizon
    }

    pub fn annual_gown_use(&self) -> u32 {
        self.annual_gown_use
    }

    /// `annual_gown_use × planning_horizon`. Cannot overflow: both factors are `u32`.
    pub fn total_uses_over_horizon(&self) -> u64 {
        u64::from(self.annual_gown_use) * u64::from(self.planning_horizon)
    }

    /// Same scenario with a different fleet size.
    pub fn with_investment(self, number_of_gowns_to_invest: u32) -> Self {
        Self {
            number_of_gowns_to_invest,
            ..self
        }
    }
}
