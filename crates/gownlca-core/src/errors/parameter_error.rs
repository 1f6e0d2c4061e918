use super::error_code::{self, GownlcaErrorCode};

/// Rejections raised while constructing [`InvestmentParameters`](crate::models::InvestmentParameters).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
    #[error("planning horizon must be at least 1 year")]
    NonPositiveHorizon,

    #[error("planning horizon of {years} years exceeds the maximum of {max}")]
    HorizonTooLong { years: u32, max: u32 },

    #[error("annual gown use must be positive")]
    NonPositiveUsage,

    #[error("usage overflow: {uses_per_day} uses/day over {working_days_per_year} working days")]
    Overflow {
        uses_per_day: u32,
        working_days_per_year: u32,
    },

    #[error("unknown sort key {value:?}, expected total, capex, opex, or emissions")]
    UnknownSortKey { value: String },

    #[error("unknown sort order {value:?}, expected asc or desc")]
    UnknownSortOrder { value: String },
}

impl GownlcaErrorCode for ParameterError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveHorizon => error_code::NON_POSITIVE_HORIZON,
            Self::HorizonTooLong { .. } => error_code::HORIZON_TOO_LONG,
            Self::NonPositiveUsage => error_code::NON_POSITIVE_USAGE,
            Self::Overflow { .. } => error_code::USAGE_OVERFLOW,
            Self::UnknownSortKey { .. } => error_code::UNKNOWN_SORT_KEY,
            Self::UnknownSortOrder { .. } => error_code::UNKNOWN_SORT_ORDER,
        }
    }
}
