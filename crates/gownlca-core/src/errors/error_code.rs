//! Stable string codes for every error variant.
//!
//! The dashboard maps these to user-facing messages, so they must never change
//! once published.

pub const NON_POSITIVE_HORIZON: &str = "PARAM_NON_POSITIVE_HORIZON";
pub const HORIZON_TOO_LONG: &str = "PARAM_HORIZON_TOO_LONG";
pub const NON_POSITIVE_USAGE: &str = "PARAM_NON_POSITIVE_USAGE";
pub const USAGE_OVERFLOW: &str = "PARAM_USAGE_OVERFLOW";
pub const UNKNOWN_SORT_KEY: &str = "PARAM_UNKNOWN_SORT_KEY";
pub const UNKNOWN_SORT_ORDER: &str = "PARAM_UNKNOWN_SORT_ORDER";
pub const MISSING_WASHES: &str = "GOWN_MISSING_WASHES";
pub const ZERO_WASHES: &str = "GOWN_ZERO_WASHES";
pub const INVALID_FIGURE: &str = "GOWN_INVALID_FIGURE";
pub const CONFIG_PARSE: &str = "CONFIG_PARSE";
pub const CONFIG_NOT_FOUND: &str = "CONFIG_NOT_FOUND";
pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
pub const CATALOG_UNAVAILABLE: &str = "CATALOG_UNAVAILABLE";
pub const SCENARIO_MALFORMED: &str = "SCENARIO_MALFORMED";
pub const TRACING_INIT_FAILED: &str = "TRACING_INIT_FAILED";

/// Maps an error to its stable code.
pub trait GownlcaErrorCode {
    fn error_code(&self) -> &'static str;
}
