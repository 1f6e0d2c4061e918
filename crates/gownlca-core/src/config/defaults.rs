// Single source of truth for all default values.

// --- Default disposable gown ---
// Substituted when a reusable fleet falls short and the input set has no single-use gown.
pub const DEFAULT_DISPOSABLE_ID: &str = "default-disposable";
pub const DEFAULT_DISPOSABLE_NAME: &str = "Default disposable gown";
pub const DEFAULT_DISPOSABLE_COST: f64 = 0.81;
pub const DEFAULT_DISPOSABLE_WASTE_COST: f64 = 0.0;
pub const DEFAULT_DISPOSABLE_CO2: f64 = 0.5; // kg CO2-eq per use
pub const DEFAULT_DISPOSABLE_WATER: f64 = 2.0; // L per use
pub const DEFAULT_DISPOSABLE_ENERGY: f64 = 8.0; // MJ per use

// --- Reduction ---
// Zero loss keeps the reduction factor at exactly 1.
pub const DEFAULT_LOSS_FRACTION: f64 = 0.0;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = true;
pub const LOG_FILTER_ENV: &str = "GOWNLCA_LOG";
