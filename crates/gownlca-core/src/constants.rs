/// Utilization reported for a fully consumed fleet (and for every disposable gown).
pub const FULL_UTILIZATION_PERCENT: f64 = 100.0;

/// Share of aggregate disposable opex assumed to be disposal cost when the
/// originating gown is not available to the expense schedule.
pub const LEGACY_DISPOSABLE_WASTE_FRACTION: f64 = 0.1;

/// Maximum planning horizon accepted by the parameter constructor, in years.
pub const MAX_PLANNING_HORIZON_YEARS: u32 = 100;
