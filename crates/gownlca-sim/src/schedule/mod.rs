//! Year-by-year expansions of a single result for schedule and export views.

pub mod depreciation;
pub mod disposable;

pub use depreciation::calculate_depreciation_schedule;
#[allow(deprecated)]
pub use disposable::calculate_disposable_schedule;
pub use disposable::calculate_disposable_schedule_with_gown_data;
