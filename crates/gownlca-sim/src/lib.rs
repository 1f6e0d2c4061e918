//! # gownlca-sim
//!
//! Lifecycle cost and emissions projection for isolation gowns.
//! Splits demand over a planning horizon between a reusable fleet and the
//! single-use gowns that cover its shortfall, then expands results into
//! depreciation and expense schedules, rankings, and baseline comparisons.

pub mod comparison;
pub mod emissions;
pub mod engine;
pub mod investment;
pub mod ranking;
pub mod schedule;

pub use comparison::compare_to_baseline;
pub use engine::SimulationEngine;
pub use investment::calculate_investment_results;
pub use ranking::{sort_investment_results, SortKey, SortOrder};
pub use schedule::{calculate_depreciation_schedule, calculate_disposable_schedule_with_gown_data};
