pub mod comparison;
pub mod emission;
pub mod gown;
pub mod parameters;
pub mod result;
pub mod scenario;
pub mod schedule;

pub use comparison::{BaselineComparison, ResultSavings};
pub use emission::{EmissionBreakdown, EmissionFactors, Pollutant};
pub use gown::Gown;
pub use parameters::InvestmentParameters;
pub use result::InvestmentResult;
pub use scenario::Scenario;
pub use schedule::{DepreciationEntry, DisposableExpenseEntry};
