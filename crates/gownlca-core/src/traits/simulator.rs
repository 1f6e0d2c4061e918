use crate::errors::GownlcaResult;
use crate::models::{Gown, InvestmentParameters, InvestmentResult};

/// Lifecycle cost and emissions projection.
pub trait ILifecycleSimulator: Send + Sync {
    /// Project one result per gown, in input order.
    fn simulate(
        &self,
        gowns: &[Gown],
        params: &InvestmentParameters,
    ) -> GownlcaResult<Vec<InvestmentResult>>;
}
