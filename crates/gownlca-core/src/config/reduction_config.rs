use serde::{Deserialize, Serialize};

use super::defaults;

/// Attrition of reusable gowns over their wash lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReductionConfig {
    /// Fraction of fleet capacity lost to damage or disappearance, in `[0, 1)`.
    pub loss_fraction: f64,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self {
            loss_fraction: defaults::DEFAULT_LOSS_FRACTION,
        }
    }
}

impl ReductionConfig {
    /// Multiplier applied to theoretical fleet capacity.
    pub fn reduction_factor(&self) -> f64 {
        1.0 - self.loss_fraction
    }
}
