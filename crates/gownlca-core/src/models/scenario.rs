use serde::{Deserialize, Serialize};

use super::gown::Gown;
use super::parameters::InvestmentParameters;
use crate::errors::{GownlcaError, GownlcaResult};

/// A self-contained projection request: the gowns to compare and the usage
/// scenario. Lets callers drive the engine without the catalog service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub gowns: Vec<Gown>,
    pub parameters: InvestmentParameters,
}

impl Scenario {
    /// Parse a scenario document. Parameters are validated during parsing.
    pub fn from_json(json: &str) -> GownlcaResult<Self> {
        serde_json::from_str(json).map_err(|e| GownlcaError::Scenario {
            message: e.to_string(),
        })
    }

    pub fn to_json(&self) -> GownlcaResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| GownlcaError::Scenario {
            message: e.to_string(),
        })
    }
}
