//! Top-level simulator configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{DefaultDisposableConfig, ObservabilityConfig, ReductionConfig};
use crate::errors::ConfigError;
use crate::tracing_setup::events;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`GOWNLCA_*`)
/// 2. TOML file passed to [`SimulationConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SimulationConfig {
    pub default_disposable: DefaultDisposableConfig,
    pub reduction: ReductionConfig,
    pub observability: ObservabilityConfig,
}

impl SimulationConfig {
    /// Load configuration: defaults, then `path` if given, then environment.
    /// The result is validated.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        let source = path.map_or_else(|| "defaults".to_string(), |p| p.display().to_string());
        events::config_loaded(&source, config.reduction.loss_fraction);
        Ok(config)
    }

    /// Parse a TOML file. Missing sections keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `GOWNLCA_*` overrides read through `lookup`.
    /// Values that fail to parse are ignored.
    ///
    /// Pattern: `GOWNLCA_DISPOSABLE_COST`, `GOWNLCA_LOSS_FRACTION`, etc.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("GOWNLCA_DISPOSABLE_COST").and_then(|s| s.parse::<f64>().ok()) {
            self.default_disposable.cost = v;
        }
        if let Some(v) =
            lookup("GOWNLCA_DISPOSABLE_WASTE_COST").and_then(|s| s.parse::<f64>().ok())
        {
            self.default_disposable.waste_cost = v;
        }
        if let Some(v) = lookup("GOWNLCA_LOSS_FRACTION").and_then(|s| s.parse::<f64>().ok()) {
            self.reduction.loss_fraction = v;
        }
        if let Some(v) = lookup("GOWNLCA_LOG_LEVEL") {
            self.observability.log_level = v.to_ascii_lowercase();
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let disposable = &self.default_disposable;
        let figures = [
            ("default_disposable.cost", disposable.cost),
            ("default_disposable.waste_cost", disposable.waste_cost),
            ("default_disposable.co2", disposable.co2),
            ("default_disposable.water", disposable.water),
            ("default_disposable.energy", disposable.energy),
        ];
        for (field, value) in figures {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: format!("must be finite and non-negative, got {value}"),
                });
            }
        }

        let loss = self.reduction.loss_fraction;
        if !(0.0..1.0).contains(&loss) {
            return Err(ConfigError::ValidationFailed {
                field: "reduction.loss_fraction".to_string(),
                message: format!("must be in [0, 1), got {loss}"),
            });
        }

        if !LOG_LEVELS.contains(&self.observability.log_level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!(
                    "must be one of {}, got {:?}",
                    LOG_LEVELS.join(", "),
                    self.observability.log_level
                ),
            });
        }

        Ok(())
    }
}
