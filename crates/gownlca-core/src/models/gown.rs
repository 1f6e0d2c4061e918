use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use super::emission::EmissionFactors;
use crate::errors::GownError;

/// A gown as delivered by the catalog. Read-only input to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Gown {
    pub id: String,
    pub name: String,
    pub reusable: bool,
    /// Unit purchase cost.
    pub cost: f64,
    /// Maximum use cycles before retirement. Only meaningful for reusable gowns.
    #[serde(
        default,
        deserialize_with = "deserialize_washes",
        skip_serializing_if = "Option::is_none"
    )]
    pub washes: Option<u32>,
    /// Cleaning cost per use.
    #[serde(default)]
    pub laundry_cost: f64,
    /// Disposal cost per unit.
    #[serde(default)]
    pub waste_cost: f64,
    /// Salvage credit per unit.
    #[serde(default)]
    pub residual_value: f64,
    /// Emissions per use.
    #[serde(default)]
    pub emissions: EmissionFactors,
}

impl Gown {
    /// A reusable gown with no laundry, waste, residual, or emission figures set.
    pub fn reusable(id: impl Into<String>, name: impl Into<String>, cost: f64, washes: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            reusable: true,
            cost,
            washes: Some(washes),
            laundry_cost: 0.0,
            waste_cost: 0.0,
            residual_value: 0.0,
            emissions: EmissionFactors::default(),
        }
    }

    /// A single-use gown.
    pub fn disposable(id: impl Into<String>, name: impl Into<String>, cost: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            reusable: false,
            cost,
            washes: None,
            laundry_cost: 0.0,
            waste_cost: 0.0,
            residual_value: 0.0,
            emissions: EmissionFactors::default(),
        }
    }

    pub fn with_laundry_cost(mut self, laundry_cost: f64) -> Self {
        self.laundry_cost = laundry_cost;
        self
    }

    pub fn with_waste_cost(mut self, waste_cost: f64) -> Self {
        self.waste_cost = waste_cost;
        self
    }

    pub fn with_residual_value(mut self, residual_value: f64) -> Self {
        self.residual_value = residual_value;
        self
    }

    pub fn with_emissions(mut self, emissions: EmissionFactors) -> Self {
        self.emissions = emissions;
        self
    }

    /// Operating cost of one use of a reusable gown.
    /// Residual value is a credit and is subtracted.
    pub fn per_use_operating_cost(&self) -> f64 {
        self.laundry_cost + self.waste_cost - self.residual_value
    }

    /// Purchase plus disposal of one single-use unit.
    pub fn disposable_unit_cost(&self) -> f64 {
        self.cost + self.waste_cost
    }

    /// Wash count, treating a missing value as zero.
    pub fn wash_count(&self) -> u32 {
        self.washes.unwrap_or(0)
    }

    /// Reject descriptors the engine cannot project.
    ///
    /// Every monetary and emission figure must be finite and non-negative, and
    /// a reusable gown must carry a positive wash count.
    pub fn validate(&self) -> Result<(), GownError> {
        let figures = [
            ("cost", self.cost),
            ("laundry_cost", self.laundry_cost),
            ("waste_cost", self.waste_cost),
            ("residual_value", self.residual_value),
            ("emissions.CO2", self.emissions.co2),
            ("emissions.Water", self.emissions.water),
            ("emissions.Energy", self.emissions.energy),
        ];
        for (field, value) in figures {
            if !value.is_finite() || value < 0.0 {
                return Err(GownError::InvalidFigure {
                    gown_id: self.id.clone(),
                    field,
                    value,
                });
            }
        }

        if self.reusable {
            match self.washes {
                None => {
                    return Err(GownError::MissingWashes {
                        gown_id: self.id.clone(),
                    })
                }
                Some(0) => {
                    return Err(GownError::ZeroWashes {
                        gown_id: self.id.clone(),
                    })
                }
                Some(_) => {}
            }
        }

        Ok(())
    }
}

/// Wash counts arrive as JSON numbers, which some catalogs emit as `50.0`.
#[derive(Deserialize)]
#[serde(untagged)]
enum WashCount {
    Whole(u32),
    Float(f64),
}

/// Accept integral floats for `washes`; reject fractions, negatives, and
/// values beyond `u32`.
fn deserialize_washes<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<WashCount>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match raw {
        WashCount::Whole(n) => Ok(Some(n)),
        WashCount::Float(f) if f.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&f) => {
            Ok(Some(f as u32))
        }
        WashCount::Float(f) => Err(D::Error::custom(format!(
            "washes must be a non-negative whole number, got {f}"
        ))),
    }
}
