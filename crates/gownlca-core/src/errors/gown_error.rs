use super::error_code::{self, GownlcaErrorCode};

/// Gown descriptors the engine refuses to project.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GownError {
    #[error("reusable gown {gown_id} has no wash count")]
    MissingWashes { gown_id: String },

    #[error("reusable gown {gown_id} has zero washes")]
    ZeroWashes { gown_id: String },

    #[error("gown {gown_id}: {field} must be finite and non-negative, got {value}")]
    InvalidFigure {
        gown_id: String,
        field: &'static str,
        value: f64,
    },
}

impl GownlcaErrorCode for GownError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingWashes { .. } => error_code::MISSING_WASHES,
            Self::ZeroWashes { .. } => error_code::ZERO_WASHES,
            Self::InvalidFigure { .. } => error_code::INVALID_FIGURE,
        }
    }
}
