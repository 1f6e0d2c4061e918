use super::error_code::{self, GownlcaErrorCode};

/// Errors surfaced by a gown catalog implementation.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("gown catalog unavailable: {reason}")]
    Unavailable { reason: String },
}

impl GownlcaErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => error_code::CATALOG_UNAVAILABLE,
        }
    }
}
