//! Error handling for the simulator.
//! One error enum per concern, `thiserror` only, aggregated into [`GownlcaError`].

pub mod catalog_error;
pub mod config_error;
pub mod error_code;
pub mod gown_error;
pub mod parameter_error;

pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use error_code::GownlcaErrorCode;
pub use gown_error::GownError;
pub use parameter_error::ParameterError;

/// Top-level error for every fallible operation in the workspace.
#[derive(Debug, thiserror::Error)]
pub enum GownlcaError {
    #[error("parameter error: {0}")]
    Parameter(#[from] ParameterError),

    #[error("gown error: {0}")]
    Gown(#[from] GownError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("malformed scenario: {message}")]
    Scenario { message: String },

    #[error("tracing subscriber init failed: {message}")]
    TracingInit { message: String },
}

impl GownlcaErrorCode for GownlcaError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parameter(e) => e.error_code(),
            Self::Gown(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Catalog(e) => e.error_code(),
            Self::Scenario { .. } => error_code::SCENARIO_MALFORMED,
            Self::TracingInit { .. } => error_code::TRACING_INIT_FAILED,
        }
    }
}

pub type GownlcaResult<T> = Result<T, GownlcaError>;
