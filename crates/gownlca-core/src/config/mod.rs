//! Configuration for the simulator.
//! TOML-based, layered: env > file > compiled defaults.

pub mod defaults;
pub mod disposable_config;
pub mod observability_config;
pub mod reduction_config;
pub mod simulation_config;

pub use disposable_config::DefaultDisposableConfig;
pub use observability_config::ObservabilityConfig;
pub use reduction_config::ReductionConfig;
pub use simulation_config::SimulationConfig;
