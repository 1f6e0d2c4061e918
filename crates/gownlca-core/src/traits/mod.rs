pub mod catalog;
pub mod simulator;

pub use catalog::IGownCatalog;
pub use simulator::ILifecycleSimulator;
