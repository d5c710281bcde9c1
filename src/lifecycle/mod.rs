//! Startup, shutdown and observability for the registry actors.

pub mod registry_system;
pub mod tracing;

pub use registry_system::RegistrySystem;
pub use tracing::setup_tracing;
