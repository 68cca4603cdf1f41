//! # Mergington Config
//!
//! Configuration management for the activity service.

mod error;
mod loader;
mod schema;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::{Config, RegistryConfig, ServerConfig};
