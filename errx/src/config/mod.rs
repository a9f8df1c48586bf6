//! Configuration module for errx
//!
//! Compile-time fallbacks live in [`constants`]; [`runtime`] describes how a
//! [`crate::Registry`] is assembled from a TOML file and environment variables.

pub mod constants;
pub mod runtime;

pub use runtime::{env_vars, MessageFileConfig, RegistryConfig, StatusOverride};
