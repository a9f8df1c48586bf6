//! # errx
//!
//! Structured errors carrying a stable machine-readable code, plus a thread-safe
//! registry that maps those codes to localized messages and HTTP/RPC statuses.
//!
//! Application code raises [`Error`] values (optionally wrapping a cause), and a
//! service boundary turns any error back into a `(status, message)` pair with
//! [`Registry::resolve_http`] or [`Registry::resolve_rpc`].

// Internal modules
pub mod chain;
pub mod config;
pub mod error;
pub mod errors;
pub mod global;
pub mod parsers;
pub mod predefined;
pub mod registry;
pub mod resolver;
pub mod status;

// Re-export key types for library consumers
pub use config::constants::{
    DEFAULT_HTTP_STATUS, DEFAULT_MESSAGE, DEFAULT_RPC_STATUS, SUCCESS_HTTP_STATUS,
    SUCCESS_RPC_STATUS,
};
pub use config::RegistryConfig;
pub use error::{Cause, Error};
pub use errors::RegistryError;
pub use parsers::{JsonSource, MessageMap, MessageSource, ParserError, TomlSource};
pub use registry::{Registry, RegistryStatistics};
pub use status::{RpcCode, StatusCode};
