//! Fallback values used whenever resolution has nothing better to return

use crate::status::{http, RpcCode};

/// Message returned when neither a localized text nor an authored message exists
pub const DEFAULT_MESSAGE: &str = "internal server error";

/// HTTP status for absent, unstructured or unregistered errors
pub const DEFAULT_HTTP_STATUS: u16 = http::INTERNAL_SERVER_ERROR;

/// RPC status for absent, unstructured or unregistered errors
pub const DEFAULT_RPC_STATUS: u32 = RpcCode::Internal.as_u32();

/// HTTP status returned when there is no error at all
pub const SUCCESS_HTTP_STATUS: u16 = http::OK;

/// RPC status returned when there is no error at all
pub const SUCCESS_RPC_STATUS: u32 = RpcCode::Ok.as_u32();

/// Language used by the CLI and config loader when none is given
pub const DEFAULT_LANGUAGE: &str = "en";

/// Message file format used when a config entry names none
pub const DEFAULT_MESSAGE_FORMAT: &str = "json";
