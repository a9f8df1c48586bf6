//! Predefined errors for common infrastructure conditions
//!
//! Each accessor returns the same shared instance on every call, so
//! `chain::is(&err, predefined::record_not_found().as_ref())` holds for any error
//! wrapping it.

use crate::error::Error;
use crate::status::{http, RpcCode, StatusCode};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

// ============================================================================
// CODES
// ============================================================================

pub mod codes {
    pub const INTERNAL: &str = "errx_internal";
    pub const SERVICE_UNAVAILABLE: &str = "errx_service_unavailable";
    pub const INVALID_PARAMETER: &str = "errx_invalid_parameter";
    pub const CONNECTION_TIMEOUT: &str = "errx_connection_timeout";
    pub const OPERATION_TIMEOUT: &str = "errx_operation_timeout";
    pub const RECORD_NOT_FOUND: &str = "errx_record_not_found";
    pub const FOREIGN_KEY_VIOLATION: &str = "errx_foreign_key_violation";
    pub const UNIQUE_CONSTRAINT_VIOLATION: &str = "errx_unique_constraint_violation";
}

/// Code, authored message and preset status of every predefined error
pub const DEFAULT_ENTRIES: [(&str, &str, StatusCode); 8] = [
    (
        codes::INTERNAL,
        "internal error",
        StatusCode::new(http::INTERNAL_SERVER_ERROR, RpcCode::Internal),
    ),
    (
        codes::SERVICE_UNAVAILABLE,
        "service unavailable",
        StatusCode::new(http::SERVICE_UNAVAILABLE, RpcCode::Unavailable),
    ),
    (
        codes::INVALID_PARAMETER,
        "invalid parameter",
        StatusCode::new(http::BAD_REQUEST, RpcCode::InvalidArgument),
    ),
    (
        codes::CONNECTION_TIMEOUT,
        "connection timeout",
        StatusCode::new(http::SERVICE_UNAVAILABLE, RpcCode::Unavailable),
    ),
    (
        codes::OPERATION_TIMEOUT,
        "operation timeout",
        StatusCode::new(http::GATEWAY_TIMEOUT, RpcCode::DeadlineExceeded),
    ),
    (
        codes::RECORD_NOT_FOUND,
        "record not found",
        StatusCode::new(http::NOT_FOUND, RpcCode::NotFound),
    ),
    (
        codes::FOREIGN_KEY_VIOLATION,
        "foreign key violation",
        StatusCode::new(http::BAD_REQUEST, RpcCode::InvalidArgument),
    ),
    (
        codes::UNIQUE_CONSTRAINT_VIOLATION,
        "unique constraint violation",
        StatusCode::new(http::BAD_REQUEST, RpcCode::AlreadyExists),
    ),
];

/// Preset status table seeded by [`crate::Registry::with_defaults`]
pub fn default_status_table() -> HashMap<String, StatusCode> {
    DEFAULT_ENTRIES
        .iter()
        .map(|(code, _, status)| (code.to_string(), *status))
        .collect()
}

// ============================================================================
// SHARED INSTANCES
// ============================================================================

fn shared(slot: &'static OnceLock<Arc<Error>>, code: &str, message: &str) -> Arc<Error> {
    slot.get_or_init(|| Arc::new(Error::new(message).with_code(code)))
        .clone()
}

macro_rules! predefined_error {
    ($(#[$meta:meta])* $name:ident, $code:expr, $message:expr) => {
        $(#[$meta])*
        pub fn $name() -> Arc<Error> {
            static SLOT: OnceLock<Arc<Error>> = OnceLock::new();
            shared(&SLOT, $code, $message)
        }
    };
}

predefined_error!(internal, codes::INTERNAL, "internal error");
predefined_error!(
    service_unavailable,
    codes::SERVICE_UNAVAILABLE,
    "service unavailable"
);
predefined_error!(
    invalid_parameter,
    codes::INVALID_PARAMETER,
    "invalid parameter"
);
predefined_error!(
    /// A connection could not be established in time
    connection_timeout,
    codes::CONNECTION_TIMEOUT,
    "connection timeout"
);
predefined_error!(
    /// An established operation exceeded its deadline
    operation_timeout,
    codes::OPERATION_TIMEOUT,
    "operation timeout"
);
predefined_error!(record_not_found, codes::RECORD_NOT_FOUND, "record not found");
predefined_error!(
    foreign_key_violation,
    codes::FOREIGN_KEY_VIOLATION,
    "foreign key violation"
);
predefined_error!(
    unique_constraint_violation,
    codes::UNIQUE_CONSTRAINT_VIOLATION,
    "unique constraint violation"
);
