//! Transport status codes
//!
//! HTTP statuses are plain `u16` values; RPC statuses follow the canonical gRPC
//! code taxonomy and are stored as `u32` so unregistered fields read as zero.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// STATUS PAIR
// ============================================================================

/// HTTP and RPC status registered for one error code
///
/// Either field may be left at zero when only the other one was registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusCode {
    pub http: u16,
    pub rpc: u32,
}

impl StatusCode {
    pub const fn new(http: u16, rpc: RpcCode) -> Self {
        Self {
            http,
            rpc: rpc as u32,
        }
    }

    /// RPC field as a typed code, if it is a known value
    pub fn rpc_code(&self) -> Option<RpcCode> {
        RpcCode::from_u32(self.rpc)
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rpc_code() {
            Some(code) => write!(f, "http={} rpc={}({})", self.http, code, self.rpc),
            None => write!(f, "http={} rpc={}", self.http, self.rpc),
        }
    }
}

// ============================================================================
// HTTP STATUS CONSTANTS
// ============================================================================

pub mod http {
    pub const OK: u16 = 200;
    pub const BAD_REQUEST: u16 = 400;
    pub const UNAUTHORIZED: u16 = 401;
    pub const FORBIDDEN: u16 = 403;
    pub const NOT_FOUND: u16 = 404;
    pub const CONFLICT: u16 = 409;
    pub const UNPROCESSABLE_ENTITY: u16 = 422;
    pub const TOO_MANY_REQUESTS: u16 = 429;
    pub const INTERNAL_SERVER_ERROR: u16 = 500;
    pub const NOT_IMPLEMENTED: u16 = 501;
    pub const SERVICE_UNAVAILABLE: u16 = 503;
    pub const GATEWAY_TIMEOUT: u16 = 504;
}

// ============================================================================
// RPC STATUS CODES
// ============================================================================

/// Canonical RPC status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum RpcCode {
    Ok = 0,
    Cancelled = 1,
    Unknown = 2,
    InvalidArgument = 3,
    DeadlineExceeded = 4,
    NotFound = 5,
    AlreadyExists = 6,
    PermissionDenied = 7,
    ResourceExhausted = 8,
    FailedPrecondition = 9,
    Aborted = 10,
    OutOfRange = 11,
    Unimplemented = 12,
    Internal = 13,
    Unavailable = 14,
    DataLoss = 15,
    Unauthenticated = 16,
}

impl RpcCode {
    const ALL: [RpcCode; 17] = [
        RpcCode::Ok,
        RpcCode::Cancelled,
        RpcCode::Unknown,
        RpcCode::InvalidArgument,
        RpcCode::DeadlineExceeded,
        RpcCode::NotFound,
        RpcCode::AlreadyExists,
        RpcCode::PermissionDenied,
        RpcCode::ResourceExhausted,
        RpcCode::FailedPrecondition,
        RpcCode::Aborted,
        RpcCode::OutOfRange,
        RpcCode::Unimplemented,
        RpcCode::Internal,
        RpcCode::Unavailable,
        RpcCode::DataLoss,
        RpcCode::Unauthenticated,
    ];

    pub const fn as_u32(self) -> u32 {
        self as u32
    }

    pub fn from_u32(value: u32) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RpcCode::Ok => "OK",
            RpcCode::Cancelled => "Cancelled",
            RpcCode::Unknown => "Unknown",
            RpcCode::InvalidArgument => "InvalidArgument",
            RpcCode::DeadlineExceeded => "DeadlineExceeded",
            RpcCode::NotFound => "NotFound",
            RpcCode::AlreadyExists => "AlreadyExists",
            RpcCode::PermissionDenied => "PermissionDenied",
            RpcCode::ResourceExhausted => "ResourceExhausted",
            RpcCode::FailedPrecondition => "FailedPrecondition",
            RpcCode::Aborted => "Aborted",
            RpcCode::OutOfRange => "OutOfRange",
            RpcCode::Unimplemented => "Unimplemented",
            RpcCode::Internal => "Internal",
            RpcCode::Unavailable => "Unavailable",
            RpcCode::DataLoss => "DataLoss",
            RpcCode::Unauthenticated => "Unauthenticated",
        }
    }
}

impl From<RpcCode> for u32 {
    fn from(code: RpcCode) -> Self {
        code.as_u32()
    }
}

impl fmt::Display for RpcCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rpc_code_numbering() {
        assert_eq!(RpcCode::Ok.as_u32(), 0);
        assert_eq!(RpcCode::InvalidArgument.as_u32(), 3);
        assert_eq!(RpcCode::NotFound.as_u32(), 5);
        assert_eq!(RpcCode::AlreadyExists.as_u32(), 6);
        assert_eq!(RpcCode::Internal.as_u32(), 13);
        assert_eq!(RpcCode::Unavailable.as_u32(), 14);
        assert_eq!(RpcCode::Unauthenticated.as_u32(), 16);
    }

    #[test]
    fn test_rpc_code_from_u32() {
        for value in 0..17 {
            assert_eq!(RpcCode::from_u32(value).unwrap().as_u32(), value);
        }
        assert!(RpcCode::from_u32(17).is_none());
    }

    #[test]
    fn test_status_pair_defaults_to_zero() {
        let status = StatusCode::default();
        assert_eq!(status.http, 0);
        assert_eq!(status.rpc, 0);
        assert_eq!(status.rpc_code(), Some(RpcCode::Ok));
    }

    #[test]
    fn test_status_display() {
        let status = StatusCode::new(http::NOT_FOUND, RpcCode::NotFound);
        assert_eq!(status.to_string(), "http=404 rpc=NotFound(5)");

        let unknown = StatusCode { http: 418, rpc: 99 };
        assert_eq!(unknown.to_string(), "http=418 rpc=99");
    }
}
