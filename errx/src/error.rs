//! Structured error value
//!
//! An [`Error`] carries an optional code, its own authored message and at most one
//! cause. The cause link is shared, never duplicated, so copies produced by
//! [`Error::with_code`] point at the same underlying cause allocation.

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Shared handle to the error that caused an [`Error`]
pub type Cause = Arc<dyn StdError + Send + Sync + 'static>;

/// Error node with an optional lookup code and an optional cause
///
/// Not `PartialEq`: two errors match only when they are the same allocation
/// (see [`crate::chain::is`]).
#[derive(Debug, Clone)]
pub struct Error {
    code: Option<String>,
    message: String,
    cause: Option<Cause>,
}

impl Error {
    /// Create a root error with no cause
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            cause: None,
        }
    }

    /// Create an error caused by an already shared error
    ///
    /// Keep a clone of `cause` to later check `chain::is(&wrapper, cause.as_ref())`.
    pub fn with_cause(message: impl Into<String>, cause: Cause) -> Self {
        Self {
            code: None,
            message: message.into(),
            cause: Some(cause),
        }
    }

    /// Create an error that takes ownership of its cause
    ///
    /// An already shared cause (`Arc<Error>` or [`Cause`]) is linked as is, so
    /// the chain still reaches the shared allocation.
    pub fn wrap<E>(message: impl Into<String>, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        let shared = {
            let any = &cause as &dyn Any;
            any.downcast_ref::<Arc<Error>>()
                .map(|shared| Arc::clone(shared) as Cause)
                .or_else(|| any.downcast_ref::<Cause>().cloned())
        };

        Self::with_cause(message, shared.unwrap_or_else(|| Arc::new(cause) as Cause))
    }

    /// Return a copy of this error with `code` set; `self` is left untouched
    pub fn with_code(&self, code: impl Into<String>) -> Self {
        let mut copy = self.clone();
        copy.code = Some(code.into());
        copy
    }

    /// Lookup code, or an empty string when none was attached
    pub fn code(&self) -> &str {
        self.code.as_deref().unwrap_or("")
    }

    pub fn has_code(&self) -> bool {
        self.code.is_some()
    }

    /// The message authored for this node, regardless of any cause
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The direct cause, if any
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Shared handle to the direct cause
    pub fn cause_handle(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }
}

impl fmt::Display for Error {
    // The deepest cause's text shadows this node's own message.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => fmt::Display::fmt(cause, f),
            None => f.write_str(&self.message),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn StdError + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain;

    #[derive(Debug)]
    struct ForeignError;

    impl fmt::Display for ForeignError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("foreign failure")
        }
    }

    impl StdError for ForeignError {}

    #[test]
    fn test_root_error_accessors() {
        let err = Error::new("test error");
        assert_eq!(err.message(), "test error");
        assert_eq!(err.to_string(), "test error");
        assert_eq!(err.code(), "");
        assert!(!err.has_code());
        assert!(err.cause().is_none());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_wrapped_error_shadows_text() {
        let cause: Cause = Arc::new(Error::new("test error"));
        let wrapped = Error::with_cause("wrapped message", cause.clone());

        assert_eq!(wrapped.message(), "wrapped message");
        assert_eq!(wrapped.to_string(), "test error");
        assert_eq!(wrapped.to_string(), cause.to_string());
    }

    #[test]
    fn test_text_comes_from_deepest_cause() {
        let inner = Error::wrap("middle", ForeignError);
        let outer = Error::wrap("outer", inner).with_code("OUTER");

        assert_eq!(outer.to_string(), "foreign failure");
        assert_eq!(outer.message(), "outer");
        assert_eq!(outer.code(), "OUTER");
    }

    #[test]
    fn test_unwrap_returns_same_allocation() {
        let cause: Cause = Arc::new(Error::new("test error"));
        let wrapped = Error::with_cause("wrapped message", cause.clone());

        let unwrapped = wrapped.cause_handle().unwrap();
        assert!(Arc::ptr_eq(unwrapped, &cause));

        let source = wrapped.source().unwrap();
        assert!(chain::same_error(source, cause.as_ref()));
    }

    #[test]
    fn test_wrap_links_shared_cause_directly() {
        let shared = Arc::new(Error::new("test error").with_code("SHARED"));
        let wrapped = Error::wrap("wrapped message", Arc::clone(&shared));
        assert!(chain::is(&wrapped, shared.as_ref()));
        assert_eq!(wrapped.source().unwrap().downcast_ref::<Error>().unwrap().code(), "SHARED");

        let cause: Cause = Arc::new(ForeignError);
        let wrapped = Error::wrap("wrapped message", cause.clone());
        assert!(chain::is(&wrapped, cause.as_ref()));
        assert!(wrapped.source().unwrap().source().is_none());
    }

    #[test]
    fn test_with_code_does_not_mutate_receiver() {
        let original = Error::new("record missing");
        let coded = original.with_code("NOT_FOUND");

        assert_eq!(original.code(), "");
        assert_eq!(coded.code(), "NOT_FOUND");
        assert_eq!(coded.message(), "record missing");
    }

    #[test]
    fn test_with_code_shares_cause() {
        let cause: Cause = Arc::new(ForeignError);
        let base = Error::with_cause("base", cause.clone());
        let first = base.with_code("A");
        let second = base.with_code("B");

        assert!(Arc::ptr_eq(first.cause_handle().unwrap(), &cause));
        assert!(Arc::ptr_eq(second.cause_handle().unwrap(), &cause));
        assert_eq!(first.code(), "A");
        assert_eq!(second.code(), "B");
        assert_eq!(base.code(), "");
    }

    #[test]
    fn test_recode_replaces_code_only() {
        let err = Error::new("msg").with_code("FIRST").with_code("SECOND");
        assert_eq!(err.code(), "SECOND");
        assert_eq!(err.message(), "msg");
    }
}
