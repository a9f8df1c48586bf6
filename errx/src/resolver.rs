//! Boundary resolution: arbitrary error -> (status, localized message)
//!
//! These are the only calls HTTP and RPC handlers need. They never fail: an
//! absent error resolves to the success sentinel, and any error without a
//! structured [`Error`] in its chain resolves to the internal-error defaults
//! (its own text is not exposed to the caller).

use crate::chain;
use crate::config::constants::{SUCCESS_HTTP_STATUS, SUCCESS_RPC_STATUS};
use crate::error::Error;
use crate::registry::Registry;
use std::error::Error as StdError;

impl Registry {
    /// Resolve `err` into an HTTP status and a message in `language`
    pub fn resolve_http(
        &self,
        err: Option<&(dyn StdError + 'static)>,
        language: &str,
    ) -> (u16, String) {
        let Some(err) = err else {
            return (SUCCESS_HTTP_STATUS, String::new());
        };

        let structured = chain::find::<Error>(err);
        (
            self.http_status(structured),
            self.get_message(structured, language),
        )
    }

    /// Resolve `err` into an RPC status and a message in `language`
    pub fn resolve_rpc(
        &self,
        err: Option<&(dyn StdError + 'static)>,
        language: &str,
    ) -> (u32, String) {
        let Some(err) = err else {
            return (SUCCESS_RPC_STATUS, String::new());
        };

        let structured = chain::find::<Error>(err);
        (
            self.rpc_status(structured),
            self.get_message(structured, language),
        )
    }

    /// [`Registry::resolve_http`] for a handler's `Result`
    pub fn resolve_http_result<T, E>(&self, result: &Result<T, E>, language: &str) -> (u16, String)
    where
        E: StdError + 'static,
    {
        self.resolve_http(result_error(result), language)
    }

    /// [`Registry::resolve_rpc`] for a handler's `Result`
    pub fn resolve_rpc_result<T, E>(&self, result: &Result<T, E>, language: &str) -> (u32, String)
    where
        E: StdError + 'static,
    {
        self.resolve_rpc(result_error(result), language)
    }
}

fn result_error<T, E>(result: &Result<T, E>) -> Option<&(dyn StdError + 'static)>
where
    E: StdError + 'static,
{
    result
        .as_ref()
        .err()
        .map(|err| err as &(dyn StdError + 'static))
}
