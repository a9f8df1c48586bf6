//! Code registry for localized messages and transport statuses
//!
//! Holds two independent tables keyed by the same code namespace:
//! - `code -> StatusCode` (HTTP and RPC status)
//! - `code -> language -> message`
//!
//! Each table sits behind its own reader/writer lock. Lookups share the read
//! side; every registration is a single write-locked read-modify-write, so a
//! reader never observes a half-applied update.

use crate::config::constants::{DEFAULT_HTTP_STATUS, DEFAULT_MESSAGE, DEFAULT_RPC_STATUS};
use crate::error::Error;
use crate::errors::RegistryError;
use crate::parsers::{MessageMap, MessageSource};
use crate::predefined;
use crate::status::StatusCode;
use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;
use std::sync::{Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

type StatusTable = HashMap<String, StatusCode>;
type MessageTable = HashMap<String, HashMap<String, String>>;

// Registry tables only ever hold fully applied writes, so a poisoned lock is
// still consistent and safe to keep using.
pub(crate) fn read_lock<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write_lock<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

/// Thread-safe store of status and message tables
pub struct Registry {
    statuses: RwLock<StatusTable>,
    messages: RwLock<MessageTable>,
    metadata: Mutex<RegistryMetadata>,
}

#[derive(Debug, Clone)]
pub struct RegistryMetadata {
    pub created_at: DateTime<Utc>,
    pub last_registration: Option<DateTime<Utc>>,
}

/// Snapshot of registry sizes
#[derive(Debug, Clone, PartialEq)]
pub struct RegistryStatistics {
    pub status_codes: usize,
    pub message_codes: usize,
    pub messages: usize,
    pub languages: usize,
    pub created_at: DateTime<Utc>,
    pub last_registration: Option<DateTime<Utc>>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("status_codes", &read_lock(&self.statuses).len())
            .field("message_codes", &read_lock(&self.messages).len())
            .finish()
    }
}

impl Registry {
    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    /// Create an empty registry
    pub fn new() -> Self {
        Self::with_status_table(HashMap::new())
    }

    /// Create a registry seeded with the predefined status table
    pub fn with_defaults() -> Self {
        Self::with_status_table(predefined::default_status_table())
    }

    fn with_status_table(statuses: StatusTable) -> Self {
        Self {
            statuses: RwLock::new(statuses),
            messages: RwLock::new(HashMap::new()),
            metadata: Mutex::new(RegistryMetadata {
                created_at: Utc::now(),
                last_registration: None,
            }),
        }
    }

    fn touch(&self) {
        self.metadata
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last_registration = Some(Utc::now());
    }

    // ========================================================================
    // STATUS REGISTRATION
    // ========================================================================

    /// Register both statuses for `code`, replacing any previous pair
    pub fn register_status(&self, code: impl Into<String>, status: StatusCode) {
        let code = code.into();
        log::debug!("registering status {} for code '{}'", status, code);

        write_lock(&self.statuses).insert(code, status);
        self.touch();
    }

    /// Register the HTTP status for `code`, keeping any RPC status already set
    pub fn register_http_status(&self, code: impl Into<String>, http_status: u16) {
        let code = code.into();
        log::debug!("registering http status {} for code '{}'", http_status, code);

        write_lock(&self.statuses).entry(code).or_default().http = http_status;
        self.touch();
    }

    /// Register the RPC status for `code`, keeping any HTTP status already set
    pub fn register_rpc_status(&self, code: impl Into<String>, rpc_status: impl Into<u32>) {
        let code = code.into();
        let rpc_status = rpc_status.into();
        log::debug!("registering rpc status {} for code '{}'", rpc_status, code);

        write_lock(&self.statuses).entry(code).or_default().rpc = rpc_status;
        self.touch();
    }

    // ========================================================================
    // MESSAGE REGISTRATION
    // ========================================================================

    /// Register the localized text of `code` for one language
    pub fn register_message(
        &self,
        code: impl Into<String>,
        language: impl Into<String>,
        message: impl Into<String>,
    ) {
        let code = code.into();
        let language = language.into();
        log::trace!("registering '{}' message for code '{}'", language, code);

        write_lock(&self.messages)
            .entry(code)
            .or_default()
            .insert(language, message.into());
        self.touch();
    }

    /// Decode a single-language message file and merge it under `language`
    ///
    /// Decoding happens before the table is locked; the merge itself is applied
    /// under one write lock, so readers see either none or all of the file.
    /// Returns the number of messages merged.
    pub fn load_messages(
        &self,
        language: &str,
        bytes: &[u8],
        source: &dyn MessageSource,
    ) -> Result<usize, RegistryError> {
        let decoded = source.decode(bytes)?;
        let count = decoded.len();

        {
            let mut messages = write_lock(&self.messages);
            for (code, text) in decoded {
                messages
                    .entry(code)
                    .or_default()
                    .insert(language.to_string(), text);
            }
        }
        self.touch();

        log::debug!(
            "loaded {} '{}' messages from {} source",
            count,
            language,
            source.format()
        );
        Ok(count)
    }

    /// Read a message file from disk and merge it under `language`
    pub fn load_messages_file(
        &self,
        language: &str,
        path: impl AsRef<Path>,
        source: &dyn MessageSource,
    ) -> Result<usize, RegistryError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| RegistryError::io(path, e))?;
        self.load_messages(language, &bytes, source)
    }

    /// Encode every message registered for `language`
    pub fn export_messages(
        &self,
        language: &str,
        source: &dyn MessageSource,
    ) -> Result<Vec<u8>, RegistryError> {
        let snapshot: MessageMap = read_lock(&self.messages)
            .iter()
            .filter_map(|(code, texts)| {
                texts
                    .get(language)
                    .map(|text| (code.clone(), text.clone()))
            })
            .collect();

        Ok(source.encode(&snapshot)?)
    }

    // ========================================================================
    // LOOKUP
    // ========================================================================

    /// Localized message for `err`
    ///
    /// Only an exact code and language hit with non-empty text returns
    /// registered text. An absent error yields [`DEFAULT_MESSAGE`]; an
    /// unregistered code, untranslated language or empty translation falls back
    /// to the error's own message (never to another language).
    pub fn get_message(&self, err: Option<&Error>, language: &str) -> String {
        let Some(err) = err else {
            return DEFAULT_MESSAGE.to_string();
        };

        self.message_for(err.code(), language)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| authored_message(err))
    }

    /// HTTP status for `err`, or [`DEFAULT_HTTP_STATUS`] when absent or unregistered
    pub fn http_status(&self, err: Option<&Error>) -> u16 {
        err.and_then(|e| self.status_for(e.code()))
            .map_or(DEFAULT_HTTP_STATUS, |status| status.http)
    }

    /// RPC status for `err`, or [`DEFAULT_RPC_STATUS`] when absent or unregistered
    pub fn rpc_status(&self, err: Option<&Error>) -> u32 {
        err.and_then(|e| self.status_for(e.code()))
            .map_or(DEFAULT_RPC_STATUS, |status| status.rpc)
    }

    /// Raw status entry for `code`
    pub fn status_for(&self, code: &str) -> Option<StatusCode> {
        read_lock(&self.statuses).get(code).copied()
    }

    /// Raw localized text for `code` in exactly `language`
    pub fn message_for(&self, code: &str, language: &str) -> Option<String> {
        read_lock(&self.messages)
            .get(code)
            .and_then(|texts| texts.get(language))
            .cloned()
    }

    // ========================================================================
    // INTROSPECTION
    // ========================================================================

    /// Sorted copy of the status table
    pub fn statuses(&self) -> BTreeMap<String, StatusCode> {
        read_lock(&self.statuses)
            .iter()
            .map(|(code, status)| (code.clone(), *status))
            .collect()
    }

    /// Every code present in either table, sorted
    pub fn codes(&self) -> Vec<String> {
        let mut codes: BTreeSet<String> = read_lock(&self.statuses).keys().cloned().collect();
        codes.extend(read_lock(&self.messages).keys().cloned());
        codes.into_iter().collect()
    }

    /// Every language that has at least one message
    pub fn languages(&self) -> BTreeSet<String> {
        read_lock(&self.messages)
            .values()
            .flat_map(|texts| texts.keys().cloned())
            .collect()
    }

    /// Message codes lacking a translation in any of `languages`
    ///
    /// Maps each incomplete code to the languages it is missing.
    pub fn missing_translations<S: AsRef<str>>(
        &self,
        languages: &[S],
    ) -> BTreeMap<String, Vec<String>> {
        read_lock(&self.messages)
            .iter()
            .filter_map(|(code, texts)| {
                let missing: Vec<String> = languages
                    .iter()
                    .map(|language| language.as_ref())
                    .filter(|language| !texts.contains_key(*language))
                    .map(str::to_string)
                    .collect();
                (!missing.is_empty()).then(|| (code.clone(), missing))
            })
            .collect()
    }

    pub fn metadata(&self) -> RegistryMetadata {
        self.metadata
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn statistics(&self) -> RegistryStatistics {
        let metadata = self.metadata();
        let status_codes = read_lock(&self.statuses).len();
        let (message_codes, messages, languages) = {
            let table = read_lock(&self.messages);
            let languages: BTreeSet<&str> = table
                .values()
                .flat_map(|texts| texts.keys().map(String::as_str))
                .collect();
            (
                table.len(),
                table.values().map(HashMap::len).sum::<usize>(),
                languages.len(),
            )
        };

        RegistryStatistics {
            status_codes,
            message_codes,
            messages,
            languages,
            created_at: metadata.created_at,
            last_registration: metadata.last_registration,
        }
    }
}

fn authored_message(err: &Error) -> String {
    match err.message() {
        "" => DEFAULT_MESSAGE.to_string(),
        message => message.to_string(),
    }
}
