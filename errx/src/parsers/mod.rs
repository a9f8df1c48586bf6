//! Pluggable message file formats
//!
//! The registry never looks at a wire format itself. It hands bytes to a
//! [`MessageSource`], which turns them into a flat `code -> text` map (and back).

mod json;
mod toml;

pub use self::json::JsonSource;
pub use self::toml::TomlSource;

use std::collections::BTreeMap;

/// Flat `code -> text` table for one language, ordered for stable encodings
pub type MessageMap = BTreeMap<String, String>;

/// Decode/encode capability for one message file format
pub trait MessageSource: Send + Sync {
    /// Short format name, e.g. `"json"`
    fn format(&self) -> &'static str;

    fn decode(&self, bytes: &[u8]) -> Result<MessageMap, ParserError>;

    fn encode(&self, messages: &MessageMap) -> Result<Vec<u8>, ParserError>;
}

/// Message format errors
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Failed to decode {format} messages: {reason}")]
    Decode { format: &'static str, reason: String },

    #[error("Failed to encode {format} messages: {reason}")]
    Encode { format: &'static str, reason: String },
}

/// Pick a message source by format name (case-insensitive)
pub fn source_for_format(format: &str) -> Option<Box<dyn MessageSource>> {
    match format.to_ascii_lowercase().as_str() {
        "json" => Some(Box::new(JsonSource::new())),
        "toml" => Some(Box::new(TomlSource::new())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_for_format() {
        assert_eq!(source_for_format("json").unwrap().format(), "json");
        assert_eq!(source_for_format("JSON").unwrap().format(), "json");
        assert_eq!(source_for_format("toml").unwrap().format(), "toml");
        assert!(source_for_format("yaml").is_none());
    }
}
