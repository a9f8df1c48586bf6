//! TOML message files: top-level `code = "text"` pairs

use super::{MessageMap, MessageSource, ParserError};

const FORMAT: &str = "toml";

#[derive(Debug, Clone, Copy, Default)]
pub struct TomlSource;

impl TomlSource {
    pub fn new() -> Self {
        Self
    }
}

impl MessageSource for TomlSource {
    fn format(&self) -> &'static str {
        FORMAT
    }

    fn decode(&self, bytes: &[u8]) -> Result<MessageMap, ParserError> {
        let text = std::str::from_utf8(bytes).map_err(|e| ParserError::Decode {
            format: FORMAT,
            reason: e.to_string(),
        })?;

        ::toml::from_str(text).map_err(|e| ParserError::Decode {
            format: FORMAT,
            reason: e.to_string(),
        })
    }

    fn encode(&self, messages: &MessageMap) -> Result<Vec<u8>, ParserError> {
        ::toml::to_string(messages)
            .map(String::into_bytes)
            .map_err(|e| ParserError::Encode {
                format: FORMAT,
                reason: e.to_string(),
            })
    }
}
