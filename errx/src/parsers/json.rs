//! JSON message files: one flat object per language

use super::{MessageMap, MessageSource, ParserError};

const FORMAT: &str = "json";

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSource;

impl JsonSource {
    pub fn new() -> Self {
        Self
    }
}

impl MessageSource for JsonSource {
    fn format(&self) -> &'static str {
        FORMAT
    }

    fn decode(&self, bytes: &[u8]) -> Result<MessageMap, ParserError> {
        serde_json::from_slice(bytes).map_err(|e| ParserError::Decode {
            format: FORMAT,
            reason: e.to_string(),
        })
    }

    fn encode(&self, messages: &MessageMap) -> Result<Vec<u8>, ParserError> {
        serde_json::to_vec_pretty(messages).map_err(|e| ParserError::Encode {
            format: FORMAT,
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_decode_flat_object() {
        let bytes = br#"{"ERR_RESOURCE_NOT_FOUND": "Resource not found", "ERR_TIMEOUT": "Timed out"}"#;
        let messages = JsonSource::new().decode(bytes).unwrap();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages["ERR_RESOURCE_NOT_FOUND"], "Resource not found");
        assert_eq!(messages["ERR_TIMEOUT"], "Timed out");
    }

    #[test]
    fn test_decode_rejects_nested_values() {
        let bytes = br#"{"ERR_X": {"en": "nested"}}"#;
        let result = JsonSource::new().decode(bytes);
        assert_matches!(result, Err(ParserError::Decode { format: "json", .. }));
    }

    #[test]
    fn test_decode_rejects_malformed_input() {
        let result = JsonSource::new().decode(b"{not json");
        assert_matches!(result, Err(ParserError::Decode { .. }));
    }

    #[test]
    fn test_encode_is_sorted_object() {
        let mut messages = MessageMap::new();
        messages.insert("B".to_string(), "second".to_string());
        messages.insert("A".to_string(), "first".to_string());

        let bytes = JsonSource::new().encode(&messages).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.find("\"A\"").unwrap() < text.find("\"B\"").unwrap());
    }
}
