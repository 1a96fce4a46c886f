//! Conversation transcript wire format
//!
//! The front end carries prior turns as a base64-encoded UTF-8 JSON array of
//! `{role, content}` objects. This module is the codec for that blob; policy
//! for a missing blob lives in [`crate::completion`].

use crate::chat::ChatMessage;
use crate::error::{CompletionError, Result};
use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Decode a transcript blob into its ordered turn sequence.
///
/// Fails with [`CompletionError::Decode`] when the blob is not valid base64,
/// not UTF-8, or not a JSON array of turn objects. The empty string is
/// malformed like any other bad blob; callers that want to treat "no
/// transcript" as empty history must check before calling.
pub fn decode(blob: &str) -> Result<Vec<ChatMessage>> {
    let bytes = STANDARD
        .decode(blob)
        .map_err(|e| CompletionError::Decode(format!("invalid base64: {e}")))?;

    serde_json::from_slice(&bytes)
        .map_err(|e| CompletionError::Decode(format!("invalid transcript JSON: {e}")))
}

/// Encode an ordered turn sequence into the transcript wire format.
pub fn encode(turns: &[ChatMessage]) -> String {
    // Vec<ChatMessage> serialization cannot fail
    let json = serde_json::to_vec(turns).expect("transcript serialization failed");
    STANDARD.encode(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_preserves_order() {
        let turns = vec![
            ChatMessage::user("I have a headache"),
            ChatMessage::assistant("How long have you had it?"),
            ChatMessage::user("Since this morning"),
        ];

        let decoded = decode(&encode(&turns)).unwrap();
        assert_eq!(decoded, turns);
    }

    #[test]
    fn test_decode_known_blob() {
        // base64 of [{"role":"user","content":"hi"}]
        let blob = "W3sicm9sZSI6InVzZXIiLCJjb250ZW50IjoiaGkifV0=";
        let turns = decode(blob).unwrap();
        assert_eq!(turns, vec![ChatMessage::user("hi")]);
    }

    #[test]
    fn test_decode_rejects_bad_base64() {
        let err = decode("not base64!!!").unwrap_err();
        assert!(matches!(err, CompletionError::Decode(_)));
    }

    #[test]
    fn test_decode_rejects_non_json_payload() {
        let blob = STANDARD.encode("this is not json");
        let err = decode(&blob).unwrap_err();
        assert!(matches!(err, CompletionError::Decode(_)));
    }

    #[test]
    fn test_decode_rejects_non_array_json() {
        let blob = STANDARD.encode(r#"{"role":"user","content":"hi"}"#);
        let err = decode(&blob).unwrap_err();
        assert!(matches!(err, CompletionError::Decode(_)));
    }

    #[test]
    fn test_decode_rejects_empty_string() {
        // An empty blob is handled upstream as "no history"; the codec
        // itself stays strict.
        let err = decode("").unwrap_err();
        assert!(matches!(err, CompletionError::Decode(_)));
    }

    #[test]
    fn test_encode_empty_sequence() {
        let blob = encode(&[]);
        assert_eq!(decode(&blob).unwrap(), Vec::<ChatMessage>::new());
    }
}
