//! Request DTOs for the reverse words API
//!
//! Defines the structure of incoming HTTP request bodies.

use std::fmt;

use serde::{
    de::{IgnoredAny, MapAccess, Visitor},
    Deserialize, Deserializer,
};

use crate::error::{ApiError, Result};

/// Request body for the reverse operation (POST /)
///
/// # Fields
/// - `word`: The text to reverse; may be absent or empty
///
/// Keys are matched case-insensitively and, when a key repeats, the last
/// occurrence wins. A `null` value leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct ReverseRequest {
    /// The text to reverse
    pub word: Option<String>,
}

impl<'de> Deserialize<'de> for ReverseRequest {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ReverseRequestVisitor)
    }
}

struct ReverseRequestVisitor;

impl<'de> Visitor<'de> for ReverseRequestVisitor {
    type Value = ReverseRequest;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut request = ReverseRequest::default();
        while let Some(key) = map.next_key::<String>()? {
            if key.eq_ignore_ascii_case("word") {
                if let Some(word) = map.next_value::<Option<String>>()? {
                    request.word = Some(word);
                }
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        Ok(request)
    }
}

impl ReverseRequest {
    /// Decodes a raw request body.
    ///
    /// Only the first JSON value is read; anything after it is ignored. An
    /// empty (or whitespace-only) body and a JSON `null` both decode to a
    /// request with no word. Otherwise the first value must be an object.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        let first = serde_json::Deserializer::from_slice(body)
            .into_iter::<Option<Self>>()
            .next();

        match first {
            None => Ok(Self::default()),
            Some(decoded) => decoded
                .map(Option::unwrap_or_default)
                .map_err(|e| ApiError::MalformedBody(e.to_string())),
        }
    }

    /// Returns the word when one was supplied and is non-empty.
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref().filter(|w| !w.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_request_deserialize() {
        let req = ReverseRequest::from_body(br#"{"word": "hello"}"#).unwrap();
        assert_eq!(req.word(), Some("hello"));
    }

    #[test]
    fn test_empty_object_has_no_word() {
        let req = ReverseRequest::from_body(b"{}").unwrap();
        assert!(req.word().is_none());
    }

    #[test]
    fn test_empty_word_has_no_word() {
        let req = ReverseRequest::from_body(br#"{"word": ""}"#).unwrap();
        assert!(req.word().is_none());
    }

    #[test]
    fn test_empty_body_has_no_word() {
        assert!(ReverseRequest::from_body(b"").unwrap().word().is_none());
        assert!(ReverseRequest::from_body(b" \n\t").unwrap().word().is_none());
    }

    #[test]
    fn test_null_body_has_no_word() {
        let req = ReverseRequest::from_body(b"null").unwrap();
        assert!(req.word().is_none());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let req = ReverseRequest::from_body(br#"{"word": "abc", "lang": "en"}"#).unwrap();
        assert_eq!(req.word(), Some("abc"));
    }

    #[test]
    fn test_malformed_body_rejected() {
        let err = ReverseRequest::from_body(b"not json").unwrap_err();
        assert!(matches!(err, ApiError::MalformedBody(_)));
    }

    #[test]
    fn test_wrong_shape_rejected() {
        assert!(ReverseRequest::from_body(br#""hello""#).is_err());
        assert!(ReverseRequest::from_body(br#"{"word": 42}"#).is_err());
    }

    #[test]
    fn test_duplicate_word_last_wins() {
        let req = ReverseRequest::from_body(br#"{"word":"a","word":"b"}"#).unwrap();
        assert_eq!(req.word(), Some("b"));
    }

    #[test]
    fn test_null_word_keeps_earlier_value() {
        let req = ReverseRequest::from_body(br#"{"word":"a","word":null}"#).unwrap();
        assert_eq!(req.word(), Some("a"));
    }

    #[test]
    fn test_only_first_value_is_read() {
        let req = ReverseRequest::from_body(br#"{"word":"hello"}{}"#).unwrap();
        assert_eq!(req.word(), Some("hello"));

        let req = ReverseRequest::from_body(b"{\"word\":\"hi\"}\nnot json").unwrap();
        assert_eq!(req.word(), Some("hi"));
    }

    #[test]
    fn test_word_key_is_case_insensitive() {
        let req = ReverseRequest::from_body(br#"{"Word":"hello"}"#).unwrap();
        assert_eq!(req.word(), Some("hello"));

        let req = ReverseRequest::from_body(br#"{"word":"a","WORD":"b"}"#).unwrap();
        assert_eq!(req.word(), Some("b"));
    }

    #[test]
    fn test_array_body_rejected() {
        assert!(ReverseRequest::from_body(br#"["hello"]"#).is_err());
    }
}
