//! Compact JWT decoding
//!
//! Reads the claims segment of a compact-serialized JWS (`header.payload.signature`)
//! without verifying the signature. Verification belongs to the API that
//! issued the token; the client only reads claims for display and routing.

use base64::{Engine, engine::general_purpose};
use serde_json::{Map, Value};
use thiserror::Error;

/// Claims object of a decoded token
pub type Claims = Map<String, Value>;

/// Reasons a token cannot be read
#[derive(Debug, Error)]
pub enum TokenFormatError {
    #[error("Expected 3 token segments, found {0}")]
    SegmentCount(usize),

    #[error("Token segment is empty")]
    EmptySegment,

    #[error("Token payload is not valid base64url: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Token payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Token payload is not a JSON object")]
    NotAnObject,
}

/// Decode the claims of a compact JWT.
///
/// Padding is tolerated, and the standard base64 alphabet is accepted as a
/// fallback since some issuers emit it.
pub fn decode_claims(token: &str) -> Result<Claims, TokenFormatError> {
    let segments: Vec<&str> = token.trim().split('.').collect();
    if segments.len() != 3 {
        return Err(TokenFormatError::SegmentCount(segments.len()));
    }
    // The signature may legitimately be empty for unsecured tokens
    if segments[0].is_empty() || segments[1].is_empty() {
        return Err(TokenFormatError::EmptySegment);
    }

    let bytes = decode_segment(segments[1])?;
    match serde_json::from_slice::<Value>(&bytes)? {
        Value::Object(claims) => Ok(claims),
        _ => Err(TokenFormatError::NotAnObject),
    }
}

fn decode_segment(segment: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let unpadded = segment.trim_end_matches('=');
    general_purpose::URL_SAFE_NO_PAD
        .decode(unpadded)
        .or_else(|_| general_purpose::STANDARD_NO_PAD.decode(unpadded))
}

/// Encode claims as an unsigned compact token.
///
/// Only meant for fixtures and tooling; the signature segment is a fixed
/// placeholder that no issuer would accept.
pub fn encode_unsigned(claims: &Value) -> String {
    let header = general_purpose::URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = general_purpose::URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.unsigned")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_claims() {
        let token = encode_unsigned(&json!({"nameid": "7", "role": "admin", "exp": 42}));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.get("nameid"), Some(&json!("7")));
        assert_eq!(claims.get("exp"), Some(&json!(42)));
    }

    #[test]
    fn test_decode_tolerates_padding() {
        let payload = general_purpose::URL_SAFE.encode(br#"{"a":1}"#);
        assert!(payload.ends_with('='));
        let token = format!("eyJhbGciOiJub25lIn0.{payload}.sig");
        assert!(decode_claims(&token).is_ok());
    }

    #[test]
    fn test_wrong_segment_count() {
        assert!(matches!(
            decode_claims("only.two"),
            Err(TokenFormatError::SegmentCount(2))
        ));
        assert!(matches!(
            decode_claims(""),
            Err(TokenFormatError::SegmentCount(1))
        ));
    }

    #[test]
    fn test_garbage_payload() {
        assert!(matches!(
            decode_claims("abc.!!!.def"),
            Err(TokenFormatError::Base64(_))
        ));
        let not_json = general_purpose::URL_SAFE_NO_PAD.encode("hello");
        assert!(matches!(
            decode_claims(&format!("abc.{not_json}.def")),
            Err(TokenFormatError::Json(_))
        ));
        let array = general_purpose::URL_SAFE_NO_PAD.encode("[1,2]");
        assert!(matches!(
            decode_claims(&format!("abc.{array}.def")),
            Err(TokenFormatError::NotAnObject)
        ));
    }

    #[test]
    fn test_empty_segment() {
        assert!(matches!(
            decode_claims(".payload.sig"),
            Err(TokenFormatError::EmptySegment)
        ));
    }
}
