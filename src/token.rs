//! Compact token splitting.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, Result};
use crate::strings::is_empty;

lazy_static! {
    /// `header.payload.signature`; the payload must be non-empty and no
    /// segment may contain a dot or whitespace.
    static ref TOKEN_PARTS: Regex = Regex::new(r"^([^.\s]*)\.([^.\s]+)\.([^.\s]*)$").unwrap();
}

/// The three structural segments of a compact token.
///
/// Each field holds the raw, still-encoded text between the dots of the
/// input. No base64 decoding is performed; header and signature may be
/// empty strings even though real-world tokens always populate them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedToken {
    pub header: String,
    pub payload: String,
    pub signature: String,
}

/// Split a compact-serialized auth token into its three segments.
///
/// Fails with [`Error::TokenNullOrEmpty`] on an empty input and with
/// [`Error::TokenMalformed`] when the input does not consist of exactly
/// three dot-separated, whitespace-free segments with a non-empty
/// payload. No cryptographic check and no decoding of the segments is
/// performed; that is the caller's job.
pub fn decode_auth_token(token: &str) -> Result<DecodedToken> {
    if is_empty(Some(token)) {
        return Err(Error::TokenNullOrEmpty(token.to_string()));
    }

    let captures = TOKEN_PARTS
        .captures(token)
        .ok_or_else(|| Error::TokenMalformed(render_json_literal(token)))?;

    Ok(DecodedToken {
        header: captures[1].to_string(),
        payload: captures[2].to_string(),
        signature: captures[3].to_string(),
    })
}

/// Render a string as a JSON string literal so control characters are
/// visible in diagnostics.
fn render_json_literal(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| format!("{s:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_token() {
        let decoded = decode_auth_token("aaa.bbb.ccc").unwrap();
        assert_eq!(
            decoded,
            DecodedToken {
                header: "aaa".to_string(),
                payload: "bbb".to_string(),
                signature: "ccc".to_string(),
            }
        );
    }

    #[test]
    fn test_decode_empty_token() {
        assert!(matches!(
            decode_auth_token(""),
            Err(Error::TokenNullOrEmpty(_))
        ));
    }

    #[test]
    fn test_decode_two_parts() {
        assert!(matches!(
            decode_auth_token("abc.def"),
            Err(Error::TokenMalformed(_))
        ));
    }

    #[test]
    fn test_decode_four_parts() {
        assert!(matches!(
            decode_auth_token("a.b.c.d"),
            Err(Error::TokenMalformed(_))
        ));
    }

    #[test]
    fn test_decode_empty_header_and_signature() {
        let decoded = decode_auth_token(".bbb.").unwrap();
        assert_eq!(decoded.header, "");
        assert_eq!(decoded.payload, "bbb");
        assert_eq!(decoded.signature, "");
    }

    #[test]
    fn test_decode_empty_payload_rejected() {
        assert!(matches!(
            decode_auth_token("aaa..ccc"),
            Err(Error::TokenMalformed(_))
        ));
    }

    #[test]
    fn test_decode_rejects_whitespace_in_segments() {
        assert!(decode_auth_token("aa a.bbb.ccc").is_err());
        assert!(decode_auth_token("aaa.bb\tb.ccc").is_err());
        assert!(decode_auth_token("aaa.bbb.cc\nc").is_err());
        assert!(decode_auth_token(" aaa.bbb.ccc").is_err());
        assert!(decode_auth_token("aaa.bbb.ccc\r").is_err());
    }

    #[test]
    fn test_decode_realistic_segments() {
        let decoded = decode_auth_token("eyJhbGciOiJIUzI1NiJ9.eyJpc3MiOiJ0ZXN0In0.sig-123_x")
            .unwrap();
        assert_eq!(decoded.header, "eyJhbGciOiJIUzI1NiJ9");
        assert_eq!(decoded.payload, "eyJpc3MiOiJ0ZXN0In0");
        assert_eq!(decoded.signature, "sig-123_x");
    }

    #[test]
    fn test_malformed_message_quotes_input_as_json() {
        let err = decode_auth_token("a.b\n.c").unwrap_err();
        // control characters must be escaped and visible
        assert_eq!(err.to_string(), r#"Given token is malformed: "a.b\n.c""#);
    }

    #[test]
    fn test_null_or_empty_message_carries_input() {
        let err = decode_auth_token("").unwrap_err();
        assert_eq!(err.to_string(), r#"Token is null or empty: """#);
    }
}
