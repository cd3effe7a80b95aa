//! URL-style query string parsing.

use std::collections::HashMap;

use lazy_static::lazy_static;
use percent_encoding::percent_decode_str;
use regex::Regex;

use crate::error::{Error, Result};

lazy_static! {
    /// One `key=value` pair; keys exclude `&` and `=`, values exclude `&`.
    static ref PAIR: Regex = Regex::new(r"([^&=]+)=([^&]*)").unwrap();
}

/// Parse a URL-style query string into a key/value map.
///
/// Scans for `key=value` pairs; segments without a `=` are ignored, as is
/// a trailing `&`. Both key and value have every `+` replaced by a space
/// and are then percent-decoded twice, independently. The double decode
/// is a contract with producers that double-encode certain values; it
/// must not be folded into a single decode. Later duplicate keys
/// overwrite earlier ones. A leading `?` is not stripped; callers pass
/// the already-separated query portion.
///
/// An invalid percent escape in either round fails the whole call with
/// [`Error::QueryDecodeFailed`].
pub fn query_string_to_object(query: &str) -> Result<HashMap<String, String>> {
    let mut map = HashMap::new();
    for caps in PAIR.captures_iter(query) {
        let key = decode_component(&caps[1])?;
        let value = decode_component(&caps[2])?;
        map.insert(key, value);
    }
    Ok(map)
}

/// `+` to space, then two rounds of strict percent-decoding.
fn decode_component(raw: &str) -> Result<String> {
    let spaced = raw.replace('+', " ");
    let once = percent_decode_strict(&spaced)?;
    percent_decode_strict(&once)
}

/// Percent-decode, rejecting the malformed escapes the lenient decoder
/// would pass through verbatim (dangling `%`, non-hex digits) as well as
/// output that is not valid UTF-8.
fn percent_decode_strict(input: &str) -> Result<String> {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let complete = i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !complete {
                return Err(Error::QueryDecodeFailed(format!(
                    "invalid percent escape at byte {i} in {input:?}"
                )));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    percent_decode_str(input)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|e| {
            Error::QueryDecodeFailed(format!("decoded {input:?} is not valid UTF-8: {e}"))
        })
}
