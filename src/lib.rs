//! String helpers for an authentication client.
//!
//! A small set of pure, stateless functions used while handling auth
//! flows: splitting a compact `header.payload.signature` token into its
//! raw segments, parsing callback query strings, a guarded JSON parse,
//! and a few predicates and array transforms.
//!
//! Nothing here touches the network, decodes base64, or verifies
//! signatures; segments come back exactly as they appear on the wire and
//! the wider client decides what to do with them. Every function is a
//! pure function of its arguments and safe to call from any thread.
//!
//! ```
//! use authstr::decode_auth_token;
//!
//! let token = decode_auth_token("eyJhbGciOiJSUzI1NiJ9.eyJzdWIiOiJ1In0.c2ln")?;
//! assert_eq!(token.payload, "eyJzdWIiOiJ1In0");
//! # Ok::<(), authstr::Error>(())
//! ```

mod error;
mod json;
mod query;
mod strings;
mod token;

pub use error::{Error, Result};
pub use json::json_parse_helper;
pub use query::query_string_to_object;
pub use strings::{
    ends_with, is_empty, remove_empty_strings_from_array, starts_with, trim_array_entries,
};
pub use token::{decode_auth_token, DecodedToken};
