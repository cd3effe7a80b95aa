//! Primitive string predicates and array transforms.

/// Check if a string is empty.
///
/// True when the value is absent (`None`) or holds a zero-length string.
/// `Option` models inputs that callers may not have at all, such as a
/// missing response field.
pub fn is_empty(s: Option<&str>) -> bool {
    s.map_or(true, str::is_empty)
}

/// True iff `search` occurs at position 0 of `s`.
///
/// Comparison is exact byte equality, no case folding or normalization.
/// An empty `search` always matches.
pub fn starts_with(s: &str, search: &str) -> bool {
    s.starts_with(search)
}

/// True iff `s` ends with `search`.
///
/// Same comparison discipline as [`starts_with`]. An empty `search`
/// always matches; a `search` longer than `s` never does.
pub fn ends_with(s: &str, search: &str) -> bool {
    s.ends_with(search)
}

/// Trims entries in an array.
///
/// Returns a new vector of the same length with leading and trailing
/// whitespace (Unicode, per [`str::trim`]) removed from every entry.
pub fn trim_array_entries(arr: &[String]) -> Vec<String> {
    arr.iter().map(|entry| entry.trim().to_string()).collect()
}

/// Removes empty strings from an array.
///
/// Keeps exactly the entries for which [`is_empty`] is false, preserving
/// their relative order. Whitespace-only entries are not empty.
pub fn remove_empty_strings_from_array(arr: &[String]) -> Vec<String> {
    arr.iter()
        .filter(|entry| !is_empty(Some(entry.as_str())))
        .cloned()
        .collect()
}
