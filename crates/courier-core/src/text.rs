//! Small string helpers: random codes, blank checks and list joining.

use std::sync::OnceLock;

use rand::Rng;
use regex::Regex;

const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const DIGITS: &[u8] = b"0123456789";

/// Generate a random string of `length` characters.
///
/// Draws from `A-Z`, `a-z` and `0-9`, or digits only when `numeric` is set
/// (used for one-time verification codes).
pub fn random_string(length: usize, numeric: bool) -> String {
    let alphabet = if numeric { DIGITS } else { ALPHANUMERIC };
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| char::from(alphabet[rng.gen_range(0..alphabet.len())]))
        .collect()
}

/// True when the value is absent, empty, or only whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, is_blank_str)
}

/// True when the string is empty or only whitespace.
pub fn is_blank_str(value: &str) -> bool {
    value.trim().is_empty()
}

/// True when the string is one or more decimal digits and nothing else.
pub fn is_numeric(value: &str) -> bool {
    static DIGITS_ONLY: OnceLock<Regex> = OnceLock::new();
    DIGITS_ONLY
        .get_or_init(|| Regex::new(r"^\d+$").expect("digits regex is valid"))
        .is_match(value)
}

/// Trimmed text, or `None` when absent or blank.
pub fn trimmed_non_blank(value: Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .map(str::to_string)
}

/// Trim and keep at most `max` characters (for error messages and logs).
pub fn truncate_chars(value: &str, max: usize) -> String {
    value.trim().chars().take(max).collect()
}

/// Join the non-blank items with `,`.
///
/// ```
/// use courier_core::text::join_non_blank;
///
/// assert_eq!(join_non_blank(&["a", " ", "b"]), "a,b");
/// ```
pub fn join_non_blank<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(AsRef::as_ref)
        .filter(|item| !is_blank_str(item))
        .collect::<Vec<_>>()
        .join(",")
}

/// Drop the first character, unless the string has at most one.
pub fn remove_first_char(value: &str) -> &str {
    let mut chars = value.chars();
    match (chars.next(), chars.as_str()) {
        (Some(_), rest) if !rest.is_empty() => rest,
        _ => value,
    }
}

/// Drop the last character, unless the string has at most one.
pub fn remove_last_char(value: &str) -> &str {
    let mut chars = value.chars();
    match chars.next_back() {
        Some(_) if !chars.as_str().is_empty() => chars.as_str(),
        _ => value,
    }
}
