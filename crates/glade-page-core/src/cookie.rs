//! Cookie-string lookup.
//!
//! The CSRF token rides in a session cookie; this is the one place that
//! parses `document.cookie`'s `key=value; key=value` format. The browser
//! layer hands us the raw string so the parsing stays natively testable.

/// Look up a named cookie in a semicolon-separated cookie string.
///
/// Pairs may carry whitespace around them (browsers insert a space after
/// each `;`). Keys must match exactly; values are percent-decoded. Returns
/// `None` when the store is empty or no pair matches.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    for pair in cookies.split(';') {
        let Some((key, value)) = pair.trim().split_once('=') else {
            continue;
        };
        if key != name {
            continue;
        }
        // An undecodable value is still a value; fall back to the raw text.
        return Some(match urlencoding::decode(value) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => value.to_string(),
        });
    }
    None
}
