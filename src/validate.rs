use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ErrorKind;

/// Allowed characters in an ASCII-encoded, lowercased DNS label.
/// Underscore is tolerated (common in SRV/TXT-style host names).
static LABEL_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9\-_]+$").expect("LABEL_CHARS: hardcoded regex is invalid")
});

/// Validate an ASCII-encoded, lowercased hostname against DNS label
/// syntax.
///
/// The caller applies IDNA encoding first: the 255/63 length limits are
/// defined over the encoded form. Checks run in a fixed order and stop
/// at the first failure. Pure function, no side effects.
pub fn validate(ascii: &str) -> Option<ErrorKind> {
    if ascii.is_empty() {
        return Some(ErrorKind::DomainTooShort);
    }
    if ascii.len() > 255 {
        return Some(ErrorKind::DomainTooLong);
    }

    for label in ascii.split('.') {
        if label.is_empty() {
            return Some(ErrorKind::LabelTooShort);
        }
        if label.len() > 63 {
            return Some(ErrorKind::LabelTooLong);
        }
        if label.starts_with('-') {
            return Some(ErrorKind::LabelStartsWithDash);
        }
        if label.ends_with('-') {
            return Some(ErrorKind::LabelEndsWithDash);
        }
        if !LABEL_CHARS.is_match(label) {
            return Some(ErrorKind::LabelInvalidChars);
        }
    }

    None
}
