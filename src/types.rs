use serde::{Deserialize, Serialize};

use crate::error::ErrorKind;

/// One entry from the public suffix list, immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Original rule text (e.g. `*.ck`, `!www.ck`, `com`)
    pub rule_text: String,
    /// Rule text with a leading `*.` or `!` stripped
    pub suffix: String,
    /// `suffix` in ASCII-compatible (IDNA) form; the index key
    pub ascii_suffix: String,
    /// Rule text started with `*.`
    pub wildcard: bool,
    /// Rule text started with `!`
    pub exception: bool,
}

/// Structural components of a successfully resolved hostname.
///
/// `domain` is `sld + "." + tld` when both are present. `listed` is true
/// iff a public suffix rule matched during resolution; it is false for
/// unlisted TLDs and for the `.local` pseudo-TLD.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedDomain {
    pub input: String,
    pub tld: Option<String>,
    pub sld: Option<String>,
    pub domain: Option<String>,
    pub subdomain: Option<String>,
    pub listed: bool,
}

impl ParsedDomain {
    /// Create an empty result for the given input, all components unset.
    pub fn from_input(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }
}

/// Outcome of a resolution call.
///
/// Validation failures are returned, not raised: malformed hostnames are
/// expected inputs, and callers branch on the variant instead of
/// catching errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParseResult {
    /// Hostname failed syntax validation
    Error { input: String, kind: ErrorKind },
    /// Hostname validated and was resolved into components
    Parsed(ParsedDomain),
}

impl ParseResult {
    /// The parsed components, if resolution succeeded.
    pub fn parsed(&self) -> Option<&ParsedDomain> {
        match self {
            ParseResult::Parsed(parsed) => Some(parsed),
            ParseResult::Error { .. } => None,
        }
    }

    /// The validation failure kind, if resolution failed.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            ParseResult::Error { kind, .. } => Some(*kind),
            ParseResult::Parsed(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ParseResult::Error { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_input_leaves_components_unset() {
        let parsed = ParsedDomain::from_input("example");
        assert_eq!(parsed.input, "example");
        assert!(parsed.tld.is_none());
        assert!(parsed.sld.is_none());
        assert!(parsed.domain.is_none());
        assert!(parsed.subdomain.is_none());
        assert!(!parsed.listed);
    }

    #[test]
    fn test_parse_result_accessors() {
        let ok = ParseResult::Parsed(ParsedDomain::from_input("example.com"));
        assert!(!ok.is_error());
        assert!(ok.parsed().is_some());
        assert!(ok.error_kind().is_none());

        let err = ParseResult::Error {
            input: "-bad.com".into(),
            kind: ErrorKind::LabelStartsWithDash,
        };
        assert!(err.is_error());
        assert!(err.parsed().is_none());
        assert_eq!(err.error_kind(), Some(ErrorKind::LabelStartsWithDash));
    }
}
