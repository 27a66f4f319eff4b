use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classifies hostname validation failures for programmatic matching.
///
/// These are returned inside [`ParseResult::Error`](crate::ParseResult),
/// never raised: a malformed hostname is a normal input, not an
/// exceptional condition. Serializes as its wire code (e.g.
/// `"LABEL_TOO_LONG"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Hostname is empty
    DomainTooShort,
    /// Hostname exceeds 255 characters in ASCII form
    DomainTooLong,
    /// A label starts with `-`
    LabelStartsWithDash,
    /// A label ends with `-`
    LabelEndsWithDash,
    /// A label exceeds 63 characters in ASCII form
    LabelTooLong,
    /// A label is empty (consecutive or leading dots)
    LabelTooShort,
    /// A label contains characters outside `[a-z0-9-_]`
    LabelInvalidChars,
}

impl ErrorKind {
    /// Stable wire code for this validation failure.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::DomainTooShort => "DOMAIN_TOO_SHORT",
            ErrorKind::DomainTooLong => "DOMAIN_TOO_LONG",
            ErrorKind::LabelStartsWithDash => "LABEL_STARTS_WITH_DASH",
            ErrorKind::LabelEndsWithDash => "LABEL_ENDS_WITH_DASH",
            ErrorKind::LabelTooLong => "LABEL_TOO_LONG",
            ErrorKind::LabelTooShort => "LABEL_TOO_SHORT",
            ErrorKind::LabelInvalidChars => "LABEL_INVALID_CHARS",
        }
    }

    /// Fixed human-readable message for this validation failure.
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::DomainTooShort => "Domain name too short.",
            ErrorKind::DomainTooLong => {
                "Domain name too long. It should be no more than 255 chars."
            }
            ErrorKind::LabelStartsWithDash => {
                "Domain name label can not start with a dash."
            }
            ErrorKind::LabelEndsWithDash => "Domain name label can not end with a dash.",
            ErrorKind::LabelTooLong => "Domain name label should be at most 63 chars long.",
            ErrorKind::LabelTooShort => {
                "Domain name label should be at least 1 character long."
            }
            ErrorKind::LabelInvalidChars => {
                "Domain name label can only contain alphanumeric characters or dashes."
            }
        }
    }
}

/// Rule index construction errors.
///
/// All variants are fatal to index construction: a rule table that fails
/// to build is corrupt, and resolving against it would be silently
/// unreliable.
#[derive(Error, Debug)]
pub enum PslError {
    #[error("Duplicate rule at line {line}: suffix '{suffix}' already indexed")]
    DuplicateSuffix { suffix: String, line: usize },

    #[error("Invalid rule at line {line}: {message}")]
    InvalidRule { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PslError>;
