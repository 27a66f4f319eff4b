//! PSL Engine - a Public Suffix List engine for Rust
//!
//! This library resolves a hostname into its structural components by
//! longest-match lookup against a table of public suffix rules:
//! - top-level public suffix (`tld`)
//! - second-level domain (`sld`)
//! - registrable domain (`sld.tld`)
//! - remaining subdomain labels
//!
//! Hostnames are validated against DNS label syntax before any lookup,
//! and Unicode hostnames are matched in their ASCII-compatible (IDNA)
//! form.
//!
//! # Example
//!
//! ```rust
//! use psl_engine_r::{ParseResult, RuleIndex};
//!
//! let rules = "\
//! // ===BEGIN ICANN DOMAINS===
//! com
//! uk
//! co.uk
//! *.ck
//! !www.ck
//! ";
//!
//! // Build the index once; share it read-only afterwards.
//! let index = RuleIndex::from_str(rules).unwrap();
//!
//! match index.parse("www.example.co.uk") {
//!     ParseResult::Parsed(parsed) => {
//!         assert_eq!(parsed.tld.as_deref(), Some("co.uk"));
//!         assert_eq!(parsed.domain.as_deref(), Some("example.co.uk"));
//!         assert_eq!(parsed.subdomain.as_deref(), Some("www"));
//!         assert!(parsed.listed);
//!     }
//!     ParseResult::Error { kind, .. } => panic!("{}", kind.message()),
//! }
//!
//! assert_eq!(index.get("www.example.co.uk").as_deref(), Some("example.co.uk"));
//! assert!(index.is_valid("example.com"));
//! assert!(!index.is_valid("example.unknown-tld"));
//! ```
//!
//! # Rule Syntax
//!
//! One rule per line, as published by the Public Suffix List:
//!
//! | Rule | Example | Meaning |
//! |------|---------|---------|
//! | Plain | `com` | `com` is a public suffix |
//! | Wildcard | `*.ck` | every direct child of `ck` is a public suffix |
//! | Exception | `!www.ck` | `www.ck` is registrable despite `*.ck` |
//!
//! Lines starting with `//` are comments; blank lines are ignored; only
//! the token before the first whitespace on a line is significant.
//!
//! Malformed hostnames are reported as [`ParseResult::Error`] values
//! with a fixed code and message, never as panics; only a corrupt rule
//! table (duplicate or unencodable suffix) fails index construction.

pub mod error;
pub mod index;
pub mod parser;
pub mod resolver;
pub mod types;
pub mod validate;

// Re-export commonly used items
pub use error::{ErrorKind, PslError, Result};
pub use index::RuleIndex;
pub use parser::{parse_rule_line, parse_rules};
pub use types::{ParseResult, ParsedDomain, Rule};
pub use validate::validate;
