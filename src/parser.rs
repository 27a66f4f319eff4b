use tracing::trace;

use crate::error::{PslError, Result};
use crate::types::Rule;

/// ASCII-compatible (IDNA/punycode) encoding of a domain or suffix.
///
/// Single funnel for the ACE codec so the underlying implementation
/// stays swappable.
pub(crate) fn to_ascii(domain: &str) -> std::result::Result<String, idna::Errors> {
    idna::domain_to_ascii(domain)
}

/// Parse one line of public suffix list text.
///
/// Returns `Ok(None)` for blank lines and comments (lines whose first
/// two characters are `//`). Only the token preceding the first
/// whitespace is significant. A suffix that cannot be IDNA-encoded is a
/// fatal error: the rule table is corrupt.
pub fn parse_rule_line(line: &str, line_num: usize) -> Result<Option<Rule>> {
    if line.starts_with("//") {
        return Ok(None);
    }
    let rule_text = match line.split_whitespace().next() {
        Some(token) => token,
        None => return Ok(None),
    };

    let (suffix, wildcard, exception) = if let Some(stripped) = rule_text.strip_prefix("*.") {
        (stripped, true, false)
    } else if let Some(stripped) = rule_text.strip_prefix('!') {
        (stripped, false, true)
    } else {
        (rule_text, false, false)
    };

    let ascii_suffix = to_ascii(suffix).map_err(|_| PslError::InvalidRule {
        line: line_num,
        message: format!("suffix '{}' is not IDNA-encodable", suffix),
    })?;

    Ok(Some(Rule {
        rule_text: rule_text.to_string(),
        suffix: suffix.to_string(),
        ascii_suffix,
        wildcard,
        exception,
    }))
}

/// Parse public suffix list text into rules, skipping blanks and
/// comments. Line numbers in errors are 1-based.
pub fn parse_rules(text: &str) -> Result<Vec<Rule>> {
    let mut rules = Vec::new();
    let mut skipped = 0usize;

    for (line_num, line) in text.lines().enumerate() {
        let line_num = line_num + 1;
        match parse_rule_line(line, line_num)? {
            Some(rule) => rules.push(rule),
            None => skipped += 1,
        }
    }

    trace!(rules = rules.len(), skipped, "parsed rule list text");
    Ok(rules)
}
