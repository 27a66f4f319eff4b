use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PslError, Result};
use crate::parser::parse_rule_line;
use crate::types::Rule;

/// Immutable mapping from ASCII-encoded suffix to its rule.
///
/// Built once from an ordered sequence of rule-text lines, then shared
/// read-only by any number of resolution calls; no method takes `&mut
/// self` after construction, so the index is freely shareable across
/// threads.
#[derive(Debug, Clone, Default)]
pub struct RuleIndex {
    rules: HashMap<String, Rule>,
}

impl RuleIndex {
    /// Build an index from rule-text lines.
    ///
    /// Blank lines and `//` comments are skipped. Two distinct rules
    /// encoding to the same ASCII suffix make the table
    /// self-contradictory and abort construction.
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rules = HashMap::new();

        for (line_num, line) in lines.into_iter().enumerate() {
            let line_num = line_num + 1;
            let Some(rule) = parse_rule_line(line.as_ref(), line_num)? else {
                continue;
            };
            if rules.contains_key(&rule.ascii_suffix) {
                return Err(PslError::DuplicateSuffix {
                    suffix: rule.ascii_suffix,
                    line: line_num,
                });
            }
            rules.insert(rule.ascii_suffix.clone(), rule);
        }

        debug!(rules = rules.len(), "rule index built");
        Ok(Self { rules })
    }

    /// Build an index from whole-list text (the list ships as one file).
    pub fn from_str(text: &str) -> Result<Self> {
        Self::from_lines(text.lines())
    }

    /// Build an index from a rule list file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_str(&text)
    }

    /// Look up the rule for an exact ASCII-encoded suffix.
    pub fn lookup(&self, ascii_suffix: &str) -> Option<&Rule> {
        self.rules.get(ascii_suffix)
    }

    /// Number of indexed rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
