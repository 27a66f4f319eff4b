use crate::index::RuleIndex;
use crate::parser::to_ascii;
use crate::types::{ParseResult, ParsedDomain};
use crate::validate::validate;

/// Re-encode derived output fields when the encoded domain carries the
/// ACE marker. The check is a substring heuristic on the encoded
/// domain, not a Unicode-input flag; consumers observe this exact
/// behavior, so it stays.
fn fix_output(parsed: &mut ParsedDomain, ascii_has_marker: bool) {
    if !ascii_has_marker {
        return;
    }
    for field in [&mut parsed.domain, &mut parsed.subdomain] {
        if let Some(value) = field.take() {
            *field = Some(to_ascii(&value).unwrap_or(value));
        }
    }
}

impl RuleIndex {
    /// Resolve a hostname into its structural components.
    ///
    /// Resolution is a linear decision sequence with four terminal
    /// outcomes: validation error, `.local` pseudo-TLD, unlisted TLD,
    /// or a listed suffix rule (plain, wildcard, or exception). Each
    /// call is pure apart from reads against the index.
    pub fn parse(&self, input: &str) -> ParseResult {
        let mut domain = input.to_lowercase();
        // Tolerate a single fully-qualified trailing dot, no more.
        if domain.ends_with('.') {
            domain.pop();
        }

        let ascii = match to_ascii(&domain) {
            Ok(encoded) => encoded,
            // Unmappable input; the validator rejects it below.
            Err(_) => domain,
        };
        if let Some(kind) = validate(&ascii) {
            return ParseResult::Error {
                input: input.to_string(),
                kind,
            };
        }

        let mut parsed = ParsedDomain::from_input(input);
        let parts: Vec<&str> = ascii.split('.').collect();

        // `.local` is a non-Internet pseudo-TLD, never looked up.
        if parts.last().copied() == Some("local") {
            return ParseResult::Parsed(parsed);
        }

        let ascii_has_marker = ascii.contains("xn--");

        // Longest match: try the whole domain, then progressively drop
        // the left-most label. The first hit is the most specific rule
        // (`uk.com` wins over `com`).
        let mut matched = None;
        for i in 0..parts.len() {
            let candidate = parts[i..].join(".");
            if let Some(rule) = self.lookup(&candidate) {
                matched = Some(rule);
                break;
            }
        }

        let Some(rule) = matched else {
            // Unlisted TLD: derive components positionally.
            let mut labels: Vec<String> = parts.iter().map(|s| (*s).to_string()).collect();
            if labels.len() < 2 {
                return ParseResult::Parsed(parsed);
            }
            let tld = labels.pop();
            let sld = labels.pop();
            if let (Some(tld), Some(sld)) = (tld, sld) {
                parsed.domain = Some(format!("{}.{}", sld, tld));
                parsed.tld = Some(tld);
                parsed.sld = Some(sld);
            }
            if !labels.is_empty() {
                parsed.subdomain = Some(labels.join("."));
            }
            fix_output(&mut parsed, ascii_has_marker);
            return ParseResult::Parsed(parsed);
        };

        parsed.listed = true;

        let mut tld_parts: Vec<String> = rule.suffix.split('.').map(str::to_string).collect();
        let boundary = parts.len().saturating_sub(tld_parts.len());
        let mut private_parts: Vec<String> =
            parts[..boundary].iter().map(|s| (*s).to_string()).collect();

        if rule.exception {
            // The exception carves a one-label private registration out
            // of its wildcard: the leading suffix label becomes private.
            private_parts.push(tld_parts.remove(0));
        } else if rule.wildcard && !private_parts.is_empty() {
            // The wildcard consumes exactly one additional label into
            // the suffix.
            if let Some(label) = private_parts.pop() {
                tld_parts.insert(0, label);
            }
        }
        let tld = tld_parts.join(".");

        if let Some(sld) = private_parts.pop() {
            parsed.domain = Some(format!("{}.{}", sld, tld));
            parsed.sld = Some(sld);
            if !private_parts.is_empty() {
                parsed.subdomain = Some(private_parts.join("."));
            }
        }
        parsed.tld = Some(tld);

        fix_output(&mut parsed, ascii_has_marker);
        ParseResult::Parsed(parsed)
    }

    /// The registrable domain (`sld.tld`) for the input, if any. Empty
    /// input short-circuits without parsing.
    pub fn get(&self, input: &str) -> Option<String> {
        if input.is_empty() {
            return None;
        }
        match self.parse(input) {
            ParseResult::Parsed(parsed) => parsed.domain,
            ParseResult::Error { .. } => None,
        }
    }

    /// Whether the input resolves to a registrable domain under a
    /// listed public suffix.
    pub fn is_valid(&self, input: &str) -> bool {
        match self.parse(input) {
            ParseResult::Parsed(parsed) => parsed.domain.is_some() && parsed.listed,
            ParseResult::Error { .. } => false,
        }
    }
}
