//! String-or-regex patterns used in rule options.
//!
//! A pattern written as `/body/flags` (flags drawn from `i`, `g`, `m`) is a
//! regular expression; anything else is compared literally.

use regex::{Regex, RegexBuilder};

/// Error raised when a `/body/flags` pattern does not compile.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// The regular-expression body is not valid syntax.
    #[error("invalid regular expression pattern `{pattern}`: {source}")]
    InvalidRegex {
        /// The pattern as written.
        pattern: String,
        /// Compilation error.
        #[source]
        source: regex::Error,
    },
}

/// A parsed pattern.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Exact string comparison.
    Literal(String),
    /// Regular expression search.
    Regex(Regex),
}

impl Pattern {
    /// Parses `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidRegex`] if the pattern has regex form
    /// but its body does not compile.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let Some((body, flags)) = split_regex_literal(pattern) else {
            return Ok(Pattern::Literal(pattern.to_owned()));
        };
        RegexBuilder::new(body)
            .case_insensitive(flags.contains('i'))
            .multi_line(flags.contains('m'))
            .build()
            .map(Pattern::Regex)
            .map_err(|source| PatternError::InvalidRegex {
                pattern: pattern.to_owned(),
                source,
            })
    }

    /// Returns true if `needle` satisfies the pattern.
    #[must_use]
    pub fn is_match(&self, needle: &str) -> bool {
        match self {
            Pattern::Literal(literal) => literal == needle,
            Pattern::Regex(regex) => regex.is_match(needle),
        }
    }
}

/// Splits `/body/flags` into body and flags. The body runs to the last
/// slash and must be non-empty.
fn split_regex_literal(pattern: &str) -> Option<(&str, &str)> {
    let rest = pattern.strip_prefix('/')?;
    let end = rest.rfind('/')?;
    let (body, flags) = (&rest[..end], &rest[end + 1..]);
    let known_flags = flags.chars().all(|c| matches!(c, 'i' | 'g' | 'm'));
    if body.is_empty() || body.contains('\n') || !known_flags {
        return None;
    }
    Some((body, flags))
}

/// Matches `needle` against `pattern`, falling back to literal comparison
/// when the regex body does not compile.
#[must_use]
pub fn match_pattern(needle: &str, pattern: &str) -> bool {
    match Pattern::parse(pattern) {
        Ok(parsed) => parsed.is_match(needle),
        Err(err) => {
            tracing::warn!(%err, "comparing pattern literally");
            needle == pattern
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_patterns() {
        assert!(match_pattern("data-foo", "data-foo"));
        assert!(!match_pattern("data-foo", "data-bar"));
        assert!(match_pattern("//", "//"));
        assert!(!match_pattern("x", "//"));
    }

    #[test]
    fn regex_patterns() {
        assert!(match_pattern("data-foo", "/^data-/"));
        assert!(!match_pattern("aria-foo", "/^data-/"));
        assert!(match_pattern("DATA-foo", "/^data-/i"));
        assert!(match_pattern("a/b", "/a\\/b/"));
    }

    #[test]
    fn unknown_flags_are_literal() {
        assert!(matches!(Pattern::parse("/abc/x"), Ok(Pattern::Literal(_))));
    }

    #[test]
    fn invalid_regex_falls_back_to_literal() {
        assert!(Pattern::parse("/(/").is_err());
        assert!(match_pattern("/(/", "/(/"));
        assert!(!match_pattern("(", "/(/"));
    }
}
