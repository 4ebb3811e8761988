//! Text normalizer: lowercase, strip everything outside `[a-z0-9\s]`, collapse whitespace.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static NON_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s]").expect("static pattern compiles"));
static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("static pattern compiles"));

/// Lowercase, punctuation-free, single-spaced text derived from a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalizes raw text. Empty input yields empty output.
pub fn normalize(text: &str) -> NormalizedText {
    if text.is_empty() {
        return NormalizedText::default();
    }
    let lowered = text.to_lowercase();
    let stripped = NON_TEXT.replace_all(&lowered, " ");
    let collapsed = WHITESPACE_RUN.replace_all(&stripped, " ");
    NormalizedText(collapsed.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stays_empty() {
        assert!(normalize("").is_empty());
    }

    #[test]
    fn test_punctuation_becomes_single_space() {
        assert_eq!(
            normalize("  Python, AWS & Docker!!  ").as_str(),
            "python aws docker"
        );
    }

    #[test]
    fn test_digits_kept() {
        assert_eq!(normalize("5+ Years").as_str(), "5 years");
    }

    #[test]
    fn test_non_ascii_letters_stripped() {
        assert_eq!(normalize("Café résumé").as_str(), "caf r sum");
    }

    #[test]
    fn test_newlines_and_tabs_collapse() {
        assert_eq!(normalize("skills:\n\tRust\r\nGo").as_str(), "skills rust go");
    }

    #[test]
    fn test_punctuation_only_is_empty() {
        assert!(normalize("--- !!! ***").is_empty());
    }
}
