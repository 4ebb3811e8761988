use std::collections::HashSet;

use unicode_segmentation::UnicodeSegmentation;

use super::{english_stopwords, KeywordBackend};
use crate::normalize::NormalizedText;

/// Fallback backend: word-boundary tokens that are purely alphabetic and not stopwords.
pub struct PlainBackend {
    stopwords: HashSet<String>,
}

impl PlainBackend {
    pub fn new() -> Self {
        Self {
            stopwords: english_stopwords(),
        }
    }
}

impl Default for PlainBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordBackend for PlainBackend {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn candidate_tokens(&self, text: &NormalizedText) -> Vec<String> {
        text.as_str()
            .unicode_words()
            .filter(|w| w.chars().all(char::is_alphabetic))
            .filter(|w| !self.stopwords.contains(*w))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn tokens(text: &str) -> Vec<String> {
        PlainBackend::new().candidate_tokens(&normalize(text))
    }

    #[test]
    fn test_stopwords_removed() {
        let t = tokens("the python and the docker");
        assert!(t.contains(&"python".to_string()));
        assert!(t.contains(&"docker".to_string()));
        assert!(!t.contains(&"the".to_string()));
        assert!(!t.contains(&"and".to_string()));
    }

    #[test]
    fn test_alphanumeric_tokens_removed() {
        let t = tokens("k8s 2024 python3 rust");
        assert_eq!(t, vec!["rust".to_string()]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokens("").is_empty());
    }
}
