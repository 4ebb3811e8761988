//! Keyword Extractor: turns normalized text into a `KeywordSet`.
//!
//! Tokenization is pluggable through `KeywordBackend`:
//! - `PlainBackend` (always available): Unicode word split + English stopwords.
//! - `TaggerBackend` (`pos-tagger` feature): keeps nouns and proper nouns only.
//!
//! The backend is chosen once when the engine is built. Both backends feed the same
//! shared filter (minimum length, noise stoplist), so their output is comparable but
//! not guaranteed identical.

mod plain;
#[cfg(feature = "pos-tagger")]
mod tagger;

use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::error::BackendError;
use crate::lexicon::Lexicon;
use crate::normalize::NormalizedText;

pub use plain::PlainBackend;
#[cfg(feature = "pos-tagger")]
pub use tagger::TaggerBackend;

/// Shortest token (in characters) that can be a keyword.
pub const MIN_KEYWORD_LEN: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// KeywordSet
// ────────────────────────────────────────────────────────────────────────────

/// Deduplicated keywords of one document, iterated in lexicographic order.
///
/// Members are always trimmed, lowercase and at least `MIN_KEYWORD_LEN` characters;
/// collecting into a `KeywordSet` enforces this.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct KeywordSet(BTreeSet<String>);

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.0.contains(keyword)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn intersection<'a>(&'a self, other: &'a KeywordSet) -> impl Iterator<Item = &'a str> {
        self.0.intersection(&other.0).map(String::as_str)
    }

    pub fn difference<'a>(&'a self, other: &'a KeywordSet) -> impl Iterator<Item = &'a str> {
        self.0.difference(&other.0).map(String::as_str)
    }

    /// Members joined by single spaces, used as a one-line document for vectorizing.
    pub fn as_document(&self) -> String {
        self.iter().collect::<Vec<_>>().join(" ")
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|s| s.into().trim().to_lowercase())
                .filter(|s| s.chars().count() >= MIN_KEYWORD_LEN)
                .collect(),
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Backend trait
// ────────────────────────────────────────────────────────────────────────────

/// One capability: pull candidate keyword tokens out of normalized text.
///
/// Implementations apply their own grammatical filter (part of speech or stopwords);
/// length and noise filtering happen afterwards in `KeywordExtractor`.
pub trait KeywordBackend: Send + Sync {
    /// Short label surfaced in logs and API responses ("tagger" | "plain").
    fn name(&self) -> &'static str;

    fn candidate_tokens(&self, text: &NormalizedText) -> Vec<String>;
}

/// Picks the tagger when a model path is configured and loads, else the plain backend.
pub fn select_backend(tagger_model: Option<&Path>) -> Arc<dyn KeywordBackend> {
    let Some(path) = tagger_model else {
        info!("No tagger model configured, using plain tokenizer backend");
        return Arc::new(PlainBackend::new());
    };

    match load_tagger(path) {
        Ok(backend) => {
            info!("Keyword backend: part-of-speech tagger ({})", path.display());
            backend
        }
        Err(e) => {
            warn!("Tagger backend unavailable, falling back to plain tokenizer: {e}");
            Arc::new(PlainBackend::new())
        }
    }
}

#[cfg(feature = "pos-tagger")]
fn load_tagger(path: &Path) -> Result<Arc<dyn KeywordBackend>, BackendError> {
    Ok(Arc::new(TaggerBackend::load(path)?))
}

#[cfg(not(feature = "pos-tagger"))]
fn load_tagger(_path: &Path) -> Result<Arc<dyn KeywordBackend>, BackendError> {
    Err(BackendError::TaggerNotCompiled)
}

/// English grammatical stopwords shared by both backends.
pub(crate) fn english_stopwords() -> HashSet<String> {
    stop_words::get(stop_words::LANGUAGE::English)
        .iter()
        .map(|w| w.to_string().to_lowercase())
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Extractor
// ────────────────────────────────────────────────────────────────────────────

/// Backend plus the shared noise/length filter.
#[derive(Clone)]
pub struct KeywordExtractor {
    backend: Arc<dyn KeywordBackend>,
    noise: Arc<HashSet<String>>,
}

impl KeywordExtractor {
    pub fn new(backend: Arc<dyn KeywordBackend>, lexicon: &Lexicon) -> Self {
        Self {
            backend,
            noise: Arc::new(lexicon.noise_set()),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    pub fn extract(&self, text: &NormalizedText) -> KeywordSet {
        if text.is_empty() {
            return KeywordSet::new();
        }
        self.backend
            .candidate_tokens(text)
            .into_iter()
            .filter(|t| t.chars().count() >= MIN_KEYWORD_LEN)
            .filter(|t| !self.noise.contains(t))
            .collect()
    }
}

impl std::fmt::Debug for KeywordExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeywordExtractor")
            .field("backend", &self.backend.name())
            .field("noise_terms", &self.noise.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    /// Whitespace splitter with no grammatical filtering, to isolate the shared filter.
    struct SplitBackend;

    impl KeywordBackend for SplitBackend {
        fn name(&self) -> &'static str {
            "split"
        }

        fn candidate_tokens(&self, text: &NormalizedText) -> Vec<String> {
            text.as_str().split(' ').map(str::to_string).collect()
        }
    }

    fn split_extractor() -> KeywordExtractor {
        KeywordExtractor::new(Arc::new(SplitBackend), &Lexicon::default())
    }

    #[test]
    fn test_short_tokens_dropped() {
        let set = split_extractor().extract(&normalize("go ai sql rust"));
        assert_eq!(set.to_vec(), vec!["rust".to_string(), "sql".to_string()]);
    }

    #[test]
    fn test_noise_terms_dropped() {
        let set = split_extractor().extract(&normalize("Team Experience Kubernetes"));
        assert_eq!(set.to_vec(), vec!["kubernetes".to_string()]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let set = split_extractor().extract(&normalize("rust Rust RUST"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_empty_text_yields_empty_set() {
        assert!(split_extractor().extract(&normalize("")).is_empty());
    }

    #[test]
    fn test_custom_noise_from_lexicon() {
        let lexicon = Lexicon {
            noise_terms: vec!["synergy".to_string()],
            ..Lexicon::default()
        };
        let extractor = KeywordExtractor::new(Arc::new(SplitBackend), &lexicon);
        let set = extractor.extract(&normalize("synergy experience"));
        // "experience" is only noise in the built-in table
        assert_eq!(set.to_vec(), vec!["experience".to_string()]);
    }

    #[test]
    fn test_punctuated_noise_term_matches_normalized_tokens() {
        let lexicon = Lexicon {
            noise_terms: vec!["E-Commerce".to_string()],
            ..Lexicon::default()
        };
        let extractor = KeywordExtractor::new(Arc::new(SplitBackend), &lexicon);
        let set = extractor.extract(&normalize("E-commerce platform"));
        assert_eq!(set.to_vec(), vec!["platform".to_string()]);
    }

    #[test]
    fn test_keyword_set_document_is_sorted_and_space_joined() {
        let set: KeywordSet = ["docker", "aws", "python"].into_iter().collect();
        assert_eq!(set.as_document(), "aws docker python");
    }

    #[test]
    fn test_keyword_set_lowercases_and_drops_short_members() {
        let set: KeywordSet = [" Python ", "PYTHON", "go", "Kubernetes"].into_iter().collect();
        assert_eq!(set.to_vec(), vec!["kubernetes".to_string(), "python".to_string()]);
    }

    #[test]
    fn test_score_and_gap_agree_on_mixed_case_sets() {
        let resume: KeywordSet = ["Python", "Docker"].into_iter().collect();
        let jd: KeywordSet = ["python", "docker"].into_iter().collect();
        assert_eq!(crate::scorer::score(&resume, &jd).value(), 100.0);
        let g = crate::gap::gap(&resume, &jd);
        assert_eq!(g.common, vec!["docker", "python"]);
        assert!(g.missing.is_empty());
    }

    #[test]
    fn test_short_only_sets_score_zero() {
        let set: KeywordSet = ["go"].into_iter().collect();
        assert!(set.is_empty());
        assert_eq!(crate::scorer::score(&set, &set).value(), 0.0);
    }

    #[test]
    fn test_missing_model_falls_back_to_plain() {
        let backend = select_backend(Some(Path::new("/nonexistent/en_tokenizer.bin")));
        assert_eq!(backend.name(), "plain");
    }

    #[test]
    fn test_no_model_selects_plain() {
        assert_eq!(select_backend(None).name(), "plain");
    }
}
