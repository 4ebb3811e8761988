use std::collections::HashSet;
use std::path::Path;

use nlprule::Tokenizer;

use super::{english_stopwords, KeywordBackend};
use crate::error::BackendError;
use crate::normalize::NormalizedText;

/// Penn Treebank tags for common and proper nouns.
const NOUN_TAGS: &[&str] = &["NN", "NNS", "NNP", "NNPS"];

/// Part-of-speech backend backed by an nlprule tokenizer model (`en_tokenizer.bin`).
pub struct TaggerBackend {
    tokenizer: Tokenizer,
    stopwords: HashSet<String>,
}

impl TaggerBackend {
    pub fn load(path: &Path) -> Result<Self, BackendError> {
        if !path.exists() {
            return Err(BackendError::ModelMissing(path.to_path_buf()));
        }
        let tokenizer = Tokenizer::new(path).map_err(|e| BackendError::ModelLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            tokenizer,
            stopwords: english_stopwords(),
        })
    }
}

impl KeywordBackend for TaggerBackend {
    fn name(&self) -> &'static str {
        "tagger"
    }

    fn candidate_tokens(&self, text: &NormalizedText) -> Vec<String> {
        let mut tokens = Vec::new();
        for sentence in self.tokenizer.pipe(text.as_str()) {
            for token in sentence.tokens() {
                let word = token.word();
                let is_noun = word
                    .tags()
                    .iter()
                    .any(|tag| NOUN_TAGS.contains(&tag.pos().as_str()));
                if !is_noun {
                    continue;
                }
                let text = word.text().as_str();
                if self.stopwords.contains(text) {
                    continue;
                }
                tokens.push(text.to_string());
            }
        }
        tokens
    }
}

#[cfg(all(test, feature = "pos-tagger"))]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use std::io::Write;

    /// Tokenizer model for the tagged tests; they are skipped when unset.
    fn model_path() -> Option<std::path::PathBuf> {
        std::env::var_os("ATS_TAGGER_MODEL").map(Into::into)
    }

    #[test]
    fn test_load_missing_model() {
        let result = TaggerBackend::load(Path::new("/nonexistent/en_tokenizer.bin"));
        assert!(matches!(result, Err(BackendError::ModelMissing(_))));
    }

    #[test]
    fn test_load_corrupt_model() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not a tokenizer model").unwrap();
        let result = TaggerBackend::load(file.path());
        assert!(matches!(result, Err(BackendError::ModelLoad { .. })));
    }

    #[test]
    fn test_keeps_nouns_drops_verbs_and_adjectives() {
        let Some(path) = model_path() else {
            eprintln!("ATS_TAGGER_MODEL not set, skipping");
            return;
        };
        let backend = TaggerBackend::load(&path).unwrap();
        let tokens = backend.candidate_tokens(&normalize("The engineers deployed scalable clusters"));
        assert!(tokens.contains(&"engineers".to_string()));
        assert!(tokens.contains(&"clusters".to_string()));
        assert!(!tokens.contains(&"deployed".to_string()));
        assert!(!tokens.contains(&"scalable".to_string()));
        // "the" is a stopword and never a noun
        assert!(!tokens.contains(&"the".to_string()));
    }
}
