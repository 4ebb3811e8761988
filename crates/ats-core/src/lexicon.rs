//! Word tables that tune extraction and auditing.
//!
//! English-only. The built-in tables can be replaced wholesale or per field from a JSON file:
//!
//! ```json
//! { "noise_terms": ["experience", "team"], "weak_phrases": ["helped"] }
//! ```
//!
//! Fields left out of the file keep their built-in values.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::LexiconError;
use crate::normalize::normalize;

/// Resume boilerplate that never counts as a keyword, whatever its part of speech.
pub const RESUME_NOISE: &[&str] = &[
    "experience",
    "skills",
    "education",
    "summary",
    "responsible",
    "duties",
    "include",
    "worked",
    "helped",
    "team",
    "role",
    "company",
    "work",
    "job",
    "candidate",
    "requirements",
    "year",
    "excellent",
    "strong",
    "proficient",
    "various",
    "ability",
    "remote",
    "hybrid",
];

/// Low-impact phrasing penalized by the health audit. Matched as lowercase substrings.
pub const WEAK_PHRASES: &[&str] = &[
    "responsible for",
    "duties included",
    "helped",
    "worked on",
    "attempted",
];

/// Headers every resume is expected to carry.
pub const REQUIRED_SECTIONS: &[&str] = &["experience", "education", "skills"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    pub noise_terms: Vec<String>,
    pub weak_phrases: Vec<String>,
    pub required_sections: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            noise_terms: to_owned(RESUME_NOISE),
            weak_phrases: to_owned(WEAK_PHRASES),
            required_sections: to_owned(REQUIRED_SECTIONS),
        }
    }
}

impl Lexicon {
    /// Parses a lexicon from JSON. Entries are lowercased and trimmed; blanks are dropped.
    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        let raw: Lexicon = serde_json::from_str(json)?;
        Ok(raw.cleaned())
    }

    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let json = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::from_json(&json)?;
        info!(
            "Loaded lexicon from {} ({} noise terms, {} weak phrases)",
            path.display(),
            lexicon.noise_terms.len(),
            lexicon.weak_phrases.len()
        );
        Ok(lexicon)
    }

    /// Lookup set for the noise stoplist.
    ///
    /// Each term is normalized like document text and contributes every token it
    /// splits into, so `"E-Commerce"` suppresses `commerce`.
    pub fn noise_set(&self) -> HashSet<String> {
        self.noise_terms
            .iter()
            .flat_map(|term| {
                normalize(term)
                    .as_str()
                    .split(' ')
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    fn cleaned(self) -> Self {
        Self {
            noise_terms: clean(self.noise_terms),
            weak_phrases: clean(self.weak_phrases),
            required_sections: clean(self.required_sections),
        }
    }
}

fn to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn clean(words: Vec<String>) -> Vec<String> {
    words
        .into_iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_tables_populated() {
        let lexicon = Lexicon::default();
        assert!(lexicon.noise_terms.contains(&"experience".to_string()));
        assert!(lexicon.weak_phrases.contains(&"worked on".to_string()));
        assert_eq!(lexicon.required_sections.len(), 3);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let lexicon = Lexicon::from_json(r#"{"weak_phrases": ["  Tasked With "]}"#).unwrap();
        assert_eq!(lexicon.weak_phrases, vec!["tasked with".to_string()]);
        assert_eq!(lexicon.noise_terms.len(), RESUME_NOISE.len());
        assert_eq!(lexicon.required_sections.len(), REQUIRED_SECTIONS.len());
    }

    #[test]
    fn test_blank_entries_dropped() {
        let lexicon = Lexicon::from_json(r#"{"noise_terms": ["", "  ", "Synergy"]}"#).unwrap();
        assert_eq!(lexicon.noise_terms, vec!["synergy".to_string()]);
    }

    #[test]
    fn test_noise_set_is_normalized() {
        let lexicon = Lexicon {
            noise_terms: vec!["E-Commerce".to_string(), "Node.JS".to_string()],
            ..Lexicon::default()
        };
        let noise = lexicon.noise_set();
        assert!(noise.contains("commerce"));
        assert!(noise.contains("node"));
        assert!(!noise.contains("e-commerce"));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = Lexicon::from_json("{not json").unwrap_err();
        assert!(matches!(err, LexiconError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"required_sections": ["projects"]}}"#).unwrap();
        let lexicon = Lexicon::load(file.path()).unwrap();
        assert_eq!(lexicon.required_sections, vec!["projects".to_string()]);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Lexicon::load(Path::new("/nonexistent/lexicon.json")).unwrap_err();
        assert!(matches!(err, LexiconError::Io { .. }));
    }
}
