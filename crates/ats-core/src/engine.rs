//! Engine: lexicon + selected keyword backend, and the process-wide shared instance.

use std::path::PathBuf;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::audit::{self, HealthReport};
use crate::error::EngineError;
use crate::extractor::{select_backend, KeywordBackend, KeywordExtractor, KeywordSet};
use crate::gap::gap;
use crate::lexicon::Lexicon;
use crate::normalize::normalize;
use crate::scorer::{self, MatchScore};

static SHARED: OnceCell<AtsEngine> = OnceCell::new();

/// Where the engine's optional external resources live.
#[derive(Debug, Clone, Default)]
pub struct EngineSettings {
    /// Part-of-speech tokenizer model. `None` selects the plain backend.
    pub tagger_model: Option<PathBuf>,
    /// JSON lexicon override. `None` keeps the built-in English tables.
    pub lexicon_path: Option<PathBuf>,
}

/// Result of comparing a resume with a job description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub match_score: f64,
    pub common_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
}

/// Stateless scoring engine. Cheap to clone; safe to share across threads.
#[derive(Debug, Clone)]
pub struct AtsEngine {
    lexicon: Arc<Lexicon>,
    extractor: KeywordExtractor,
}

impl AtsEngine {
    pub fn new(lexicon: Lexicon, backend: Arc<dyn KeywordBackend>) -> Self {
        let extractor = KeywordExtractor::new(backend, &lexicon);
        Self {
            lexicon: Arc::new(lexicon),
            extractor,
        }
    }

    /// Loads the lexicon (errors propagate) and selects a backend (errors fall back).
    pub fn build(settings: &EngineSettings) -> Result<Self, EngineError> {
        let lexicon = match &settings.lexicon_path {
            Some(path) => Lexicon::load(path)?,
            None => Lexicon::default(),
        };
        let backend = select_backend(settings.tagger_model.as_deref());
        Ok(Self::new(lexicon, backend))
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn backend_name(&self) -> &'static str {
        self.extractor.backend_name()
    }

    /// Normalizes raw text and extracts its keyword set.
    pub fn extract_keywords(&self, text: &str) -> KeywordSet {
        self.extractor.extract(&normalize(text))
    }

    pub fn score(&self, resume: &KeywordSet, jd: &KeywordSet) -> MatchScore {
        scorer::score(resume, jd)
    }

    pub fn compare(&self, resume_text: &str, jd_text: &str) -> ComparisonReport {
        if resume_text.is_empty() || jd_text.is_empty() {
            return ComparisonReport::default();
        }
        let resume = self.extract_keywords(resume_text);
        let jd = self.extract_keywords(jd_text);
        let keyword_gap = gap(&resume, &jd);
        ComparisonReport {
            match_score: self.score(&resume, &jd).value(),
            common_keywords: keyword_gap.common,
            missing_keywords: keyword_gap.missing,
        }
    }

    pub fn audit_resume(&self, resume_text: &str) -> HealthReport {
        audit::audit(resume_text, &self.lexicon)
    }
}

impl Default for AtsEngine {
    fn default() -> Self {
        Self::new(Lexicon::default(), select_backend(None))
    }
}

/// Builds the shared engine from `settings` and installs it. Succeeds at most once per process.
pub fn install(settings: &EngineSettings) -> Result<&'static AtsEngine, EngineError> {
    let engine = AtsEngine::build(settings)?;
    SHARED
        .set(engine)
        .map_err(|_| EngineError::AlreadyInstalled)?;
    let shared = shared();
    info!("ATS engine installed (backend: {})", shared.backend_name());
    Ok(shared)
}

/// The shared engine; a default one is built on first use if none was installed.
pub fn shared() -> &'static AtsEngine {
    SHARED.get_or_init(AtsEngine::default)
}
