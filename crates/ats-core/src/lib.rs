//! ATS core: keyword extraction, resume/JD similarity scoring and resume health auditing.
//!
//! Pipeline: raw text → `normalize` → `KeywordExtractor` → (`scorer` + `gap`) when a job
//! description is present, or raw text → `audit` when it is not.
//!
//! Every entry point is total: empty or malformed text produces a zero/empty result,
//! never an error. The free functions below run on the process-wide engine; construct an
//! `AtsEngine` directly to inject a lexicon or backend instead.

pub mod advice;
pub mod audit;
pub mod clusters;
pub mod engine;
pub mod error;
pub mod extractor;
pub mod fragments;
pub mod gap;
pub mod lexicon;
pub mod normalize;
pub mod scorer;
pub mod sections;
pub mod translator;

pub use audit::HealthReport;
pub use engine::{install, shared as engine, AtsEngine, ComparisonReport, EngineSettings};
pub use error::{AssembleError, BackendError, EngineError, LexiconError, ScoreError, TranslateError};
pub use extractor::{KeywordBackend, KeywordSet};
pub use gap::{gap, KeywordGap};
pub use lexicon::Lexicon;
pub use normalize::{normalize, NormalizedText};
pub use scorer::{score, MatchScore};

/// Keywords of `text`, using the shared engine's backend and lexicon.
pub fn extract_keywords(text: &str) -> KeywordSet {
    engine().extract_keywords(text)
}

/// Match score plus common/missing keywords of a resume against a job description.
pub fn compare(resume_text: &str, jd_text: &str) -> ComparisonReport {
    engine().compare(resume_text, jd_text)
}

/// Best-practice health check of a resume on its own.
pub fn audit_resume(resume_text: &str) -> HealthReport {
    engine().audit_resume(resume_text)
}
