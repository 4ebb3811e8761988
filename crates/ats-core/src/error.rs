use std::path::PathBuf;

use thiserror::Error;

/// Why a keyword backend could not be brought up.
/// Never reaches callers of the scoring API: the engine falls back to the plain tokenizer.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("part-of-speech tagger support is not compiled in (enable the `pos-tagger` feature)")]
    TaggerNotCompiled,

    #[error("tagger model not found at {0}")]
    ModelMissing(PathBuf),

    #[error("failed to load tagger model from {path}: {reason}")]
    ModelLoad { path: PathBuf, reason: String },
}

/// Degenerate vector spaces. Recovered as a score of 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("empty vocabulary: neither document contains a countable term")]
    EmptyVocabulary,

    #[error("zero-magnitude term vector")]
    ZeroMagnitude,
}

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid lexicon JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("the shared ATS engine is already installed")]
    AlreadyInstalled,

    #[error(transparent)]
    Lexicon(#[from] LexiconError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("no translation dictionary for industry '{0}'")]
    UnknownIndustry(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssembleError {
    #[error("no bullet points found for role '{0}'")]
    NoBulletsForRole(String),
}
