use std::path::PathBuf;

use anyhow::{Context, Result};
use ats_core::EngineSettings;

/// Service configuration loaded from environment variables (and `.env` when present).
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Part-of-speech tokenizer model; unset keeps the plain tokenizer backend.
    pub tagger_model: Option<PathBuf>,
    /// JSON override for noise terms, weak phrases and required sections.
    pub lexicon_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            tagger_model: optional_path("ATS_TAGGER_MODEL"),
            lexicon_path: optional_path("ATS_LEXICON_PATH"),
        })
    }

    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            tagger_model: self.tagger_model.clone(),
            lexicon_path: self.lexicon_path.clone(),
        }
    }
}

fn optional_path(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
