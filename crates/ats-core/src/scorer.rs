//! Similarity Scorer: cosine similarity between two keyword sets, as a 0–100 percentage.
//!
//! Each `KeywordSet` is treated as one document. A count vectorizer builds the union
//! vocabulary over both documents and one term-frequency vector per document.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::error::ScoreError;
use crate::extractor::KeywordSet;

/// Countable term: two or more word characters.
static TERM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("static pattern compiles"));

/// Similarity percentage in [0, 100], one decimal place.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct MatchScore(f64);

impl MatchScore {
    pub const ZERO: MatchScore = MatchScore(0.0);

    /// Scales a [0, 1] similarity to a percentage rounded to one decimal.
    pub fn from_similarity(similarity: f64) -> Self {
        let pct = (similarity * 100.0).clamp(0.0, 100.0);
        MatchScore((pct * 10.0).round() / 10.0)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Term-frequency vectors for exactly two documents over their shared vocabulary.
#[derive(Debug, Clone)]
pub struct TermVectors {
    vocabulary: BTreeMap<String, usize>,
    left: Vec<u32>,
    right: Vec<u32>,
}

impl TermVectors {
    pub fn fit(left: &str, right: &str) -> Result<Self, ScoreError> {
        let left_terms = terms(left);
        let right_terms = terms(right);

        let mut vocabulary = BTreeMap::new();
        for term in left_terms.iter().chain(right_terms.iter()) {
            vocabulary.entry(term.clone()).or_insert(0);
        }
        if vocabulary.is_empty() {
            return Err(ScoreError::EmptyVocabulary);
        }
        for (idx, slot) in vocabulary.values_mut().enumerate() {
            *slot = idx;
        }

        let left = count(&vocabulary, &left_terms);
        let right = count(&vocabulary, &right_terms);
        Ok(Self {
            vocabulary,
            left,
            right,
        })
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn cosine(&self) -> Result<f64, ScoreError> {
        cosine_similarity(&self.left, &self.right)
    }
}

fn terms(document: &str) -> Vec<String> {
    let lowered = document.to_lowercase();
    TERM.find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

fn count(vocabulary: &BTreeMap<String, usize>, terms: &[String]) -> Vec<u32> {
    let mut vector = vec![0u32; vocabulary.len()];
    for term in terms {
        if let Some(&idx) = vocabulary.get(term) {
            vector[idx] += 1;
        }
    }
    vector
}

/// `dot(a, b) / (|a| * |b|)`. Fails on a zero-magnitude vector.
pub fn cosine_similarity(a: &[u32], b: &[u32]) -> Result<f64, ScoreError> {
    let dot: f64 = a.iter().zip(b).map(|(&x, &y)| x as f64 * y as f64).sum();
    let norm_a = a.iter().map(|&x| (x as f64).powi(2)).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|&x| (x as f64).powi(2)).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return Err(ScoreError::ZeroMagnitude);
    }
    Ok(dot / (norm_a * norm_b))
}

/// Cosine similarity as a `Result`, keeping the degenerate cases distinguishable.
pub fn try_score(resume: &KeywordSet, jd: &KeywordSet) -> Result<MatchScore, ScoreError> {
    let vectors = TermVectors::fit(&resume.as_document(), &jd.as_document())?;
    Ok(MatchScore::from_similarity(vectors.cosine()?))
}

/// Total scoring entry point: any degenerate input scores exactly 0.
pub fn score(resume: &KeywordSet, jd: &KeywordSet) -> MatchScore {
    if resume.is_empty() || jd.is_empty() {
        return MatchScore::ZERO;
    }
    match try_score(resume, jd) {
        Ok(score) => score,
        Err(e) => {
            debug!("Scoring degenerate, returning 0: {e}");
            MatchScore::ZERO
        }
    }
}
