//! Fragment assembly: builds a role-targeted resume from a library of tagged fragments.
//!
//! The library is plain data supplied by the caller (for example a JSON file kept
//! alongside the resume); nothing is stored here.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::AssembleError;

/// Skill group merged into every role.
pub const SHARED_SKILL_GROUP: &str = "TECH";

const PLACEHOLDER_SUMMARY: &str = "Professional Summary...";

/// Glyphs stripped from the start of a bullet before rendering.
const BULLET_GLYPHS: &[char] = &['•', '-', '–', '*', '?', ' '];

/// One experience bullet and the roles (domains) it supports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    pub text: String,
    #[serde(default)]
    pub domains: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FragmentLibrary {
    /// Role → summary paragraph.
    pub summary: BTreeMap<String, String>,
    pub experience: Vec<Fragment>,
    /// Role (or `TECH`) → skills.
    pub skills: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssembledResume {
    pub role: String,
    pub summary: String,
    pub bullets: Vec<String>,
    pub skills: Vec<String>,
}

impl FragmentLibrary {
    /// Picks the role's summary, bullets and skills. Roles match tags case-insensitively.
    pub fn assemble(&self, role: &str) -> Result<AssembledResume, AssembleError> {
        let bullets: Vec<String> = self
            .experience
            .iter()
            .filter(|f| f.domains.iter().any(|d| d.trim().eq_ignore_ascii_case(role)))
            .map(|f| clean_bullet(&f.text))
            .filter(|b| !b.is_empty())
            .collect();
        if bullets.is_empty() {
            return Err(AssembleError::NoBulletsForRole(role.to_string()));
        }

        Ok(AssembledResume {
            role: role.to_string(),
            summary: self.summary_for(role),
            bullets,
            skills: self.skills_for(role),
        })
    }

    /// Role summary, else the first available one, else a placeholder.
    fn summary_for(&self, role: &str) -> String {
        lookup(&self.summary, role)
            .filter(|s| !s.is_empty())
            .or_else(|| self.summary.values().next())
            .cloned()
            .unwrap_or_else(|| PLACEHOLDER_SUMMARY.to_string())
    }

    fn skills_for(&self, role: &str) -> Vec<String> {
        let mut groups = vec![role];
        if !role.eq_ignore_ascii_case(SHARED_SKILL_GROUP) {
            groups.push(SHARED_SKILL_GROUP);
        }
        let merged: BTreeSet<&String> = groups
            .into_iter()
            .filter_map(|g| lookup(&self.skills, g))
            .flatten()
            .collect();
        merged.into_iter().cloned().collect()
    }
}

impl AssembledResume {
    /// Plain-text rendering with Summary / Experience / Skills headers.
    pub fn to_text(&self) -> String {
        let mut out = format!("Professional Summary\n{}\n\nProfessional Experience\n", self.summary);
        for bullet in &self.bullets {
            out.push_str(&format!("• {bullet}\n"));
        }
        out.push_str(&format!("\nSkills & Tools\n{}\n", self.skills.join(" | ")));
        out
    }
}

fn lookup<'a, V>(map: &'a BTreeMap<String, V>, role: &str) -> Option<&'a V> {
    map.get(role).or_else(|| {
        map.iter()
            .find(|(key, _)| key.trim().eq_ignore_ascii_case(role))
            .map(|(_, value)| value)
    })
}

fn clean_bullet(text: &str) -> String {
    text.trim_start_matches(BULLET_GLYPHS).trim_end().to_string()
}
