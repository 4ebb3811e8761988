//! General Health Auditor: best-practice checks on raw resume text, no JD needed.
//!
//! Score starts at 100 and each failed rule deducts a fixed penalty:
//!
//! | rule            | penalty |
//! |-----------------|---------|
//! | email present   | 20      |
//! | digits present  | 20      |
//! | no weak phrases | 15      |
//! | word count      | 10      |
//! | sections        | 15      |
//!
//! Every rule yields exactly one issue or one strength, in the order above.

use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;

pub const EMAIL_PENALTY: u32 = 20;
pub const QUANTIFICATION_PENALTY: u32 = 20;
pub const WEAK_LANGUAGE_PENALTY: u32 = 15;
pub const LENGTH_PENALTY: u32 = 10;
pub const SECTIONS_PENALTY: u32 = 15;

pub const MIN_WORDS: usize = 200;
pub const MAX_WORDS: usize = 2000;

const MAX_SCORE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    pub score: u32,
    pub issues: Vec<String>,
    pub strengths: Vec<String>,
}

/// Accumulates rule outcomes in evaluation order.
struct Audit {
    penalty: u32,
    issues: Vec<String>,
    strengths: Vec<String>,
}

impl Audit {
    fn new() -> Self {
        Self {
            penalty: 0,
            issues: Vec::new(),
            strengths: Vec::new(),
        }
    }

    fn fail(&mut self, penalty: u32, issue: String) {
        self.penalty += penalty;
        self.issues.push(issue);
    }

    fn pass(&mut self, strength: &str) {
        self.strengths.push(strength.to_string());
    }

    fn finish(self) -> HealthReport {
        HealthReport {
            score: MAX_SCORE.saturating_sub(self.penalty),
            issues: self.issues,
            strengths: self.strengths,
        }
    }
}

pub fn audit(resume_text: &str, lexicon: &Lexicon) -> HealthReport {
    if resume_text.trim().is_empty() {
        return blank_report(lexicon);
    }

    let text_lower = resume_text.to_lowercase();
    let mut audit = Audit::new();

    // 1. Contact
    if text_lower.contains('@') {
        audit.pass("Email detected");
    } else {
        audit.fail(EMAIL_PENALTY, "Missing email address".to_string());
    }

    // 2. Quantification
    if resume_text.chars().any(|c| c.is_ascii_digit()) {
        audit.pass("Phone number or metrics detected");
    } else {
        audit.fail(
            QUANTIFICATION_PENALTY,
            "No phone number or metrics found".to_string(),
        );
    }

    // 3. Weak language
    let weak_phrases = lowered(&lexicon.weak_phrases);
    let found_weak: Vec<&str> = weak_phrases
        .iter()
        .map(String::as_str)
        .filter(|phrase| text_lower.contains(phrase))
        .collect();
    if found_weak.is_empty() {
        audit.pass("Strong action verbs used");
    } else {
        audit.fail(
            WEAK_LANGUAGE_PENALTY,
            format!("Weak words detected: {}", found_weak.join(", ")),
        );
    }

    // 4. Length
    let word_count = resume_text.split_whitespace().count();
    if word_count < MIN_WORDS {
        audit.fail(LENGTH_PENALTY, too_short_issue());
    } else if word_count > MAX_WORDS {
        audit.fail(
            LENGTH_PENALTY,
            format!("Resume is too long (over {MAX_WORDS} words)"),
        );
    } else {
        audit.pass("Optimal word count");
    }

    // 5. Sections
    let required_sections = lowered(&lexicon.required_sections);
    let missing: Vec<&str> = required_sections
        .iter()
        .map(String::as_str)
        .filter(|section| !text_lower.contains(section))
        .collect();
    if missing.is_empty() {
        audit.pass("All required sections present");
    } else {
        audit.fail(SECTIONS_PENALTY, missing_sections_issue(&missing));
    }

    audit.finish()
}

/// Nothing to inspect: every rule fails and the score bottoms out at 0.
fn blank_report(lexicon: &Lexicon) -> HealthReport {
    let required_sections = lowered(&lexicon.required_sections);
    let sections: Vec<&str> = required_sections.iter().map(String::as_str).collect();
    let mut issues = vec![
        "Missing email address".to_string(),
        "No phone number or metrics found".to_string(),
        "No action verbs found".to_string(),
        too_short_issue(),
    ];
    if !sections.is_empty() {
        issues.push(missing_sections_issue(&sections));
    }
    HealthReport {
        score: 0,
        issues,
        strengths: Vec::new(),
    }
}

/// Lexicon entries as matched against lowercased text; blank entries never match.
fn lowered(entries: &[String]) -> Vec<String> {
    entries
        .iter()
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

fn too_short_issue() -> String {
    format!("Resume is too short (under {MIN_WORDS} words)")
}

fn missing_sections_issue(sections: &[&str]) -> String {
    let names: Vec<String> = sections.iter().map(|s| title_case(s)).collect();
    format!("Missing sections: {}", names.join(", "))
}

fn title_case(word: &str) -> String {
    word.split(' ')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> HealthReport {
        audit(text, &Lexicon::default())
    }

    /// Header block plus `filler` words of strong, quantified content.
    fn resume_with_words(total_words: usize) -> String {
        let header = "Jane Doe jane@example.com 410-555-0199 Experience Education Skills";
        let header_words = header.split_whitespace().count();
        let filler: Vec<&str> = ["Delivered", "scalable", "platform", "services"]
            .iter()
            .copied()
            .cycle()
            .take(total_words - header_words)
            .collect();
        format!("{header}\n{}", filler.join(" "))
    }

    #[test]
    fn test_perfect_resume_scores_100() {
        let text = resume_with_words(250);
        assert_eq!(text.split_whitespace().count(), 250);
        let report = run(&text);
        assert_eq!(report.score, 100);
        assert!(report.issues.is_empty(), "issues: {:?}", report.issues);
        assert_eq!(report.strengths.len(), 5);
    }

    #[test]
    fn test_all_penalties_applied() {
        let report = run("worked on stuff, responsible for tasks");
        assert_eq!(report.score, 20);
        assert_eq!(report.issues.len(), 5);
        assert!(report.strengths.is_empty());
    }

    #[test]
    fn test_weak_words_listed_in_table_order() {
        let report = run("Worked on things. Helped people. Responsible for stuff.");
        let weak = report
            .issues
            .iter()
            .find(|i| i.starts_with("Weak words"))
            .unwrap();
        assert_eq!(weak, "Weak words detected: responsible for, helped, worked on");
    }

    #[test]
    fn test_too_long_penalized_once() {
        let text = resume_with_words(2001);
        let report = run(&text);
        assert_eq!(report.score, 90);
        assert_eq!(report.issues, vec!["Resume is too long (over 2000 words)".to_string()]);
    }

    #[test]
    fn test_length_boundaries_inclusive() {
        assert_eq!(run(&resume_with_words(200)).score, 100);
        assert_eq!(run(&resume_with_words(2000)).score, 100);
        assert_eq!(run(&resume_with_words(199)).score, 90);
    }

    #[test]
    fn test_missing_sections_penalized_once() {
        let report = run("jane@example.com 555 Rust engineer");
        let section_issue = report.issues.last().unwrap();
        assert_eq!(section_issue, "Missing sections: Experience, Education, Skills");
        // email ok, digits ok, no weak words: -10 length, -15 sections
        assert_eq!(report.score, 75);
    }

    #[test]
    fn test_section_match_is_case_insensitive_substring() {
        let report = run("PROFESSIONAL EXPERIENCE / Education: BSc / Technical Skills");
        assert!(!report.issues.iter().any(|i| i.starts_with("Missing sections")));
    }

    #[test]
    fn test_non_digit_numerals_are_not_metrics() {
        let report = run("Led ½ of launches, Ⅻ releases. Experience Education Skills me@x.io");
        assert!(report
            .issues
            .contains(&"No phone number or metrics found".to_string()));
        assert!(!report
            .strengths
            .contains(&"Phone number or metrics detected".to_string()));
    }

    #[test]
    fn test_hand_built_lexicon_matches_case_insensitively() {
        let lexicon = Lexicon {
            weak_phrases: vec!["Tasked With".to_string(), "  ".to_string()],
            required_sections: vec!["Projects".to_string()],
            ..Lexicon::default()
        };
        let report = audit("tasked with projects, me@x.io 42", &lexicon);
        assert!(report
            .issues
            .contains(&"Weak words detected: tasked with".to_string()));
        assert!(report
            .strengths
            .contains(&"All required sections present".to_string()));
    }

    #[test]
    fn test_blank_input_scores_zero_with_five_issues() {
        for text in ["", "   \n\t"] {
            let report = run(text);
            assert_eq!(report.score, 0);
            assert_eq!(report.issues.len(), 5);
            assert!(report.strengths.is_empty());
        }
    }

    #[test]
    fn test_custom_lexicon_sections() {
        let lexicon = Lexicon {
            required_sections: vec!["projects".to_string()],
            ..Lexicon::default()
        };
        let report = audit("jane@example.com 555", &lexicon);
        assert!(report
            .issues
            .contains(&"Missing sections: Projects".to_string()));
    }

    #[test]
    fn test_title_case_multiword() {
        assert_eq!(title_case("work history"), "Work History");
    }
}
