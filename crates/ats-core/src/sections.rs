//! Splits plain resume text into contact details and the four standard sections.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w.-]+@[\w.-]+").expect("static pattern compiles"));
static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").expect("static pattern compiles")
});

/// Lines scanned for the candidate's name.
const NAME_SCAN_LINES: usize = 5;
const MAX_NAME_LEN: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Summary,
    Skills,
    Experience,
    Education,
}

/// Header lines (lowercased, optional trailing colon) that open each section.
const SECTION_MARKERS: &[(Section, &[&str])] = &[
    (
        Section::Summary,
        &["professional summary", "profile", "summary", "objective"],
    ),
    (
        Section::Skills,
        &["skills", "competencies", "technologies", "core competencies"],
    ),
    (
        Section::Experience,
        &["experience", "work history", "employment", "professional experience"],
    ),
    (
        Section::Education,
        &["education", "academic", "university", "college"],
    ),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeSections {
    pub summary: String,
    pub skills: String,
    pub experience: String,
    pub education: String,
}

impl ResumeSections {
    fn slot(&mut self, section: Section) -> &mut String {
        match section {
            Section::Summary => &mut self.summary,
            Section::Skills => &mut self.skills,
            Section::Experience => &mut self.experience,
            Section::Education => &mut self.education,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub contact: ContactInfo,
    pub sections: ResumeSections,
}

impl ParsedResume {
    /// Plain-text rendering suitable for auditing or comparison.
    pub fn to_text(&self) -> String {
        let mut out = format!(
            "{}\n{} | {}\n",
            self.contact.name, self.contact.email, self.contact.phone
        );
        let blocks = [
            ("Summary", &self.sections.summary),
            ("Skills", &self.sections.skills),
            ("Experience", &self.sections.experience),
            ("Education", &self.sections.education),
        ];
        for (header, body) in blocks {
            if !body.is_empty() {
                out.push_str(&format!("\n{header}:\n{body}\n"));
            }
        }
        out
    }
}

pub fn parse_resume(text: &str) -> ParsedResume {
    ParsedResume {
        contact: parse_contact_info(text),
        sections: parse_sections(text),
    }
}

pub fn parse_contact_info(text: &str) -> ContactInfo {
    let name = text
        .lines()
        .take(NAME_SCAN_LINES)
        .find(|line| !line.trim().is_empty() && line.chars().count() < MAX_NAME_LEN)
        .map(|line| line.trim().to_string())
        .unwrap_or_default();

    ContactInfo {
        name,
        email: first_match(&EMAIL, text),
        phone: first_match(&PHONE, text),
        linkedin: text.to_lowercase().contains("linkedin"),
    }
}

fn first_match(pattern: &Regex, text: &str) -> String {
    pattern
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

fn header_section(line: &str) -> Option<Section> {
    let clean = line.trim().to_lowercase();
    let bare = clean.strip_suffix(':').unwrap_or(clean.as_str()).trim();
    SECTION_MARKERS
        .iter()
        .find(|(_, markers)| markers.contains(&clean.as_str()) || markers.contains(&bare))
        .map(|(section, _)| *section)
}

/// Assigns each line to the most recent section header. Lines before the first header are dropped.
pub fn parse_sections(text: &str) -> ResumeSections {
    let mut sections = ResumeSections::default();
    let mut current: Option<Section> = None;
    let mut buffer: Vec<&str> = Vec::new();

    for line in text.lines() {
        if let Some(section) = header_section(line) {
            if let Some(open) = current {
                *sections.slot(open) = buffer.join("\n").trim().to_string();
            }
            current = Some(section);
            buffer.clear();
        } else if current.is_some() {
            buffer.push(line);
        }
    }
    if let Some(open) = current {
        *sections.slot(open) = buffer.join("\n").trim().to_string();
    }
    sections
}
