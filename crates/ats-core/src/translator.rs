//! Industry translator: rewrites generic wording into a target industry's vocabulary.

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::TranslateError;

type Dictionary = &'static [(&'static str, &'static str)];

/// Ordered term dictionaries; pairs are applied top to bottom.
pub const INDUSTRY_TRANSLATORS: &[(&str, Dictionary)] = &[
    (
        "Sports Marketing",
        &[
            ("user", "fan"),
            ("users", "fans"),
            ("consumer", "season ticket holder"),
            ("consumers", "audience"),
            ("product", "campaign"),
            ("products", "activations"),
            ("feature", "sponsorship asset"),
            ("test", "activation"),
            ("testing", "market research"),
            ("bug", "friction point"),
            ("deployed", "launched"),
            ("development", "fan engagement strategy"),
            ("client", "partner"),
            ("stakeholder", "team leadership"),
            ("sales", "ticket revenue"),
            ("community", "fanbase"),
        ],
    ),
    (
        "Healthcare & Nursing",
        &[
            ("customer", "patient"),
            ("customers", "patients"),
            ("client", "patient"),
            ("user", "patient"),
            ("product", "care plan"),
            ("service", "clinical care"),
            ("manager", "charge nurse"),
            ("team", "interdisciplinary team"),
            ("issue", "complication"),
            ("solution", "intervention"),
            ("sales", "patient outcomes"),
        ],
    ),
    (
        "Tech & SaaS",
        &[
            ("project", "product"),
            ("tool", "stack"),
            ("managed", "orchestrated"),
            ("changed", "refactored"),
            ("plan", "roadmap"),
            ("issue", "bug"),
            ("fix", "patch"),
            ("customer", "user"),
            ("revenue", "ARR"),
            ("marketing", "growth hacking"),
        ],
    ),
    (
        "Finance & Banking",
        &[
            ("money", "capital"),
            ("budget", "allocation"),
            ("spending", "expenditure"),
            ("saving", "cost reduction"),
            ("check", "audit"),
            ("mistake", "discrepancy"),
            ("team", "deal team"),
            ("sales", "deal flow"),
            ("customer", "client"),
        ],
    ),
    (
        "Retail & E-Commerce",
        &[
            ("user", "shopper"),
            ("customer", "guest"),
            ("stock", "inventory"),
            ("store", "visual merchandising"),
            ("sales", "conversions"),
            ("team", "associates"),
            ("manager", "store director"),
        ],
    ),
    (
        "Executive / Leadership",
        &[
            ("helped", "spearheaded"),
            ("worked on", "executed"),
            ("responsible for", "accountable for"),
            ("managed", "directed"),
            ("team", "organization"),
            ("idea", "strategic vision"),
            ("problem", "business challenge"),
            ("fix", "turnaround strategy"),
        ],
    ),
];

/// Short names accepted in place of the full industry label.
const ALIASES: &[(&str, &str)] = &[
    ("healthcare", "Healthcare & Nursing"),
    ("tech", "Tech & SaaS"),
    ("finance", "Finance & Banking"),
    ("retail", "Retail & E-Commerce"),
    ("executive", "Executive / Leadership"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub industry: String,
    pub text: String,
    pub replacements: usize,
}

pub fn industries() -> impl Iterator<Item = &'static str> {
    INDUSTRY_TRANSLATORS.iter().map(|(name, _)| *name)
}

fn lookup(industry: &str) -> Option<(&'static str, Dictionary)> {
    let wanted = industry.trim();
    let canonical = ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(wanted))
        .map(|(_, name)| *name)
        .unwrap_or(wanted);
    INDUSTRY_TRANSLATORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(canonical))
        .copied()
}

fn whole_word(term: &str) -> Regex {
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(term)))
        .case_insensitive(true)
        .build()
        .expect("escaped term is a valid pattern")
}

/// Replaces whole-word, case-insensitive occurrences of each source term with the
/// upper-cased industry term, applying the dictionary in order.
pub fn translate(text: &str, industry: &str) -> Result<Translation, TranslateError> {
    let (name, dictionary) =
        lookup(industry).ok_or_else(|| TranslateError::UnknownIndustry(industry.to_string()))?;

    let mut translated = text.to_string();
    let mut replacements = 0;
    for (from, to) in dictionary {
        let pattern = whole_word(from);
        let hits = pattern.find_iter(&translated).count();
        if hits == 0 {
            continue;
        }
        replacements += hits;
        translated = pattern
            .replace_all(&translated, regex::NoExpand(&to.to_uppercase()))
            .into_owned();
    }

    Ok(Translation {
        industry: name.to_string(),
        text: translated,
        replacements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_healthcare_translation() {
        let t = translate("Resolved customer issue with the team", "Healthcare & Nursing").unwrap();
        assert_eq!(
            t.text,
            "Resolved PATIENT COMPLICATION with the INTERDISCIPLINARY TEAM"
        );
        assert_eq!(t.replacements, 3);
    }

    #[test]
    fn test_whole_words_only() {
        let t = translate("Teammates and users", "Retail & E-Commerce").unwrap();
        // "user" must not match inside "users"; "team" not inside "Teammates"
        assert_eq!(t.text, "Teammates and users");
        assert_eq!(t.replacements, 0);
    }

    #[test]
    fn test_case_insensitive_match() {
        let t = translate("HELPED the Team", "Executive / Leadership").unwrap();
        assert_eq!(t.text, "SPEARHEADED the ORGANIZATION");
    }

    #[test]
    fn test_alias_resolves() {
        let t = translate("customer", "tech").unwrap();
        assert_eq!(t.industry, "Tech & SaaS");
        assert_eq!(t.text, "USER");
    }

    #[test]
    fn test_unknown_industry() {
        let err = translate("anything", "Astronautics").unwrap_err();
        assert_eq!(err, TranslateError::UnknownIndustry("Astronautics".to_string()));
    }

    #[test]
    fn test_industries_listed() {
        assert_eq!(industries().count(), INDUSTRY_TRANSLATORS.len());
    }
}
