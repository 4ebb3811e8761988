use serde::{Deserialize, Serialize};

use crate::extractor::KeywordSet;

/// Keywords shared by resume and JD, and JD keywords the resume lacks. Both sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordGap {
    pub common: Vec<String>,
    pub missing: Vec<String>,
}

pub fn gap(resume: &KeywordSet, jd: &KeywordSet) -> KeywordGap {
    KeywordGap {
        common: resume.intersection(jd).map(str::to_string).collect(),
        missing: jd.difference(resume).map(str::to_string).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> KeywordSet {
        words.iter().copied().collect()
    }

    #[test]
    fn test_common_and_missing_sorted() {
        let resume = set(&["python", "docker", "aws", "django"]);
        let jd = set(&["kubernetes", "python", "aws", "docker", "terraform"]);
        let g = gap(&resume, &jd);
        assert_eq!(g.common, vec!["aws", "docker", "python"]);
        assert_eq!(g.missing, vec!["kubernetes", "terraform"]);
    }

    #[test]
    fn test_resume_only_keywords_not_reported() {
        let g = gap(&set(&["django"]), &set(&["python"]));
        assert!(g.common.is_empty());
        assert_eq!(g.missing, vec!["python"]);
    }

    #[test]
    fn test_empty_inputs() {
        let g = gap(&KeywordSet::new(), &KeywordSet::new());
        assert_eq!(g, KeywordGap::default());
    }
}
