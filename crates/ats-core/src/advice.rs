use serde::Serialize;

/// Verbs to suggest in place of weak phrasing.
pub const POWER_VERBS: &[&str] = &[
    "spearheaded",
    "orchestrated",
    "executed",
    "optimized",
    "accelerated",
    "generated",
    "revitalized",
    "championed",
    "pioneered",
    "engineered",
];

/// Most missing keywords offered a suggested bullet at once.
pub const MAX_BULLET_SUGGESTIONS: usize = 6;

/// Bullet templates; `{kw}` is replaced by the missing keyword.
const BULLET_TEMPLATES: &[&str] = &[
    "Leveraged {kw} to optimize operational workflows, increasing efficiency by 20%.",
    "Spearheaded the integration of {kw}, resulting in improved data accuracy.",
    "Collaborated with cross-functional teams to implement {kw} best practices.",
];

/// Draft experience bullet that works a missing keyword into the resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulletSuggestion {
    pub keyword: String,
    pub bullet: String,
}

/// One draft bullet for each of the first `MAX_BULLET_SUGGESTIONS` missing keywords.
///
/// Templates rotate by position, so the same input always yields the same drafts.
pub fn suggest_bullets(missing: &[String]) -> Vec<BulletSuggestion> {
    missing
        .iter()
        .map(|kw| kw.trim())
        .filter(|kw| !kw.is_empty())
        .take(MAX_BULLET_SUGGESTIONS)
        .enumerate()
        .map(|(i, kw)| BulletSuggestion {
            keyword: kw.to_string(),
            bullet: BULLET_TEMPLATES[i % BULLET_TEMPLATES.len()].replace("{kw}", kw),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpertInsight {
    pub industry: &'static str,
    pub source: &'static str,
    pub tips: &'static [&'static str],
    pub metrics: &'static [&'static str],
}

const SPORTS_MARKETING: ExpertInsight = ExpertInsight {
    industry: "Sports Marketing",
    source: "Front Office Sports",
    tips: &[
        "Fan Experience: focus on how you improved the fan journey.",
        "Sponsorship: mention 'fulfillment' or 'activations'.",
        "Revenue: highlight ticket sales or merchandise ROI.",
    ],
    metrics: &["ticket sales", "attendance", "roi", "engagement"],
};

const HEALTHCARE: ExpertInsight = ExpertInsight {
    industry: "Healthcare",
    source: "Nursing Boards",
    tips: &[
        "Patient Volume: state your caseload (e.g., 5:1 ratio).",
        "EMR Systems: list Epic, Cerner, or Meditech explicitly.",
        "Compliance: mention HIPAA or JCAHO.",
    ],
    metrics: &["patient load", "compliance", "satisfaction"],
};

const SOFTWARE_ENGINEER: ExpertInsight = ExpertInsight {
    industry: "Software Engineer",
    source: "Google Hiring Committee",
    tips: &[
        "GitHub Link: essential in header.",
        "Scale: mention 'requests per second' or 'latency'.",
        "Stack Order: languages go at the top.",
    ],
    metrics: &["latency", "users", "uptime", "optimization"],
};

/// Title fragments that route to each insight, checked in order.
const ROUTES: &[(&[&str], ExpertInsight)] = &[
    (&["sport", "marketing", "brand"], SPORTS_MARKETING),
    (&["nurse", "medical", "health", "clinical"], HEALTHCARE),
    (&["developer", "engineer", "data", "tech"], SOFTWARE_ENGINEER),
];

/// Industry advice for a free-form job title, if the title maps to a known industry.
pub fn expert_advice(job_title: &str) -> Option<ExpertInsight> {
    let title = job_title.trim().to_lowercase();
    if title.is_empty() {
        return None;
    }
    ROUTES
        .iter()
        .find(|(fragments, _)| fragments.iter().any(|f| title.contains(f)))
        .map(|(_, insight)| insight.clone())
}
