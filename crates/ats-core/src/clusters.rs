//! Career cluster ranking: which industries a resume already speaks the language of.

use serde::{Deserialize, Serialize};

/// Industry clusters and their signature keywords, matched as lowercase substrings.
pub const CAREER_CLUSTERS: &[(&str, &[&str])] = &[
    (
        "Sports Marketing",
        &[
            "fan engagement",
            "sponsorship",
            "activation",
            "ticket sales",
            "brand awareness",
            "partnership",
            "merchandise",
            "campaign",
            "event management",
            "roi",
            "digital media",
            "sports management",
        ],
    ),
    (
        "Healthcare & Nursing",
        &[
            "patient care",
            "clinical",
            "triage",
            "emr",
            "hipaa",
            "vital signs",
            "case management",
            "medication administration",
            "bls",
            "acls",
            "patient advocacy",
            "electronic health records",
        ],
    ),
    (
        "Software Engineering",
        &[
            "python",
            "java",
            "sql",
            "api",
            "cloud",
            "aws",
            "docker",
            "kubernetes",
            "agile",
            "scrum",
            "git",
            "ci/cd",
            "full stack",
            "backend",
            "frontend",
            "algorithms",
        ],
    ),
    (
        "Finance & Banking",
        &[
            "financial analysis",
            "budgeting",
            "forecasting",
            "audit",
            "compliance",
            "risk management",
            "portfolio",
            "investment",
            "reconciliation",
            "gaap",
            "financial modeling",
            "accounting",
        ],
    ),
    (
        "Retail & E-Commerce",
        &[
            "inventory management",
            "customer service",
            "visual merchandising",
            "pos",
            "loss prevention",
            "sales targets",
            "conversion rate",
            "supply chain",
            "logistics",
            "retail operations",
            "e-commerce",
        ],
    ),
    (
        "Data Science & Analytics",
        &[
            "machine learning",
            "statistics",
            "data visualization",
            "tableau",
            "power bi",
            "pandas",
            "numpy",
            "regression",
            "clustering",
            "predictive modeling",
            "big data",
            "analytics",
        ],
    ),
    (
        "Project Management",
        &[
            "project planning",
            "stakeholder management",
            "roadmap",
            "budgeting",
            "resource allocation",
            "agile",
            "waterfall",
            "risk mitigation",
            "kpis",
            "change management",
        ],
    ),
    (
        "General Management",
        &[
            "strategic planning",
            "team leadership",
            "operations",
            "p&l",
            "business development",
            "performance management",
            "process improvement",
            "cross-functional leadership",
        ],
    ),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterFit {
    pub cluster: String,
    pub points: u32,
    /// 0 – 100, ten per matched keyword.
    pub strength: u32,
    pub matched_keywords: Vec<String>,
}

/// Ranks every cluster by matched keyword count, highest first. Ties keep table order.
pub fn rank_clusters(text: &str) -> Vec<ClusterFit> {
    let text_lower = text.to_lowercase();
    let mut fits: Vec<ClusterFit> = CAREER_CLUSTERS
        .iter()
        .map(|(cluster, keywords)| {
            let matched_keywords: Vec<String> = keywords
                .iter()
                .filter(|k| text_lower.contains(*k))
                .map(|k| k.to_string())
                .collect();
            let points = matched_keywords.len() as u32;
            ClusterFit {
                cluster: cluster.to_string(),
                points,
                strength: (points * 10).min(100),
                matched_keywords,
            }
        })
        .collect();
    fits.sort_by(|a, b| b.points.cmp(&a.points));
    fits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_software_resume_ranks_software_first() {
        let fits = rank_clusters("Backend engineer: Python, Docker, Kubernetes on AWS. Git + SQL.");
        assert_eq!(fits[0].cluster, "Software Engineering");
        assert!(fits[0].points >= 6);
        assert!(fits[0].matched_keywords.contains(&"kubernetes".to_string()));
    }

    #[test]
    fn test_every_cluster_reported() {
        assert_eq!(rank_clusters("").len(), CAREER_CLUSTERS.len());
    }

    #[test]
    fn test_ties_keep_table_order() {
        let fits = rank_clusters("");
        let names: Vec<&str> = fits.iter().map(|f| f.cluster.as_str()).collect();
        let table: Vec<&str> = CAREER_CLUSTERS.iter().map(|(c, _)| *c).collect();
        assert_eq!(names, table);
    }

    #[test]
    fn test_strength_capped_at_100() {
        let text = CAREER_CLUSTERS[2].1.join(" ");
        let fits = rank_clusters(&text);
        assert_eq!(fits[0].cluster, "Software Engineering");
        assert_eq!(fits[0].strength, 100);
    }
}
