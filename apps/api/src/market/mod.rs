//! Skill demand across the internship catalog.
//!
//! [`MarketInsights::build`] aggregates the catalog once at startup; every
//! query afterwards reads the immutable tables.

pub mod handlers;
pub mod learning_paths;

use std::collections::HashMap;

use serde::Serialize;
use tracing::info;

use crate::catalog::models::InternshipPosting;
use crate::market::learning_paths::learning_path;
use crate::matching::goals::CAREER_GOALS;

const DEMAND_SKILLS: usize = 8;
const UNMATCHED_SKILLS: usize = 10;
const HIGH_DEMAND_SKILLS: usize = 5;
const ROLE_FREQUENCY_SKILLS: usize = 10;
const FREQUENCY_SKILLS: usize = 10;
const OVERVIEW_TOP_SKILLS: usize = 10;
const OVERVIEW_FREQUENCY_SKILLS: usize = 20;
const OTHER_SECTOR: &str = "Other";

/// Sectors whose postings also count a pseudo-skill in every role bucket.
const SECTOR_PSEUDO_SKILLS: &[(&[&str], &str)] = &[
    (&["technology", "tech"], "Technology"),
    (&["government", "public"], "Government"),
    (&["healthcare", "health"], "Healthcare"),
];

pub const EMERGING_SKILLS: &[&str] = &[
    "Artificial Intelligence",
    "Machine Learning",
    "Data Science",
    "Cloud Computing",
    "Cybersecurity",
    "Digital Transformation",
    "Sustainability",
    "Remote Work Management",
];

// ────────────────────────────────────────────────────────────────────────────
// Frequency table
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountEntry {
    pub name: String,
    pub count: usize,
}

/// Occurrence counts that remember first-seen order, so ties rank stably.
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable {
    entries: Vec<CountEntry>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn add(&mut self, name: &str) {
        match self.index.get(name) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(name.to_string(), self.entries.len());
                self.entries.push(CountEntry {
                    name: name.to_string(),
                    count: 1,
                });
            }
        }
    }

    /// The `n` most frequent entries, count descending, ties in first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<CountEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted.truncate(n);
        sorted
    }

    pub fn top_names(&self, n: usize) -> Vec<String> {
        self.most_common(n).into_iter().map(|e| e.name).collect()
    }

    /// Number of distinct names counted.
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Responses
// ────────────────────────────────────────────────────────────────────────────

/// Skills and a learning path for one career goal.
#[derive(Debug, Clone, Serialize)]
pub struct MarketDemand {
    pub skills: Vec<String>,
    pub learning_path: Vec<String>,
    pub market_analysis: DemandAnalysis,
}

#[derive(Debug, Clone, Serialize)]
pub struct DemandAnalysis {
    /// Matched role bucket; absent when the goal matched no role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub total_internships: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_specific_skills: Option<Vec<CountEntry>>,
    pub high_demand_skills: Vec<String>,
    pub skill_frequency: Vec<CountEntry>,
}

/// Whole-catalog view.
#[derive(Debug, Clone, Serialize)]
pub struct SkillMarketAnalysis {
    pub total_internships_analyzed: usize,
    pub most_demanded_skills: Vec<String>,
    pub skill_frequency: Vec<CountEntry>,
    pub sectors_with_most_opportunities: Vec<CountEntry>,
    pub emerging_skills: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Aggregation
// ────────────────────────────────────────────────────────────────────────────

pub struct MarketInsights {
    total_internships: usize,
    skills: FrequencyTable,
    /// Role buckets in the order a posting first matched them.
    roles: Vec<(String, FrequencyTable)>,
    sectors: FrequencyTable,
}

impl MarketInsights {
    pub fn build(internships: &[InternshipPosting]) -> Self {
        let mut skills = FrequencyTable::default();
        let mut roles: Vec<(String, FrequencyTable)> = Vec::new();
        let mut sectors = FrequencyTable::default();

        for internship in internships {
            for skill in &internship.skills_required {
                skills.add(skill);
            }

            let sector = internship.sector.trim();
            sectors.add(if sector.is_empty() { OTHER_SECTOR } else { sector });

            let title = internship.title.to_lowercase();
            let description = internship.description.to_lowercase();
            let pseudo_skill = sector_pseudo_skill(sector);

            for (goal, keywords) in CAREER_GOALS {
                if !keywords
                    .iter()
                    .any(|k| title.contains(k) || description.contains(k))
                {
                    continue;
                }
                let key = goal.to_lowercase();
                let i = match roles.iter().position(|(name, _)| *name == key) {
                    Some(i) => i,
                    None => {
                        roles.push((key, FrequencyTable::default()));
                        roles.len() - 1
                    }
                };
                let bucket = &mut roles[i].1;
                for skill in &internship.skills_required {
                    bucket.add(skill);
                }
                if let Some(pseudo) = pseudo_skill {
                    bucket.add(pseudo);
                }
            }
        }

        info!(
            "Market insights built: {} postings, {} distinct skills, {} role buckets",
            internships.len(),
            skills.distinct(),
            roles.len()
        );

        MarketInsights {
            total_internships: internships.len(),
            skills,
            roles,
            sectors,
        }
    }

    /// Demand for a career goal. The goal picks the first role bucket whose
    /// name contains it or is contained in it, ignoring case.
    pub fn demand_for(&self, role: &str) -> MarketDemand {
        let wanted = role.trim().to_lowercase();
        let high_demand = self.skills.top_names(HIGH_DEMAND_SKILLS);
        let skill_frequency = self.skills.most_common(FREQUENCY_SKILLS);

        let matched = self
            .roles
            .iter()
            .find(|(key, _)| key.contains(&wanted) || wanted.contains(key.as_str()));

        match matched {
            Some((key, table)) => {
                let mut skills = table.top_names(DEMAND_SKILLS);
                for skill in &high_demand {
                    if !skills.contains(skill) {
                        skills.push(skill.clone());
                    }
                }
                skills.truncate(DEMAND_SKILLS);

                MarketDemand {
                    skills,
                    learning_path: learning_path(key),
                    market_analysis: DemandAnalysis {
                        role: Some(key.clone()),
                        total_internships: self.total_internships,
                        role_specific_skills: Some(table.most_common(ROLE_FREQUENCY_SKILLS)),
                        high_demand_skills: high_demand,
                        skill_frequency,
                    },
                }
            }
            None => MarketDemand {
                skills: self.skills.top_names(UNMATCHED_SKILLS),
                learning_path: learning_path(""),
                market_analysis: DemandAnalysis {
                    role: None,
                    total_internships: self.total_internships,
                    role_specific_skills: None,
                    high_demand_skills: high_demand,
                    skill_frequency,
                },
            },
        }
    }

    pub fn overview(&self) -> SkillMarketAnalysis {
        SkillMarketAnalysis {
            total_internships_analyzed: self.total_internships,
            most_demanded_skills: self.skills.top_names(OVERVIEW_TOP_SKILLS),
            skill_frequency: self.skills.most_common(OVERVIEW_FREQUENCY_SKILLS),
            sectors_with_most_opportunities: self.sectors.most_common(self.sectors.distinct()),
            emerging_skills: EMERGING_SKILLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

fn sector_pseudo_skill(sector: &str) -> Option<&'static str> {
    let sector = sector.to_lowercase();
    SECTOR_PSEUDO_SKILLS
        .iter()
        .find(|(names, _)| names.contains(&sector.as_str()))
        .map(|(_, skill)| *skill)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(title: &str, sector: &str, skills: &[&str]) -> InternshipPosting {
        InternshipPosting {
            title: title.to_string(),
            sector: sector.to_string(),
            skills_required: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn catalog() -> Vec<InternshipPosting> {
        vec![
            posting("Software Developer Intern", "Technology", &["Python", "Git"]),
            posting("Data Analyst Intern", "Healthcare", &["Excel", "Python", "Statistics"]),
            posting("Policy Research Intern", "Government", &["Research", "Excel"]),
            posting("Field Volunteer", "", &["Communication"]),
        ]
    }

    #[test]
    fn test_frequency_ties_keep_first_seen_order() {
        let mut table = FrequencyTable::default();
        for name in ["b", "a", "c", "a", "c"] {
            table.add(name);
        }
        let names: Vec<String> = table.most_common(3).into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["a", "c", "b"]);
        assert_eq!(table.most_common(1)[0].count, 2);
    }

    #[test]
    fn test_demand_for_known_role() {
        let insights = MarketInsights::build(&catalog());
        let demand = insights.demand_for("Software Developer");

        assert_eq!(demand.market_analysis.role.as_deref(), Some("software developer"));
        // Role skills first, then the global top five fill in, capped at eight.
        assert_eq!(demand.skills[..3], ["Python", "Git", "Technology"]);
        assert!(demand.skills.contains(&"Excel".to_string()));
        assert!(demand.skills.len() <= DEMAND_SKILLS);
        assert!(demand.learning_path[0].starts_with("Learn programming languages"));
        assert_eq!(demand.market_analysis.total_internships, 4);
    }

    #[test]
    fn test_demand_matches_partial_role_names() {
        let insights = MarketInsights::build(&catalog());
        let demand = insights.demand_for("  DATA ANALYST and more ");
        assert_eq!(demand.market_analysis.role.as_deref(), Some("data analyst"));
        assert!(demand.skills.contains(&"Healthcare".to_string()));
    }

    #[test]
    fn test_unmatched_role_falls_back_to_global_skills() {
        let insights = MarketInsights::build(&catalog());
        let demand = insights.demand_for("Astronaut");
        assert_eq!(demand.market_analysis.role, None);
        assert!(demand.market_analysis.role_specific_skills.is_none());
        assert_eq!(demand.skills[..2], ["Python", "Excel"]);
        assert_eq!(demand.learning_path, learning_path(""));

        let json = serde_json::to_value(&demand).unwrap();
        assert!(json["market_analysis"].get("role").is_none());
    }

    #[test]
    fn test_overview_counts_sectors_with_other_fallback() {
        let overview = MarketInsights::build(&catalog()).overview();
        assert_eq!(overview.total_internships_analyzed, 4);
        assert_eq!(overview.most_demanded_skills[0], "Python");
        assert_eq!(overview.sectors_with_most_opportunities.len(), 4);
        assert!(overview
            .sectors_with_most_opportunities
            .iter()
            .any(|e| e.name == OTHER_SECTOR && e.count == 1));
        assert_eq!(overview.emerging_skills.len(), EMERGING_SKILLS.len());
    }

    #[test]
    fn test_empty_catalog_degrades_to_empty_analysis() {
        let insights = MarketInsights::build(&[]);
        let demand = insights.demand_for("Software Developer");
        assert!(demand.skills.is_empty());
        assert_eq!(demand.learning_path, learning_path(""));
        assert_eq!(insights.overview().total_internships_analyzed, 0);
    }
}
