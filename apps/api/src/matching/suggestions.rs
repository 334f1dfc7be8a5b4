//! Static skill ↔ sector lookup tables used for auto-suggestion.

use std::collections::BTreeSet;

pub const MAX_SKILL_SUGGESTIONS: usize = 10;

const SKILL_TO_SECTOR: &[(&str, &str)] = &[
    ("Digital Marketing", "Technology"),
    ("Social Media", "Technology"),
    ("Content Writing", "Technology"),
    ("Analytics", "Technology"),
    ("Research", "Government"),
    ("Data Analysis", "Healthcare"),
    ("Teaching", "Education"),
    ("Communication", "Social Work"),
    ("Finance", "Finance"),
    ("Agriculture", "Agriculture"),
    ("Environmental Science", "Environment"),
    ("Tourism", "Tourism"),
    ("History", "Culture"),
];

const SECTOR_TO_SKILLS: &[(&str, &[&str])] = &[
    (
        "Technology",
        &["Digital Marketing", "Programming", "Web Development", "Data Analysis"],
    ),
    (
        "Government",
        &["Research", "Report Writing", "Policy Analysis", "Communication"],
    ),
    (
        "Healthcare",
        &["Data Analysis", "Research", "Healthcare Knowledge", "Statistics"],
    ),
    (
        "Education",
        &["Teaching", "Communication", "Content Development", "Technology"],
    ),
    (
        "Environment",
        &["Environmental Science", "Research", "Field Work", "Documentation"],
    ),
    (
        "Finance",
        &["Finance", "Data Analysis", "Communication", "Excel"],
    ),
    (
        "Social Work",
        &["Communication", "Community Engagement", "Social Work", "Documentation"],
    ),
    (
        "Agriculture",
        &["Agriculture", "Field Work", "Data Collection", "Technology"],
    ),
    (
        "Tourism",
        &["Communication", "Marketing", "Local Knowledge", "Customer Service"],
    ),
    (
        "Culture",
        &["Research", "History", "Cultural Knowledge", "Documentation"],
    ),
];

/// Sectors associated with any of the given skills, sorted, no duplicates.
pub fn suggest_sectors(skills: &[String]) -> Vec<String> {
    let mut sectors = BTreeSet::new();
    for skill in skills {
        let skill = skill.trim();
        if let Some((_, sector)) = SKILL_TO_SECTOR
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(skill))
        {
            sectors.insert(sector.to_string());
        }
    }
    sectors.into_iter().collect()
}

/// Union of the skills for every requested sector, sorted, capped at
/// [`MAX_SKILL_SUGGESTIONS`].
pub fn suggest_skills(sectors: &[String]) -> Vec<String> {
    let mut skills = BTreeSet::new();
    for sector in sectors {
        let sector = sector.trim();
        if let Some((_, related)) = SECTOR_TO_SKILLS
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(sector))
        {
            skills.extend(related.iter().map(|s| s.to_string()));
        }
    }
    skills.into_iter().take(MAX_SKILL_SUGGESTIONS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sector_suggestions_collapse_duplicates() {
        let sectors = suggest_sectors(&strings(&["Digital Marketing", "Analytics", "Research"]));
        assert_eq!(sectors, vec!["Government", "Technology"]);
    }

    #[test]
    fn test_unknown_skills_suggest_nothing() {
        assert!(suggest_sectors(&strings(&["Juggling"])).is_empty());
        assert!(suggest_sectors(&[]).is_empty());
    }

    #[test]
    fn test_skill_suggestions_are_a_union() {
        let skills = suggest_skills(&strings(&["Technology", "Government"]));
        assert_eq!(skills.len(), 8);
        assert!(skills.contains(&"Programming".to_string()));
        assert!(skills.contains(&"Policy Analysis".to_string()));
    }

    #[test]
    fn test_skill_suggestions_capped_at_ten() {
        let all: Vec<String> = SECTOR_TO_SKILLS.iter().map(|(s, _)| s.to_string()).collect();
        let skills = suggest_skills(&all);
        assert_eq!(skills.len(), MAX_SKILL_SUGGESTIONS);
    }

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(suggest_sectors(&strings(&["teaching"])), vec!["Education"]);
        assert_eq!(suggest_skills(&strings(&["finance"])).len(), 4);
    }
}
