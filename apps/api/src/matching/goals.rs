//! Career goal → keyword table, shared by the goal factor of the scorer and
//! the role buckets of the market analysis.

pub const CAREER_GOALS: &[(&str, &[&str])] = &[
    (
        "Software Developer",
        &["software", "developer", "programming", "coding", "tech"],
    ),
    (
        "Data Analyst",
        &["data", "analyst", "analytics", "research", "statistics"],
    ),
    (
        "Digital Marketer",
        &["marketing", "digital", "social media", "content", "brand"],
    ),
    (
        "Project Manager",
        &["project", "manager", "coordination", "planning", "leadership"],
    ),
    (
        "UI/UX Designer",
        &["design", "ui", "ux", "user interface", "user experience"],
    ),
    (
        "Business Analyst",
        &["business", "analyst", "strategy", "consulting", "analysis"],
    ),
    (
        "Content Writer",
        &["content", "writer", "writing", "blog", "copy"],
    ),
    (
        "Social Media Manager",
        &["social media", "community", "engagement", "platform"],
    ),
    (
        "Research Analyst",
        &["research", "analyst", "study", "investigation", "analysis"],
    ),
    (
        "Government Officer",
        &["government", "public", "policy", "administration", "ministry"],
    ),
    (
        "Healthcare Professional",
        &["healthcare", "health", "medical", "hospital", "public health"],
    ),
    (
        "Education Specialist",
        &["education", "teaching", "learning", "academic", "school"],
    ),
    (
        "Environmental Consultant",
        &["environment", "sustainability", "green", "conservation"],
    ),
    (
        "Financial Advisor",
        &["finance", "financial", "banking", "investment", "economic"],
    ),
    (
        "Agriculture Specialist",
        &["agriculture", "farming", "rural", "crop", "agricultural"],
    ),
];

/// Keywords for a recognized goal. Matching on the goal name ignores case.
pub fn goal_keywords(goal: &str) -> Option<&'static [&'static str]> {
    let goal = goal.trim();
    CAREER_GOALS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(goal))
        .map(|(_, keywords)| *keywords)
}

/// True when any of the goal's keywords occurs in the lower-cased text.
pub fn text_mentions_goal(keywords: &[&str], text_lower: &str) -> bool {
    keywords.iter().any(|k| text_lower.contains(k))
}
