//! Static catalog data: internship postings, sector definitions and the
//! canonical skill list. Loaded once at startup, never mutated afterwards.

pub mod handlers;
pub mod models;

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::catalog::models::{InternshipPosting, SectorDefinition};

pub const INTERNSHIPS_FILE: &str = "internships.json";
pub const SECTORS_FILE: &str = "sectors.json";
pub const SKILLS_FILE: &str = "skills.json";

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub internships: Vec<InternshipPosting>,
    pub sectors: Vec<SectorDefinition>,
    /// Canonical skill strings in file order, blanks and non-strings removed.
    pub skills: Vec<String>,
}

impl Catalog {
    /// Loads all three catalog files from `data_dir`.
    ///
    /// A missing or malformed file degrades to an empty collection; this never fails.
    pub fn load(data_dir: &Path) -> Self {
        let internships: Vec<InternshipPosting> = load_json(&data_dir.join(INTERNSHIPS_FILE));
        let sectors: Vec<SectorDefinition> = load_json(&data_dir.join(SECTORS_FILE));
        let raw_skills: Vec<serde_json::Value> = load_json(&data_dir.join(SKILLS_FILE));

        let skills = raw_skills
            .iter()
            .filter_map(|v| v.as_str())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        info!(
            "Catalog loaded from {}: {} internships, {} sectors, {} skills",
            data_dir.display(),
            internships.len(),
            sectors.len(),
            skills.len()
        );

        Catalog {
            internships,
            sectors,
            skills,
        }
    }
}

fn load_json<T: DeserializeOwned + Default>(path: &Path) -> T {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Catalog file {} unavailable ({e}); using empty data", path.display());
            return T::default();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            warn!("Catalog file {} is malformed ({e}); using empty data", path.display());
            T::default()
        }
    }
}
