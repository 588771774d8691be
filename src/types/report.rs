use crate::types::profile::Repository;
use crate::types::scoring::ScoredSkill;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileReport {
    pub id: String,
    pub name: String,
    pub summary: String,
    pub top_skills: Vec<ScoredSkill>,
    #[serde(rename = "github_summary")]
    pub highlights: RepositoryHighlights,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepositoryHighlights {
    #[serde(rename = "contrib_last12mo")]
    pub recent_contributions: u32,
    pub top_repos: Vec<Repository>,
}

/// Tenure derived from the employment history. Overlapping roles are summed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerFacts {
    pub total_months: u32,
    pub total_years: f64,
    pub role_count: usize,
    pub current_title: String,
    pub current_company: String,
    pub current_months: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeniorityLevel {
    Junior,
    Mid,
    Senior,
}

impl fmt::Display for SeniorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SeniorityLevel::Junior => "Junior",
            SeniorityLevel::Mid => "Mid",
            SeniorityLevel::Senior => "Senior",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactSheet {
    pub id: String,
    pub name: String,
    pub role_hint: String,
    pub experience_years: Option<f64>,
    pub level: SeniorityLevel,
    pub career: Option<CareerFacts>,
}
