//! Candidate profile records as supplied by the external loader.
//!
//! Every collection defaults to empty and every optional scalar to `None`, so
//! a sparse profile deserializes cleanly and the engine never has to probe for
//! missing keys.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Profile {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub headline: String,
    /// Self-reported career record (employment, education, declared skills).
    #[serde(default, rename = "linkedin")]
    pub career: CareerRecord,
    /// Code-hosting activity used as independent evidence.
    #[serde(default, rename = "github")]
    pub activity: RepositoryActivity,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CareerRecord {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default, rename = "experience")]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub education: Vec<Education>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Role {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    /// `YYYY-MM` or `YYYY`.
    pub start: String,
    /// Absent or null means the role is ongoing.
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Education {
    #[serde(default, alias = "school")]
    pub institution: Option<String>,
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RepositoryActivity {
    #[serde(default)]
    pub repos: Vec<Repository>,
    #[serde(default, rename = "contrib_last12mo")]
    pub recent_contributions: u32,
    #[serde(default)]
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub stars: u32,
    #[serde(default)]
    pub topics: Vec<String>,
}
