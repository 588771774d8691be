use serde::{Deserialize, Serialize};

pub type Confidence = f64;

/// Per-term tally gathered from every evidence source.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillEvidence {
    pub term: String,
    pub frequency: u32,
    /// In `[0, 1]`.
    pub recency: f64,
    /// `1.0` when a repository topic carries the term, else `0.0`.
    pub corroboration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSkill {
    #[serde(rename = "skill")]
    pub term: String,
    pub confidence: Confidence,
}

impl ScoredSkill {
    pub fn new(term: impl Into<String>, confidence: Confidence) -> Self {
        Self {
            term: term.into(),
            confidence,
        }
    }
}
