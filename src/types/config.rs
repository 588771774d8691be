use crate::error::TalentError;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TalentConfig {
    pub scoring: Option<ScoringConfig>,
    pub report: Option<ReportConfig>,
    pub leveling: Option<LevelingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub base_offset: Option<f64>,
    pub per_mention: Option<f64>,
    pub recency_weight: Option<f64>,
    pub corroboration_weight: Option<f64>,
    pub recency_horizon_months: Option<u32>,
    pub recency_floor: Option<f64>,
    pub floor: Option<f64>,
    pub ceiling: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub top_skills: Option<usize>,
    pub top_repos: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LevelingConfig {
    pub mid_from_years: Option<f64>,
    pub senior_from_years: Option<f64>,
}

/// Constants of the linear confidence heuristic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub base_offset: f64,
    pub per_mention: f64,
    pub recency_weight: f64,
    pub corroboration_weight: f64,
    pub recency_horizon_months: u32,
    pub recency_floor: f64,
    pub floor: f64,
    pub ceiling: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            base_offset: 0.4,
            per_mention: 0.15,
            recency_weight: 0.25,
            corroboration_weight: 0.2,
            recency_horizon_months: 48,
            recency_floor: 0.2,
            floor: 0.1,
            ceiling: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportLimits {
    pub top_skills: usize,
    pub top_repos: usize,
}

impl Default for ReportLimits {
    fn default() -> Self {
        Self {
            top_skills: 10,
            top_repos: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelThresholds {
    pub mid_from_years: f64,
    pub senior_from_years: f64,
}

impl Default for LevelThresholds {
    fn default() -> Self {
        Self {
            mid_from_years: 2.0,
            senior_from_years: 5.0,
        }
    }
}

impl TalentConfig {
    pub fn scoring_weights(&self) -> ScoringWeights {
        let defaults = ScoringWeights::default();
        match &self.scoring {
            Some(scoring) => ScoringWeights {
                base_offset: scoring.base_offset.unwrap_or(defaults.base_offset),
                per_mention: scoring.per_mention.unwrap_or(defaults.per_mention),
                recency_weight: scoring.recency_weight.unwrap_or(defaults.recency_weight),
                corroboration_weight: scoring
                    .corroboration_weight
                    .unwrap_or(defaults.corroboration_weight),
                recency_horizon_months: scoring
                    .recency_horizon_months
                    .unwrap_or(defaults.recency_horizon_months),
                recency_floor: scoring.recency_floor.unwrap_or(defaults.recency_floor),
                floor: scoring.floor.unwrap_or(defaults.floor),
                ceiling: scoring.ceiling.unwrap_or(defaults.ceiling),
            },
            None => defaults,
        }
    }

    pub fn report_limits(&self) -> ReportLimits {
        let defaults = ReportLimits::default();
        match &self.report {
            Some(report) => ReportLimits {
                top_skills: report.top_skills.unwrap_or(defaults.top_skills),
                top_repos: report.top_repos.unwrap_or(defaults.top_repos),
            },
            None => defaults,
        }
    }

    pub fn level_thresholds(&self) -> LevelThresholds {
        let defaults = LevelThresholds::default();
        match &self.leveling {
            Some(leveling) => LevelThresholds {
                mid_from_years: leveling.mid_from_years.unwrap_or(defaults.mid_from_years),
                senior_from_years: leveling
                    .senior_from_years
                    .unwrap_or(defaults.senior_from_years),
            },
            None => defaults,
        }
    }

    pub fn validate(&self) -> Result<(), TalentError> {
        let weights = self.scoring_weights();
        for (key, value) in [
            ("base_offset", weights.base_offset),
            ("per_mention", weights.per_mention),
            ("recency_weight", weights.recency_weight),
            ("corroboration_weight", weights.corroboration_weight),
            ("recency_floor", weights.recency_floor),
            ("floor", weights.floor),
            ("ceiling", weights.ceiling),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(TalentError::ConfigParse(format!(
                    "scoring.{key} must be between 0.0 and 1.0"
                )));
            }
        }
        if weights.floor > weights.ceiling {
            return Err(TalentError::ConfigParse(format!(
                "scoring.floor ({:.2}) cannot exceed scoring.ceiling ({:.2})",
                weights.floor, weights.ceiling
            )));
        }
        if weights.recency_horizon_months == 0 {
            return Err(TalentError::ConfigParse(
                "scoring.recency_horizon_months must be greater than 0".to_string(),
            ));
        }

        let limits = self.report_limits();
        if limits.top_skills == 0 {
            return Err(TalentError::ConfigParse(
                "report.top_skills must be greater than 0".to_string(),
            ));
        }
        if limits.top_repos == 0 {
            return Err(TalentError::ConfigParse(
                "report.top_repos must be greater than 0".to_string(),
            ));
        }

        let thresholds = self.level_thresholds();
        if thresholds.mid_from_years < 0.0 {
            return Err(TalentError::ConfigParse(
                "leveling.mid_from_years cannot be negative".to_string(),
            ));
        }
        if thresholds.senior_from_years <= thresholds.mid_from_years {
            return Err(TalentError::ConfigParse(format!(
                "leveling.senior_from_years ({:.1}) must be greater than leveling.mid_from_years ({:.1})",
                thresholds.senior_from_years, thresholds.mid_from_years
            )));
        }

        Ok(())
    }
}
