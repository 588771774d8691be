pub mod career;
pub mod confidence;
pub mod evidence;
pub mod highlights;
pub mod level;
pub mod ranking;
pub mod rounding;
pub mod tenure;

use crate::error::Result;
use crate::types::config::{LevelThresholds, ReportLimits, ScoringWeights, TalentConfig};
use crate::types::profile::Profile;
use crate::types::report::{FactSheet, ProfileReport};
use crate::types::scoring::ScoredSkill;
use confidence::{ConfidenceModel, LinearConfidence};
use tenure::YearMonth;

/// Stateless evidence-fusion engine. Every call works only on the profile it
/// is given and the explicit `as_of` month.
pub struct Engine {
    model: Box<dyn ConfidenceModel>,
    weights: ScoringWeights,
    limits: ReportLimits,
    thresholds: LevelThresholds,
}

impl Default for Engine {
    fn default() -> Self {
        Self::from_config(&TalentConfig::default())
    }
}

impl Engine {
    pub fn from_config(config: &TalentConfig) -> Self {
        let weights = config.scoring_weights();
        Self {
            model: Box::new(LinearConfidence::new(weights)),
            weights,
            limits: config.report_limits(),
            thresholds: config.level_thresholds(),
        }
    }

    pub fn with_model(mut self, model: Box<dyn ConfidenceModel>) -> Self {
        self.model = model;
        self
    }

    fn score(&self, profile: &Profile, as_of: YearMonth) -> Result<Vec<ScoredSkill>> {
        let evidence = evidence::gather(profile, as_of, &self.weights)?;
        Ok(confidence::score_all(self.model.as_ref(), &evidence))
    }

    /// Every vocabulary term, scored and ranked, without truncation.
    pub fn extract_skills(&self, profile: &Profile, as_of: YearMonth) -> Result<Vec<ScoredSkill>> {
        let mut skills = self.score(profile, as_of)?;
        ranking::sort_skills(&mut skills);
        Ok(skills)
    }

    pub fn summarize_career(&self, profile: &Profile, as_of: YearMonth) -> Result<String> {
        let facts = career::derive_facts(profile, as_of)?;
        Ok(career::narrate(profile, facts.as_ref()))
    }

    pub fn assemble(&self, profile: &Profile, as_of: YearMonth) -> Result<ProfileReport> {
        let top_skills = ranking::rank(self.score(profile, as_of)?, self.limits.top_skills);
        let summary = self.summarize_career(profile, as_of)?;
        let highlights = highlights::highlights(&profile.activity, self.limits.top_repos);

        tracing::info!(
            id = %profile.id,
            skills = top_skills.len(),
            repos = highlights.top_repos.len(),
            %as_of,
            "assembled profile report"
        );

        Ok(ProfileReport {
            id: profile.id.clone(),
            name: profile.name.clone(),
            summary,
            top_skills,
            highlights,
        })
    }

    pub fn facts(&self, profile: &Profile, as_of: YearMonth) -> Result<FactSheet> {
        let career = career::derive_facts(profile, as_of)?;
        let experience_years = level::experience_span_years(profile, as_of)?;
        let seniority = level::classify(experience_years, &self.thresholds);
        tracing::info!(id = %profile.id, level = %seniority, ?experience_years, "derived fact sheet");
        Ok(FactSheet {
            id: profile.id.clone(),
            name: profile.name.clone(),
            role_hint: level::role_hint(profile),
            experience_years,
            level: seniority,
            career,
        })
    }
}
