use crate::engine::rounding::round_to;
use crate::types::config::ScoringWeights;
use crate::types::scoring::{Confidence, ScoredSkill, SkillEvidence};

/// Turns a term's evidence into a confidence value. Implementations must
/// stay within their own floor/ceiling for any input.
pub trait ConfidenceModel: Send + Sync {
    fn score(&self, evidence: &SkillEvidence) -> Confidence;

    fn name(&self) -> &'static str;
}

/// Additive heuristic: a frequency base saturating at 1.0, plus weighted
/// recency and corroboration bonuses, clamped to `[floor, ceiling]`.
#[derive(Debug, Clone, Default)]
pub struct LinearConfidence {
    weights: ScoringWeights,
}

impl LinearConfidence {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn raw(&self, frequency: u32, recency: f64, corroboration: f64) -> Confidence {
        let w = &self.weights;
        let base = (w.base_offset + w.per_mention * f64::from(frequency)).min(1.0);
        let score = base + w.recency_weight * recency + w.corroboration_weight * corroboration;
        score.clamp(w.floor, w.ceiling)
    }
}

impl ConfidenceModel for LinearConfidence {
    fn score(&self, evidence: &SkillEvidence) -> Confidence {
        self.raw(evidence.frequency, evidence.recency, evidence.corroboration)
    }

    fn name(&self) -> &'static str {
        "linear"
    }
}

pub fn round2(value: Confidence) -> Confidence {
    round_to(value, 2)
}

pub fn score_all(model: &dyn ConfidenceModel, evidence: &[SkillEvidence]) -> Vec<ScoredSkill> {
    evidence
        .iter()
        .map(|item| {
            let confidence = round2(model.score(item));
            tracing::debug!(
                term = %item.term,
                frequency = item.frequency,
                recency = item.recency,
                corroboration = item.corroboration,
                confidence,
                model = model.name(),
                "scored term"
            );
            ScoredSkill::new(item.term.clone(), confidence)
        })
        .collect()
}
