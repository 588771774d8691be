use crate::engine::tenure::{months_between, YearMonth};
use crate::error::Result;
use crate::types::config::ScoringWeights;
use crate::types::profile::Profile;
use crate::types::scoring::SkillEvidence;
use std::collections::{HashMap, HashSet};

/// Lowercased term counts over declared skills, detected languages and
/// repository topics, in first-seen order. Repeats within a source count.
pub fn vocabulary(profile: &Profile) -> Vec<(String, u32)> {
    let topics = profile
        .activity
        .repos
        .iter()
        .flat_map(|repo| repo.topics.iter());
    let terms = profile
        .career
        .skills
        .iter()
        .chain(profile.activity.languages.iter())
        .chain(topics);

    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, u32> = HashMap::new();
    for term in terms {
        let normalized = term.to_lowercase();
        match counts.get_mut(&normalized) {
            Some(count) => *count += 1,
            None => {
                counts.insert(normalized.clone(), 1);
                order.push(normalized);
            }
        }
    }

    order
        .into_iter()
        .map(|term| {
            let count = counts.get(&term).copied().unwrap_or_default();
            (term, count)
        })
        .collect()
}

/// Best role-duration signal across the employment history, `None` when
/// there is no history. Every role is parsed, so any bad date fails here.
fn role_recency(profile: &Profile, as_of: YearMonth, horizon_months: u32) -> Result<Option<f64>> {
    let mut best: Option<f64> = None;
    for role in &profile.career.roles {
        let months = months_between(&role.start, role.end.as_deref(), as_of)?;
        let signal = (f64::from(months) / f64::from(horizon_months)).min(1.0);
        best = Some(best.map_or(signal, |current| current.max(signal)));
    }
    Ok(best)
}

/// Builds one evidence record per vocabulary term.
///
/// Only declared skills can earn a role-backed recency; languages and topics
/// that were never declared fall back to `recency_floor` even when they are
/// corroborated by repositories.
pub fn gather(
    profile: &Profile,
    as_of: YearMonth,
    weights: &ScoringWeights,
) -> Result<Vec<SkillEvidence>> {
    let recency = role_recency(profile, as_of, weights.recency_horizon_months)?;
    let declared: HashSet<String> = profile
        .career
        .skills
        .iter()
        .map(|skill| skill.to_lowercase())
        .collect();
    let topics: HashSet<String> = profile
        .activity
        .repos
        .iter()
        .flat_map(|repo| repo.topics.iter())
        .map(|topic| topic.to_lowercase())
        .collect();

    let evidence = vocabulary(profile)
        .into_iter()
        .map(|(term, frequency)| {
            let recency = match recency {
                Some(signal) if declared.contains(&term) => signal,
                _ => weights.recency_floor,
            };
            let corroboration = if topics.contains(&term) { 1.0 } else { 0.0 };
            SkillEvidence {
                term,
                frequency,
                recency,
                corroboration,
            }
        })
        .collect();
    Ok(evidence)
}
