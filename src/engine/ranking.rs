use crate::types::scoring::ScoredSkill;

/// Confidence descending, then term ascending.
pub fn sort_skills(skills: &mut [ScoredSkill]) {
    skills.sort_by(|a, b| {
        b.confidence
            .total_cmp(&a.confidence)
            .then_with(|| a.term.cmp(&b.term))
    });
}

pub fn rank(mut skills: Vec<ScoredSkill>, limit: usize) -> Vec<ScoredSkill> {
    sort_skills(&mut skills);
    skills.truncate(limit);
    skills
}
