use crate::engine::rounding::round_to;
use crate::engine::tenure::{months_between, YearMonth};
use crate::error::Result;
use crate::types::profile::{Profile, Role};
use crate::types::report::CareerFacts;

pub const NO_HISTORY_SUMMARY: &str = "No work history available.";

/// Roles ordered by start month; equal starts keep input order.
pub fn chronological(roles: &[Role]) -> Result<Vec<(YearMonth, &Role)>> {
    let mut dated = roles
        .iter()
        .map(|role| Ok((YearMonth::parse(&role.start)?, role)))
        .collect::<Result<Vec<_>>>()?;
    dated.sort_by_key(|(start, _)| *start);
    Ok(dated)
}

pub fn years_one_decimal(months: u32) -> f64 {
    round_to(f64::from(months) / 12.0, 1)
}

pub fn format_duration(months: u32) -> String {
    format!("{}y {}m", months / 12, months % 12)
}

/// `None` when the profile has no employment history.
pub fn derive_facts(profile: &Profile, as_of: YearMonth) -> Result<Option<CareerFacts>> {
    let roles = chronological(&profile.career.roles)?;
    let Some((_, current)) = roles.last() else {
        return Ok(None);
    };

    let mut total_months = 0u32;
    for (_, role) in &roles {
        total_months =
            total_months.saturating_add(months_between(&role.start, role.end.as_deref(), as_of)?);
    }
    let current_months = months_between(&current.start, current.end.as_deref(), as_of)?;

    Ok(Some(CareerFacts {
        total_months,
        total_years: years_one_decimal(total_months),
        role_count: roles.len(),
        current_title: current.title.clone(),
        current_company: current.company.clone(),
        current_months,
    }))
}

/// Text following the first `|` up to the next one, or the whole headline.
pub fn focus_area(headline: &str) -> &str {
    match headline.split('|').nth(1) {
        Some(segment) => segment.trim(),
        None => headline,
    }
}

pub fn narrate(profile: &Profile, facts: Option<&CareerFacts>) -> String {
    let Some(facts) = facts else {
        return NO_HISTORY_SUMMARY.to_string();
    };
    format!(
        "{} has ~{:.1} years across {} roles. Currently at {} as {} (~{}). Focus areas inferred from headline: {}.",
        profile.name,
        facts.total_years,
        facts.role_count,
        facts.current_company,
        facts.current_title,
        format_duration(facts.current_months),
        focus_area(&profile.headline)
    )
}
