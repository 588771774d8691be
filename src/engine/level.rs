use crate::engine::career::years_one_decimal;
use crate::engine::tenure::YearMonth;
use crate::error::Result;
use crate::types::config::LevelThresholds;
use crate::types::profile::Profile;
use crate::types::report::SeniorityLevel;

/// Calendar span from the earliest start to the latest end, in years with one
/// decimal. Unlike tenure, overlapping roles are not double counted.
pub fn experience_span_years(profile: &Profile, as_of: YearMonth) -> Result<Option<f64>> {
    let mut earliest: Option<YearMonth> = None;
    let mut latest: Option<YearMonth> = None;
    for role in &profile.career.roles {
        let start = YearMonth::parse(&role.start)?;
        let end = match role.end.as_deref() {
            Some(token) => YearMonth::parse(token)?,
            None => as_of,
        };
        earliest = Some(earliest.map_or(start, |current| current.min(start)));
        latest = Some(latest.map_or(end, |current| current.max(end)));
    }

    Ok(match (earliest, latest) {
        (Some(start), Some(end)) => {
            let months = u32::try_from(start.months_until(end).max(0)).unwrap_or(u32::MAX);
            Some(years_one_decimal(months))
        }
        _ => None,
    })
}

/// Missing history defaults to `Mid`.
pub fn classify(years: Option<f64>, thresholds: &LevelThresholds) -> SeniorityLevel {
    match years {
        None => SeniorityLevel::Mid,
        Some(y) if y < thresholds.mid_from_years => SeniorityLevel::Junior,
        Some(y) if y < thresholds.senior_from_years => SeniorityLevel::Mid,
        Some(_) => SeniorityLevel::Senior,
    }
}

/// Best-effort role label: headline prefix, first listed title, first
/// declared skill, in that order.
pub fn role_hint(profile: &Profile) -> String {
    let headline = profile.headline.trim();
    if !headline.is_empty() {
        if let Some(prefix) = headline.split('|').next().map(str::trim) {
            if !prefix.is_empty() {
                return prefix.to_string();
            }
        }
    }
    profile
        .career
        .roles
        .first()
        .map(|role| role.title.trim())
        .filter(|title| !title.is_empty())
        .or_else(|| profile.career.skills.first().map(String::as_str))
        .unwrap_or("Unknown")
        .to_string()
}
