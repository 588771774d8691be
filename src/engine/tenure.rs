use crate::error::{Result, TalentError};
use chrono::{Datelike, NaiveDate, Utc};
use std::fmt;
use std::str::FromStr;

/// Month-granularity calendar point used for every tenure computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Accepts `YYYY-MM`, or a bare `YYYY` which resolves to January.
    pub fn parse(token: &str) -> Result<Self> {
        let trimmed = token.trim();
        let padded = if trimmed.len() == 4 {
            format!("{trimmed}-01-01")
        } else {
            format!("{trimmed}-01")
        };
        NaiveDate::parse_from_str(&padded, "%Y-%m-%d")
            .map(Self::from_date)
            .map_err(|_| TalentError::MalformedDate(token.to_string()))
    }

    pub fn from_date<D: Datelike>(date: D) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn current() -> Self {
        Self::from_date(Utc::now().date_naive())
    }

    fn ordinal(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }

    /// Signed month difference `other - self`.
    pub fn months_until(&self, other: YearMonth) -> i64 {
        other.ordinal() - self.ordinal()
    }
}

impl FromStr for YearMonth {
    type Err = TalentError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Whole months from `start` to `end`, at least 1. A missing `end` means the
/// role is ongoing and is measured up to `as_of`.
pub fn months_between(start: &str, end: Option<&str>, as_of: YearMonth) -> Result<u32> {
    let start = YearMonth::parse(start)?;
    let end = match end {
        Some(token) => YearMonth::parse(token)?,
        None => as_of,
    };
    let months = start.months_until(end).max(1);
    Ok(u32::try_from(months).unwrap_or(u32::MAX))
}
