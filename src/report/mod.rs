pub mod json;
pub mod md;

use crate::error::TalentError;
use crate::types::report::ProfileReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &ProfileReport, format: OutputFormat) -> Result<String, TalentError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(TalentError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
