use crate::error::{Result, TalentError};
use crate::types::report::ProfileReport;
use std::fs;
use std::path::{Path, PathBuf};

fn file_stem(id: &str) -> String {
    let cleaned: String = id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "profile".to_string()
    } else {
        cleaned
    }
}

pub fn write_report(outdir: &Path, report: &ProfileReport) -> Result<PathBuf> {
    fs::create_dir_all(outdir).map_err(TalentError::Io)?;
    let out_path = outdir.join(format!("{}_report.json", file_stem(&report.id)));
    let json = serde_json::to_string_pretty(report)?;
    fs::write(&out_path, json).map_err(TalentError::Io)?;
    tracing::info!(path = %out_path.display(), "wrote report");
    Ok(out_path)
}
