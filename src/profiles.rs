use crate::error::{Result, TalentError};
use crate::types::profile::Profile;
use serde_json::Value;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub const DEFAULT_PROFILES_PATH: &str = "data/synthetic_profiles.json";

/// A profile record that was present in the input but did not decode.
#[derive(Debug, Clone)]
pub struct RejectedProfile {
    pub id: String,
    pub source: PathBuf,
    pub reason: String,
}

impl RejectedProfile {
    pub fn to_error(&self) -> TalentError {
        TalentError::InvalidProfile {
            id: self.id.clone(),
            reason: self.reason.clone(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ProfileSet {
    pub profiles: Vec<Profile>,
    pub rejected: Vec<RejectedProfile>,
}

impl ProfileSet {
    pub fn find(&self, id: &str) -> Result<&Profile> {
        if let Some(profile) = self.profiles.iter().find(|profile| profile.id == id) {
            return Ok(profile);
        }
        match self.rejected.iter().find(|rejected| rejected.id == id) {
            Some(rejected) => Err(rejected.to_error()),
            None => Err(TalentError::CandidateNotFound(id.to_string())),
        }
    }

    fn absorb(&mut self, other: ProfileSet) {
        self.profiles.extend(other.profiles);
        self.rejected.extend(other.rejected);
    }
}

/// Loads profiles from a JSON file (one profile or an array), or from every
/// `*.json` file under a directory in file-name order. Records that fail to
/// decode are kept aside in `rejected`; a file that is not JSON, or not an
/// object or array, is an error.
pub fn load_profiles(path: &Path) -> Result<ProfileSet> {
    if !path.exists() {
        return Err(TalentError::PathNotFound(path.display().to_string()));
    }
    if !path.is_dir() {
        return read_document(path);
    }

    let mut set = ProfileSet::default();
    for file in list_json_files(path) {
        set.absorb(read_document(&file)?);
    }
    tracing::debug!(
        path = %path.display(),
        count = set.profiles.len(),
        rejected = set.rejected.len(),
        "loaded profiles"
    );
    Ok(set)
}

fn list_json_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("json"))
        .collect()
}

fn read_document(path: &Path) -> Result<ProfileSet> {
    let content = std::fs::read_to_string(path)?;
    let records = match serde_json::from_str::<Value>(&content)? {
        Value::Array(items) => items,
        record @ Value::Object(_) => vec![record],
        _ => {
            return Err(TalentError::InvalidProfile {
                id: path.display().to_string(),
                reason: "expected a profile object or an array of profiles".to_string(),
            })
        }
    };

    let mut set = ProfileSet::default();
    for (index, record) in records.into_iter().enumerate() {
        let id = record_label(&record, index);
        match serde_json::from_value::<Profile>(record) {
            Ok(profile) => set.profiles.push(profile),
            Err(e) => {
                tracing::warn!(id = %id, path = %path.display(), error = %e, "rejected profile");
                set.rejected.push(RejectedProfile {
                    id,
                    source: path.to_path_buf(),
                    reason: e.to_string(),
                });
            }
        }
    }
    Ok(set)
}

/// The record's `id` when it is a string, else its position in the file.
fn record_label(record: &Value, index: usize) -> String {
    match record.get("id").and_then(Value::as_str) {
        Some(id) => id.to_string(),
        None => format!("#{index}"),
    }
}
