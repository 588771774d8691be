use thiserror::Error;

#[derive(Error, Debug)]
pub enum TalentError {
    #[error("malformed date token: {0:?} (expected YYYY-MM or YYYY)")]
    MalformedDate(String),

    #[error("candidate not found: {0}")]
    CandidateNotFound(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid profile {id}: {reason}")]
    InvalidProfile { id: String, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TalentError>;
