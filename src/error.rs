use thiserror::Error;

#[derive(Error, Debug)]
pub enum GrantError {
    #[error("grant not found in catalog: {0}")]
    GrantNotFound(String),

    #[error("malformed project profile: {0}")]
    MalformedProfile(String),

    #[error("invalid criteria for grant {grant_id}: {reason}")]
    InvalidCriteria { grant_id: String, reason: String },

    #[error("grant already present in catalog: {0}")]
    DuplicateGrant(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GrantError>;
