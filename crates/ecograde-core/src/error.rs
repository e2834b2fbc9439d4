use thiserror::Error;

pub type Result<T> = std::result::Result<T, AuditError>;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("invalid thresholds: fail ({fail}) must be below pass ({pass}), both within 0-100")]
    InvalidThresholds { pass: f64, fail: f64 },

    #[error("unknown output format '{0}'. Valid formats: table, csv, json, html, sonar")]
    UnknownFormat(String),

    #[error("missing required configuration: {0}")]
    MissingConfig(&'static str),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("browser error: {0}")]
    Browser(String),

    #[error("navigation timed out after {0} seconds")]
    Timeout(u64),

    #[error("audit engine error: {0}")]
    AuditEngine(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
