//! Audit configuration.
//!
//! Values are resolved in three layers: built-in defaults, then an optional
//! JSON configuration file, then environment variables
//! (`ECOINDEX_VERBOSE`, `ECOINDEX_DISPLAY_HTML`). CLI flags are applied on
//! top by the binary.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AuditError, Result};

pub const DEFAULT_PASS_THRESHOLD: f64 = 90.0;
pub const DEFAULT_FAIL_THRESHOLD: f64 = 30.0;

/// Score bounds used to classify every 0-100 metric.
///
/// Invariant: `0 <= fail < pass <= 100`, enforced by [`Thresholds::new`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Thresholds {
    #[serde(default = "default_pass")]
    pub pass: f64,
    #[serde(default = "default_fail")]
    pub fail: f64,
}

fn default_pass() -> f64 {
    DEFAULT_PASS_THRESHOLD
}

fn default_fail() -> f64 {
    DEFAULT_FAIL_THRESHOLD
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            pass: DEFAULT_PASS_THRESHOLD,
            fail: DEFAULT_FAIL_THRESHOLD,
        }
    }
}

impl Thresholds {
    pub fn new(pass: f64, fail: f64) -> Result<Self> {
        let in_range = |v: f64| (0.0..=100.0).contains(&v);
        if !in_range(pass) || !in_range(fail) || fail >= pass {
            return Err(AuditError::InvalidThresholds { pass, fail });
        }
        Ok(Self { pass, fail })
    }

    pub fn validate(&self) -> Result<()> {
        Self::new(self.pass, self.fail).map(|_| ())
    }
}

/// One entry of the config file `outputs` list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSpec {
    pub format: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuditConfig {
    #[serde(default)]
    pub urls: Vec<String>,

    /// Visits per page; raw metrics are averaged over them.
    #[serde(default = "default_visits")]
    pub visits: u32,

    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default)]
    pub thresholds: Thresholds,

    /// Skip the Lighthouse categories and score the eco-index alone.
    #[serde(default)]
    pub eco_index_only: bool,

    /// Base directory for relative paths in `outputs`.
    #[serde(default)]
    pub output_path_dir: Option<PathBuf>,

    /// File the Sonar issues are attached to. Required for Sonar output.
    #[serde(default)]
    pub sonar_file_path: Option<String>,

    /// Report files to write after the audit, in addition to stdout.
    #[serde(default)]
    pub outputs: Vec<OutputSpec>,

    #[serde(default = "default_nav_timeout")]
    pub nav_timeout_secs: u64,

    #[serde(skip_deserializing)]
    pub verbose: bool,

    #[serde(skip_deserializing, default = "default_true")]
    pub display_html: bool,
}

fn default_visits() -> u32 {
    1
}

fn default_language() -> String {
    "en".to_string()
}

fn default_nav_timeout() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            urls: Vec::new(),
            visits: default_visits(),
            language: default_language(),
            thresholds: Thresholds::default(),
            eco_index_only: false,
            output_path_dir: None,
            sonar_file_path: None,
            outputs: Vec::new(),
            nav_timeout_secs: default_nav_timeout(),
            verbose: false,
            display_html: true,
        }
    }
}

impl AuditConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.thresholds.validate()?;
        Ok(config)
    }

    /// Applies `ECOINDEX_VERBOSE` and `ECOINDEX_DISPLAY_HTML`.
    pub fn apply_env(&mut self) {
        self.apply_env_values(
            std::env::var("ECOINDEX_VERBOSE").ok().as_deref(),
            std::env::var("ECOINDEX_DISPLAY_HTML").ok().as_deref(),
        );
    }

    fn apply_env_values(&mut self, verbose: Option<&str>, display_html: Option<&str>) {
        if let Some(v) = verbose {
            self.verbose = truthy(v);
        }
        if let Some(v) = display_html {
            self.display_html = truthy(v);
        }
    }
}

fn truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
