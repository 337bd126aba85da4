//! Configuration management for pubheaders
//!
//! Settings are loaded from environment variables with fallback defaults;
//! command-line flags override individual fields afterwards.
//!
//! # Environment Variables
//!
//! - `PUBHEADERS_BAZEL`: Build tool program - default: "bazel"
//! - `PUBHEADERS_ROOT`: Root directory, relative to the workspace - default: "absl"
//! - `PUBHEADERS_BUILD_FILES`: Comma-separated package file names - default: "BUILD.bazel,BUILD"
//! - `PUBHEADERS_LOG_LEVEL`: Logging level - default: "info"
//!
//! # Example
//!
//! ```no_run
//! use pubheaders::ExtractorConfig;
//!
//! let config = ExtractorConfig::default();
//! config.validate().expect("Invalid configuration");
//!
//! let policy = config.policy();
//! assert_eq!(policy.subpackages_label, "//absl:__subpackages__");
//! ```

use crate::collector::DEFAULT_BUILD_FILES;
use crate::headers::policy::{subpackages_label, DEFAULT_ROOT};
use crate::headers::HeaderPolicy;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_BAZEL: &str = "bazel";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Program invoked for `query`
    pub bazel: String,

    /// Directory the tree lives in and the build tool runs in
    pub workspace: PathBuf,

    /// Root of the walk, relative to the workspace
    pub root: String,

    /// File names that make a directory a package
    pub build_files: Vec<String>,

    /// Overrides the label derived from the root
    pub subpackages_label: Option<String>,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        let bazel = env::var("PUBHEADERS_BAZEL").unwrap_or_else(|_| DEFAULT_BAZEL.to_string());

        let root = env::var("PUBHEADERS_ROOT").unwrap_or_else(|_| DEFAULT_ROOT.to_string());

        let build_files = env::var("PUBHEADERS_BUILD_FILES")
            .map(|v| parse_build_files(&v))
            .unwrap_or_else(|_| DEFAULT_BUILD_FILES.iter().map(|s| s.to_string()).collect());

        let log_level = env::var("PUBHEADERS_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        Self {
            bazel,
            workspace: PathBuf::from("."),
            root,
            build_files,
            subpackages_label: None,
            log_level,
        }
    }
}

impl ExtractorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bazel.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Build tool program cannot be empty".to_string(),
            ));
        }

        if self.root.trim_matches('/').is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Root directory cannot be empty".to_string(),
            ));
        }
        if Path::new(&self.root).is_absolute() {
            return Err(ConfigError::ValidationFailed(format!(
                "Root directory must be relative to the workspace: {}",
                self.root
            )));
        }
        if self.root.split('/').any(|c| c == "." || c == "..") {
            return Err(ConfigError::ValidationFailed(format!(
                "Root directory cannot contain '.' or '..' segments: {}",
                self.root
            )));
        }

        if self.build_files.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "At least one build file name is required".to_string(),
            ));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    pub fn policy(&self) -> HeaderPolicy {
        let label = self
            .subpackages_label
            .clone()
            .unwrap_or_else(|| subpackages_label(&self.root));
        HeaderPolicy::for_root(&self.root).with_subpackages_label(label)
    }
}

impl fmt::Display for ExtractorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pubheaders Configuration:")?;
        writeln!(f, "  Build Tool: {}", self.bazel)?;
        writeln!(f, "  Workspace: {}", self.workspace.display())?;
        writeln!(f, "  Root: {}", self.root)?;
        writeln!(f, "  Build Files: {}", self.build_files.join(", "))?;
        writeln!(f, "  Subpackages Label: {}", self.policy().subpackages_label)?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        Ok(())
    }
}

fn parse_build_files(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
