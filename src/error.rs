//! Error taxonomy for header extraction
//!
//! Every variant is fatal: an incomplete rule inventory would under-report the
//! public surface, so nothing here is retried or downgraded to a warning.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// A rule record has no `name` attribute
    #[error("Rule of class '{class}' in package {package} has no name attribute")]
    MissingName { package: String, class: String },

    /// A `<rule>` element has no `class` attribute
    #[error("Rule element in package {package} has no class attribute")]
    MissingClass { package: String },

    /// A looked-up attribute has a shape other than string, boolean or list
    #[error("Cannot recognize tag '{tag}' of attribute '{attribute}' in package {package}")]
    UnrecognizedAttribute {
        package: String,
        attribute: String,
        tag: String,
    },

    /// The build tool could not be started at all
    #[error("Failed to run '{program}': {source}")]
    QuerySpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The build tool exited unsuccessfully
    #[error("Query for {package} failed ({status}): {stderr}")]
    QueryFailed {
        package: String,
        status: String,
        stderr: String,
    },

    /// The build tool printed something that is not a query document
    #[error("Malformed query output for {package}: {message}")]
    MalformedQueryOutput { package: String, message: String },

    #[error("Root directory does not exist: {0}")]
    RootNotFound(PathBuf),

    #[error(transparent)]
    Filesystem(#[from] anyhow::Error),
}

pub type Result<T, E = ExtractError> = std::result::Result<T, E>;
