//! Rendering of the public header set

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::headers::PublicHeaders;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// `#include <path>` per line
    Include,
    /// Bare path per line
    Plain,
    /// JSON array of paths
    Json,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Renders the whole set; nothing is written anywhere until this returns.
    pub fn format(&self, headers: &PublicHeaders) -> Result<String> {
        match self.format {
            OutputFormat::Include => Ok(lines(headers.include_lines())),
            OutputFormat::Plain => Ok(lines(headers.iter())),
            OutputFormat::Json => {
                let paths: Vec<&str> = headers.iter().collect();
                let mut json = serde_json::to_string_pretty(&paths)
                    .context("Failed to serialize headers to JSON")?;
                json.push('\n');
                Ok(json)
            }
        }
    }
}

fn lines<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut output = String::new();
    for item in items {
        output.push_str(item.as_ref());
        output.push('\n');
    }
    output
}

/// Writes rendered output to a file, or to stdout when no path is given
pub fn write_output(rendered: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write output to {}", path.display())),
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(rendered.as_bytes())
                .and_then(|_| handle.flush())
                .context("Failed to write to stdout")
        }
    }
}
