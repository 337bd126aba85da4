pub mod commands;
pub mod output;

pub use commands::{CliArgs, OutputFormatArg};
pub use output::{write_output, OutputFormat, OutputFormatter};

use crate::bazel::BazelQuery;
use crate::config::ExtractorConfig;
use crate::extract::extract_public_headers;
use crate::fs::RealFileSystem;
use anyhow::{Context, Result};
use tracing::{debug, error};

/// Runs one extraction and returns the process exit code
pub fn handle_extract(args: &CliArgs, config: ExtractorConfig) -> i32 {
    match run_extract(args, config) {
        Ok(()) => 0,
        Err(e) => {
            error!("{:#}", e);
            1
        }
    }
}

pub fn run_extract(args: &CliArgs, config: ExtractorConfig) -> Result<()> {
    config.validate()?;
    debug!("{}", config);

    let scanner = BazelQuery::new(config.bazel.clone(), config.workspace.clone());
    let headers = extract_public_headers(&RealFileSystem::new(), &scanner, &config)
        .with_context(|| format!("Failed to extract public headers under '{}'", config.root))?;

    let rendered = OutputFormatter::new(args.format.into()).format(&headers)?;
    write_output(&rendered, args.output.as_deref())
}
