//! Package scanning through `bazel query`

use super::record::{parse_query_output, RuleRecord};
use crate::error::{ExtractError, Result};
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

/// Class prefix of the compiled-language rules a scan keeps
pub const CC_RULE_PREFIX: &str = "cc_";

/// Source of the rule records declared in one package.
///
/// Implementations return only compiled-language rules. Any closure
/// `Fn(&str) -> Result<Vec<RuleRecord>>` is a scanner.
pub trait PackageScanner {
    fn scan(&self, package: &str) -> Result<Vec<RuleRecord>>;
}

impl<F> PackageScanner for F
where
    F: Fn(&str) -> Result<Vec<RuleRecord>>,
{
    fn scan(&self, package: &str) -> Result<Vec<RuleRecord>> {
        self(package)
    }
}

/// Runs `<program> query <package>:all --output xml` in the workspace
/// directory, one blocking invocation per package.
#[derive(Debug, Clone)]
pub struct BazelQuery {
    program: String,
    workspace: PathBuf,
}

impl BazelQuery {
    pub fn new(program: impl Into<String>, workspace: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            workspace: workspace.into(),
        }
    }
}

fn retain_cc_rules(records: Vec<RuleRecord>) -> Vec<RuleRecord> {
    records
        .into_iter()
        .filter(|r| r.class.starts_with(CC_RULE_PREFIX))
        .collect()
}

impl PackageScanner for BazelQuery {
    fn scan(&self, package: &str) -> Result<Vec<RuleRecord>> {
        let target = format!("{}:all", package);
        debug!(program = %self.program, target = %target, "Running query");

        let output = Command::new(&self.program)
            .arg("query")
            .arg(&target)
            .args(["--output", "xml"])
            .current_dir(&self.workspace)
            .output()
            .map_err(|source| ExtractError::QuerySpawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ExtractError::QueryFailed {
                package: package.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let xml = String::from_utf8(output.stdout).map_err(|e| {
            ExtractError::MalformedQueryOutput {
                package: package.to_string(),
                message: e.to_string(),
            }
        })?;

        let records = retain_cc_rules(parse_query_output(&xml, package)?);

        debug!(package, rules = records.len(), "Query returned rules");
        Ok(records)
    }
}
