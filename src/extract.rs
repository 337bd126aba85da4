//! End-to-end derivation of the public header set

use crate::bazel::PackageScanner;
use crate::collector::TreeCollector;
use crate::config::ExtractorConfig;
use crate::error::Result;
use crate::fs::FileSystem;
use crate::headers::PublicHeaders;
use tracing::info;

/// Collects every rule under the configured root and returns the headers of
/// the relevant, public ones. Fails without a partial result on any fault.
pub fn extract_public_headers(
    fs: &dyn FileSystem,
    scanner: &dyn PackageScanner,
    config: &ExtractorConfig,
) -> Result<PublicHeaders> {
    let rules = TreeCollector::new(fs, scanner)
        .with_build_files(config.build_files.clone())
        .collect(&config.workspace, &config.root)?;

    let headers = PublicHeaders::collect(&rules, &config.policy());
    info!(
        rules = rules.len(),
        headers = headers.len(),
        "Derived public headers"
    );
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bazel::RuleRecord;
    use crate::error::ExtractError;
    use crate::fs::MockFileSystem;
    use std::path::PathBuf;

    fn config(workspace: PathBuf) -> ExtractorConfig {
        ExtractorConfig {
            bazel: "bazel".to_string(),
            workspace,
            root: "absl".to_string(),
            build_files: vec!["BUILD.bazel".to_string()],
            subpackages_label: None,
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn test_subpackage_restricted_library_is_dropped() {
        let fs = MockFileSystem::new();
        fs.add_file("absl/strings/BUILD.bazel");
        let scanner = |_: &str| -> Result<Vec<RuleRecord>> {
            Ok(vec![
                RuleRecord::new("cc_library")
                    .with_string("name", "strings")
                    .with_list("hdrs", &["//absl/strings:str_cat.h"])
                    .with_list("visibility", &["//visibility:public"]),
                RuleRecord::new("cc_library")
                    .with_string("name", "cord")
                    .with_list("hdrs", &["//absl/strings:cord.h"])
                    .with_list(
                        "visibility",
                        &["//visibility:public", "//absl:__subpackages__"],
                    ),
            ])
        };

        let headers =
            extract_public_headers(&fs, &scanner, &config(fs.root().to_path_buf())).unwrap();
        assert_eq!(headers.include_lines(), vec!["#include <absl/strings/str_cat.h>"]);
    }

    #[test]
    fn test_missing_name_yields_no_headers() {
        let fs = MockFileSystem::new();
        fs.add_file("absl/BUILD.bazel");
        let scanner = |_: &str| -> Result<Vec<RuleRecord>> {
            Ok(vec![RuleRecord::new("cc_library").with_list("hdrs", &["//absl:a.h"])])
        };

        let result = extract_public_headers(&fs, &scanner, &config(fs.root().to_path_buf()));
        assert!(matches!(result, Err(ExtractError::MissingName { .. })));
    }
}
