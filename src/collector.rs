//! Package discovery and rule collection over a directory tree

use crate::bazel::label::package_label;
use crate::bazel::{PackageScanner, Rule};
use crate::error::{ExtractError, Result};
use crate::fs::{DirEntry, FileSystem};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

pub const DEFAULT_BUILD_FILES: &[&str] = &["BUILD.bazel", "BUILD"];

/// Walks a tree and gathers the rules of every package in it.
///
/// Directories are visited parent first, children in file-name order. A
/// directory without a build file is not a package but is still descended
/// into. Symlinks are not followed.
pub struct TreeCollector<'a> {
    fs: &'a dyn FileSystem,
    scanner: &'a dyn PackageScanner,
    build_files: Vec<String>,
}

impl<'a> TreeCollector<'a> {
    pub fn new(fs: &'a dyn FileSystem, scanner: &'a dyn PackageScanner) -> Self {
        Self {
            fs,
            scanner,
            build_files: DEFAULT_BUILD_FILES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn with_build_files(mut self, build_files: Vec<String>) -> Self {
        self.build_files = build_files;
        self
    }

    /// Collects the rules under `workspace/root`, where `root` is a
    /// '/'-separated path relative to the workspace.
    pub fn collect(&self, workspace: &Path, root: &str) -> Result<Vec<Rule>> {
        let start = Instant::now();
        let root = root.trim_matches('/');
        let root_dir = workspace.join(root);

        if !self.fs.is_dir(&root_dir) {
            return Err(ExtractError::RootNotFound(root_dir));
        }

        let mut rules = Vec::new();
        let mut packages = 0usize;
        self.visit(&root_dir, root, &mut rules, &mut packages)?;

        info!(
            root,
            packages,
            rules = rules.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Collected rules"
        );
        Ok(rules)
    }

    fn visit(
        &self,
        dir: &Path,
        relative: &str,
        rules: &mut Vec<Rule>,
        packages: &mut usize,
    ) -> Result<()> {
        if self.is_package(dir) {
            let package = package_label(relative);
            let records = self.scanner.scan(&package)?;
            debug!(package = %package, records = records.len(), "Scanned package");

            for record in &records {
                rules.push(Rule::from_record(record, &package)?);
            }
            *packages += 1;
        }

        let mut subdirs: Vec<DirEntry> = self
            .fs
            .read_dir(dir)?
            .into_iter()
            .filter(DirEntry::is_dir)
            .collect();
        subdirs.sort_by(|a, b| a.name.cmp(&b.name));

        for subdir in subdirs {
            let child = format!("{}/{}", relative, subdir.name);
            self.visit(subdir.path(), &child, rules, packages)?;
        }

        Ok(())
    }

    fn is_package(&self, dir: &Path) -> bool {
        self.build_files
            .iter()
            .any(|name| self.fs.is_file(&dir.join(name)))
    }
}
