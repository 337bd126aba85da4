//! Which rules contribute headers to the public surface

use crate::bazel::Rule;
use tracing::trace;

pub const LIBRARY_KIND: &str = "cc_library";
pub const PUBLIC_LABEL: &str = "//visibility:public";
pub const INTERNAL_MARKER: &str = "internal";
pub const DEFAULT_ROOT: &str = "absl";

/// The subpackage-restriction label for a root, e.g. `//absl:__subpackages__`
pub fn subpackages_label(root: &str) -> String {
    format!("//{}:__subpackages__", root.trim_matches('/'))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderPolicy {
    pub library_kind: String,
    pub public_label: String,
    pub subpackages_label: String,
    pub internal_marker: String,
}

impl Default for HeaderPolicy {
    fn default() -> Self {
        Self::for_root(DEFAULT_ROOT)
    }
}

impl HeaderPolicy {
    pub fn for_root(root: &str) -> Self {
        Self {
            library_kind: LIBRARY_KIND.to_string(),
            public_label: PUBLIC_LABEL.to_string(),
            subpackages_label: subpackages_label(root),
            internal_marker: INTERNAL_MARKER.to_string(),
        }
    }

    pub fn with_subpackages_label(mut self, label: impl Into<String>) -> Self {
        self.subpackages_label = label.into();
        self
    }

    /// A library rule that declares files and is not test-only.
    ///
    /// Tests and binaries are excluded even when they list headers, and so
    /// are alias-style libraries with no files at all.
    pub fn is_relevant(&self, rule: &Rule) -> bool {
        rule.kind == self.library_kind && rule.has_files() && !rule.testonly
    }

    /// Explicit visibility wins over the naming heuristic, and the subpackage
    /// restriction wins over the public label when a rule declares both.
    /// Everything else is public unless its package or name says "internal".
    pub fn is_public(&self, rule: &Rule) -> bool {
        let declares = |label: &str| rule.visibility.iter().any(|v| v == label);

        if declares(&self.subpackages_label) {
            return false;
        }
        if declares(&self.public_label) {
            return true;
        }
        let marker = self.internal_marker.as_str();
        !(rule.package.contains(marker) || rule.name.contains(marker))
    }

    pub fn exports(&self, rule: &Rule) -> bool {
        let relevant = self.is_relevant(rule);
        let public = relevant && self.is_public(rule);
        trace!(rule = %rule.label(), relevant, public, "Classified rule");
        public
    }
}
