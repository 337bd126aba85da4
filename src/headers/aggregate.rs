//! Union of the headers exported by public libraries

use super::policy::HeaderPolicy;
use crate::bazel::Rule;
use std::collections::BTreeSet;
use tracing::debug;

/// Deduplicated public headers in lexicographic order.
///
/// Only `hdrs` count; sources and textual headers of a public library are
/// never part of the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicHeaders {
    headers: BTreeSet<String>,
}

impl PublicHeaders {
    pub fn collect<'r, I>(rules: I, policy: &HeaderPolicy) -> Self
    where
        I: IntoIterator<Item = &'r Rule>,
    {
        let mut headers = BTreeSet::new();
        let mut exporting = 0usize;

        for rule in rules.into_iter().filter(|r| policy.exports(r)) {
            exporting += 1;
            headers.extend(rule.hdrs.iter().cloned());
        }

        debug!(
            rules = exporting,
            headers = headers.len(),
            "Aggregated public headers"
        );
        Self { headers }
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn contains(&self, header: &str) -> bool {
        self.headers.contains(header)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.headers.iter().map(String::as_str)
    }

    pub fn include_lines(&self) -> Vec<String> {
        self.iter().map(include_directive).collect()
    }
}

pub fn include_directive(header: &str) -> String {
    format!("#include <{}>", header)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn library(package: &str, name: &str, hdrs: &[&str]) -> Rule {
        Rule {
            kind: "cc_library".to_string(),
            name: name.to_string(),
            package: package.to_string(),
            srcs: vec![format!("{}/impl.cc", package.trim_start_matches('/'))],
            hdrs: hdrs.iter().map(|s| s.to_string()).collect(),
            textual_hdrs: vec!["absl/base/internal/inline.inc".to_string()],
            deps: Vec::new(),
            visibility: Vec::new(),
            testonly: false,
        }
    }

    #[test]
    fn test_duplicates_collapse() {
        let rules = vec![
            library("//a", "one", &["a/b.h"]),
            library("//a", "two", &["a/b.h", "a/c.h"]),
        ];

        let headers = PublicHeaders::collect(&rules, &HeaderPolicy::default());
        assert_eq!(headers.len(), 2);
        assert_eq!(
            headers.include_lines(),
            vec!["#include <a/b.h>", "#include <a/c.h>"]
        );
    }

    #[test]
    fn test_sorted_regardless_of_discovery_order() {
        let rules = vec![
            library("//z", "z", &["z/last.h"]),
            library("//a", "a", &["a/m.h", "a/first.h"]),
            library("//m", "m", &["m/middle.h"]),
        ];

        let headers = PublicHeaders::collect(&rules, &HeaderPolicy::default());
        let order: Vec<&str> = headers.iter().collect();
        assert_eq!(order, vec!["a/first.h", "a/m.h", "m/middle.h", "z/last.h"]);
    }

    #[test]
    fn test_only_hdrs_of_exported_rules() {
        let mut test_lib = library("//t", "helpers", &["t/helpers.h"]);
        test_lib.testonly = true;
        let mut test_rule = library("//t", "check", &["t/check.h"]);
        test_rule.kind = "cc_test".to_string();
        let rules = vec![
            library("//pkg1", "x", &["pkg1/x.h"]),
            library("//pkg2", "internal_y", &["pkg2/internal_y.h"]),
            test_lib,
            test_rule,
        ];

        let headers = PublicHeaders::collect(&rules, &HeaderPolicy::default());
        assert_eq!(headers.include_lines(), vec!["#include <pkg1/x.h>"]);
        assert!(!headers.contains("pkg1/impl.cc"));
        assert!(!headers.contains("absl/base/internal/inline.inc"));
    }

    #[test]
    fn test_no_rules() {
        let rules: Vec<Rule> = Vec::new();
        let headers = PublicHeaders::collect(&rules, &HeaderPolicy::default());
        assert!(headers.is_empty());
        assert!(headers.include_lines().is_empty());
    }

    #[test]
    fn test_include_directive() {
        assert_eq!(
            include_directive("absl/strings/str_cat.h"),
            "#include <absl/strings/str_cat.h>"
        );
    }
}
