//! Bazel-facing model: labels, query records, rules and package scanning

pub mod label;
pub mod query;
pub mod record;
pub mod rule;

pub use query::{BazelQuery, PackageScanner};
pub use record::{AttrValue, RawAttribute, RuleRecord};
pub use rule::Rule;
