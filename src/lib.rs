//! pubheaders - public header inventory for Bazel C/C++ trees
//!
//! Walks a directory tree, asks the build tool for the `cc_*` rules of every
//! package it finds, and derives the set of headers a consumer may include.
//!
//! # Core Concepts
//!
//! - **Rule**: one compilation rule with its file lists and visibility, see
//!   [`bazel::Rule`]
//! - **Package scanner**: anything that turns a package label into rule
//!   records; [`bazel::BazelQuery`] runs `bazel query`, closures work in tests
//! - **Header policy**: which rules are relevant and which are public, see
//!   [`headers::HeaderPolicy`]
//!
//! # Example Usage
//!
//! ```no_run
//! use pubheaders::bazel::BazelQuery;
//! use pubheaders::fs::RealFileSystem;
//! use pubheaders::{extract_public_headers, ExtractorConfig};
//!
//! let config = ExtractorConfig::default();
//! let scanner = BazelQuery::new("bazel", ".");
//! let headers = extract_public_headers(&RealFileSystem::new(), &scanner, &config)?;
//!
//! for line in headers.include_lines() {
//!     println!("{}", line);
//! }
//! # Ok::<(), pubheaders::ExtractError>(())
//! ```

pub mod bazel;
pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod extract;
pub mod fs;
pub mod headers;
pub mod util;

pub use bazel::{BazelQuery, PackageScanner, Rule, RuleRecord};
pub use collector::TreeCollector;
pub use config::{ConfigError, ExtractorConfig};
pub use error::ExtractError;
pub use extract::extract_public_headers;
pub use headers::{HeaderPolicy, PublicHeaders};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
