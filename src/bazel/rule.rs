//! The compilation rule model

use super::label::normalize_paths;
use super::record::{AttrValue, RuleRecord};
use crate::error::{ExtractError, Result};

/// One compilation rule of a package.
///
/// File lists hold workspace-relative paths; `deps` and `visibility` keep the
/// labels exactly as declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub kind: String,
    pub name: String,
    pub package: String,
    pub srcs: Vec<String>,
    pub hdrs: Vec<String>,
    pub textual_hdrs: Vec<String>,
    pub deps: Vec<String>,
    pub visibility: Vec<String>,
    pub testonly: bool,
}

impl Rule {
    /// Builds a rule from one query record of `package`.
    ///
    /// Missing list attributes default to empty and a missing `testonly` to
    /// false, but a missing `name` is an error.
    pub fn from_record(record: &RuleRecord, package: &str) -> Result<Self> {
        let name = match record.value("name", package)? {
            Some(AttrValue::String(name)) => name,
            Some(_) => return Err(shape_error(record, "name", package)),
            None => {
                return Err(ExtractError::MissingName {
                    package: package.to_string(),
                    class: record.class.clone(),
                })
            }
        };

        let testonly = match record.value("testonly", package)? {
            Some(AttrValue::Boolean(flag)) => flag,
            Some(_) => return Err(shape_error(record, "testonly", package)),
            None => false,
        };

        Ok(Self {
            kind: record.class.clone(),
            name,
            package: package.to_string(),
            srcs: normalize_paths(&list_attr(record, "srcs", package)?),
            hdrs: normalize_paths(&list_attr(record, "hdrs", package)?),
            textual_hdrs: normalize_paths(&list_attr(record, "textual_hdrs", package)?),
            deps: list_attr(record, "deps", package)?,
            visibility: list_attr(record, "visibility", package)?,
            testonly,
        })
    }

    /// Full label, e.g. `//absl/strings:strings`
    pub fn label(&self) -> String {
        format!("{}:{}", self.package, self.name)
    }

    pub fn has_files(&self) -> bool {
        !(self.srcs.is_empty() && self.hdrs.is_empty() && self.textual_hdrs.is_empty())
    }
}

fn list_attr(record: &RuleRecord, name: &str, package: &str) -> Result<Vec<String>> {
    match record.value(name, package)? {
        Some(AttrValue::List(items)) => Ok(items),
        Some(_) => Err(shape_error(record, name, package)),
        None => Ok(Vec::new()),
    }
}

fn shape_error(record: &RuleRecord, name: &str, package: &str) -> ExtractError {
    ExtractError::UnrecognizedAttribute {
        package: package.to_string(),
        attribute: name.to_string(),
        tag: record
            .attribute(name)
            .map(|a| a.tag.clone())
            .unwrap_or_default(),
    }
}
