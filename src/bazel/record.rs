//! Structured rule records as emitted by `bazel query --output xml`
//!
//! A query document looks like:
//!
//! ```xml
//! <query version="2">
//!   <rule class="cc_library" location="absl/strings/BUILD.bazel:10:11" name="//absl/strings:strings">
//!     <string name="name" value="strings"/>
//!     <list name="hdrs">
//!       <label value="//absl/strings:ascii.h"/>
//!     </list>
//!     <boolean name="testonly" value="false"/>
//!   </rule>
//!   <source-file name="//absl/strings:ascii.h" location="..."/>
//! </query>
//! ```
//!
//! Records are decoded into owned values without interpreting attribute
//! shapes; shape checks happen lazily in [`RuleRecord::value`], so attributes
//! nobody asks for (`<int>`, `<output>`, ...) never cause a fault.

use crate::error::{ExtractError, Result};
use roxmltree::{Document, Node};

/// A typed attribute value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    String(String),
    Boolean(bool),
    List(Vec<String>),
}

/// One attribute element of a rule, kept as the query printed it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAttribute {
    pub tag: String,
    pub name: String,
    pub value: Option<String>,
    pub items: Vec<String>,
}

/// One `<rule>` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleRecord {
    pub class: String,
    pub attributes: Vec<RawAttribute>,
}

impl RuleRecord {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_string(self, name: &str, value: &str) -> Self {
        self.with_attribute(RawAttribute {
            tag: "string".to_string(),
            name: name.to_string(),
            value: Some(value.to_string()),
            items: Vec::new(),
        })
    }

    pub fn with_bool(self, name: &str, value: bool) -> Self {
        self.with_attribute(RawAttribute {
            tag: "boolean".to_string(),
            name: name.to_string(),
            value: Some(value.to_string()),
            items: Vec::new(),
        })
    }

    pub fn with_list(self, name: &str, items: &[&str]) -> Self {
        self.with_attribute(RawAttribute {
            tag: "list".to_string(),
            name: name.to_string(),
            value: None,
            items: items.iter().map(|s| s.to_string()).collect(),
        })
    }

    pub fn with_attribute(mut self, attribute: RawAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&RawAttribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Looks up an attribute by name and decodes its value.
    ///
    /// Returns `Ok(None)` when the rule does not declare the attribute.
    pub fn value(&self, name: &str, package: &str) -> Result<Option<AttrValue>> {
        let Some(attribute) = self.attribute(name) else {
            return Ok(None);
        };

        let value = match attribute.tag.as_str() {
            "string" => AttrValue::String(attribute.value.clone().unwrap_or_default()),
            "boolean" => AttrValue::Boolean(attribute.value.as_deref() == Some("true")),
            "list" => AttrValue::List(attribute.items.clone()),
            other => {
                return Err(ExtractError::UnrecognizedAttribute {
                    package: package.to_string(),
                    attribute: name.to_string(),
                    tag: other.to_string(),
                })
            }
        };

        Ok(Some(value))
    }
}

/// Decodes every `<rule>` child of the query document root.
pub fn parse_query_output(xml: &str, package: &str) -> Result<Vec<RuleRecord>> {
    let doc = Document::parse(strip_declaration(xml)).map_err(|e| {
        ExtractError::MalformedQueryOutput {
            package: package.to_string(),
            message: e.to_string(),
        }
    })?;

    doc.root_element()
        .children()
        .filter(|n| n.has_tag_name("rule"))
        .map(|n| parse_rule_element(n, package))
        .collect()
}

// The declaration carries nothing we use and Bazel stamps it `version="1.1"`.
fn strip_declaration(xml: &str) -> &str {
    let trimmed = xml.trim_start();
    if trimmed.starts_with("<?xml") {
        if let Some(end) = trimmed.find("?>") {
            return &trimmed[end + 2..];
        }
    }
    trimmed
}

fn parse_rule_element(node: Node<'_, '_>, package: &str) -> Result<RuleRecord> {
    let class = node
        .attribute("class")
        .ok_or_else(|| ExtractError::MissingClass {
            package: package.to_string(),
        })?;

    let attributes = node
        .children()
        .filter(|n| n.is_element())
        .filter_map(|child| {
            let name = child.attribute("name")?;
            Some(RawAttribute {
                tag: child.tag_name().name().to_string(),
                name: name.to_string(),
                value: child.attribute("value").map(str::to_string),
                items: child
                    .children()
                    .filter(|n| n.is_element())
                    .filter_map(|item| item.attribute("value").map(str::to_string))
                    .collect(),
            })
        })
        .collect();

    Ok(RuleRecord {
        class: class.to_string(),
        attributes,
    })
}
