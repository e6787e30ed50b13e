use labelsync_models::{CategoryGroupedDocument, LabelCategory, LabelDefinition};
use serde_yaml::{Mapping, Value};
use shaku::{Component, Interface};
use tracing::debug;

use crate::{DomainError, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
pub trait ValidateLabelDocumentInterface: Interface {
    /// Parse raw YAML text into a category-grouped document.
    fn run(&self, raw: &str) -> Result<CategoryGroupedDocument>;
}

#[derive(Component)]
#[shaku(interface = ValidateLabelDocumentInterface)]
pub(crate) struct ValidateLabelDocument;

impl ValidateLabelDocumentInterface for ValidateLabelDocument {
    #[tracing::instrument(skip_all)]
    fn run(&self, raw: &str) -> Result<CategoryGroupedDocument> {
        if raw.trim().is_empty() {
            return Err(DomainError::schema("document is empty"));
        }

        let root: Value = serde_yaml::from_str(raw).map_err(|e| DomainError::ParseError {
            reason: e.to_string(),
            source: Some(e),
        })?;

        let root_kind = describe(&root);
        let mapping = match root {
            Value::Mapping(mapping) => mapping,
            Value::Null => return Err(DomainError::schema("document is empty")),
            Value::Sequence(_) => {
                return Err(DomainError::schema(
                    "root must be a mapping of categories, found a list",
                ))
            }
            Value::Tagged(tagged) => {
                return Err(DomainError::schema(format!(
                    "root must be a mapping of categories, found tag '{}'",
                    tagged.tag
                )))
            }
            Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                return Err(DomainError::ParseError {
                    reason: format!(
                        "expected a mapping of categories, found a scalar ({root_kind})"
                    ),
                    source: None,
                })
            }
        };

        if mapping.is_empty() {
            return Err(DomainError::schema("document has no categories"));
        }

        let categories = mapping
            .iter()
            .map(|(key, value)| Self::parse_category(key, value))
            .collect::<Result<Vec<_>>>()?;

        let document = CategoryGroupedDocument::new(categories);
        debug!(
            categories = ?document.category_names(),
            labels = document.label_count(),
            "Validated label document"
        );

        Ok(document)
    }
}

impl ValidateLabelDocument {
    fn parse_category(key: &Value, value: &Value) -> Result<LabelCategory> {
        let name = match key {
            Value::String(name) => name.clone(),
            other => {
                return Err(DomainError::schema(format!(
                    "category key must be a string, found {}",
                    describe(other)
                )))
            }
        };

        let entries = match value {
            Value::Sequence(entries) => entries,
            other => {
                return Err(DomainError::schema(format!(
                    "category '{name}' must be a list of labels, found {}",
                    describe(other)
                )))
            }
        };

        let labels = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| Self::parse_label(&name, index, entry))
            .collect::<Result<Vec<_>>>()?;

        Ok(LabelCategory::new(name, labels))
    }

    fn parse_label(category: &str, index: usize, entry: &Value) -> Result<LabelDefinition> {
        let location = format!("label #{} of category '{category}'", index + 1);
        let entry = match entry {
            Value::Mapping(entry) => entry,
            other => {
                return Err(DomainError::schema(format!(
                    "{location} must be a mapping, found {}",
                    describe(other)
                )))
            }
        };

        let name = match field(entry, "name") {
            Some(Value::String(name)) if !name.trim().is_empty() => name.clone(),
            Some(Value::String(_)) => {
                return Err(DomainError::schema(format!("{location} has an empty name")))
            }
            Some(other) => {
                return Err(DomainError::schema(format!(
                    "{location} name must be a string, found {}",
                    describe(other)
                )))
            }
            None => return Err(DomainError::schema(format!("{location} has no name"))),
        };

        let location = format!("label '{name}' of category '{category}'");
        let color = match field(entry, "color") {
            Some(Value::String(color)) => parse_color(color)
                .ok_or_else(|| DomainError::schema(format!("{location} has an invalid color")))?,
            Some(Value::Number(number)) => {
                return Err(DomainError::schema(format!(
                    "{location} color must be a quoted string, found the number {number}"
                )))
            }
            Some(other) => {
                return Err(DomainError::schema(format!(
                    "{location} color must be a string, found {}",
                    describe(other)
                )))
            }
            None => return Err(DomainError::schema(format!("{location} has no color"))),
        };

        let description = match field(entry, "description") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(description)) => description.clone(),
            Some(other) => {
                return Err(DomainError::schema(format!(
                    "{location} description must be a string, found {}",
                    describe(other)
                )))
            }
        };

        Ok(LabelDefinition::new(name, color, description))
    }
}

fn field<'v>(entry: &'v Mapping, name: &str) -> Option<&'v Value> {
    entry.get(name)
}

/// Normalize a color to 6 lowercase hex digits.
///
/// Unquoted colors YAML reads as numbers (`5319`, `100e10`, `0x1f`) lose
/// their original text and are rejected by the caller.
fn parse_color(color: &str) -> Option<String> {
    let color = color.trim().trim_start_matches('#').to_lowercase();

    if color.len() == 6 && color.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(color)
    } else {
        None
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
