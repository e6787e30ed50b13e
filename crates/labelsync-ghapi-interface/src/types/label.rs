use labelsync_models::LabelDefinition;
use serde::{Deserialize, Serialize};

/// GitHub Label.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct GhLabel {
    /// Name.
    pub name: String,
    /// Color.
    pub color: String,
    /// Description.
    pub description: Option<String>,
}

impl GhLabel {
    /// Description, with a missing one read as empty.
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Check if color and description match a definition.
    ///
    /// Names are not compared.
    pub fn same_content(&self, definition: &LabelDefinition) -> bool {
        self.color.eq_ignore_ascii_case(&definition.color)
            && self.description_or_empty() == definition.description
    }
}

impl From<&LabelDefinition> for GhLabel {
    fn from(definition: &LabelDefinition) -> Self {
        Self {
            name: definition.name.clone(),
            color: definition.color.clone(),
            description: Some(definition.description.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn same_content() {
        let definition = LabelDefinition::new("bug", "d73a4a", "");
        let label = GhLabel {
            name: "Bug".into(),
            color: "D73A4A".into(),
            description: None,
        };
        assert!(label.same_content(&definition));

        let label = GhLabel {
            description: Some("Something is broken".into()),
            ..label
        };
        assert!(!label.same_content(&definition));
    }

    #[test]
    fn from_definition() {
        let definition = LabelDefinition::new("bug", "d73a4a", "Broken");
        assert_eq!(
            GhLabel::from(&definition),
            GhLabel {
                name: "bug".into(),
                color: "d73a4a".into(),
                description: Some("Broken".into())
            }
        );
    }
}
