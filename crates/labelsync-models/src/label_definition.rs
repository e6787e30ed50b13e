use serde::{Deserialize, Serialize};

/// Label definition, as found in the label document and as sent to the target.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LabelDefinition {
    /// Name, unique within a repository.
    pub name: String,
    /// Color, 6 hexadecimal digits without `#`.
    pub color: String,
    /// Description.
    #[serde(default)]
    pub description: String,
}

impl LabelDefinition {
    pub fn new<N, C, D>(name: N, color: C, description: D) -> Self
    where
        N: Into<String>,
        C: Into<String>,
        D: Into<String>,
    {
        Self {
            name: name.into(),
            color: color.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn deserialize_without_description() {
        let label: LabelDefinition =
            serde_json::from_str(r#"{"name": "bug", "color": "d73a4a"}"#).unwrap();
        assert_eq!(label, LabelDefinition::new("bug", "d73a4a", ""));
    }
}
