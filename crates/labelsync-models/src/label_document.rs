use crate::LabelDefinition;

/// Named group of labels.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LabelCategory {
    pub name: String,
    pub labels: Vec<LabelDefinition>,
}

impl LabelCategory {
    pub fn new<N: Into<String>>(name: N, labels: Vec<LabelDefinition>) -> Self {
        Self {
            name: name.into(),
            labels,
        }
    }
}

/// Label document grouped by category, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryGroupedDocument {
    categories: Vec<LabelCategory>,
}

impl CategoryGroupedDocument {
    pub fn new(categories: Vec<LabelCategory>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[LabelCategory] {
        &self.categories
    }

    pub fn category_names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    /// Category names with their label counts.
    pub fn category_counts(&self) -> Vec<(String, usize)> {
        self.categories
            .iter()
            .map(|c| (c.name.clone(), c.labels.len()))
            .collect()
    }

    pub fn label_count(&self) -> usize {
        self.categories.iter().map(|c| c.labels.len()).sum()
    }
}
