//! Run summary.

use std::fmt::Write;

use labelsync_models::{RepositoryPath, SyncReport, TriggerKind};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use crate::errors::{DomainError, SyncStage};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    Success,
    Failure { stage: SyncStage, message: String },
}

impl SyncOutcome {
    pub fn from_error(error: &DomainError) -> Self {
        Self::Failure {
            stage: error.stage(),
            message: error.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// What happened during one synchronization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncSummary {
    pub repository: RepositoryPath,
    pub timestamp: OffsetDateTime,
    pub actor: String,
    pub trigger: TriggerKind,
    pub source_url: String,
    /// Category names with their label count, in document order.
    pub categories: Vec<(String, usize)>,
    pub total_labels: usize,
    /// Absent when the run stopped before reaching the target repository.
    pub sync: Option<SyncReport>,
    pub outcome: SyncOutcome,
}

impl SyncSummary {
    pub fn new(
        repository: RepositoryPath,
        actor: String,
        trigger: TriggerKind,
        source_url: String,
    ) -> Self {
        Self {
            repository,
            timestamp: OffsetDateTime::now_utc(),
            actor,
            trigger,
            source_url,
            categories: Vec::new(),
            total_labels: 0,
            sync: None,
            outcome: SyncOutcome::Success,
        }
    }

    pub fn timestamp_rfc3339(&self) -> String {
        self.timestamp
            .format(&Rfc3339)
            .unwrap_or_else(|_| self.timestamp.to_string())
    }

    pub fn categories_line(&self) -> String {
        self.categories
            .iter()
            .map(|(name, count)| format!("{name}={count}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn outcome_line(&self) -> String {
        match &self.outcome {
            SyncOutcome::Success => "success".into(),
            SyncOutcome::Failure { stage, message } => format!("failure ({stage}): {message}"),
        }
    }

    pub fn sync_line(&self) -> String {
        self.sync
            .map(|report| report.to_string())
            .unwrap_or_else(|| "not attempted".into())
    }

    /// Render the summary as a Markdown section.
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();
        let icon = if self.outcome.is_success() { "✅" } else { "❌" };

        // Writing to a String cannot fail.
        let _ = writeln!(output, "## {icon} Label sync: `{}`\n", self.repository);
        let _ = writeln!(output, "| Field | Value |");
        let _ = writeln!(output, "|---|---|");
        let _ = writeln!(output, "| Outcome | {} |", self.outcome_line());
        let _ = writeln!(output, "| Timestamp | {} |", self.timestamp_rfc3339());
        let _ = writeln!(output, "| Actor | {} |", self.actor);
        let _ = writeln!(output, "| Trigger | {} |", self.trigger);
        let _ = writeln!(output, "| Source | {} |", self.source_url);
        let _ = writeln!(output, "| Total labels | {} |", self.total_labels);
        let _ = writeln!(output, "| Changes | {} |", self.sync_line());

        if !self.categories.is_empty() {
            let _ = writeln!(output, "\n| Category | Labels |");
            let _ = writeln!(output, "|---|---|");
            for (name, count) in &self.categories {
                let _ = writeln!(output, "| {name} | {count} |");
            }
        }

        output.push('\n');
        output
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use time::macros::datetime;

    use super::*;

    fn sample() -> SyncSummary {
        SyncSummary {
            repository: RepositoryPath::new("me/test").unwrap(),
            timestamp: datetime!(2024-03-01 10:00:00 UTC),
            actor: "octocat".into(),
            trigger: TriggerKind::Scheduled,
            source_url: "https://example.com/labels.yml".into(),
            categories: vec![("status".into(), 1), ("priority".into(), 1)],
            total_labels: 2,
            sync: Some(SyncReport {
                created: 2,
                prune: true,
                ..Default::default()
            }),
            outcome: SyncOutcome::Success,
        }
    }

    #[test]
    fn lines() {
        let summary = sample();
        assert_eq!(summary.timestamp_rfc3339(), "2024-03-01T10:00:00Z");
        assert_eq!(summary.categories_line(), "status=1, priority=1");
        assert_eq!(summary.outcome_line(), "success");
        assert_eq!(
            summary.sync_line(),
            "2 created, 0 updated, 0 deleted, 0 unchanged"
        );
    }

    #[test]
    fn markdown() {
        let markdown = sample().to_markdown();
        assert!(markdown.starts_with("## ✅ Label sync: `me/test`"));
        assert!(markdown.contains("| Trigger | scheduled |"));
        assert!(markdown.contains("| status | 1 |"));
    }

    #[test]
    fn failure_markdown() {
        let summary = SyncSummary {
            outcome: SyncOutcome::from_error(&DomainError::schema("no categories")),
            sync: None,
            categories: vec![],
            ..sample()
        };

        let markdown = summary.to_markdown();
        assert!(markdown.starts_with("## ❌"));
        assert!(markdown.contains("failure (schema): Invalid label document: no categories"));
        assert!(markdown.contains("| Changes | not attempted |"));
        assert!(!markdown.contains("| Category |"));
    }
}
