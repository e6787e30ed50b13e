use async_trait::async_trait;
use shaku::{Component, Interface};
use tokio::io::AsyncWriteExt;
use tracing::{debug, error, info, warn};

use crate::{
    summary::{SyncOutcome, SyncSummary},
    CoreContext,
};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ReportSyncSummaryInterface: Interface {
    /// Emit the run summary. Never fails.
    async fn run<'a>(&self, ctx: &CoreContext<'a>, summary: &SyncSummary);
}

#[derive(Component)]
#[shaku(interface = ReportSyncSummaryInterface)]
pub(crate) struct ReportSyncSummary;

#[async_trait]
impl ReportSyncSummaryInterface for ReportSyncSummary {
    #[tracing::instrument(skip_all)]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, summary: &SyncSummary) {
        Self::log_summary(summary);

        let path = &ctx.config.sync.step_summary_path;
        if path.is_empty() {
            return;
        }

        match Self::append_to_file(path, &summary.to_markdown()).await {
            Ok(()) => debug!(path = %path, "Appended step summary"),
            Err(e) => warn!(path = %path, error = %e, "Could not write step summary"),
        }
    }
}

impl ReportSyncSummary {
    fn log_summary(summary: &SyncSummary) {
        let timestamp = summary.timestamp_rfc3339();
        let categories = summary.categories_line();
        let report = summary.sync_line();

        match &summary.outcome {
            SyncOutcome::Success => info!(
                repository = %summary.repository,
                timestamp = %timestamp,
                actor = %summary.actor,
                trigger = %summary.trigger,
                source_url = %summary.source_url,
                categories = %categories,
                total_labels = summary.total_labels,
                report = %report,
                outcome = "success",
                "Label synchronization summary"
            ),
            SyncOutcome::Failure { stage, message } => error!(
                repository = %summary.repository,
                timestamp = %timestamp,
                actor = %summary.actor,
                trigger = %summary.trigger,
                source_url = %summary.source_url,
                categories = %categories,
                total_labels = summary.total_labels,
                report = %report,
                outcome = "failure",
                stage = %stage,
                error = %message,
                "Label synchronization summary"
            ),
        }
    }

    async fn append_to_file(path: &str, content: &str) -> std::io::Result<()> {
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await
    }
}

#[cfg(test)]
mod tests {
    use labelsync_models::{RepositoryPath, TriggerKind};

    use super::*;
    use crate::{context::tests::CoreContextTest, errors::SyncStage};

    fn summary(outcome: SyncOutcome) -> SyncSummary {
        SyncSummary {
            categories: vec![("status".into(), 2)],
            total_labels: 2,
            outcome,
            ..SyncSummary::new(
                RepositoryPath::new_from_components("me", "test"),
                "octocat".into(),
                TriggerKind::OnDemand,
                "https://example.com/labels.yml".into(),
            )
        }
    }

    #[tokio::test]
    async fn appends_markdown() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.md");
        std::fs::write(&path, "# Previous step\n").unwrap();

        let mut ctx = CoreContextTest::new();
        ctx.config.sync.step_summary_path = path.to_string_lossy().into_owned();

        ReportSyncSummary
            .run(&ctx.as_context(), &summary(SyncOutcome::Success))
            .await;
        ReportSyncSummary
            .run(
                &ctx.as_context(),
                &summary(SyncOutcome::Failure {
                    stage: SyncStage::Fetch,
                    message: "unreachable".into(),
                }),
            )
            .await;

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Previous step\n## ✅ Label sync: `me/test`"));
        assert!(content.contains("## ❌ Label sync: `me/test`"));
        assert!(content.contains("failure (fetch): unreachable"));
    }

    #[tokio::test]
    async fn unwritable_file_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();

        let mut ctx = CoreContextTest::new();
        // A directory cannot be opened for appending.
        ctx.config.sync.step_summary_path = dir.path().to_string_lossy().into_owned();

        ReportSyncSummary
            .run(&ctx.as_context(), &summary(SyncOutcome::Success))
            .await;
    }

    #[tokio::test]
    async fn disabled_file() {
        let ctx = CoreContextTest::new();
        assert!(ctx.config.sync.step_summary_path.is_empty());

        ReportSyncSummary
            .run(&ctx.as_context(), &summary(SyncOutcome::Success))
            .await;
    }
}
