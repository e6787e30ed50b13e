use async_trait::async_trait;
use labelsync_models::{RepositoryPath, TriggerKind};
use shaku::{Component, HasComponent, Interface};

use super::{ApplyJitterInterface, ReportSyncSummaryInterface, SynchronizeLabelsInterface};
use crate::{
    summary::{SyncOutcome, SyncSummary},
    use_cases::document::{
        FetchLabelDocumentInterface, FlattenLabelDocumentInterface,
        ValidateLabelDocumentInterface,
    },
    CoreContext, Result,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncRequest {
    pub repository_path: RepositoryPath,
    pub source_url: String,
    pub trigger: TriggerKind,
    pub actor: String,
    pub prune: bool,
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait RunLabelSyncInterface: Interface {
    /// Full pipeline: jitter, fetch, validate, flatten, sync, then report.
    ///
    /// The summary is reported on every path, failures included.
    async fn run<'a>(&self, ctx: &CoreContext<'a>, request: &SyncRequest) -> Result<SyncSummary>;
}

#[derive(Component)]
#[shaku(interface = RunLabelSyncInterface)]
pub(crate) struct RunLabelSync;

#[async_trait]
impl RunLabelSyncInterface for RunLabelSync {
    #[tracing::instrument(
        skip(self, ctx, request),
        fields(repository_path = %request.repository_path, trigger = %request.trigger)
    )]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, request: &SyncRequest) -> Result<SyncSummary> {
        let jitter_uc: &dyn ApplyJitterInterface = ctx.core_module.resolve_ref();
        jitter_uc.run(ctx, request.trigger).await;

        let mut summary = SyncSummary::new(
            request.repository_path.clone(),
            request.actor.clone(),
            request.trigger,
            request.source_url.clone(),
        );

        let result = self.run_stages(ctx, request, &mut summary).await;
        if let Err(e) = &result {
            summary.outcome = SyncOutcome::from_error(e);
            if let Some(partial) = e.partial_report() {
                summary.sync = Some(partial);
            }
        }

        let report_uc: &dyn ReportSyncSummaryInterface = ctx.core_module.resolve_ref();
        report_uc.run(ctx, &summary).await;

        result.map(|_| summary)
    }
}

impl RunLabelSync {
    async fn run_stages<'a>(
        &self,
        ctx: &CoreContext<'a>,
        request: &SyncRequest,
        summary: &mut SyncSummary,
    ) -> Result<()> {
        let fetch_uc: &dyn FetchLabelDocumentInterface = ctx.core_module.resolve_ref();
        let raw = fetch_uc.run(ctx, &request.source_url).await?;

        let validate_uc: &dyn ValidateLabelDocumentInterface = ctx.core_module.resolve_ref();
        let document = validate_uc.run(&raw)?;
        summary.categories = document.category_counts();
        summary.total_labels = document.label_count();

        let flatten_uc: &dyn FlattenLabelDocumentInterface = ctx.core_module.resolve_ref();
        let labels = flatten_uc.run(&document)?;

        let sync_uc: &dyn SynchronizeLabelsInterface = ctx.core_module.resolve_ref();
        let report = sync_uc
            .run(ctx, &request.repository_path, &labels, request.prune)
            .await?;
        summary.sync = Some(report);

        Ok(())
    }
}
