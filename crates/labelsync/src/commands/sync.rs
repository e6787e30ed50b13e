use async_trait::async_trait;
use clap::Parser;
use labelsync_core::use_cases::sync::{RunLabelSyncInterface, SyncRequest};
use labelsync_models::{RepositoryPath, TriggerKind};
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext, CommandError},
    Result,
};

/// Synchronize repository labels with the label document
#[derive(Debug, Parser)]
pub(crate) struct SyncCommand {
    /// Repository path (e.g. 'MyOrganization/my-project'), defaults to LABELSYNC_REPOSITORY
    repository_path: Option<RepositoryPath>,

    /// Label document URL
    #[arg(long)]
    source_url: Option<String>,

    /// Trigger kind ('scheduled' or 'on-demand'), derived from the CI event when missing
    #[arg(long)]
    trigger: Option<TriggerKind>,

    /// Who triggered the run
    #[arg(long)]
    actor: Option<String>,

    /// Keep labels missing from the document
    #[arg(long)]
    no_prune: bool,
}

impl SyncCommand {
    fn repository_path(&self, ctx: &CommandContext) -> Result<RepositoryPath> {
        if let Some(path) = &self.repository_path {
            return Ok(path.clone());
        }

        if ctx.config.sync.repository.is_empty() {
            return Err(CommandError::MissingRepository.into());
        }

        Ok(RepositoryPath::new(&ctx.config.sync.repository)?)
    }

    fn trigger(&self, ctx: &CommandContext) -> Result<TriggerKind> {
        if let Some(trigger) = self.trigger {
            return Ok(trigger);
        }

        if ctx.config.sync.trigger.is_empty() {
            Ok(TriggerKind::from_event_name(&ctx.config.sync.event_name))
        } else {
            Ok(ctx.config.sync.trigger.parse()?)
        }
    }
}

#[async_trait]
impl Command for SyncCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let request = SyncRequest {
            repository_path: self.repository_path(&ctx)?,
            trigger: self.trigger(&ctx)?,
            actor: self
                .actor
                .clone()
                .unwrap_or_else(|| ctx.config.sync.actor.clone()),
            prune: ctx.config.sync.prune && !self.no_prune,
            source_url: ctx.source_url(self.source_url),
        };

        let run_label_sync: &dyn RunLabelSyncInterface = ctx.core_module.resolve_ref();
        let summary = run_label_sync
            .run(&ctx.as_core_context(), &request)
            .await
            .map_err(CommandError::from)?;

        writeln!(
            ctx.writer.write().await,
            "Labels of '{}' synchronized: {}.",
            summary.repository,
            summary.sync_line()
        )?;

        Ok(())
    }
}
