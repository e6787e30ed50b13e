//! Commands.

use std::{io::Write, sync::Arc};

use async_trait::async_trait;
use clap::Subcommand;
use labelsync_config::Config;
use labelsync_core::{CoreContext, CoreModule, DomainError, RandomSource, SyncStage};
use labelsync_ghapi_interface::ApiService;
use labelsync_source::SourceService;
use thiserror::Error;
use tokio::sync::RwLock;

use self::{flatten::FlattenCommand, sync::SyncCommand, validate::ValidateCommand};
use crate::Result;

mod flatten;
mod sync;
mod validate;

pub(crate) struct CommandContext {
    pub config: Config,
    pub core_module: CoreModule,
    pub api_service: Box<dyn ApiService + Send + Sync>,
    pub source_service: Box<dyn SourceService + Send + Sync>,
    pub random_source: Box<dyn RandomSource + Send + Sync>,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

impl CommandContext {
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            api_service: self.api_service.as_ref(),
            source_service: self.source_service.as_ref(),
            random_source: self.random_source.as_ref(),
        }
    }

    /// Source URL from the command line, or the configured one.
    pub fn source_url(&self, source_url: Option<String>) -> String {
        source_url.unwrap_or_else(|| self.config.source.url.clone())
    }
}

#[derive(Debug, Error)]
pub(crate) enum CommandError {
    #[error("{stage} stage failed: {source}")]
    StageFailed {
        stage: SyncStage,
        source: DomainError,
    },

    #[error("No repository given, pass one as argument or set LABELSYNC_REPOSITORY")]
    MissingRepository,
}

impl From<DomainError> for CommandError {
    fn from(e: DomainError) -> Self {
        Self::StageFailed {
            stage: e.stage(),
            source: e,
        }
    }
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Sync(SyncCommand),
    Flatten(FlattenCommand),
    Validate(ValidateCommand),
}

impl SubCommand {
    /// Whether the command writes labels through the API.
    pub fn writes_labels(&self) -> bool {
        matches!(self, Self::Sync(_))
    }
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Sync(sub) => sub.execute(ctx).await,
            Self::Flatten(sub) => sub.execute(ctx).await,
            Self::Validate(sub) => sub.execute(ctx).await,
        }
    }
}
