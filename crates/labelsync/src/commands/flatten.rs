use async_trait::async_trait;
use clap::{Parser, ValueEnum};
use labelsync_core::use_cases::document::{
    FetchLabelDocumentInterface, FlattenLabelDocumentInterface, ValidateLabelDocumentInterface,
};
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext, CommandError},
    Result,
};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Print the flattened label list, as sent to the repository
#[derive(Debug, Parser)]
pub(crate) struct FlattenCommand {
    /// Label document URL
    #[arg(long)]
    source_url: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
}

#[async_trait]
impl Command for FlattenCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let core_ctx = ctx.as_core_context();
        let source_url = ctx.source_url(self.source_url);

        let fetch_uc: &dyn FetchLabelDocumentInterface = ctx.core_module.resolve_ref();
        let validate_uc: &dyn ValidateLabelDocumentInterface = ctx.core_module.resolve_ref();
        let flatten_uc: &dyn FlattenLabelDocumentInterface = ctx.core_module.resolve_ref();

        let raw = fetch_uc
            .run(&core_ctx, &source_url)
            .await
            .map_err(CommandError::from)?;
        let document = validate_uc.run(&raw).map_err(CommandError::from)?;
        let labels = flatten_uc.run(&document).map_err(CommandError::from)?;

        let output = match self.format {
            OutputFormat::Yaml => serde_yaml::to_string(&labels)?,
            OutputFormat::Json => serde_json::to_string_pretty(&labels)? + "\n",
        };

        write!(ctx.writer.write().await, "{output}")?;
        Ok(())
    }
}
