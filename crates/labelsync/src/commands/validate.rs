use async_trait::async_trait;
use clap::Parser;
use labelsync_core::use_cases::document::{
    FetchLabelDocumentInterface, ValidateLabelDocumentInterface,
};
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext, CommandError},
    Result,
};

/// Check that the label document is well-formed
#[derive(Debug, Parser)]
pub(crate) struct ValidateCommand {
    /// Label document URL
    #[arg(long)]
    source_url: Option<String>,
}

#[async_trait]
impl Command for ValidateCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let source_url = ctx.source_url(self.source_url);

        let fetch_uc: &dyn FetchLabelDocumentInterface = ctx.core_module.resolve_ref();
        let raw = fetch_uc
            .run(&ctx.as_core_context(), &source_url)
            .await
            .map_err(CommandError::from)?;

        let validate_uc: &dyn ValidateLabelDocumentInterface = ctx.core_module.resolve_ref();
        let document = validate_uc.run(&raw).map_err(CommandError::from)?;

        let mut writer = ctx.writer.write().await;
        writeln!(
            writer,
            "Label document '{}' is valid: {} categories, {} labels.",
            source_url,
            document.categories().len(),
            document.label_count()
        )?;
        for (name, count) in document.category_counts() {
            writeln!(writer, "  - {name}: {count}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use labelsync_source::SourceError;
    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command, try_test_command, CommandContextTest};

    #[tokio::test]
    async fn run() -> Result<(), Box<dyn Error>> {
        let mut ctx = CommandContextTest::new();
        ctx.source_service.expect_fetch().once().return_once(|_| {
            Ok(concat!(
                "status:\n",
                "  - name: a\n",
                "    color: ededed\n",
                "  - name: b\n",
                "    color: ededed\n",
                "priority: []\n",
            )
            .into())
        });

        assert_eq!(
            test_command(
                ctx,
                &["validate", "--source-url", "https://example.com/l.yml"]
            )
            .await,
            concat!(
                "Label document 'https://example.com/l.yml' is valid: 2 categories, 2 labels.\n",
                "  - status: 2\n",
                "  - priority: 0\n",
            )
        );

        Ok(())
    }

    #[tokio::test]
    async fn schema_error() {
        let mut ctx = CommandContextTest::new();
        ctx.source_service
            .expect_fetch()
            .once()
            .return_once(|_| Ok("- name: bug\n  color: d73a4a\n".into()));

        let error = try_test_command(ctx, &["validate"]).await.unwrap_err();
        assert!(error.to_string().starts_with("schema stage failed: "));
    }

    #[tokio::test]
    async fn fetch_error() {
        let mut ctx = CommandContextTest::new();
        ctx.source_service.expect_fetch().once().return_once(|url| {
            Err(SourceError::StatusError {
                url: url.into(),
                status: 404,
            })
        });

        let error = try_test_command(ctx, &["validate"]).await.unwrap_err();
        assert!(error.to_string().starts_with("fetch stage failed: "));
    }
}
