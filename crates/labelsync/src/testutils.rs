use std::{io::Write, sync::Arc};

use clap::Parser;
use labelsync_config::Config;
use labelsync_core::{random::MockRandomSource, CoreModule};
use labelsync_ghapi_interface::MockApiService;
use labelsync_source::MockSourceService;
use tokio::sync::RwLock;

use crate::{
    args::{Args, CommandExecutor},
    commands::CommandContext,
    Result,
};

pub(crate) struct CommandContextTest {
    pub config: Config,
    pub core_module: CoreModule,
    pub api_service: MockApiService,
    pub source_service: MockSourceService,
    pub random_source: MockRandomSource,
}

impl CommandContextTest {
    pub fn new() -> Self {
        Self {
            config: Config::from_defaults_no_version(),
            core_module: CoreModule::builder().build(),
            api_service: MockApiService::new(),
            source_service: MockSourceService::new(),
            random_source: MockRandomSource::new(),
        }
    }

    pub fn into_context(self, writer: Arc<RwLock<dyn Write + Send + Sync>>) -> CommandContext {
        CommandContext {
            config: self.config,
            core_module: self.core_module,
            api_service: Box::new(self.api_service),
            source_service: Box::new(self.source_service),
            random_source: Box::new(self.random_source),
            writer,
        }
    }
}

pub(crate) async fn try_test_command(
    ctx: CommandContextTest,
    command_args: &[&str],
) -> Result<String> {
    let buf = Arc::new(RwLock::new(Vec::new()));

    {
        let command_args = {
            let mut tmp_args = vec!["labelsync"];
            tmp_args.extend(command_args);
            tmp_args
        };

        let args = match Args::try_parse_from(command_args) {
            Ok(args) => args,
            Err(e) => {
                eprintln!("{}", e);
                panic!("Parse error.")
            }
        };

        CommandExecutor::parse_args_async(args, ctx.into_context(buf.clone())).await?;
    }

    let vec = buf.read().await.to_vec();
    Ok(std::str::from_utf8(&vec)?.to_string())
}

pub(crate) async fn test_command(ctx: CommandContextTest, command_args: &[&str]) -> String {
    try_test_command(ctx, command_args).await.unwrap()
}
