use std::sync::Arc;

use clap::Parser;
use labelsync_config::{ApiDriver, Config};
use labelsync_core::{ChaChaRandomSource, CoreModule};
use labelsync_ghapi_github::GithubApiService;
use labelsync_ghapi_interface::ApiService;
use labelsync_ghapi_null::NullApiService;
use labelsync_sentry::with_sentry_configuration;
use labelsync_source::HttpSourceService;
use tokio::sync::RwLock;
use tracing::info;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    Result,
};

/// Keep repository labels in sync with a shared label taxonomy
#[derive(Parser)]
#[command(about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

impl Args {
    pub fn writes_labels(&self) -> bool {
        self.cmd.writes_labels()
    }
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let run = |config: Config, args: Args| async move {
            let core_module = CoreModule::builder().build();

            let api_service: Box<dyn ApiService + Send + Sync + 'static> = {
                if config.api.driver == ApiDriver::GitHub {
                    info!("Using GithubApiService API driver");
                    Box::new(GithubApiService::new(config.clone()))
                } else {
                    info!("Using NullApiService API driver");
                    Box::new(NullApiService::new())
                }
            };

            let ctx = CommandContext {
                config: config.clone(),
                core_module,
                api_service,
                source_service: Box::new(HttpSourceService::new(&config)),
                random_source: Box::new(ChaChaRandomSource::new(config.random_seed)),
                writer: Arc::new(RwLock::new(std::io::stdout())),
            };

            with_sentry_configuration(&config.clone(), || async {
                Self::parse_args_async(args, ctx).await
            })
            .await
        };

        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(run(config, args))
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}
