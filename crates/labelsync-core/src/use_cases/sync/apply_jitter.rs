use std::time::Duration;

use async_trait::async_trait;
use labelsync_models::TriggerKind;
use shaku::{Component, Interface};
use tracing::info;

use crate::{random::RandomSource, CoreContext};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApplyJitterInterface: Interface {
    /// Sleep before a scheduled run, returns the applied delay.
    async fn run<'a>(&self, ctx: &CoreContext<'a>, trigger: TriggerKind) -> Duration;
}

#[derive(Component)]
#[shaku(interface = ApplyJitterInterface)]
pub(crate) struct ApplyJitter;

#[async_trait]
impl ApplyJitterInterface for ApplyJitter {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, trigger: TriggerKind) -> Duration {
        let window = Duration::from_secs(ctx.config.sync.jitter_window);
        let delay = compute_delay(trigger, window, ctx.random_source);

        if delay.is_zero() {
            info!(trigger = %trigger, "Starting without delay");
        } else {
            info!(
                trigger = %trigger,
                delay_ms = delay.as_millis() as u64,
                window_s = window.as_secs(),
                "Delaying scheduled run"
            );
            tokio::time::sleep(delay).await;
        }

        delay
    }
}

/// Pick a delay in `[0, window)` for scheduled runs, zero otherwise.
///
/// On-demand runs never consult the random source.
pub fn compute_delay(
    trigger: TriggerKind,
    window: Duration,
    random: &dyn RandomSource,
) -> Duration {
    match trigger {
        TriggerKind::OnDemand => Duration::ZERO,
        TriggerKind::Scheduled => {
            let window_ms = window.as_millis().min(u64::MAX as u128) as u64;
            if window_ms == 0 {
                return Duration::ZERO;
            }

            // Stay strictly below the window even if the source overshoots.
            Duration::from_millis(random.next(window_ms).min(window_ms - 1))
        }
    }
}
