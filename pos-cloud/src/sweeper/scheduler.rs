//! 订阅过期扫描调度器
//!
//! 启动时立即扫描一次，之后按固定间隔触发，直到收到 shutdown 信号。

use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use super::ExpirySweeper;

pub struct SweepScheduler {
    sweeper: ExpirySweeper,
    interval: Duration,
    shutdown: CancellationToken,
}

impl SweepScheduler {
    pub fn new(sweeper: ExpirySweeper, interval: Duration, shutdown: CancellationToken) -> Self {
        Self {
            sweeper,
            interval,
            shutdown,
        }
    }

    /// 主循环：启动扫描 → 周期触发
    pub async fn run(self) {
        tracing::info!(
            interval_secs = self.interval.as_secs(),
            "Expiry sweep scheduler started"
        );

        let mut ticker = tokio::time::interval(self.interval.max(Duration::from_millis(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    // Query failures only skip this tick; the next one retries
                    if let Err(e) = self.sweeper.run().await {
                        tracing::error!(error = %e, "Expiry sweep failed");
                    }
                }
                _ = self.shutdown.cancelled() => {
                    tracing::info!("Expiry sweep scheduler received shutdown signal");
                    break;
                }
            }
        }

        tracing::info!("Expiry sweep scheduler stopped");
    }
}
