//! Subscription expiry sweep
//!
//! One sweep:
//! 1. Query active stores whose `subscription_expired_at` is before now
//! 2. For each store, independently: expire the store, expire its elapsed
//!    active subscription rows, append an audit entry
//! 3. Report counts
//!
//! A failing store is logged and skipped; only a failing query fails the
//! sweep. Stores that failed stay `active` and are matched again by the
//! next run, so no retry happens inside a single run.

mod error;
mod repository;
mod scheduler;


use futures::StreamExt;
use shared::tenant::ExpiredStore;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::clock::Clock;

pub use error::{BoxError, SweepError};
pub use repository::{ExpiryRepository, PgExpiryRepository, TransitionOutcome};
pub use scheduler::SweepScheduler;

/// Result of one sweep
#[derive(Debug, Default)]
pub struct SweepReport {
    /// Stores returned by the query
    pub matched: usize,
    /// Stores transitioned to `expired` by this run
    pub expired: usize,
    /// Stores already expired by a concurrent run
    pub skipped: usize,
    /// Subscription rows marked `expired`
    pub subscriptions_expired: u64,
    /// Per-store failures (store stays active, retried next run)
    pub failures: Vec<SweepError>,
}

impl SweepReport {
    /// Stores processed (transitioned) in this run
    pub fn processed(&self) -> usize {
        self.expired
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn is_partial(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Expires stores whose subscription has lapsed
#[derive(Clone)]
pub struct ExpirySweeper {
    repo: Arc<dyn ExpiryRepository>,
    clock: Arc<dyn Clock>,
    concurrency: usize,
}

impl ExpirySweeper {
    pub fn new(repo: Arc<dyn ExpiryRepository>, clock: Arc<dyn Clock>, concurrency: usize) -> Self {
        Self {
            repo,
            clock,
            concurrency: concurrency.max(1),
        }
    }

    /// Run one sweep
    pub async fn run(&self) -> Result<SweepReport, SweepError> {
        let now = self.clock.now_millis();

        let stores = self
            .repo
            .find_expired_stores(now)
            .await
            .map_err(SweepError::Query)?;

        let mut report = SweepReport {
            matched: stores.len(),
            ..Default::default()
        };

        if stores.is_empty() {
            debug!("No expired subscriptions");
            return Ok(report);
        }

        info!(count = stores.len(), "Expiring stores with lapsed subscriptions");

        let outcomes: Vec<(ExpiredStore, Result<TransitionOutcome, BoxError>)> =
            futures::stream::iter(stores)
                .map(|store| async move {
                    let outcome = self.repo.expire_store(&store, now).await;
                    (store, outcome)
                })
                .buffer_unordered(self.concurrency)
                .collect()
                .await;

        for (store, outcome) in outcomes {
            match outcome {
                Ok(TransitionOutcome::Expired {
                    subscriptions_expired,
                }) => {
                    report.expired += 1;
                    report.subscriptions_expired += subscriptions_expired;
                    tracing::info!(
                        target: "audit",
                        store_id = %store.id,
                        store_name = %store.name,
                        action = "subscription_expired",
                        subscription_expired_at = %shared::util::format_millis(store.subscription_expired_at),
                        subscriptions_expired,
                        "AUDIT"
                    );
                }
                Ok(TransitionOutcome::AlreadyTransitioned) => {
                    debug!(store_id = %store.id, "Store already expired, skipping");
                    report.skipped += 1;
                }
                Err(source) => {
                    let err = SweepError::Transition {
                        store_id: store.id,
                        source,
                    };
                    error!(error = %err, "Store expiry failed, will retry next sweep");
                    report.failures.push(err);
                }
            }
        }

        info!(
            matched = report.matched,
            expired = report.expired,
            skipped = report.skipped,
            failed = report.failed(),
            subscriptions_expired = report.subscriptions_expired,
            "Expiry sweep finished"
        );

        Ok(report)
    }
}
