// Background summary worker: periodically logs how the monitored fleet is doing.

use crate::models::ServerSnapshot;
use crate::store::ResultStore;
use std::sync::Arc;
use tokio::time::{Duration, interval};
use tracing::Instrument;

/// Per-state server counts for one summary line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FleetSummary {
    pub total: usize,
    pub passing: usize,
    pub failing: usize,
    /// Initialized but no run recorded yet.
    pub pending: usize,
}

impl FleetSummary {
    pub fn from_snapshots(snapshots: &[ServerSnapshot]) -> Self {
        let mut summary = Self {
            total: snapshots.len(),
            ..Self::default()
        };
        for snapshot in snapshots {
            match &snapshot.results {
                None => summary.pending += 1,
                Some(r) if r.success => summary.passing += 1,
                Some(_) => summary.failing += 1,
            }
        }
        summary
    }
}

pub struct WorkerConfig {
    /// How often to log the fleet summary (real seconds).
    pub stats_log_interval_secs: u64,
}

pub fn spawn(
    store: Arc<ResultStore>,
    config: WorkerConfig,
    mut shutdown_rx: tokio::sync::oneshot::Receiver<()>,
) -> tokio::task::JoinHandle<()> {
    let stats_log_interval = Duration::from_secs(config.stats_log_interval_secs);

    let worker_span = tracing::span!(
        tracing::Level::DEBUG,
        "worker",
        stats_log_interval_secs = config.stats_log_interval_secs
    );

    tokio::spawn(
        async move {
            let mut stats_log_tick = interval(stats_log_interval);
            stats_log_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        tracing::debug!("Worker shutting down");
                        break;
                    }
                    _ = stats_log_tick.tick() => {
                        let summary = FleetSummary::from_snapshots(&store.get_all().await);
                        tracing::info!(
                            servers_total = summary.total,
                            servers_passing = summary.passing,
                            servers_failing = summary.failing,
                            servers_pending = summary.pending,
                            "fleet status"
                        );
                    }
                }
            }
        }
        .instrument(worker_span),
    )
}
