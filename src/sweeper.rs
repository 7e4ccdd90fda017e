use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::store::SubmissionStore;

/// Periodically purge expired entries until shutdown is signaled.
pub fn spawn(
    store: Arc<dyn SubmissionStore>,
    interval: Duration,
    shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(run(store, interval, shutdown))
}

async fn run(store: Arc<dyn SubmissionStore>, interval: Duration, mut shutdown: watch::Receiver<bool>) {
    tracing::debug!("Expiry sweeper started for {} store", store.backend());

    loop {
        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            changed = shutdown.changed() => {
                if changed.is_err() {
                    break;
                }
            }
        }

        if *shutdown.borrow() {
            break;
        }

        match store.purge_expired().await {
            Ok(0) => {}
            Ok(n) => tracing::info!("Purged {n} expired entries"),
            Err(e) => tracing::error!("Expiry sweep failed: {e}"),
        }
    }

    tracing::debug!("Expiry sweeper stopped");
}
