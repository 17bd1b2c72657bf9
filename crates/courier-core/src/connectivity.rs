//! Alert the user when the device loses internet access.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::alerts::{Alert, AlertPresenter};

/// Network reachability as reported by the host platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NetworkAccess {
    Internet,
    ConstrainedInternet,
    Local,
    None,
    #[default]
    Unknown,
}

impl NetworkAccess {
    /// Only full internet access counts as connected.
    pub const fn has_internet(self) -> bool {
        matches!(self, Self::Internet)
    }
}

/// Watch connectivity changes and show `alert` whenever internet access is lost.
///
/// The current value at subscription time is not alerted on; only later
/// changes are. The task ends when the sending side is dropped.
///
/// Reachability is a state, not an event log: the watcher reacts to the
/// latest value it observes, so an outage that recovers before the task wakes
/// up produces no alert.
pub fn watch_connectivity<P: AlertPresenter>(
    mut changes: watch::Receiver<NetworkAccess>,
    presenter: Arc<P>,
    alert: Alert,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while changes.changed().await.is_ok() {
            let access = *changes.borrow_and_update();
            if access.has_internet() {
                continue;
            }

            tracing::info!("Internet access lost ({access:?})");
            if let Err(error) = presenter.show(alert.clone()).await {
                tracing::warn!("Failed to show connectivity alert: {error}");
            }
        }
        tracing::debug!("Connectivity source closed");
    })
}
