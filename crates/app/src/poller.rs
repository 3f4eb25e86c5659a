//! Fixed-cadence status poller.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::controller::PanelController;
use crate::ports::{DeviceLink, PanelView};

/// Handle to a running poller.
///
/// Dropping the handle leaves the task running; call
/// [`shutdown`](Self::shutdown) to stop the schedule.
#[derive(Debug)]
pub struct PollerHandle {
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// Stop the schedule. Reads already in flight resolve on their own.
    pub fn shutdown(self) {
        self.task.abort();
    }

    /// Whether the schedule has stopped.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Spawn the status poller at the given cadence.
///
/// Every tick spawns an independent read so a slow response never delays
/// the schedule; overlapping responses apply in completion order (the last
/// one to arrive wins). The cadence is never paused or backed off on
/// failure.
pub fn spawn_status_poller<D, V>(
    controller: Arc<PanelController<D, V>>,
    period: Duration,
) -> PollerHandle
where
    D: DeviceLink + 'static,
    V: PanelView + 'static,
{
    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            let controller = Arc::clone(&controller);
            tokio::spawn(async move {
                controller.poll_once().await;
            });
        }
    });
    PollerHandle { task }
}
