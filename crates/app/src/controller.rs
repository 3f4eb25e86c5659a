//! Panel controller — use-cases driving the view from device state.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use rangedeck_domain::command::MotorCommand;
use rangedeck_domain::error::DeviceError;
use rangedeck_domain::panel::{Banner, PanelFrame};
use rangedeck_domain::status::{Direction, SensorStatus};

use crate::lock;
use crate::notifier::Notifier;
use crate::ports::{DeviceLink, PanelView};

/// Notice shown when a poll cannot reach the rig.
pub const UNREACHABLE_NOTICE: &str = "Cannot reach the device";
/// Notice shown when a command fails in transit.
pub const CONNECTION_NOTICE: &str = "Connection error";
/// Notice shown when a manual command is blocked by automatic mode.
pub const AUTO_MODE_NOTICE: &str = "Automatic mode is active - use the physical control";
/// Notice shown when the panel's mode toggle is pressed.
pub const MODE_TOGGLE_NOTICE: &str = "Use the physical switch on the device to change mode";

/// Local panel state mirroring the last known device status.
///
/// The explicit replacement for a pair of global mutable flags; only the
/// controller mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelState {
    /// Mirrors whether the last polled status reported AUTO mode.
    pub auto_mode: bool,
    /// Direction currently shown by the indicator.
    pub direction: Direction,
}

/// Outcome of a manual command dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The rig accepted; the indicator was updated optimistically.
    Sent,
    /// Automatic mode is active — no device call was made.
    Blocked,
    /// The rig refused the command or the transport failed.
    Failed,
}

/// Drives the panel: applies polled status, dispatches manual commands,
/// and flashes notices through the [`Notifier`].
pub struct PanelController<D, V> {
    device: D,
    view: Arc<V>,
    notifier: Notifier<V>,
    state: Mutex<PanelState>,
}

impl<D, V> PanelController<D, V>
where
    D: DeviceLink,
    V: PanelView + 'static,
{
    /// Wire a controller to a device link and a view.
    ///
    /// `notice_ttl` is how long flashed notices stay on the banner.
    pub fn new(device: D, view: Arc<V>, notice_ttl: Duration) -> Self {
        let notifier = Notifier::new(Arc::clone(&view), notice_ttl);
        Self {
            device,
            view,
            notifier,
            state: Mutex::new(PanelState::default()),
        }
    }

    /// Run one poll tick: read the rig and update the panel.
    ///
    /// A failed read flashes a notice and leaves the previous frame on
    /// screen; the schedule continues regardless.
    pub async fn poll_once(&self) {
        match self.device.read_status().await {
            Ok(status) => self.apply_status(&status),
            Err(err) => {
                tracing::warn!(error = %err, "status poll failed");
                self.notifier.flash(UNREACHABLE_NOTICE);
            }
        }
    }

    /// Apply a decoded status: refresh local state, render the frame, and
    /// drive the banner from the range band.
    fn apply_status(&self, status: &SensorStatus) {
        let frame = PanelFrame::from_status(status);
        {
            let mut state = lock(&self.state);
            state.auto_mode = status.mode.is_auto();
            state.direction = status.direction;
        }
        self.view.render(&frame);
        self.notifier.set(Banner::Range(frame.band));
    }

    /// Dispatch a manual motor command.
    ///
    /// While the rig reports automatic mode the command is rejected locally
    /// — no device call is made. On acceptance the direction indicator is
    /// updated optimistically, without waiting for the next poll; on any
    /// failure it is left unchanged.
    #[tracing::instrument(skip(self), fields(command = %command))]
    pub async fn dispatch(&self, command: MotorCommand) -> DispatchOutcome {
        if lock(&self.state).auto_mode {
            self.notifier.flash(AUTO_MODE_NOTICE);
            return DispatchOutcome::Blocked;
        }

        match self.device.send_command(command).await {
            Ok(_) => {
                let direction = command.direction();
                lock(&self.state).direction = direction;
                self.view.show_direction(direction);
                DispatchOutcome::Sent
            }
            Err(DeviceError::Rejected { message }) => {
                self.notifier.flash(message);
                DispatchOutcome::Failed
            }
            Err(err) => {
                tracing::warn!(error = %err, "motor command failed in transit");
                self.notifier.flash(CONNECTION_NOTICE);
                DispatchOutcome::Failed
            }
        }
    }

    /// Handle the panel's mode-toggle affordance.
    ///
    /// Mode is owned by the rig's physical switch; the panel only points
    /// the user at it.
    pub fn request_mode_toggle(&self) {
        self.notifier.flash(MODE_TOGGLE_NOTICE);
    }

    /// Snapshot of the local panel state.
    #[must_use]
    pub fn state(&self) -> PanelState {
        *lock(&self.state)
    }

    /// The banner currently on screen.
    #[must_use]
    pub fn banner(&self) -> Banner {
        self.notifier.current()
    }
}
