//! # rangedeck-adapter-virtual
//!
//! Virtual/demo device link — a simulated rig for testing and demonstration.
//!
//! The simulated rig sweeps its distance reading back and forth across the
//! track, honours motor commands in manual mode, and refuses them in
//! automatic mode the way the real firmware does. It can also be taken
//! offline to exercise the panel's failure paths.
//!
//! ## Dependency rule
//!
//! Depends on `rangedeck-app` (port traits) and `rangedeck-domain` only.

use std::sync::Mutex;

use rangedeck_app::ports::DeviceLink;
use rangedeck_domain::command::{CommandAck, MotorCommand};
use rangedeck_domain::error::DeviceError;
use rangedeck_domain::status::{Direction, Mode, SensorStatus};

/// Upper edge of the simulated sweep, in centimetres.
const SWEEP_MAX_CM: f64 = 400.0;
/// Distance the reading moves per poll.
const SWEEP_STEP_CM: f64 = 12.5;

/// A simulated rig behind the [`DeviceLink`] port.
pub struct VirtualRig {
    inner: Mutex<RigState>,
}

#[derive(Debug, Clone)]
struct RigState {
    distance: f64,
    step: f64,
    mode: Mode,
    direction: Direction,
    offline: bool,
}

impl Default for VirtualRig {
    fn default() -> Self {
        Self {
            inner: Mutex::new(RigState {
                distance: 40.0,
                step: SWEEP_STEP_CM,
                mode: Mode::Manual,
                direction: Direction::Stop,
                offline: false,
            }),
        }
    }
}

impl VirtualRig {
    /// Take the rig offline (reads and commands fail with a transport error)
    /// or bring it back.
    pub fn set_offline(&self, offline: bool) {
        self.lock().offline = offline;
    }

    /// Flip the simulated physical mode switch.
    pub fn set_mode(&self, mode: Mode) {
        self.lock().mode = mode;
    }

    /// Pin the distance reading (the sweep continues from there).
    pub fn set_distance(&self, distance_cm: f64) {
        self.lock().distance = distance_cm.clamp(0.0, SWEEP_MAX_CM);
    }

    /// Current simulated status without advancing the sweep.
    #[must_use]
    pub fn snapshot(&self) -> SensorStatus {
        let state = self.lock();
        SensorStatus {
            distance: state.distance,
            mode: state.mode,
            direction: state.direction,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, RigState> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl DeviceLink for VirtualRig {
    async fn read_status(&self) -> Result<SensorStatus, DeviceError> {
        let mut state = self.lock();
        if state.offline {
            return Err(DeviceError::Transport("virtual rig is offline".to_string()));
        }

        // Advance the sweep, bouncing off both ends of the track.
        state.distance += state.step;
        if state.distance >= SWEEP_MAX_CM {
            state.distance = SWEEP_MAX_CM;
            state.step = -state.step.abs();
        } else if state.distance <= 0.0 {
            state.distance = 0.0;
            state.step = state.step.abs();
        }

        Ok(SensorStatus {
            distance: state.distance,
            mode: state.mode,
            direction: state.direction,
        })
    }

    async fn send_command(&self, command: MotorCommand) -> Result<CommandAck, DeviceError> {
        let mut state = self.lock();
        if state.offline {
            return Err(DeviceError::Transport("virtual rig is offline".to_string()));
        }
        if state.mode.is_auto() {
            return Err(DeviceError::Rejected {
                message: "automatic mode is active".to_string(),
            });
        }

        state.direction = command.direction();
        Ok(CommandAck {
            success: true,
            message: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_sweep_distance_within_the_track() {
        let rig = VirtualRig::default();
        for _ in 0..200 {
            let status = rig.read_status().await.unwrap();
            assert!((0.0..=SWEEP_MAX_CM).contains(&status.distance));
        }
    }

    #[tokio::test]
    async fn should_bounce_off_the_far_end_of_the_sweep() {
        let rig = VirtualRig::default();
        rig.set_distance(SWEEP_MAX_CM - 1.0);

        let at_edge = rig.read_status().await.unwrap();
        assert_eq!(at_edge.distance, SWEEP_MAX_CM);

        let coming_back = rig.read_status().await.unwrap();
        assert!(coming_back.distance < SWEEP_MAX_CM);
    }

    #[tokio::test]
    async fn should_set_direction_when_command_accepted() {
        let rig = VirtualRig::default();

        let ack = rig.send_command(MotorCommand::Left).await.unwrap();
        assert!(ack.success);
        assert_eq!(rig.snapshot().direction, Direction::Left);

        rig.send_command(MotorCommand::Stop).await.unwrap();
        assert_eq!(rig.snapshot().direction, Direction::Stop);
    }

    #[tokio::test]
    async fn should_refuse_commands_in_automatic_mode() {
        let rig = VirtualRig::default();
        rig.set_mode(Mode::Auto);

        let result = rig.send_command(MotorCommand::Right).await;
        assert_eq!(
            result,
            Err(DeviceError::Rejected {
                message: "automatic mode is active".to_string()
            })
        );
        assert_eq!(rig.snapshot().direction, Direction::Stop);
    }

    #[tokio::test]
    async fn should_fail_with_transport_error_while_offline() {
        let rig = VirtualRig::default();
        rig.set_offline(true);

        assert!(rig.read_status().await.unwrap_err().is_transport());
        assert!(
            rig.send_command(MotorCommand::Left)
                .await
                .unwrap_err()
                .is_transport()
        );

        rig.set_offline(false);
        assert!(rig.read_status().await.is_ok());
    }

    #[tokio::test]
    async fn should_report_mode_from_the_simulated_switch() {
        let rig = VirtualRig::default();
        rig.set_mode(Mode::Auto);

        let status = rig.read_status().await.unwrap();
        assert_eq!(status.mode, Mode::Auto);
    }
}
