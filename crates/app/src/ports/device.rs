//! Device link port — how the panel talks to the rig.

use std::future::Future;

use rangedeck_domain::command::{CommandAck, MotorCommand};
use rangedeck_domain::error::DeviceError;
use rangedeck_domain::status::SensorStatus;

/// Outbound port for the rig's API.
///
/// Implementations live in adapter crates (`device_http` for the real rig,
/// `virtual` for the simulated one). Calls are independent and unordered:
/// the controller never serialises reads against writes, and overlapping
/// reads may resolve out of order.
pub trait DeviceLink: Send + Sync {
    /// Read the current sensor status.
    fn read_status(&self) -> impl Future<Output = Result<SensorStatus, DeviceError>> + Send;

    /// Ask the rig to drive the motor.
    ///
    /// Resolves to the rig's acknowledgement when the command is accepted.
    /// A refusing rig surfaces as [`DeviceError::Rejected`] carrying the
    /// rig's own message; anything else is [`DeviceError::Transport`].
    fn send_command(
        &self,
        command: MotorCommand,
    ) -> impl Future<Output = Result<CommandAck, DeviceError>> + Send;
}

/// Shared links work wherever a link does.
impl<T: DeviceLink> DeviceLink for std::sync::Arc<T> {
    fn read_status(&self) -> impl Future<Output = Result<SensorStatus, DeviceError>> + Send {
        self.as_ref().read_status()
    }

    fn send_command(
        &self,
        command: MotorCommand,
    ) -> impl Future<Output = Result<CommandAck, DeviceError>> + Send {
        self.as_ref().send_command(command)
    }
}
