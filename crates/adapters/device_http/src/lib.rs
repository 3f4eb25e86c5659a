//! # rangedeck-adapter-device-http
//!
//! HTTP device link using `reqwest` — implements the [`DeviceLink`] port
//! against the rig's JSON API.
//!
//! ## Endpoints
//!
//! | Method | Path | Payload |
//! |--------|------|---------|
//! | GET | `/api/sensor` | `{ "distance": number, "mode": "MANUAL"\|"AUTO", "direction": "LEFT"\|"RIGHT"\|"STOP" }` |
//! | POST | `/api/motor/{left\|stop\|right}` | `{ "success": bool, "message"?: string, ... }` |
//!
//! No other endpoints, no headers, no auth, no request bodies. Failures
//! collapse into the two [`DeviceError`] kinds: anything transport-shaped
//! (network error, non-2xx, malformed body) and explicit refusals.
//!
//! ## Dependency rule
//!
//! Depends on `rangedeck-app` (port traits) and `rangedeck-domain` only.

use rangedeck_app::ports::DeviceLink;
use rangedeck_domain::command::{CommandAck, MotorCommand};
use rangedeck_domain::error::DeviceError;
use rangedeck_domain::status::SensorStatus;

/// [`DeviceLink`] over the rig's HTTP API.
#[derive(Debug, Clone)]
pub struct HttpDeviceLink {
    base_url: String,
    client: reqwest::Client,
}

impl HttpDeviceLink {
    /// Create a link against the given base address
    /// (e.g. `http://192.168.1.100`). A trailing slash is tolerated.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// The base address this link talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn sensor_url(&self) -> String {
        format!("{}/api/sensor", self.base_url)
    }

    fn motor_url(&self, command: MotorCommand) -> String {
        format!("{}/api/motor/{}", self.base_url, command.path_segment())
    }
}

/// Turn the rig's acknowledgement into the port-level result.
fn ack_to_result(ack: CommandAck) -> Result<CommandAck, DeviceError> {
    if ack.success {
        Ok(ack)
    } else {
        Err(DeviceError::Rejected {
            message: ack
                .message
                .unwrap_or_else(|| "command refused".to_string()),
        })
    }
}

fn transport(err: &reqwest::Error) -> DeviceError {
    DeviceError::Transport(err.to_string())
}

impl DeviceLink for HttpDeviceLink {
    async fn read_status(&self) -> Result<SensorStatus, DeviceError> {
        let url = self.sensor_url();
        tracing::trace!(%url, "reading sensor status");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| transport(&err))?;
        if !response.status().is_success() {
            return Err(DeviceError::Transport(format!(
                "sensor endpoint answered {}",
                response.status()
            )));
        }
        response
            .json::<SensorStatus>()
            .await
            .map_err(|err| transport(&err))
    }

    async fn send_command(&self, command: MotorCommand) -> Result<CommandAck, DeviceError> {
        let url = self.motor_url(command);
        tracing::debug!(%command, "sending motor command");

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|err| transport(&err))?;
        if !response.status().is_success() {
            return Err(DeviceError::Transport(format!(
                "motor endpoint answered {}",
                response.status()
            )));
        }
        let ack = response
            .json::<CommandAck>()
            .await
            .map_err(|err| transport(&err))?;
        ack_to_result(ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_trim_trailing_slash_from_base_address() {
        let link = HttpDeviceLink::new("http://192.168.1.100/");
        assert_eq!(link.base_url(), "http://192.168.1.100");
    }

    #[test]
    fn should_build_sensor_url() {
        let link = HttpDeviceLink::new("http://192.168.1.100");
        assert_eq!(link.sensor_url(), "http://192.168.1.100/api/sensor");
    }

    #[test]
    fn should_build_motor_urls_per_command() {
        let link = HttpDeviceLink::new("http://rig.local");
        assert_eq!(
            link.motor_url(MotorCommand::Left),
            "http://rig.local/api/motor/left"
        );
        assert_eq!(
            link.motor_url(MotorCommand::Stop),
            "http://rig.local/api/motor/stop"
        );
        assert_eq!(
            link.motor_url(MotorCommand::Right),
            "http://rig.local/api/motor/right"
        );
    }

    #[test]
    fn should_pass_through_accepting_ack() {
        let ack = CommandAck {
            success: true,
            message: None,
        };
        assert_eq!(ack_to_result(ack.clone()), Ok(ack));
    }

    #[test]
    fn should_surface_refusal_with_the_rig_message() {
        let result = ack_to_result(CommandAck {
            success: false,
            message: Some("obstacle detected".to_string()),
        });
        assert_eq!(
            result,
            Err(DeviceError::Rejected {
                message: "obstacle detected".to_string()
            })
        );
    }

    #[test]
    fn should_surface_refusal_without_message_as_generic() {
        let result = ack_to_result(CommandAck {
            success: false,
            message: None,
        });
        assert_eq!(
            result,
            Err(DeviceError::Rejected {
                message: "command refused".to_string()
            })
        );
    }
}
