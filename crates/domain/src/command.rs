//! Motor commands and the rig's acknowledgement payload.

use serde::Deserialize;

use crate::status::Direction;

/// A manual motor command the panel can send to the rig.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotorCommand {
    Left,
    Stop,
    Right,
}

impl MotorCommand {
    /// Path segment used by the rig's actuation endpoint.
    #[must_use]
    pub fn path_segment(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Stop => "stop",
            Self::Right => "right",
        }
    }

    /// The direction the indicator should show once the rig accepts this.
    #[must_use]
    pub fn direction(self) -> Direction {
        match self {
            Self::Left => Direction::Left,
            Self::Stop => Direction::Stop,
            Self::Right => Direction::Right,
        }
    }
}

impl std::fmt::Display for MotorCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path_segment())
    }
}

/// Acknowledgement returned by the rig's actuation endpoint.
///
/// The rig attaches extra diagnostic fields; only `success` and `message`
/// matter to the panel, the rest is ignored on decode. A missing `success`
/// flag counts as a refusal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommandAck {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
