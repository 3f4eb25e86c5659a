//! Sensor status — the wire payload returned by the rig's status endpoint.
//!
//! Received fresh on every poll and never persisted. Decoding is forgiving
//! on purpose: the rig's firmware predates this panel, and older builds omit
//! fields or send values outside the enumerations. Anything unrecognised
//! falls through to the same defaults the rig itself assumes.

use serde::{Deserialize, Deserializer, Serialize};

/// Control mode reported by the rig.
///
/// The physical switch on the rig owns this value; the panel only mirrors it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    #[default]
    Manual,
    Auto,
}

impl Mode {
    /// Whether the rig drives itself (panel commands are disabled).
    #[must_use]
    pub fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }
}

impl<'de> Deserialize<'de> for Mode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Unrecognised values fall through to MANUAL, like the rig's default branch.
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "AUTO" => Self::Auto,
            _ => Self::Manual,
        })
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Manual => f.write_str("MANUAL"),
            Self::Auto => f.write_str("AUTO"),
        }
    }
}

/// Direction the motor is currently turning, as reported by the rig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Left,
    Right,
    #[default]
    Stop,
}

impl Direction {
    /// Human-readable indicator text for this direction.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Left => "Turning left",
            Self::Right => "Turning right",
            Self::Stop => "Motor stopped",
        }
    }
}

impl<'de> Deserialize<'de> for Direction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Anything that is not LEFT or RIGHT renders as stopped.
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "LEFT" => Self::Left,
            "RIGHT" => Self::Right,
            _ => Self::Stop,
        })
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => f.write_str("LEFT"),
            Self::Right => f.write_str("RIGHT"),
            Self::Stop => f.write_str("STOP"),
        }
    }
}

/// One status reading from the rig.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SensorStatus {
    /// Measured distance in centimetres. Missing readings decode as `0`.
    #[serde(default)]
    pub distance: f64,
    /// Current control mode.
    #[serde(default)]
    pub mode: Mode,
    /// Current motor direction.
    #[serde(default)]
    pub direction: Direction,
}
