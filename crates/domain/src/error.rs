//! Error conventions shared across the workspace.
//!
//! Talking to the rig can fail in exactly two ways, and the panel treats
//! both the same at the surface: a transient banner notice. The distinction
//! still matters to callers — a rejection carries the rig's own message,
//! a transport failure gets a generic one.

/// Failure reported by a device link.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeviceError {
    /// Network error, non-2xx response, or malformed body.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The rig answered but refused the command.
    #[error("command rejected: {message}")]
    Rejected { message: String },
}

impl DeviceError {
    /// Whether this is a transport-level failure.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Whether the rig explicitly refused a command.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}
