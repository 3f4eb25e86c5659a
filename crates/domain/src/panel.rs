//! Pure mapping from a sensor status to what the panel shows.
//!
//! Everything in here is a function of the latest [`SensorStatus`] — no
//! state, no IO. The app layer computes a [`PanelFrame`] per poll tick and
//! pushes it through the view port.

use crate::status::{Direction, Mode, SensorStatus};

/// Full sweep of the distance track, in centimetres.
///
/// Readings at or beyond this pin the marker to the right edge.
pub const TRACK_RANGE_CM: f64 = 350.0;

/// Position of the distance marker along the track, in percent.
///
/// `min(distance / 350, 1) * 100`, clamped to `[0, 100]`. Monotonic
/// non-decreasing in the distance.
#[must_use]
pub fn marker_percent(distance_cm: f64) -> f64 {
    (distance_cm / TRACK_RANGE_CM * 100.0).clamp(0.0, 100.0)
}

/// Range band the current reading falls into.
///
/// The three bands are exhaustive and mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBand {
    /// Object between 100 and 200 cm inclusive.
    Near,
    /// Object above 200 and up to 300 cm.
    Far,
    /// Anything else, including readings below 100 cm.
    OutOfRange,
}

impl RangeBand {
    /// Band for a given distance in centimetres.
    #[must_use]
    pub fn for_distance(distance_cm: f64) -> Self {
        if (100.0..=200.0).contains(&distance_cm) {
            Self::Near
        } else if distance_cm > 200.0 && distance_cm <= 300.0 {
            Self::Far
        } else {
            Self::OutOfRange
        }
    }

    /// Whether this band is flagged "active" on the panel.
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, Self::OutOfRange)
    }

    /// Status-banner text for this band.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Near => "Object in near range (100-200cm)",
            Self::Far => "Object in far range (200-300cm)",
            Self::OutOfRange => "Out of range",
        }
    }
}

/// Everything the panel shows for one status reading.
///
/// Derived, never stored — a pure function of the latest [`SensorStatus`].
#[derive(Debug, Clone, PartialEq)]
pub struct PanelFrame {
    /// Distance readout, shown verbatim.
    pub distance_cm: f64,
    /// Marker position along the track, `0..=100`.
    pub marker_percent: f64,
    /// Range band driving the status banner.
    pub band: RangeBand,
    /// Direction indicator.
    pub direction: Direction,
    /// Mode banner, driven by the rig's reported mode.
    pub mode: Mode,
}

impl PanelFrame {
    /// Compute the frame for a status reading.
    #[must_use]
    pub fn from_status(status: &SensorStatus) -> Self {
        Self {
            distance_cm: status.distance,
            marker_percent: marker_percent(status.distance),
            band: RangeBand::for_distance(status.distance),
            direction: status.direction,
            mode: status.mode,
        }
    }
}

/// What the status banner currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Banner {
    /// Neutral state before the first reading or after a notice expires.
    #[default]
    Waiting,
    /// Range band from the latest successful poll.
    Range(RangeBand),
    /// A flashed notice (errors, blocked commands).
    Error(String),
}

impl Banner {
    /// The banner text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Waiting => "Waiting for data...",
            Self::Range(band) => band.label(),
            Self::Error(message) => message,
        }
    }
}

/// Stages of the loading cover shown during boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverStage {
    /// Fully visible, panel not yet live.
    Shown,
    /// Fade-out running.
    Fading,
    /// Gone; the panel is live.
    Hidden,
}
