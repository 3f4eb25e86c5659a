//! Timing knobs for the panel's scheduled behaviour.

use std::time::Duration;

/// Every fixed delay in one place, so the binary can configure them and
/// tests can shrink them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelTiming {
    /// Cadence of the status poller.
    pub poll_period: Duration,
    /// How long a flashed notice stays before reverting to the neutral banner.
    pub notice_ttl: Duration,
    /// How long the loading cover stays fully visible during boot.
    pub cover_hold: Duration,
    /// How long the fade-out runs before the cover is hidden.
    pub cover_fade: Duration,
}

impl Default for PanelTiming {
    fn default() -> Self {
        Self {
            poll_period: Duration::from_millis(800),
            notice_ttl: Duration::from_secs(3),
            cover_hold: Duration::from_secs(2),
            cover_fade: Duration::from_millis(500),
        }
    }
}
