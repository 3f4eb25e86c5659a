//! Panel view port — the view-binding interface the controller renders through.

use rangedeck_domain::panel::{Banner, CoverStage, PanelFrame};
use rangedeck_domain::status::Direction;

/// Presentation port for whatever surface shows the panel.
///
/// The controller never touches a concrete presentation layer; it pushes
/// ready-to-show values through this trait. Implementations must be cheap
/// and non-blocking — every method is called from the polling hot path or
/// from timer tasks.
pub trait PanelView: Send + Sync {
    /// Apply a freshly computed frame: distance readout, marker position,
    /// range band, direction indicator, and mode banner.
    fn render(&self, frame: &PanelFrame);

    /// Move only the direction indicator (optimistic update after an
    /// accepted command, without waiting for the next poll).
    fn show_direction(&self, direction: Direction);

    /// Replace the status banner.
    fn show_banner(&self, banner: &Banner);

    /// Advance the loading cover through its boot stages.
    fn show_cover(&self, stage: CoverStage);

    /// Announce which device address the panel is connected to.
    fn announce_link(&self, address: &str);
}
