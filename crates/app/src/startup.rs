//! One-shot boot sequence for the panel.

use rangedeck_domain::panel::CoverStage;

use crate::ports::PanelView;
use crate::timing::PanelTiming;

/// Run the boot sequence: hold the loading cover, fade it out, hide it, and
/// announce the device address.
///
/// One-shot — no retry, no cancellation. The status poller should be
/// started right after this resolves.
pub async fn run_boot_sequence<V: PanelView>(view: &V, timing: &PanelTiming, device_address: &str) {
    view.show_cover(CoverStage::Shown);
    tokio::time::sleep(timing.cover_hold).await;
    view.show_cover(CoverStage::Fading);
    tokio::time::sleep(timing.cover_fade).await;
    view.show_cover(CoverStage::Hidden);
    view.announce_link(device_address);
}
