//! Pure line formatting for the console panel.
//!
//! Everything here turns domain values into ready-to-print strings; the
//! writer side lives in the crate root.

use rangedeck_domain::panel::{Banner, PanelFrame, RangeBand};
use rangedeck_domain::status::{Direction, Mode};

/// Width of the distance track, in character cells.
pub const TRACK_WIDTH: usize = 40;

pub(crate) const RED: &str = "\x1b[31m";
pub(crate) const GREEN: &str = "\x1b[32m";
pub(crate) const BLUE: &str = "\x1b[34m";
pub(crate) const DIM: &str = "\x1b[2m";
pub(crate) const RESET: &str = "\x1b[0m";

/// The distance track with the marker placed at `marker_percent`.
///
/// The marker lands in cell `round(pct / 100 * (width - 1))`, so 0% is the
/// left edge and 100% the right edge.
#[must_use]
pub fn track_line(marker_percent: f64, width: usize) -> String {
    let cells = width.max(2);
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let marker = ((marker_percent.clamp(0.0, 100.0) / 100.0) * (cells - 1) as f64).round() as usize;

    let mut line = String::with_capacity(cells * 3 + 2);
    line.push('[');
    for cell in 0..cells {
        line.push(if cell == marker { '\u{25cf}' } else { '\u{2500}' });
    }
    line.push(']');
    line
}

/// Distance readout, value shown verbatim.
#[must_use]
pub fn distance_line(distance_cm: f64) -> String {
    format!("Distance: {distance_cm} cm")
}

/// Direction indicator line.
#[must_use]
pub fn direction_line(direction: Direction) -> String {
    let glyph = match direction {
        Direction::Left => '\u{21ba}',
        Direction::Right => '\u{21bb}',
        Direction::Stop => '\u{25a0}',
    };
    format!("{glyph} {}", direction.label())
}

/// Mode banner line.
#[must_use]
pub fn mode_line(mode: Mode) -> String {
    match mode {
        Mode::Auto => "Automatic mode ACTIVE".to_string(),
        Mode::Manual => "Manual mode ACTIVE".to_string(),
    }
}

/// Status banner line, colored by tone.
///
/// Notices carry an error marker; active range bands get their band color;
/// the waiting state is dimmed.
#[must_use]
pub fn banner_line(banner: &Banner) -> String {
    match banner {
        Banner::Waiting => format!("{DIM}{}{RESET}", banner.text()),
        Banner::Range(band) => {
            let color = match band {
                RangeBand::Near => GREEN,
                RangeBand::Far => BLUE,
                RangeBand::OutOfRange => RED,
            };
            format!("{color}{}{RESET}", banner.text())
        }
        Banner::Error(message) => format!("{RED}\u{2718} {message}{RESET}"),
    }
}

/// All lines for one frame, in display order.
#[must_use]
pub fn frame_lines(frame: &PanelFrame) -> Vec<String> {
    vec![
        distance_line(frame.distance_cm),
        track_line(frame.marker_percent, TRACK_WIDTH),
        direction_line(frame.direction),
        mode_line(frame.mode),
    ]
}
