//! # rangedeck-adapter-console
//!
//! Console implementation of the [`PanelView`] port — renders frames, the
//! status banner, and the boot cover as ANSI lines on a writer (stdout by
//! default).
//!
//! Rendering never fails the caller: a broken pipe is traced and dropped,
//! since the panel must keep polling regardless of where its output goes.
//!
//! ## Dependency rule
//!
//! Depends on `rangedeck-app` (port traits) and `rangedeck-domain` only.

pub mod render;

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use rangedeck_app::ports::PanelView;
use rangedeck_domain::panel::{Banner, CoverStage, PanelFrame};
use rangedeck_domain::status::Direction;
use rangedeck_domain::time;

/// Console panel writing to any [`Write`] sink.
pub struct ConsolePanel<W> {
    out: Mutex<W>,
}

impl ConsolePanel<io::Stdout> {
    /// Panel writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsolePanel<W> {
    /// Panel writing to the given sink.
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    fn write_line(&self, line: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = writeln!(out, "{line}") {
            tracing::debug!(error = %err, "console write failed");
        }
    }

    fn write_lines(&self, lines: &[String]) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        for line in lines {
            if let Err(err) = writeln!(out, "{line}") {
                tracing::debug!(error = %err, "console write failed");
                return;
            }
        }
    }
}

impl<W: Write + Send> PanelView for ConsolePanel<W> {
    fn render(&self, frame: &PanelFrame) {
        let stamp = time::now().format("%H:%M:%S");
        let mut lines = vec![format!("{}\u{2500}\u{2500} {stamp} ", "\u{2500}".repeat(8))];
        lines.extend(render::frame_lines(frame));
        self.write_lines(&lines);
    }

    fn show_direction(&self, direction: Direction) {
        self.write_line(&render::direction_line(direction));
    }

    fn show_banner(&self, banner: &Banner) {
        self.write_line(&render::banner_line(banner));
    }

    fn show_cover(&self, stage: CoverStage) {
        let line = match stage {
            CoverStage::Shown => "Loading panel...",
            CoverStage::Fading => "Almost ready...",
            CoverStage::Hidden => "Panel live.",
        };
        self.write_line(line);
    }

    fn announce_link(&self, address: &str) {
        self.write_line(&format!("Connected to: {address}"));
    }
}
