//! End-to-end smoke tests for the full panel stack.
//!
//! Each test wires the real controller, notifier, and console view against
//! the simulated rig — no network, no TTY. Output is captured through a
//! shared buffer standing in for stdout.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rangedeck_adapter_console::ConsolePanel;
use rangedeck_adapter_virtual::VirtualRig;
use rangedeck_app::controller::{AUTO_MODE_NOTICE, DispatchOutcome, PanelController};
use rangedeck_app::poller::spawn_status_poller;
use rangedeck_app::startup::run_boot_sequence;
use rangedeck_app::timing::PanelTiming;
use rangedeck_domain::command::MotorCommand;
use rangedeck_domain::status::{Direction, Mode};

/// Writer that keeps its buffer readable from the test.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn fast_timing() -> PanelTiming {
    PanelTiming {
        poll_period: Duration::from_millis(20),
        notice_ttl: Duration::from_millis(60),
        cover_hold: Duration::from_millis(20),
        cover_fade: Duration::from_millis(10),
    }
}

struct Panel {
    rig: Arc<VirtualRig>,
    controller: Arc<PanelController<Arc<VirtualRig>, ConsolePanel<SharedBuf>>>,
    view: Arc<ConsolePanel<SharedBuf>>,
    buf: SharedBuf,
}

fn panel() -> Panel {
    let rig = Arc::new(VirtualRig::default());
    let buf = SharedBuf::default();
    let view = Arc::new(ConsolePanel::new(buf.clone()));
    let controller = Arc::new(PanelController::new(
        Arc::clone(&rig),
        Arc::clone(&view),
        fast_timing().notice_ttl,
    ));
    Panel {
        rig,
        controller,
        view,
        buf,
    }
}

#[tokio::test]
async fn should_boot_poll_and_render_the_panel() {
    let panel = panel();
    let timing = fast_timing();

    run_boot_sequence(panel.view.as_ref(), &timing, "virtual rig").await;
    let poller = spawn_status_poller(Arc::clone(&panel.controller), timing.poll_period);
    tokio::time::sleep(timing.poll_period * 4).await;
    poller.shutdown();

    let output = panel.buf.contents();
    assert!(output.contains("Loading panel..."));
    assert!(output.contains("Panel live."));
    assert!(output.contains("Connected to: virtual rig"));
    assert!(output.contains("Distance:"));
    assert!(output.contains("Manual mode ACTIVE"));
}

#[tokio::test]
async fn should_drive_the_motor_from_the_panel() {
    let panel = panel();

    let outcome = panel.controller.dispatch(MotorCommand::Left).await;

    assert_eq!(outcome, DispatchOutcome::Sent);
    assert_eq!(panel.rig.snapshot().direction, Direction::Left);
    assert!(panel.buf.contents().contains("Turning left"));
}

#[tokio::test]
async fn should_block_panel_commands_while_the_rig_reports_auto_mode() {
    let panel = panel();
    panel.rig.set_mode(Mode::Auto);
    panel.controller.poll_once().await;

    let outcome = panel.controller.dispatch(MotorCommand::Right).await;

    assert_eq!(outcome, DispatchOutcome::Blocked);
    assert_eq!(panel.rig.snapshot().direction, Direction::Stop);
    let output = panel.buf.contents();
    assert!(output.contains("Automatic mode ACTIVE"));
    assert!(output.contains(AUTO_MODE_NOTICE));
}

#[tokio::test]
async fn should_flash_and_expire_a_notice_when_the_rig_goes_dark() {
    let panel = panel();
    panel.rig.set_offline(true);

    panel.controller.poll_once().await;
    assert!(panel.buf.contents().contains("Cannot reach the device"));

    // The notice expires back to the neutral banner.
    tokio::time::sleep(fast_timing().notice_ttl * 3).await;
    assert!(panel.buf.contents().contains("Waiting for data..."));
}

#[tokio::test]
async fn should_recover_polling_after_a_failed_tick() {
    let panel = panel();
    panel.rig.set_offline(true);
    panel.controller.poll_once().await;

    panel.rig.set_offline(false);
    panel.controller.poll_once().await;

    assert!(panel.buf.contents().contains("Distance:"));
}
