//! # rangedeckd — rangedeck control-panel daemon
//!
//! Composition root that wires the adapters together and runs the panel.
//!
//! ## Responsibilities
//! - Load configuration (TOML file + environment overrides)
//! - Initialize tracing
//! - Build the device link (HTTP rig or simulated)
//! - Build the console view and the controller
//! - Run the boot sequence, then start the poller and the input loop
//! - Shut both down on SIGINT
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no panel logic belongs here.

mod config;

use std::sync::Arc;

use rangedeck_adapter_console::ConsolePanel;
use rangedeck_adapter_device_http::HttpDeviceLink;
use rangedeck_adapter_virtual::VirtualRig;
use rangedeck_app::controller::PanelController;
use rangedeck_app::poller::spawn_status_poller;
use rangedeck_app::ports::{DeviceLink, PanelView};
use rangedeck_app::startup::run_boot_sequence;
use rangedeck_app::timing::PanelTiming;
use rangedeck_domain::command::MotorCommand;
use tokio::io::AsyncBufReadExt;
use tracing_subscriber::EnvFilter;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let timing = config.panel_timing();
    if config.device.virtual_rig {
        tracing::info!("driving a simulated rig");
        run_panel(VirtualRig::default(), "virtual rig", timing).await
    } else {
        tracing::info!(address = %config.device.address, "driving the rig over HTTP");
        let link = HttpDeviceLink::new(&config.device.address);
        run_panel(link, &config.device.address, timing).await
    }
}

/// Boot the panel, start the poller and the input loop, and run until
/// interrupted.
async fn run_panel<D>(device: D, address: &str, timing: PanelTiming) -> anyhow::Result<()>
where
    D: DeviceLink + 'static,
{
    let view = Arc::new(ConsolePanel::stdout());
    let controller = Arc::new(PanelController::new(
        device,
        Arc::clone(&view),
        timing.notice_ttl,
    ));

    run_boot_sequence(view.as_ref(), &timing, address).await;
    let poller = spawn_status_poller(Arc::clone(&controller), timing.poll_period);
    let input = spawn_input_loop(controller);

    tokio::signal::ctrl_c().await?;
    tracing::info!("shutting down");
    poller.shutdown();
    input.abort();
    Ok(())
}

/// Panel inputs typed on stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PanelInput {
    Motor(MotorCommand),
    ModeToggle,
}

/// Map a typed line to a panel input.
fn parse_input(line: &str) -> Option<PanelInput> {
    match line.trim().to_ascii_lowercase().as_str() {
        "left" | "l" => Some(PanelInput::Motor(MotorCommand::Left)),
        "stop" | "s" => Some(PanelInput::Motor(MotorCommand::Stop)),
        "right" | "r" => Some(PanelInput::Motor(MotorCommand::Right)),
        "mode" | "m" => Some(PanelInput::ModeToggle),
        _ => None,
    }
}

/// Read panel inputs from stdin.
///
/// Dispatches run as independent tasks, so a slow rig never blocks further
/// input; there is no de-duplication of commands in flight.
fn spawn_input_loop<D, V>(controller: Arc<PanelController<D, V>>) -> tokio::task::JoinHandle<()>
where
    D: DeviceLink + 'static,
    V: PanelView + 'static,
{
    tokio::spawn(async move {
        let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            match parse_input(&line) {
                Some(PanelInput::Motor(command)) => {
                    let controller = Arc::clone(&controller);
                    tokio::spawn(async move {
                        controller.dispatch(command).await;
                    });
                }
                Some(PanelInput::ModeToggle) => controller.request_mode_toggle(),
                None if line.trim().is_empty() => {}
                None => tracing::warn!(input = %line.trim(), "unknown panel input"),
            }
        }
    })
}
