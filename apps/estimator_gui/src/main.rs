mod backend_bridge;
mod controller;
mod ui;

use client_core::{load_settings, EstimatorState, FormState};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::EstimatorApp;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = load_settings();
    tracing::info!(
        endpoint = %settings.endpoint,
        ordering = ?settings.response_ordering,
        "starting estimator client"
    );
    let estimator = EstimatorState::new(FormState::default(), settings.response_ordering);

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("AI Housing Intelligence")
            .with_inner_size([1100.0, 720.0])
            .with_min_inner_size([820.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "AI Housing Intelligence",
        options,
        Box::new(|_cc| Ok(Box::new(EstimatorApp::new(cmd_tx, ui_rx, estimator)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run estimator window: {err}"))
}
