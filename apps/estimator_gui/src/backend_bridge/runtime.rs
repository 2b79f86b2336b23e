//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{
    ClientSettings, HttpPredictionService, PredictionOrchestrator, PredictionOutcome,
};
use crossbeam_channel::{Receiver, Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{StartupError, UiEvent};

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, settings: ClientSettings) {
    let service = match HttpPredictionService::from_settings(&settings) {
        Ok(service) => service,
        Err(err) => {
            let _ = ui_tx.try_send(UiEvent::StartupFailed(StartupError::HttpClient(
                err.to_string(),
            )));
            tracing::error!("failed to build prediction http client: {err}");
            return;
        }
    };
    tracing::info!(endpoint = service.endpoint(), "prediction endpoint configured");
    spawn_worker(
        cmd_rx,
        ui_tx,
        PredictionOrchestrator::new(Arc::new(service)),
    );
}

/// Runs the backend on its own thread. Each prediction gets its own task,
/// so overlapping submits race and report back in arrival order.
pub fn spawn_worker(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    orchestrator: PredictionOrchestrator,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::StartupFailed(StartupError::Runtime(
                    err.to_string(),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::Predict(ticket) => {
                        let orchestrator = orchestrator.clone();
                        let ui_tx = ui_tx.clone();
                        tokio::spawn(async move {
                            let outcome = orchestrator.execute(ticket).await;
                            deliver_outcome(ui_tx, outcome).await;
                        });
                    }
                }
            }
            tracing::debug!("ui->backend command queue closed; backend worker exiting");
        });
    })
}

/// Outcomes are never dropped: an undelivered outcome would leave its request
/// in flight forever. A full queue falls back to a blocking send off the
/// async workers.
async fn deliver_outcome(ui_tx: Sender<UiEvent>, outcome: PredictionOutcome) {
    let generation = outcome.generation;
    match ui_tx.try_send(UiEvent::PredictionFinished(outcome)) {
        Ok(()) => {}
        Err(TrySendError::Full(event)) => {
            tracing::warn!(
                generation = generation.0,
                "backend->ui event queue is full; waiting to deliver prediction outcome"
            );
            let delivered = tokio::task::spawn_blocking(move || ui_tx.send(event)).await;
            if !matches!(delivered, Ok(Ok(()))) {
                tracing::debug!("ui closed before prediction outcome was delivered");
            }
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::debug!("ui closed before prediction finished");
        }
    }
}
