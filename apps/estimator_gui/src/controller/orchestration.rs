//! Command orchestration helpers from UI actions to backend command queue.

use client_core::{EstimatorState, PredictionError, PredictionOutcome};
use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> Result<(), String> {
    let cmd_name = cmd.name();
    tracing::debug!(command = cmd_name, "queueing ui->backend command");
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => {
            *status = "UI command queue is full; please retry".to_string();
            tracing::warn!(command = cmd_name, "ui->backend command queue is full");
            Err("ui->backend command queue is full".to_string())
        }
        Err(TrySendError::Disconnected(_)) => {
            *status =
                "Backend command processor disconnected (possible startup/runtime failure); restart the app"
                    .to_string();
            tracing::error!(command = cmd_name, "ui->backend command queue disconnected");
            Err("ui->backend command queue disconnected".to_string())
        }
    }
}

/// Starts a request for the current form values. A ticket that never
/// reaches the backend is failed right away so the phase does not stay
/// pending.
pub fn submit_prediction(
    state: &mut EstimatorState,
    cmd_tx: &Sender<BackendCommand>,
    status: &mut String,
) {
    let ticket = state.begin_submit();
    if let Err(reason) = dispatch_backend_command(cmd_tx, BackendCommand::Predict(ticket), status)
    {
        state.apply_outcome(PredictionOutcome {
            generation: ticket.generation,
            result: Err(PredictionError::NotSent(reason)),
        });
    }
}
