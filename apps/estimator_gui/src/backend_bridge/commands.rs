//! Backend commands queued from UI to backend worker.

use client_core::SubmitTicket;

#[derive(Debug)]
pub enum BackendCommand {
    Predict(SubmitTicket),
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::Predict(_) => "predict",
        }
    }
}
