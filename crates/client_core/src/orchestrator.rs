use std::sync::Arc;

use crate::{
    service::PredictionService,
    state::{EstimatorState, OutcomeDisposition, PredictionOutcome, SubmitTicket},
};

/// Issues exactly one service call per submitted ticket.
#[derive(Clone)]
pub struct PredictionOrchestrator {
    service: Arc<dyn PredictionService>,
}

impl PredictionOrchestrator {
    pub fn new(service: Arc<dyn PredictionService>) -> Self {
        Self { service }
    }

    /// Runs the request for `ticket`. Never fails; errors travel inside the
    /// outcome so the state machine can contain them.
    pub async fn execute(&self, ticket: SubmitTicket) -> PredictionOutcome {
        tracing::debug!(
            generation = ticket.generation.0,
            "submitting prediction request"
        );
        let result = self.service.predict(&ticket.vector).await;
        PredictionOutcome {
            generation: ticket.generation,
            result,
        }
    }

    /// Submit and wait, for callers that do not overlap requests.
    pub async fn submit(&self, state: &mut EstimatorState) -> OutcomeDisposition {
        let ticket = state.begin_submit();
        let outcome = self.execute(ticket).await;
        state.apply_outcome(outcome)
    }
}

#[cfg(test)]
#[path = "tests/orchestrator_tests.rs"]
mod tests;
