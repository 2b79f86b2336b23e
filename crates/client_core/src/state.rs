//! Request lifecycle state owned by the rendering context.
//!
//! The UI thread owns one [`EstimatorState`]. Submitting takes a
//! [`SubmitTicket`] out of it, the request runs elsewhere, and the resulting
//! [`PredictionOutcome`] is folded back in with [`EstimatorState::apply_outcome`].
//! Outcomes are applied in arrival order.

use std::collections::BTreeSet;

use shared::{domain::FeatureVector, protocol::PredictionResponse};

use crate::{
    config::ResponseOrdering,
    error::{FailureKind, PredictionError},
    form::FormState,
    transform::{transform, DisplayModel},
};

/// Monotonic submit counter. Higher means submitted later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestGeneration(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestPhase {
    #[default]
    Idle,
    Pending,
    Settled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubmitTicket {
    pub generation: RequestGeneration,
    pub vector: FeatureVector,
}

#[derive(Debug)]
pub struct PredictionOutcome {
    pub generation: RequestGeneration,
    pub result: Result<PredictionResponse, PredictionError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeDisposition {
    Settled,
    /// A newer response is already displayed and the ordering policy keeps it.
    Superseded,
    Failed(FailureKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureRecord {
    pub generation: RequestGeneration,
    pub kind: FailureKind,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct EstimatorState {
    form: FormState,
    phase: RequestPhase,
    display: Option<DisplayModel>,
    displayed_generation: Option<RequestGeneration>,
    next_generation: u64,
    in_flight: BTreeSet<RequestGeneration>,
    ordering: ResponseOrdering,
    last_failure: Option<FailureRecord>,
}

impl EstimatorState {
    pub fn new(form: FormState, ordering: ResponseOrdering) -> Self {
        Self {
            form,
            ordering,
            ..Self::default()
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn phase(&self) -> RequestPhase {
        self.phase
    }

    pub fn is_pending(&self) -> bool {
        self.phase == RequestPhase::Pending
    }

    /// Last successfully transformed result. Survives later failures.
    pub fn display(&self) -> Option<&DisplayModel> {
        self.display.as_ref()
    }

    pub fn displayed_generation(&self) -> Option<RequestGeneration> {
        self.displayed_generation
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    pub fn ordering(&self) -> ResponseOrdering {
        self.ordering
    }

    /// Diagnostic record of the most recent failure. Never rendered.
    pub fn last_failure(&self) -> Option<&FailureRecord> {
        self.last_failure.as_ref()
    }

    /// Moves to `Pending` and snapshots the current vector. Overlapping
    /// submits are allowed.
    pub fn begin_submit(&mut self) -> SubmitTicket {
        self.next_generation += 1;
        let generation = RequestGeneration(self.next_generation);
        self.in_flight.insert(generation);
        self.phase = RequestPhase::Pending;

        SubmitTicket {
            generation,
            vector: *self.form.vector(),
        }
    }

    /// Every outcome leaves `Pending`, even while other requests are still
    /// outstanding: a displayed or superseded success moves to `Settled`, a
    /// failure to `Idle`.
    pub fn apply_outcome(&mut self, outcome: PredictionOutcome) -> OutcomeDisposition {
        let PredictionOutcome { generation, result } = outcome;
        if !self.in_flight.remove(&generation) {
            tracing::debug!(generation = generation.0, "outcome for request not in flight");
        }

        let disposition = match result {
            Ok(response) if response.success => self.settle(generation, &response),
            Ok(response) => self.record_failure(
                generation,
                PredictionError::Rejected {
                    message: response.error,
                },
            ),
            Err(err) => self.record_failure(generation, err),
        };

        self.phase = match disposition {
            OutcomeDisposition::Settled | OutcomeDisposition::Superseded => RequestPhase::Settled,
            OutcomeDisposition::Failed(_) => RequestPhase::Idle,
        };

        disposition
    }

    fn settle(
        &mut self,
        generation: RequestGeneration,
        response: &PredictionResponse,
    ) -> OutcomeDisposition {
        if self.ordering == ResponseOrdering::LatestSubmissionWins
            && self.displayed_generation.is_some_and(|shown| shown > generation)
        {
            tracing::debug!(
                generation = generation.0,
                "dropping response older than the displayed result"
            );
            return OutcomeDisposition::Superseded;
        }

        let model = transform(response);
        tracing::info!(
            generation = generation.0,
            models = model.series.len(),
            best_model = model.best_model.as_ref().map(|b| b.name.as_str()),
            "prediction settled"
        );
        self.display = Some(model);
        self.displayed_generation = Some(generation);
        OutcomeDisposition::Settled
    }

    fn record_failure(
        &mut self,
        generation: RequestGeneration,
        err: PredictionError,
    ) -> OutcomeDisposition {
        let kind = err.kind();
        tracing::warn!(generation = generation.0, ?kind, "error fetching prediction: {err}");
        self.last_failure = Some(FailureRecord {
            generation,
            kind,
            message: err.to_string(),
        });
        OutcomeDisposition::Failed(kind)
    }
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
