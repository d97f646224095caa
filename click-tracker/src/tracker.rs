use crate::api::{ApiRequest, HttpResponse};
use crate::counts::{Button, Counts};
use crate::error::{FailureCause, TrackerError, TransportError};
use crate::state_machine::StateMachine;

/// Inputs to a [ClickTracker].
#[derive(Clone, Debug, PartialEq)]
pub enum TrackerTransition {
    /// The view was rendered for the first time.
    Mount,
    /// The user pressed one of the counter buttons.
    Press(Button),
    /// The user pressed "Clear All Clicks".
    Clear,
    /// A request issued earlier finished, with or without a response.
    Settled {
        request: ApiRequest,
        outcome: Result<HttpResponse, TransportError>,
    },
}

impl TrackerTransition {
    pub fn settled(request: ApiRequest, outcome: Result<HttpResponse, TransportError>) -> Self {
        TrackerTransition::Settled { request, outcome }
    }
}

/// State of the click tracker view: the last counts fetched from the backend,
/// whether the initial fetch is still outstanding, and the last error.
///
/// `loading` is only ever true for the initial fetch. Refreshes issued after a
/// click or a clear leave it alone.
///
/// `error` is overwritten by each failure and is never cleared by a later
/// success; call [ClickTracker::dismiss_error] to clear it explicitly.
#[derive(Clone, Debug, PartialEq)]
pub struct ClickTracker {
    counts: Counts,
    loading: bool,
    error: Option<TrackerError>,
    failures: u64,
}

impl Default for ClickTracker {
    fn default() -> Self {
        ClickTracker {
            counts: Counts::default(),
            loading: true,
            error: None,
            failures: 0,
        }
    }
}

/// The result of [ClickTracker::step].
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    /// The request to issue next, if any.
    pub next: Option<ApiRequest>,
    /// The error this transition recorded. Set for every failure, even one
    /// identical to the error already shown.
    pub recorded: Option<TrackerError>,
}

impl ClickTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn counts(&self) -> Counts {
        self.counts
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&TrackerError> {
        self.error.as_ref()
    }

    /// The user-facing text of the last error, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    /// How many failures have been recorded since creation.
    pub fn failure_count(&self) -> u64 {
        self.failures
    }

    /// [StateMachine::apply], also reporting whether the transition recorded
    /// a failure.
    pub fn step(&mut self, transition: TrackerTransition) -> Step {
        let failures_before = self.failures;
        let next = self.apply(transition);
        let recorded = if self.failures > failures_before {
            self.error.clone()
        } else {
            None
        };

        Step { next, recorded }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    fn fail(&mut self, error: TrackerError) {
        tracing::warn!(%error, cause = ?error.cause(), "Click tracker operation failed.");
        self.error = Some(error);
        self.failures += 1;
    }

    fn settle(
        &mut self,
        request: ApiRequest,
        outcome: Result<HttpResponse, TransportError>,
    ) -> Option<ApiRequest> {
        match request {
            ApiRequest::FetchCounts => {
                match decode_counts(outcome) {
                    Ok(counts) => {
                        tracing::debug!(a = counts.a, b = counts.b, "Received counts.");
                        self.counts = counts;
                    }
                    Err(cause) => self.fail(TrackerError::FetchCounts(cause)),
                }
                self.loading = false;
                None
            }
            ApiRequest::RecordClick(button) => match check_acknowledged(outcome) {
                Ok(()) => {
                    tracing::info!(%button, "Click recorded.");
                    Some(ApiRequest::FetchCounts)
                }
                Err(cause) => {
                    self.fail(TrackerError::SendClick(cause));
                    None
                }
            },
            ApiRequest::ClearClicks => match check_acknowledged(outcome) {
                Ok(()) => {
                    tracing::info!("Clicks cleared.");
                    Some(ApiRequest::FetchCounts)
                }
                Err(cause) => {
                    self.fail(TrackerError::ClearClicks(cause));
                    None
                }
            },
        }
    }
}

fn successful_body(
    outcome: Result<HttpResponse, TransportError>,
) -> Result<String, FailureCause> {
    let response = outcome?;
    if !response.ok() {
        return Err(FailureCause::Status(response.status));
    }
    Ok(response.body)
}

fn decode_counts(outcome: Result<HttpResponse, TransportError>) -> Result<Counts, FailureCause> {
    let body = successful_body(outcome)?;
    Ok(Counts::from_json(&body)?)
}

/// Mutation responses are not used, but they still have to be JSON.
fn check_acknowledged(outcome: Result<HttpResponse, TransportError>) -> Result<(), FailureCause> {
    let body = successful_body(outcome)?;
    serde_json::from_str::<serde_json::Value>(&body)?;
    Ok(())
}

impl StateMachine for ClickTracker {
    type Transition = TrackerTransition;
    type Request = ApiRequest;

    fn apply(&mut self, transition: TrackerTransition) -> Option<ApiRequest> {
        match transition {
            TrackerTransition::Mount => Some(ApiRequest::FetchCounts),
            TrackerTransition::Press(button) => Some(ApiRequest::RecordClick(button)),
            TrackerTransition::Clear => Some(ApiRequest::ClearClicks),
            TrackerTransition::Settled { request, outcome } => self.settle(request, outcome),
        }
    }
}
