//! # Click Tracker
//!
//! Click Tracker is a small front-end for a backend that counts presses of
//! two buttons, "A" and "B". The page shows both totals, lets the user add a
//! click to either one, and lets the user clear every recorded click.
//!
//! ## Organization
//!
//! The project is divided over a number of crates. This crate,
//! `click-tracker`, does no I/O and has no browser dependencies. It defines
//! the view's state as a state machine, the HTTP contract with the backend,
//! and the text the page renders.
//!
//! `click-tracker-yew` provides the browser component that owns a
//! [ClickTracker] and performs its requests, and `click-tracker-app` mounts
//! that component to a page.
//!
//! ## How it works
//!
//! The view's state is a [ClickTracker]. Every change to it goes through
//! [StateMachine::apply], which takes a [TrackerTransition] and returns the
//! [ApiRequest] the runtime should issue next, if any. When that request
//! settles, its outcome goes back in as [TrackerTransition::Settled].
//!
//! ```rust
//! # use click_tracker::{ApiRequest, Button, ClickTracker, HttpResponse, StateMachine, TrackerTransition};
//! let mut tracker = ClickTracker::new();
//!
//! // The first render asks for the current counts.
//! let request = tracker.apply(TrackerTransition::Mount);
//! assert_eq!(Some(ApiRequest::FetchCounts), request);
//!
//! let response = HttpResponse::new(200, r#"{"A": 5, "B": 2}"#);
//! tracker.apply(TrackerTransition::settled(ApiRequest::FetchCounts, Ok(response)));
//! assert_eq!(5, tracker.counts().a);
//! assert!(!tracker.loading());
//!
//! // A successful click is followed by exactly one refresh.
//! let request = tracker.apply(TrackerTransition::Press(Button::A));
//! assert_eq!(Some(ApiRequest::RecordClick(Button::A)), request);
//! let next = tracker.apply(TrackerTransition::settled(
//!     ApiRequest::RecordClick(Button::A),
//!     Ok(HttpResponse::new(200, "{}")),
//! ));
//! assert_eq!(Some(ApiRequest::FetchCounts), next);
//! ```
//!
//! There is no locking and no request sequencing. Requests may overlap, and
//! whichever response settles last determines the displayed counts.
//!
//! ## Vocabulary Conventions
//!
//! - A **transition** is an input to the state machine: the first render, a
//!   button press, or a request settling.
//! - A request **settles** when it produces a response or fails to reach the
//!   server.
//! - A **refresh** is the `GET /api/counts` issued after a successful click
//!   or clear.

pub use api::{ApiRequest, ClickApi, HttpResponse, Method};
pub use config::{ApiConfig, API_URL_ENV, DEFAULT_API_URL};
pub use counts::{Button, ClickBody, Counts};
pub use error::{FailureCause, TrackerError, TransportError};
pub use state_machine::StateMachine;
pub use tracker::{ClickTracker, Step, TrackerTransition};
pub use view_model::{ButtonView, ViewModel};

mod api;
mod config;
mod counts;
mod error;
mod state_machine;
mod tracker;
mod view_model;

/// Execute one request and turn its outcome into the transition that
/// reports it. Every host issues requests through this.
pub async fn settle<A: ClickApi>(api: &A, request: ApiRequest) -> TrackerTransition {
    tracing::debug!(%request, "Issuing request.");
    let outcome = api.execute(&request).await;
    TrackerTransition::settled(request, outcome)
}

/// Issue `request` through `api`, then keep issuing whatever follow-up
/// request the tracker asks for until it asks for none. Returns every error
/// recorded along the way.
///
/// This is the reference driver for hosts without an event loop of their
/// own. The yew component performs the same [settle] then
/// [ClickTracker::step] cycle, one message per request.
///
/// Each step borrows the tracker only to apply an outcome, so callers on a
/// single-threaded event loop can interleave several of these.
pub async fn run_request<A: ClickApi>(
    api: &A,
    tracker: &std::cell::RefCell<ClickTracker>,
    request: ApiRequest,
) -> Vec<TrackerError> {
    let mut recorded = Vec::new();
    let mut next = Some(request);
    while let Some(request) = next {
        let transition = settle(api, request).await;
        let step = tracker.borrow_mut().step(transition);
        recorded.extend(step.recorded);
        next = step.next;
    }
    recorded
}
