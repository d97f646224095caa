use click_tracker::{
    run_request, ApiRequest, ClickTracker, Counts, FailureCause, StateMachine, TrackerError,
    TrackerTransition,
};
use futures::executor::block_on;
use std::cell::RefCell;

mod common;
use common::{json, unreachable, ScriptedApi};

fn mount(api: &ScriptedApi) -> ClickTracker {
    let tracker = RefCell::new(ClickTracker::new());
    let request = tracker
        .borrow_mut()
        .apply(TrackerTransition::Mount)
        .expect("mount should fetch counts");
    block_on(run_request(api, &tracker, request));
    tracker.into_inner()
}

#[test]
fn test_initial_fetch_populates_counts() {
    let api = ScriptedApi::new([json(200, r#"{"A": 5, "B": 2}"#)]);
    let tracker = mount(&api);

    assert_eq!(vec![ApiRequest::FetchCounts], api.calls());
    assert_eq!(Counts::new(5, 2), tracker.counts());
    assert!(!tracker.loading());
    assert_eq!(None, tracker.error());
}

#[test]
fn test_missing_fields_default_to_zero() {
    let api = ScriptedApi::new([json(200, r#"{"A": 3}"#)]);
    let tracker = mount(&api);

    assert_eq!(Counts::new(3, 0), tracker.counts());
}

#[test]
fn test_status_failure_keeps_counts() {
    let api = ScriptedApi::new([json(503, "")]);
    let tracker = mount(&api);

    assert!(!tracker.loading());
    assert_eq!(Counts::new(0, 0), tracker.counts());
    assert_eq!(
        Some(&TrackerError::FetchCounts(FailureCause::Status(503))),
        tracker.error()
    );
    assert_eq!(
        Some("Failed to fetch counts".to_owned()),
        tracker.error_message()
    );
}

#[test]
fn test_network_failure_uses_underlying_message() {
    let api = ScriptedApi::new([unreachable("NetworkError when attempting to fetch resource.")]);
    let tracker = mount(&api);

    assert!(!tracker.loading());
    assert_eq!(
        Some("NetworkError when attempting to fetch resource.".to_owned()),
        tracker.error_message()
    );
}

#[test]
fn test_bad_json_uses_parse_message() {
    let api = ScriptedApi::new([json(200, "<html>oops</html>")]);
    let tracker = mount(&api);

    assert!(!tracker.loading());
    assert!(matches!(
        tracker.error(),
        Some(TrackerError::FetchCounts(FailureCause::Decode(_)))
    ));
    let message = tracker.error_message().unwrap();
    assert_ne!("Failed to fetch counts", message);
}

#[test]
fn test_failed_refresh_keeps_previous_counts() {
    let tracker = RefCell::new(ClickTracker::new());
    let api = ScriptedApi::new([json(200, r#"{"A": 4, "B": 1}"#), json(500, "")]);

    block_on(run_request(&api, &tracker, ApiRequest::FetchCounts));
    block_on(run_request(&api, &tracker, ApiRequest::FetchCounts));

    let tracker = tracker.into_inner();
    assert_eq!(Counts::new(4, 1), tracker.counts());
    assert_eq!(
        Some("Failed to fetch counts".to_owned()),
        tracker.error_message()
    );
}

#[test]
fn test_non_object_body_shows_zero_counts() {
    let api = ScriptedApi::new([json(200, "[]")]);
    let tracker = mount(&api);

    assert!(!tracker.loading());
    assert_eq!(Counts::new(0, 0), tracker.counts());
    assert_eq!(None, tracker.error());
}
