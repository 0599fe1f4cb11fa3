//! Tests for the search flow and its request-id guard

use std::sync::mpsc;

use super::*;
use crate::insight::InsightRequest;

fn state_with_worker() -> (
    SearchState,
    InsightState,
    mpsc::Receiver<InsightRequest>,
) {
    let mut insight = InsightState::new();
    let (request_tx, request_rx) = mpsc::channel();
    let (_response_tx, response_rx) = mpsc::channel();
    insight.set_channels(request_tx, response_rx);
    (SearchState::new(), insight, request_rx)
}

#[test]
fn test_blank_query_is_ignored() {
    let (mut search, mut insight, request_rx) = state_with_worker();
    search.textarea.insert_str("   ");
    assert!(!search.submit(&mut insight));
    assert!(!search.searching);
    assert!(request_rx.try_recv().is_err());
}

#[test]
fn test_submit_dispatches_trimmed_query() {
    let (mut search, mut insight, request_rx) = state_with_worker();
    search.textarea.insert_str("  who designed Pikachu  ");
    assert!(search.submit(&mut insight));
    assert!(search.searching);
    assert!(search.result.is_none());

    match request_rx.try_recv().unwrap() {
        InsightRequest::Search { query, .. } => assert_eq!(query, "who designed Pikachu"),
        other => panic!("expected search request, got {:?}", other),
    }
}

#[test]
fn test_submit_without_worker_fails() {
    let mut search = SearchState::new();
    let mut insight = InsightState::new();
    search.textarea.insert_str("query");
    assert!(!search.submit(&mut insight));
    assert!(!search.searching);
}

#[test]
fn test_matching_response_is_applied() {
    let (mut search, mut insight, request_rx) = state_with_worker();
    search.textarea.insert_str("query");
    search.submit(&mut insight);

    let request_id = match request_rx.try_recv().unwrap() {
        InsightRequest::Search { request_id, .. } => request_id,
        other => panic!("expected search request, got {:?}", other),
    };

    search.apply_response("An answer.".to_string(), request_id);
    assert_eq!(search.result.as_deref(), Some("An answer."));
    assert!(!search.searching);
}

#[test]
fn test_superseded_response_is_discarded() {
    let (mut search, mut insight, request_rx) = state_with_worker();
    search.textarea.insert_str("first");
    search.submit(&mut insight);
    let first_id = match request_rx.try_recv().unwrap() {
        InsightRequest::Search { request_id, .. } => request_id,
        other => panic!("expected search request, got {:?}", other),
    };

    // Second submission supersedes the first
    search.submit(&mut insight);
    let second_id = match request_rx.try_recv().unwrap() {
        InsightRequest::Search { request_id, .. } => request_id,
        other => panic!("expected search request, got {:?}", other),
    };
    assert_ne!(first_id, second_id);

    search.apply_response("stale".to_string(), first_id);
    assert!(search.result.is_none());
    assert!(search.searching);

    search.apply_response("fresh".to_string(), second_id);
    assert_eq!(search.result.as_deref(), Some("fresh"));
    assert!(!search.searching);
}

#[test]
fn test_worker_error_clears_flight() {
    let (mut search, mut insight, _request_rx) = state_with_worker();
    search.textarea.insert_str("query");
    search.submit(&mut insight);
    search.on_worker_error();
    assert!(!search.searching);

    // A late response after the error is discarded
    search.apply_response("late".to_string(), 1);
    assert!(search.result.is_none());
}
