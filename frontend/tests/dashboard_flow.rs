//! Native tests for the dashboard fetch/render pipeline: URL construction,
//! payload normalization, and the request-ordering guard.

use frontend::api::analytics::{dashboard_url, AnalyticsError};
use frontend::fetch::{FetchState, RequestSeq};
use frontend::pages::dashboard::{analysis_rows, views_rows};
use pretty_assertions::assert_eq;
use shared::DashboardAnalyticsDto;

#[test]
fn test_request_url_matches_filter_presence() {
    assert_eq!(dashboard_url(None), "/api/analytics/dashboard");
    assert_eq!(
        dashboard_url(Some("sababa-falafel")),
        "/api/analytics/dashboard?restaurant=sababa-falafel"
    );
}

#[test]
fn test_successful_payload_renders_rows_and_empty_states() {
    // Scenario: no filter, success with one item and two empty sequences.
    let payload: DashboardAnalyticsDto = serde_json::from_str(
        r#"{
            "sessionCount": 42,
            "mostViewedItems": [{"name": "Falafel Wrap", "views": 10}],
            "popularCategories": [],
            "itemAnalysis": []
        }"#,
    )
    .expect("deserialize");

    assert_eq!(payload.session_count, 42);
    assert_eq!(
        views_rows(&payload.most_viewed_items),
        vec![vec!["Falafel Wrap".to_string(), "10".to_string()]]
    );
    // Empty sequences produce no rows, so the tables fall back to their
    // empty-state messages instead of a header with no body.
    assert!(views_rows(&payload.popular_categories).is_empty());
    assert!(analysis_rows(&payload.item_analysis).is_empty());
}

#[test]
fn test_missing_and_empty_sequences_render_identically() {
    let sparse: DashboardAnalyticsDto =
        serde_json::from_str(r#"{"sessionCount": 5}"#).expect("deserialize sparse");
    let explicit: DashboardAnalyticsDto = serde_json::from_str(
        r#"{"sessionCount": 5, "mostViewedItems": [], "popularCategories": [], "itemAnalysis": []}"#,
    )
    .expect("deserialize explicit");

    assert_eq!(
        views_rows(&sparse.most_viewed_items),
        views_rows(&explicit.most_viewed_items)
    );
    assert_eq!(
        views_rows(&sparse.popular_categories),
        views_rows(&explicit.popular_categories)
    );
    assert_eq!(
        analysis_rows(&sparse.item_analysis),
        analysis_rows(&explicit.item_analysis)
    );
}

#[test]
fn test_rendering_the_same_payload_twice_is_stable() {
    let payload: DashboardAnalyticsDto = serde_json::from_str(
        r#"{
            "sessionCount": 9,
            "mostViewedItems": [
                {"name": "Shawarma", "views": 9},
                {"name": "Hummus", "views": 2}
            ],
            "itemAnalysis": [
                {"name": "Shawarma", "views": 9, "avgViewTime": 31.0, "category": "Mains"}
            ]
        }"#,
    )
    .expect("deserialize");

    assert_eq!(
        views_rows(&payload.most_viewed_items),
        views_rows(&payload.most_viewed_items)
    );
    assert_eq!(
        analysis_rows(&payload.item_analysis),
        analysis_rows(&payload.item_analysis)
    );
    // Server ordering survives: Shawarma stays first.
    assert_eq!(views_rows(&payload.most_viewed_items)[0][0], "Shawarma");
}

#[test]
fn test_http_failure_collapses_to_failure_state() {
    // Scenario: filter="sababa-falafel", HTTP 500. The page collapses the
    // typed error into the single Failure presentation.
    let outcome: Result<Option<DashboardAnalyticsDto>, String> =
        Err(AnalyticsError::Http(500).to_string());
    let state = FetchState::resolved(outcome);

    assert_eq!(
        state,
        FetchState::Failure("Analytics request failed with status 500".to_string())
    );
}

#[test]
fn test_transport_failure_needs_no_payload_fields() {
    // Scenario: network error before any response arrives.
    let message = AnalyticsError::Network("connection refused".to_string()).to_string();
    let state: FetchState<Option<DashboardAnalyticsDto>> = FetchState::resolved(Err(message));

    match state {
        FetchState::Failure(msg) => assert!(msg.contains("connection refused")),
        other => panic!("expected Failure, got {:?}", other),
    }
}

#[test]
fn test_stale_response_is_discarded_on_filter_change() {
    // Scenario: filter changes from "a" to "b" mid-flight, and "a"'s
    // response arrives after "b"'s already resolved.
    let payload_a: DashboardAnalyticsDto =
        serde_json::from_str(r#"{"sessionCount": 1}"#).expect("deserialize a");
    let payload_b: DashboardAnalyticsDto =
        serde_json::from_str(r#"{"sessionCount": 2}"#).expect("deserialize b");

    let mut seq = RequestSeq::default();
    let mut state: FetchState<Option<DashboardAnalyticsDto>> = FetchState::Idle;
    assert!(state.is_loading());

    let ticket_a = seq.issue();
    state = FetchState::Loading;
    assert!(state.is_loading());

    let ticket_b = seq.issue();

    if seq.is_current(ticket_b) {
        state = FetchState::resolved(Ok(Some(payload_b)));
    }
    if seq.is_current(ticket_a) {
        state = FetchState::resolved(Ok(Some(payload_a)));
    }

    match state {
        FetchState::Success(Some(payload)) => assert_eq!(payload.session_count, 2),
        other => panic!("expected b's payload, got {:?}", other),
    }
}

#[test]
fn test_null_success_body_maps_to_no_data_presentation() {
    let payload: Option<DashboardAnalyticsDto> =
        serde_json::from_str("null").expect("deserialize null");
    let state = FetchState::resolved(Ok(payload));
    assert_eq!(state, FetchState::Success(None));
}
