//! End-to-end fetch flow tests against a stubbed statistics API.
//!
//! These exercise the full path: provider selection, telemetry writes,
//! spawned fetch task, message handling, and the resulting view state and
//! screen transitions.

use std::sync::Arc;
use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use outbreak::api::StatsApiClient;
use outbreak::app::{App, Screen};
use outbreak::models::{LocationRef, Scope};
use outbreak::telemetry::{DiagnosticsPolicy, RecordingSink};
use outbreak::view_state::Phase;

fn app_for(server: &MockServer, sink: Arc<RecordingSink>) -> App {
    App::with_sinks(
        StatsApiClient::with_base_url(server.uri()),
        sink.clone(),
        sink,
        DiagnosticsPolicy::SeparateChannel,
    )
}

/// Receive and apply the next fetch completion.
async fn pump(app: &mut App) {
    let msg = tokio::time::timeout(Duration::from_secs(5), async {
        app.message_rx.as_mut().unwrap().recv().await
    })
    .await
    .expect("timed out waiting for fetch completion")
    .expect("message channel closed");
    app.handle_message(msg);
}

fn global_payload() -> serde_json::Value {
    serde_json::json!({
        "updated": 1_700_000_000_000i64,
        "cases": 100,
        "deaths": 5
    })
}

// Deliberately not a #[tokio::test]: this mirrors the binary's startup
// path, where a manually built runtime must be entered before the first
// fetch can spawn its task.
#[test]
fn initialize_under_a_manual_runtime_spawns_the_first_fetch() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let sink = Arc::new(RecordingSink::new());
    let mut app = App::with_sinks(
        StatsApiClient::with_base_url("http://127.0.0.1:1".to_string()),
        sink.clone(),
        sink,
        DiagnosticsPolicy::SeparateChannel,
    );

    runtime.block_on(async {
        app.initialize(Scope::Global);
    });

    assert_eq!(app.screen, Screen::Stats);
    assert_eq!(app.view.phase, Phase::Loading);
}

#[tokio::test]
async fn global_fetch_settles_with_fixed_record_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(global_payload()))
        .mount(&server)
        .await;

    let sink = Arc::new(RecordingSink::new());
    let mut app = app_for(&server, sink);
    app.initialize(Scope::Global);
    pump(&mut app).await;

    assert_eq!(app.view.phase, Phase::Settled);
    assert_eq!(app.view.page_title, "Global");
    assert_eq!(app.screen, Screen::Stats);

    let titles: Vec<&str> = app.view.records.iter().map(|r| r.title).collect();
    assert_eq!(titles, vec!["Cases", "Deaths"]);
    assert_eq!(app.view.records[0].value, 100);
    assert_eq!(app.view.records[1].value, 5);
    assert!(!app.view.last_updated.is_empty());
}

#[tokio::test]
async fn country_fetch_uses_location_name_as_title() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/countries/TL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "updated": 1_700_000_000_000i64,
            "cases": 42,
            "deaths": 1,
            "recovered": 30
        })))
        .mount(&server)
        .await;

    let sink = Arc::new(RecordingSink::new());
    let mut app = app_for(&server, sink.clone());
    app.initialize(Scope::Country(LocationRef::new("Testland", "TL")));
    pump(&mut app).await;

    assert_eq!(app.view.phase, Phase::Settled);
    assert_eq!(app.view.page_title, "Testland");
    assert_eq!(app.view.records.len(), 3);

    // One screen view and one searched-item attribute per fetch.
    assert_eq!(
        *sink.screen_views.lock().unwrap(),
        vec!["Location Stats Screen".to_string()]
    );
    assert_eq!(
        *sink.attributes.lock().unwrap(),
        vec![("searched_item".to_string(), "Testland".to_string())]
    );
}

#[tokio::test]
async fn failed_country_fetch_records_error_once_and_pushes_error_screen() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/countries/TL"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let sink = Arc::new(RecordingSink::new());
    let mut app = app_for(&server, sink.clone());
    app.initialize(Scope::Country(LocationRef::new("Testland", "TL")));
    pump(&mut app).await;

    assert_eq!(app.view.phase, Phase::Failed);
    assert_eq!(app.screen, Screen::Error);
    assert!(app.last_error.is_some());
    assert_eq!(sink.recorded_errors.lock().unwrap().len(), 1);
    assert!(sink.recorded_errors.lock().unwrap()[0].contains("500"));
}

#[tokio::test]
async fn retry_after_failure_remounts_and_can_succeed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(global_payload()))
        .mount(&server)
        .await;

    let sink = Arc::new(RecordingSink::new());
    let mut app = app_for(&server, sink);
    app.initialize(Scope::Global);
    pump(&mut app).await;
    assert_eq!(app.screen, Screen::Error);

    app.retry();
    assert_eq!(app.view.phase, Phase::Loading);
    assert_eq!(app.screen, Screen::Stats);

    pump(&mut app).await;
    assert_eq!(app.view.phase, Phase::Settled);
    assert_eq!(app.view.records.len(), 2);
}

#[tokio::test]
async fn refresh_keeps_records_visible_and_settles() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(global_payload()))
        .mount(&server)
        .await;

    let sink = Arc::new(RecordingSink::new());
    let mut app = app_for(&server, sink);
    app.initialize(Scope::Global);
    pump(&mut app).await;
    assert_eq!(app.view.phase, Phase::Settled);

    app.refresh();
    // Previous records stay on screen during the refresh.
    assert_eq!(app.view.phase, Phase::Refreshing);
    assert_eq!(app.view.records.len(), 2);

    pump(&mut app).await;
    assert_eq!(app.view.phase, Phase::Settled);
}

#[tokio::test]
async fn stale_response_after_scope_switch_is_discarded() {
    let server = MockServer::start().await;
    // The global response is slow; the country response is fast.
    Mock::given(method("GET"))
        .and(path("/all"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(global_payload())
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/countries/TL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "updated": 1_700_000_000_000i64,
            "cases": 7
        })))
        .mount(&server)
        .await;

    let sink = Arc::new(RecordingSink::new());
    let mut app = app_for(&server, sink);
    app.initialize(Scope::Global);
    // Switch scope while the global fetch is still in flight.
    app.set_scope(Scope::Country(LocationRef::new("Testland", "TL")));

    // Apply both completions in whichever order they arrive.
    pump(&mut app).await;
    pump(&mut app).await;

    // The slow global snapshot must not overwrite the country view.
    assert_eq!(app.view.phase, Phase::Settled);
    assert_eq!(app.view.page_title, "Testland");
    assert_eq!(app.view.records.len(), 1);
    assert_eq!(app.view.records[0].value, 7);
}

#[tokio::test]
async fn search_selection_switches_scope_and_fetches() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/countries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"country": "Testland", "countryInfo": {"iso2": "TL"}},
            {"country": "Northmark", "countryInfo": {"iso2": "NM"}}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/countries/NM"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "updated": 1_700_000_000_000i64,
            "cases": 11,
            "active": 3
        })))
        .mount(&server)
        .await;

    let sink = Arc::new(RecordingSink::new());
    let mut app = app_for(&server, sink);
    app.navigate_to_search();
    assert_eq!(app.screen, Screen::Search);

    // Country list arrives.
    pump(&mut app).await;
    assert_eq!(app.search.countries.len(), 2);

    for c in "north".chars() {
        app.search.type_char(c);
    }
    app.confirm_search_selection();
    assert_eq!(app.screen, Screen::Stats);
    assert_eq!(app.view.scope.page_title(), "Northmark");

    pump(&mut app).await;
    assert_eq!(app.view.phase, Phase::Settled);
    assert_eq!(app.view.page_title, "Northmark");
    assert_eq!(app.view.records.len(), 2);
}

#[tokio::test]
async fn country_list_failure_stays_inline_on_search_screen() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/countries"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let sink = Arc::new(RecordingSink::new());
    let mut app = app_for(&server, sink);
    app.navigate_to_search();
    pump(&mut app).await;

    assert_eq!(app.screen, Screen::Search);
    assert!(!app.search.loading);
    assert!(app.search.error.as_deref().unwrap().contains("502"));
}
