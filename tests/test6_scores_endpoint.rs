mod common;
use crate::common::{ScriptedClient, fixture_path, load_snapshot};

use actix_web::web::Data;
use actix_web::{App, HttpResponse, test, web};
use scraper::{Html, Selector};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use alliance_live::controller::board_cache::BoardRegistry;
use alliance_live::controller::cms::FixtureClient;
use alliance_live::controller::score::{index, scores};
use alliance_live::model::LoadState;

fn registry() -> BoardRegistry {
    let client = Arc::new(FixtureClient::new(&fixture_path("event_42.json")));
    BoardRegistry::new(client, CancellationToken::new())
}

macro_rules! app {
    ($registry:expr) => {
        test::init_service(
            App::new()
                .app_data(Data::new($registry.clone()))
                .route("/", web::get().to(index))
                .route("/scores", web::get().to(scores))
                .route("/health", web::get().to(HttpResponse::Ok)),
        )
        .await
    };
}

#[actix_web::test]
async fn test6_missing_event_is_bad_request() {
    let registry = registry();
    let app = app!(registry);

    let req = test::TestRequest::get().uri("/scores").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("event"));

    let req = test::TestRequest::get().uri("/scores?event=abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    assert!(registry.is_empty().await);
}

#[actix_web::test]
async fn test6_scores_fragment_html() {
    let registry = registry();
    let app = app!(registry);

    let req = test::TestRequest::get().uri("/scores?event=42").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body = test::read_body(resp).await;
    let html = String::from_utf8(body.to_vec()).unwrap();
    let document = Html::parse_fragment(&html);

    let first_club = Selector::parse("table.top-clubs tbody tr td").unwrap();
    let cells: Vec<String> = document
        .select(&first_club)
        .take(3)
        .map(|td| td.text().collect())
        .collect();
    assert_eq!(cells, vec!["1", "Alpha GC", "183"]);
    assert!(html.contains("Last refresh: just now"));

    registry.shutdown();
}

#[actix_web::test]
async fn test6_scores_json_and_results() {
    let registry = registry();
    let app = app!(registry);

    let req = test::TestRequest::get()
        .uri("/scores?event=42&json=1")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["board"]["standings"][0]["clubName"], "Alpha GC");
    assert_eq!(body["board"]["standings"][0]["totalPoints"], 183);
    assert_eq!(body["board"]["standings"][1]["totalPoints"], 140);
    assert!(body["error"].is_null());

    let req = test::TestRequest::get()
        .uri("/scores?event=42&results=1")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 10);
    assert_eq!(results[0]["playerName"], "Nia Nolan");
    assert_eq!(results[0]["status"], "Final");

    // Both requests share one controller.
    assert_eq!(registry.len().await, 1);
}

#[actix_web::test]
async fn test6_unknown_event_reports_failure() {
    let registry = registry();
    let app = app!(registry);

    let req = test::TestRequest::get().uri("/scores?event=7").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let html = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(html.contains("Unable to load tournament data"));

    let req = test::TestRequest::get()
        .uri("/scores?event=7&json=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Unable to load tournament data");
}

#[actix_web::test]
async fn test6_index_page() {
    let registry = registry();
    let app = app!(registry);

    let req = test::TestRequest::get().uri("/?event=42").to_request();
    let html = String::from_utf8(test::call_and_read_body(&app, req).await.to_vec()).unwrap();
    let document = Html::parse_document(&html);

    let title = Selector::parse("title").unwrap();
    let title: String = document.select(&title).next().unwrap().text().collect();
    assert_eq!(title, "Alliance at Alpha GC");

    let scores_div = Selector::parse("div#scores").unwrap();
    let div = document.select(&scores_div).next().unwrap();
    assert_eq!(div.value().attr("hx-get"), Some("scores?event=42"));
    assert_eq!(div.value().attr("hx-trigger"), Some("load, every 60s"));

    let req = test::TestRequest::get().uri("/").to_request();
    let html = String::from_utf8(test::call_and_read_body(&app, req).await.to_vec()).unwrap();
    assert!(html.contains("Alliance Live Scoring"));

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}

#[actix_web::test]
async fn test6_unknown_events_do_not_pile_up() {
    let registry = registry();
    let app = app!(registry);

    for id in 1000..1200 {
        let uri = format!("/scores?event={id}");
        let req = test::TestRequest::get().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }
    assert!(registry.is_empty().await, "no board kept for unknown events");

    for id in 1000..1050 {
        let state = registry.state_for(id).await;
        assert!(matches!(state, LoadState::Failed { last_good: None, .. }));
    }
    let req = test::TestRequest::get().uri("/scores?event=42").to_request();
    test::call_service(&app, req).await;
    assert_eq!(registry.len().await, 1);
}

#[tokio::test(start_paused = true)]
async fn test6_idle_boards_are_evicted() {
    let client = Arc::new(ScriptedClient::new(load_snapshot("event_42.json")));
    let registry = BoardRegistry::with_idle_eviction(
        client.clone(),
        CancellationToken::new(),
        Duration::from_secs(300),
    );

    registry.state_for(42).await;
    registry.state_for(43).await;
    assert_eq!(registry.len().await, 2);

    // 43 keeps being watched, 42 does not.
    for _ in 0..4 {
        tokio::time::sleep(Duration::from_secs(100)).await;
        registry.state_for(43).await;
    }
    registry.sweep().await;
    assert_eq!(registry.len().await, 1);
    assert!(matches!(registry.state_for(43).await, LoadState::Ready(_)));

    // An evicted board stops polling.
    tokio::time::sleep(Duration::from_secs(300)).await;
    registry.sweep().await;
    assert!(registry.is_empty().await);
    let fetches = client.event_fetches();
    tokio::time::sleep(Duration::from_secs(600)).await;
    assert_eq!(client.event_fetches(), fetches);
}

#[tokio::test(start_paused = true)]
async fn test6_sweeper_stops_on_shutdown() {
    let client = Arc::new(ScriptedClient::new(load_snapshot("event_42.json")));
    let registry = BoardRegistry::with_idle_eviction(
        client,
        CancellationToken::new(),
        Duration::from_secs(120),
    );
    let sweeper = registry.spawn_sweeper();

    registry.state_for(42).await;
    assert_eq!(registry.len().await, 1);
    tokio::time::sleep(Duration::from_secs(200)).await;
    assert!(registry.is_empty().await, "the background sweep evicted the idle board");

    registry.shutdown();
    sweeper.await.unwrap();
}
