mod common;
use crate::common::{ScriptedClient, fixture_path, load_snapshot};

use alliance_live::controller::cms::{CmsClient, FixtureClient, StrapiClient, fetch_snapshot};
use alliance_live::error::{BoardError, FetchStage};

#[test]
fn test8_strapi_urls() {
    let client = StrapiClient::new("https://cms.example.org/", Some("t".into())).unwrap();

    let event_url = client.event_url(42);
    assert!(event_url.starts_with("https://cms.example.org/api/events/42?"));
    assert!(event_url.contains("populate[scores][populate][golfer][populate][golf_club]=true"));

    let tee_url = client.tee_times_url(42);
    assert!(
        tee_url.starts_with("https://cms.example.org/api/tee-times?filters[event][id][$eq]=42&")
    );
    assert!(tee_url.contains("populate[golfers][populate][golf_club]=true"));
}

#[tokio::test]
async fn test8_fixture_client_serves_its_event() {
    let client = FixtureClient::new(&fixture_path("event_42.json"));

    let event = client.fetch_event(42).await.unwrap();
    assert_eq!(event.id, 42);
    assert_eq!(event.scores.len(), 10);
    assert_eq!(client.fetch_tee_times(42).await.unwrap().len(), 4);

    assert!(matches!(
        client.fetch_event(7).await,
        Err(BoardError::NotFound(_))
    ));
    assert!(client.fetch_tee_times(7).await.unwrap().is_empty());
}

#[tokio::test]
async fn test8_missing_fixture_is_an_io_error() {
    let client = FixtureClient::new(&fixture_path("does_not_exist.json"));
    assert!(matches!(client.fetch_event(42).await, Err(BoardError::Io(_))));
}

#[tokio::test]
async fn test8_snapshot_failure_names_the_stage() {
    let client = ScriptedClient::new(load_snapshot("event_42.json"));
    let (event, tee_times) = fetch_snapshot(&client, 42).await.unwrap();
    assert_eq!(event.id, 42);
    assert_eq!(tee_times.len(), 4);

    client.set_fail_tee_times(true);
    let failure = fetch_snapshot(&client, 42).await.unwrap_err();
    assert_eq!(failure.stage, FetchStage::TeeTimes);
    assert!(failure.message.contains("unexpected end of input"));

    client.set_fail_event(true);
    let failure = fetch_snapshot(&client, 42).await.unwrap_err();
    assert_eq!(failure.stage, FetchStage::Event);
}

#[test]
fn test8_null_fields_fall_back_to_defaults() {
    let json = r#"{
        "event": { "id": 5, "scores": null },
        "teeTimes": [ { "isNIT": null, "golfers": [ { "golferName": null, "golf_club": null } ] } ]
    }"#;
    let snapshot: alliance_live::model::EventSnapshot = serde_json::from_str(json).unwrap();
    assert!(snapshot.event.scores.is_empty());
    assert!(!snapshot.tee_times[0].is_nit);
    assert_eq!(snapshot.tee_times[0].golfers[0].golfer_name, "");
    assert_eq!(snapshot.tee_times[0].golfers[0].club_name(), None);

    // load_snapshot parses the full fixture the same way.
    assert_eq!(load_snapshot("event_42.json").tee_times.len(), 4);
}
