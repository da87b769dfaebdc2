mod common;
use crate::common::fixture_path;

use clap::Parser;
use std::path::PathBuf;

use alliance_live::args::validation::resolve_secret;
use alliance_live::args::{Args, Command, DataSource};

fn fixture_arg(name: &str) -> String {
    fixture_path(name).to_string_lossy().into_owned()
}

#[test]
fn test7_serve_with_cms_url() {
    let args = Args::try_parse_from([
        "alliance-live",
        "--cms-url",
        " https://cms.example.org ",
        "--cms-token",
        "abc123",
        "serve",
    ])
    .unwrap();
    let clean = args.validate().unwrap();

    assert_eq!(
        clean.source,
        DataSource::Cms {
            url: "https://cms.example.org".to_string(),
            token: Some("abc123".to_string()),
        }
    );
    assert_eq!(
        clean.command,
        Command::Serve {
            bind: "0.0.0.0:8081".to_string()
        }
    );
}

#[test]
fn test7_tv_with_fixture_and_defaults() {
    let path = fixture_arg("event_42.json");
    let args =
        Args::try_parse_from(["alliance-live", "--fixture", &path, "tv", "-e", "42"]).unwrap();
    let clean = args.validate().unwrap();

    assert_eq!(clean.source, DataSource::Fixture(PathBuf::from(&path)));
    assert_eq!(
        clean.command,
        Command::Tv {
            event: 42,
            scroll_speed: 2.0,
            log_dir: PathBuf::from("logs"),
        }
    );
}

#[test]
fn test7_source_is_required_and_exclusive() {
    let args = Args::try_parse_from(["alliance-live", "serve"]).unwrap();
    assert!(args.validate().is_err());

    let path = fixture_arg("event_42.json");
    let args = Args::try_parse_from([
        "alliance-live",
        "--cms-url",
        "https://cms.example.org",
        "--fixture",
        &path,
        "serve",
    ])
    .unwrap();
    assert!(args.validate().unwrap_err().contains("not both"));
}

#[test]
fn test7_cms_url_needs_a_scheme() {
    let args =
        Args::try_parse_from(["alliance-live", "--cms-url", "cms.example.org", "serve"]).unwrap();
    assert!(args.validate().unwrap_err().contains("http"));
}

#[test]
fn test7_fixture_must_be_a_snapshot() {
    let path = fixture_arg("not_a_snapshot.json");
    assert!(Args::try_parse_from(["alliance-live", "--fixture", &path, "serve"]).is_err());

    let missing = fixture_arg("does_not_exist.json");
    assert!(Args::try_parse_from(["alliance-live", "--fixture", &missing, "serve"]).is_err());
}

#[test]
fn test7_scroll_speed_must_be_positive() {
    let path = fixture_arg("event_42.json");
    for bad in ["0", "-1", "fast"] {
        let parsed = Args::try_parse_from([
            "alliance-live",
            "--fixture",
            &path,
            "tv",
            "-e",
            "42",
            "--scroll-speed",
            bad,
        ]);
        assert!(parsed.is_err(), "{bad} should be rejected");
    }
}

#[test]
fn test7_plain_secret_passes_through() {
    assert_eq!(resolve_secret("plain-token").unwrap(), "plain-token");
    assert!(resolve_secret("/run/secrets/definitely_missing_token").is_err());
}
