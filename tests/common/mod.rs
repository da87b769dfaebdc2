#![allow(dead_code)]

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use alliance_live::controller::cms::CmsClient;
use alliance_live::error::BoardError;
use alliance_live::model::{
    ClubRef, EventRecord, EventSnapshot, GolferRecord, ScoreRecord, TeeTimeRecord,
};

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn load_snapshot(name: &str) -> EventSnapshot {
    let text = std::fs::read_to_string(fixture_path(name)).expect("fixture readable");
    serde_json::from_str(&text).expect("fixture parses")
}

pub fn golfer(id: Option<i64>, name: &str, club: Option<&str>) -> GolferRecord {
    GolferRecord {
        id,
        golfer_name: name.to_string(),
        is_pro: false,
        is_senior: false,
        golf_club: club.map(|c| ClubRef {
            club_name: Some(c.to_string()),
        }),
    }
}

pub fn score(golfer: GolferRecord, front: i32, back: i32) -> ScoreRecord {
    ScoreRecord {
        golfer: Some(golfer),
        front9_score: Some(front),
        back9_score: Some(back),
        golfer_event_score: Some(front + back),
    }
}

pub fn tee_time(is_nit: bool, golfers: Vec<GolferRecord>) -> TeeTimeRecord {
    TeeTimeRecord {
        golfer_tee_time: Some("08:00".to_string()),
        is_nit,
        golfers,
        event: None,
    }
}

pub fn event(id: i64, scores: Vec<ScoreRecord>) -> EventRecord {
    EventRecord {
        id,
        event_type: Some("Alliance".to_string()),
        event_date: Some("2026-06-14".to_string()),
        golf_club: Some(ClubRef {
            club_name: Some("Alpha GC".to_string()),
        }),
        scores,
    }
}

/// Scores for one club where every golfer shoots the given totals, split
/// into nines with `back = total / 2`.
pub fn club_scores(club: &str, first_id: i64, totals: &[i32]) -> Vec<ScoreRecord> {
    totals
        .iter()
        .zip(first_id..)
        .map(|(&total, id)| {
            let back = total / 2;
            score(
                golfer(Some(id), &format!("{club} Player {id}"), Some(club)),
                total - back,
                back,
            )
        })
        .collect()
}

/// In-memory CMS whose answers the test can change between refresh cycles.
pub struct ScriptedClient {
    snapshot: Mutex<EventSnapshot>,
    fail_event: Mutex<bool>,
    fail_tee_times: Mutex<bool>,
    delay: Mutex<Duration>,
    event_fetches: AtomicUsize,
}

impl ScriptedClient {
    pub fn new(snapshot: EventSnapshot) -> Self {
        Self {
            snapshot: Mutex::new(snapshot),
            fail_event: Mutex::new(false),
            fail_tee_times: Mutex::new(false),
            delay: Mutex::new(Duration::ZERO),
            event_fetches: AtomicUsize::new(0),
        }
    }

    pub fn set_snapshot(&self, snapshot: EventSnapshot) {
        *self.snapshot.lock().unwrap() = snapshot;
    }

    pub fn set_fail_event(&self, fail: bool) {
        *self.fail_event.lock().unwrap() = fail;
    }

    pub fn set_fail_tee_times(&self, fail: bool) {
        *self.fail_tee_times.lock().unwrap() = fail;
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = delay;
    }

    pub fn event_fetches(&self) -> usize {
        self.event_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CmsClient for ScriptedClient {
    async fn fetch_event(&self, _event_id: i64) -> Result<EventRecord, BoardError> {
        self.event_fetches.fetch_add(1, Ordering::SeqCst);
        let delay = *self.delay.lock().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        if *self.fail_event.lock().unwrap() {
            return Err(BoardError::Network("connection refused".into()));
        }
        Ok(self.snapshot.lock().unwrap().event.clone())
    }

    async fn fetch_tee_times(&self, _event_id: i64) -> Result<Vec<TeeTimeRecord>, BoardError> {
        if *self.fail_tee_times.lock().unwrap() {
            return Err(BoardError::Parse("unexpected end of input".into()));
        }
        Ok(self.snapshot.lock().unwrap().tee_times.clone())
    }
}
