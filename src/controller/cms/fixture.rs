use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::CmsClient;
use crate::error::BoardError;
use crate::model::{EventRecord, EventSnapshot, TeeTimeRecord};

/// Serves an event snapshot from a JSON file instead of the CMS. The file is
/// re-read on every fetch, so edits show up on the next refresh.
pub struct FixtureClient {
    path: PathBuf,
}

impl FixtureClient {
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    async fn load(&self) -> Result<EventSnapshot, BoardError> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl CmsClient for FixtureClient {
    async fn fetch_event(&self, event_id: i64) -> Result<EventRecord, BoardError> {
        let snapshot = self.load().await?;
        if snapshot.event.id != event_id {
            return Err(BoardError::NotFound(format!(
                "event {event_id} (fixture holds event {})",
                snapshot.event.id
            )));
        }
        Ok(snapshot.event)
    }

    async fn fetch_tee_times(&self, event_id: i64) -> Result<Vec<TeeTimeRecord>, BoardError> {
        let snapshot = self.load().await?;
        if snapshot.event.id != event_id {
            return Ok(Vec::new());
        }
        Ok(snapshot.tee_times)
    }
}
