pub mod client;
pub mod fixture;

pub use client::*;
pub use fixture::*;

use async_trait::async_trait;
use std::sync::Arc;

use crate::args::DataSource;
use crate::error::{BoardError, FetchStage, LoadFailure};
use crate::model::{EventRecord, TeeTimeRecord};

/// Read side of the headless CMS.
#[async_trait]
pub trait CmsClient: Send + Sync {
    async fn fetch_event(&self, event_id: i64) -> Result<EventRecord, BoardError>;
    async fn fetch_tee_times(&self, event_id: i64) -> Result<Vec<TeeTimeRecord>, BoardError>;
}

/// # Errors
///
/// Will return `Err` if the http client cannot be built
pub fn client_for(source: &DataSource) -> Result<Arc<dyn CmsClient>, BoardError> {
    Ok(match source {
        DataSource::Cms { url, token } => Arc::new(StrapiClient::new(url, token.clone())?),
        DataSource::Fixture(path) => Arc::new(FixtureClient::new(path)),
    })
}

/// Fetches the event and its tee sheet together. Either both arrive or the
/// cycle fails, so aggregation never sees half a snapshot.
///
/// # Errors
///
/// Will return `Err` naming the query that failed
pub async fn fetch_snapshot(
    client: &dyn CmsClient,
    event_id: i64,
) -> Result<(EventRecord, Vec<TeeTimeRecord>), LoadFailure> {
    let (event, tee_times) = futures::future::join(
        client.fetch_event(event_id),
        client.fetch_tee_times(event_id),
    )
    .await;

    let event = event.map_err(|e| LoadFailure::new(FetchStage::Event, &e))?;
    let tee_times = tee_times.map_err(|e| LoadFailure::new(FetchStage::TeeTimes, &e))?;
    Ok((event, tee_times))
}
