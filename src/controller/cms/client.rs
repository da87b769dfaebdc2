use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use std::time::Duration;

use super::CmsClient;
use crate::error::BoardError;
use crate::model::{EventRecord, StrapiEnvelope, TeeTimeRecord};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const EVENT_POPULATE: &str =
    "populate[golf_club]=true&populate[scores][populate][golfer][populate][golf_club]=true";
const TEE_TIME_POPULATE: &str =
    "populate[golfers][populate][golf_club]=true&populate[event]=true&pagination[pageSize]=500";

/// Strapi-style REST client.
pub struct StrapiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl StrapiClient {
    /// # Errors
    ///
    /// Will return `Err` if the http client cannot be built
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, BoardError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    #[must_use]
    pub fn event_url(&self, event_id: i64) -> String {
        format!("{}/api/events/{event_id}?{EVENT_POPULATE}", self.base_url)
    }

    #[must_use]
    pub fn tee_times_url(&self, event_id: i64) -> String {
        format!(
            "{}/api/tee-times?filters[event][id][$eq]={event_id}&{TEE_TIME_POPULATE}",
            self.base_url
        )
    }

    fn get(&self, url: &str) -> RequestBuilder {
        let req = self.http.get(url);
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }
}

#[async_trait]
impl CmsClient for StrapiClient {
    async fn fetch_event(&self, event_id: i64) -> Result<EventRecord, BoardError> {
        let resp = self.get(&self.event_url(event_id)).send().await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(BoardError::NotFound(format!("event {event_id}")));
        }
        let body: StrapiEnvelope<EventRecord> = resp.error_for_status()?.json().await?;
        Ok(body.data)
    }

    async fn fetch_tee_times(&self, event_id: i64) -> Result<Vec<TeeTimeRecord>, BoardError> {
        let resp = self.get(&self.tee_times_url(event_id)).send().await?;
        let body: StrapiEnvelope<Vec<TeeTimeRecord>> = resp.error_for_status()?.json().await?;
        Ok(body.data)
    }
}
