use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum BoardError {
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for BoardError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Parse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for BoardError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<std::io::Error> for BoardError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<String> for BoardError {
    fn from(err: String) -> Self {
        Self::Other(err)
    }
}

impl From<&str> for BoardError {
    fn from(err: &str) -> Self {
        Self::Other(err.to_string())
    }
}

/// Which of the two CMS queries a refresh cycle failed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FetchStage {
    Event,
    TeeTimes,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadFailure {
    pub stage: FetchStage,
    pub message: String,
    /// The CMS has no such event.
    #[serde(skip)]
    pub not_found: bool,
}

impl LoadFailure {
    #[must_use]
    pub fn new(stage: FetchStage, err: &BoardError) -> Self {
        Self {
            stage,
            message: err.to_string(),
            not_found: matches!(err, BoardError::NotFound(_)),
        }
    }

    /// Text shown in place of the standings grid.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self.stage {
            FetchStage::Event => "Unable to load tournament data",
            FetchStage::TeeTimes => "Error loading tee times data",
        }
    }
}
