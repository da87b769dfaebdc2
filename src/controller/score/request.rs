use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::error::BoardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRequest {
    pub event_id: i64,
    /// Return the whole board as json instead of html.
    pub want_json: bool,
    /// Return only the flattened live results as json.
    pub want_results: bool,
}

fn flag<S: BuildHasher>(query: &HashMap<String, String, S>, key: &str) -> bool {
    match query.get(key).map(|s| s.trim()) {
        Some("1") => true,
        Some("0") | None => false,
        Some(other) => other.parse().unwrap_or(false),
    }
}

/// Parse query parameters into a score request.
///
/// # Errors
/// Returns an error if the event parameter is missing or invalid.
pub fn parse_score_request<S: BuildHasher>(
    query: &HashMap<String, String, S>,
) -> Result<ScoreRequest, BoardError> {
    let event_id = query
        .get("event")
        .and_then(|s| s.trim().parse().ok())
        .ok_or_else(|| BoardError::Other("event parameter is required".into()))?;

    Ok(ScoreRequest {
        event_id,
        want_json: flag(query, "json"),
        want_results: flag(query, "results"),
    })
}
