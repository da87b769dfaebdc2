//! Records as the CMS returns them. Everything is optional because the
//! content is typed in by club officers mid-tournament.

use serde::{Deserialize, Deserializer, Serialize};

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Strapi wraps every response body in `{ "data": ... }`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StrapiEnvelope<T> {
    pub data: T,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClubRef {
    #[serde(default)]
    pub club_name: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GolferRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub golfer_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_pro: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_senior: bool,
    #[serde(default, rename = "golf_club")]
    pub golf_club: Option<ClubRef>,
}

impl GolferRecord {
    /// Club name if one is set and not blank.
    #[must_use]
    pub fn club_name(&self) -> Option<&str> {
        self.golf_club
            .as_ref()
            .and_then(|club| club.club_name.as_deref())
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ScoreRecord {
    #[serde(default)]
    pub golfer: Option<GolferRecord>,
    #[serde(default, rename = "front9Score")]
    pub front9_score: Option<i32>,
    #[serde(default, rename = "back9Score")]
    pub back9_score: Option<i32>,
    #[serde(default, rename = "golferEventScore")]
    pub golfer_event_score: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: i64,
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default, rename = "golf_club")]
    pub golf_club: Option<ClubRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scores: Vec<ScoreRecord>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TeeTimeRecord {
    #[serde(default)]
    pub golfer_tee_time: Option<String>,
    #[serde(default, rename = "isNIT", deserialize_with = "null_as_default")]
    pub is_nit: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub golfers: Vec<GolferRecord>,
    #[serde(default)]
    pub event: Option<serde_json::Value>,
}

/// One event plus its tee sheet, as stored in an offline fixture file.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct EventSnapshot {
    pub event: EventRecord,
    #[serde(default)]
    pub tee_times: Vec<TeeTimeRecord>,
}
