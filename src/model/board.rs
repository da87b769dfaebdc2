use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GolferEntry {
    pub golfer_id: Option<i64>,
    pub name: String,
    pub front_nine: Option<i32>,
    pub back_nine: Option<i32>,
    pub total: Option<i32>,
    pub is_pro: bool,
    pub is_senior: bool,
    #[serde(rename = "isNIT")]
    pub is_nit: bool,
    pub has_scores: bool,
}

impl GolferEntry {
    #[must_use]
    pub fn unscored(golfer_id: Option<i64>, name: &str, is_nit: bool) -> Self {
        Self {
            golfer_id,
            name: name.to_string(),
            front_nine: None,
            back_nine: None,
            total: None,
            is_pro: false,
            is_senior: false,
            is_nit,
            has_scores: false,
        }
    }

    /// Golfer ids win when both sides carry one, so two people sharing a
    /// name stay apart. Without ids the name must match exactly.
    #[must_use]
    pub fn is_same_golfer(&self, golfer_id: Option<i64>, name: &str) -> bool {
        match (self.golfer_id, golfer_id) {
            (Some(mine), Some(theirs)) => mine == theirs,
            _ => self.name == name,
        }
    }

    /// Eligible to count towards the club's team total.
    #[must_use]
    pub fn counts_for_team(&self) -> bool {
        self.has_scores && !self.is_nit
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClubGroup {
    pub club_name: String,
    pub players: Vec<GolferEntry>,
    pub players_with_scores: usize,
    pub total_players: usize,
}

impl ClubGroup {
    #[must_use]
    pub fn new(club_name: &str) -> Self {
        Self {
            club_name: club_name.to_string(),
            players: Vec::new(),
            players_with_scores: 0,
            total_players: 0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    pub position: usize,
    /// Same points and back nine as a neighbour; no further tie-break exists.
    pub tied: bool,
    pub club_name: String,
    pub total_points: i32,
    pub total_back9: i32,
    /// Players whose scores made up `total_points` (at most four).
    pub counting_players: usize,
    pub players_count: usize,
    pub total_players_with_scores: usize,
}

impl TeamStanding {
    #[must_use]
    pub fn position_label(&self) -> String {
        if self.tied {
            format!("T{}", self.position)
        } else {
            self.position.to_string()
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LiveResult {
    pub position: usize,
    pub player_name: String,
    pub club: String,
    pub score: i32,
    pub back9_score: Option<i32>,
    pub status: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub id: i64,
    pub event_type: Option<String>,
    pub event_date: Option<String>,
    pub host_club: Option<String>,
}

impl EventSummary {
    #[must_use]
    pub fn title(&self) -> String {
        let kind = self.event_type.as_deref().unwrap_or("Fixture");
        match self.host_club.as_deref() {
            Some(club) => format!("{kind} at {club}"),
            None => kind.to_string(),
        }
    }
}

/// Everything one refresh cycle derives from a CMS snapshot.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub event: EventSummary,
    pub clubs: Vec<ClubGroup>,
    pub standings: Vec<TeamStanding>,
    pub refreshed_at: DateTime<Utc>,
}
