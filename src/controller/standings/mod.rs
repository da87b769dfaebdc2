pub mod normalizer;
pub mod ranking;

pub use normalizer::*;
pub use ranking::*;

use chrono::{DateTime, Utc};

use crate::model::{Board, ClubGroup, EventRecord, EventSummary, LiveResult, TeeTimeRecord};

pub const FINAL_STATUS: &str = "Final";

/// Runs the whole aggregation pipeline over one fetched snapshot.
#[must_use]
pub fn build_board(
    event: &EventRecord,
    tee_times: &[TeeTimeRecord],
    refreshed_at: DateTime<Utc>,
) -> Board {
    let clubs = normalize(event, tee_times);
    let standings = rank_clubs(&clubs);

    Board {
        event: EventSummary {
            id: event.id,
            event_type: event.event_type.clone(),
            event_date: event.event_date.clone(),
            host_club: event
                .golf_club
                .as_ref()
                .and_then(|club| club.club_name.clone()),
        },
        clubs,
        standings,
        refreshed_at,
    }
}

/// Scored players flattened club by club, in the order the clubs and
/// players appear on the board. Positions are not a global ranking.
#[must_use]
pub fn flatten_live_results(clubs: &[ClubGroup]) -> Vec<LiveResult> {
    clubs
        .iter()
        .flat_map(|club| {
            club.players.iter().filter_map(move |player| {
                player.total.filter(|_| player.has_scores).map(|score| {
                    (club.club_name.as_str(), player.name.as_str(), score, player.back_nine)
                })
            })
        })
        .enumerate()
        .map(|(idx, (club, name, score, back9_score))| LiveResult {
            position: idx + 1,
            player_name: name.to_string(),
            club: club.to_string(),
            score,
            back9_score,
            status: FINAL_STATUS.to_string(),
        })
        .collect()
}
