use chrono::{DateTime, Utc};
use maud::{Markup, html};

use crate::model::{Board, LoadState, format_time_ago};
use crate::view::score::{render_player_table, render_top_clubs};

fn render_event_header(board: &Board) -> Markup {
    html! {
        div class="event-header" {
            h2 { (board.event.title()) }
            @if let Some(date) = &board.event.event_date {
                p class="event-date" { (date) }
            }
        }
    }
}

/// Full standings: header, top clubs, then every club's table.
#[must_use]
pub fn render_board(board: &Board, now: DateTime<Utc>) -> Markup {
    html! {
        (render_event_header(board))
        (render_top_clubs(&board.standings))
        h3 { "Clubs" }
        @if board.clubs.is_empty() {
            p class="empty" { "No tee times or scores yet" }
        }
        div class="club-grid" {
            @for club in &board.clubs {
                div class="club-card" {
                    h4 {
                        (club.club_name)
                        span class="club-count" { " (" (club.players_with_scores) "/" (club.total_players) ")" }
                    }
                    (render_player_table(club, false))
                }
            }
        }
        p class="last-refresh" { "Last refresh: " (format_time_ago(now - board.refreshed_at)) }
    }
}

/// The `/scores` fragment for any load state. A failed refresh keeps
/// showing the last good board under the error message.
#[must_use]
pub fn render_scores_template(state: &LoadState, now: DateTime<Utc>) -> Markup {
    html! {
        @match state {
            LoadState::Loading => {
                div class="placeholder loading" { "Loading tournament data..." }
            }
            LoadState::Ready(board) => {
                (render_board(board, now))
            }
            LoadState::Failed { failure, last_good } => {
                div class="placeholder error" {
                    p { (failure.user_message()) }
                    p class="detail" { (failure.message) }
                }
                @if let Some(board) = last_good {
                    (render_board(board, now))
                }
            }
        }
    }
}
