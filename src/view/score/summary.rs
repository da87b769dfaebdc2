use maud::{Markup, html};

use crate::controller::standings::top_clubs;
use crate::model::TeamStanding;

pub fn render_top_clubs(standings: &[TeamStanding]) -> Markup {
    let top = top_clubs(standings);
    html! {
        h3 { "Top Clubs" }
        @if top.is_empty() {
            p class="empty" { "No clubs have posted scores yet" }
        } @else {
            table class="styled-table top-clubs" {
                thead {
                    tr {
                        th { "POS" }
                        th { "CLUB" }
                        th { "POINTS" }
                        th { "BACK 9" }
                        th { "SCORED" }
                    }
                }
                tbody {
                    @for standing in top {
                        tr {
                            td { (standing.position_label()) }
                            td { (standing.club_name) }
                            td class="total" { (standing.total_points) }
                            td { (standing.total_back9) }
                            td { (standing.total_players_with_scores) "/" (standing.players_count) }
                        }
                    }
                }
            }
        }
    }
}
