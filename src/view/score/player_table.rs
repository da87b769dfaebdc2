use maud::{Markup, html};

use crate::controller::standings::TEAM_SIZE;
use crate::model::{ClubGroup, GolferEntry, score_cell};

/// One line of a club's player table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableRow<'a> {
    Player(&'a GolferEntry),
    /// Cosmetic marker under the fourth scored team player.
    TopFourDivider,
    /// Separates the not-in-team players at the bottom of the table.
    NitDivider,
}

/// Regular players in normalizer order, then NIT players behind a divider.
/// The top-four divider only marks the team cut; it never reorders anything.
#[must_use]
pub fn player_table_rows(group: &ClubGroup, top_four_divider: bool) -> Vec<TableRow<'_>> {
    let (regular, nit): (Vec<&GolferEntry>, Vec<&GolferEntry>) =
        group.players.iter().partition(|p| !p.is_nit);

    let scored_regular = regular.iter().filter(|p| p.has_scores).count();
    let divide_after = (top_four_divider && scored_regular >= TEAM_SIZE).then_some(TEAM_SIZE);

    let mut rows = Vec::with_capacity(group.players.len() + 2);
    for (idx, player) in regular.into_iter().enumerate() {
        rows.push(TableRow::Player(player));
        if divide_after == Some(idx + 1) {
            rows.push(TableRow::TopFourDivider);
        }
    }

    if !nit.is_empty() {
        rows.push(TableRow::NitDivider);
        rows.extend(nit.into_iter().map(TableRow::Player));
    }

    rows
}

fn player_badges(player: &GolferEntry) -> Markup {
    html! {
        @if player.is_pro { span class="badge pro" { "PRO" } }
        @if player.is_senior { span class="badge senior" { "SNR" } }
        @if player.is_nit { span class="badge nit" { "NIT" } }
    }
}

#[must_use]
pub fn render_player_table(group: &ClubGroup, top_four_divider: bool) -> Markup {
    html! {
        table class="styled-table club-table" data-club=(group.club_name) {
            thead {
                tr {
                    th { "PLAYER" }
                    th { "F9" }
                    th { "B9" }
                    th { "TOTAL" }
                }
            }
            tbody {
                @for row in player_table_rows(group, top_four_divider) {
                    @match row {
                        TableRow::Player(player) => {
                            tr class=(if player.has_scores { "scored" } else { "unscored" }) {
                                td class="player-name" { (player.name) " " (player_badges(player)) }
                                td { (score_cell(player.front_nine, player.has_scores)) }
                                td { (score_cell(player.back_nine, player.has_scores)) }
                                td class="total" { (score_cell(player.total, player.has_scores)) }
                            }
                        }
                        TableRow::TopFourDivider => {
                            tr class="divider top-four" { td colspan="4" {} }
                        }
                        TableRow::NitDivider => {
                            tr class="divider nit" { td colspan="4" { "Not in team" } }
                        }
                    }
                }
            }
        }
    }
}
