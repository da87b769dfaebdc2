use std::cmp::Ordering;

use crate::model::{ClubGroup, TeamStanding};

/// Scores per club that make up the team total.
pub const TEAM_SIZE: usize = 4;
/// Clubs shown in the summary strip.
pub const TOP_CLUBS: usize = 4;

#[must_use]
pub fn team_standing(group: &ClubGroup) -> TeamStanding {
    let mut eligible: Vec<_> = group
        .players
        .iter()
        .filter(|p| p.counts_for_team())
        .collect();
    eligible.sort_by(|a, b| b.total.cmp(&a.total));
    eligible.truncate(TEAM_SIZE);

    TeamStanding {
        position: 0,
        tied: false,
        club_name: group.club_name.clone(),
        total_points: eligible.iter().filter_map(|p| p.total).sum(),
        total_back9: eligible.iter().map(|p| p.back_nine.unwrap_or(0)).sum(),
        counting_players: eligible.len(),
        players_count: group.total_players,
        total_players_with_scores: group.players_with_scores,
    }
}

fn compare_standings(a: &TeamStanding, b: &TeamStanding) -> Ordering {
    b.total_points
        .cmp(&a.total_points)
        .then_with(|| b.total_back9.cmp(&a.total_back9))
}

/// All clubs, best first. Clubs level on points and back nine share a
/// position and are listed by name.
#[must_use]
pub fn rank_clubs(groups: &[ClubGroup]) -> Vec<TeamStanding> {
    let mut standings: Vec<TeamStanding> = groups.iter().map(team_standing).collect();
    standings.sort_by(|a, b| compare_standings(a, b).then_with(|| a.club_name.cmp(&b.club_name)));

    for i in 0..standings.len() {
        let level_with_previous =
            i > 0 && compare_standings(&standings[i - 1], &standings[i]) == Ordering::Equal;
        if level_with_previous {
            standings[i].position = standings[i - 1].position;
            standings[i].tied = true;
            standings[i - 1].tied = true;
        } else {
            standings[i].position = i + 1;
        }
    }

    standings
}

#[must_use]
pub fn top_clubs(standings: &[TeamStanding]) -> &[TeamStanding] {
    &standings[..standings.len().min(TOP_CLUBS)]
}
