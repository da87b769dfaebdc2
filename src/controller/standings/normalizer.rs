use ahash::RandomState;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::model::{ClubGroup, EventRecord, GolferEntry, ScoreRecord, TeeTimeRecord};

pub const UNAFFILIATED: &str = "Unaffiliated";

struct ClubIndex {
    groups: Vec<ClubGroup>,
    by_name: HashMap<String, usize, RandomState>,
}

impl ClubIndex {
    fn new() -> Self {
        Self {
            groups: Vec::new(),
            by_name: HashMap::with_hasher(RandomState::new()),
        }
    }

    fn group_mut(&mut self, club_name: &str) -> &mut ClubGroup {
        let idx = match self.by_name.get(club_name) {
            Some(&idx) => idx,
            None => {
                self.groups.push(ClubGroup::new(club_name));
                let idx = self.groups.len() - 1;
                self.by_name.insert(club_name.to_string(), idx);
                idx
            }
        };
        &mut self.groups[idx]
    }
}

/// Merges the tee sheet (roster) and the posted scores of one event into
/// per-club player lists.
#[must_use]
pub fn normalize(event: &EventRecord, tee_times: &[TeeTimeRecord]) -> Vec<ClubGroup> {
    let mut index = ClubIndex::new();

    for tee_time in tee_times {
        for golfer in &tee_time.golfers {
            let group = index.group_mut(golfer.club_name().unwrap_or(UNAFFILIATED));
            if group
                .players
                .iter()
                .any(|p| p.is_same_golfer(golfer.id, &golfer.golfer_name))
            {
                continue;
            }
            let mut entry = GolferEntry::unscored(golfer.id, &golfer.golfer_name, tee_time.is_nit);
            entry.is_pro = golfer.is_pro;
            entry.is_senior = golfer.is_senior;
            group.players.push(entry);
            group.total_players += 1;
        }
    }

    for score in &event.scores {
        overlay_score(&mut index, score);
    }

    let mut groups = index.groups;
    for group in &mut groups {
        group.players.sort_by(compare_players);
    }
    groups.sort_by(|a, b| a.club_name.cmp(&b.club_name));
    groups
}

fn overlay_score(index: &mut ClubIndex, score: &ScoreRecord) {
    // A score with no golfer attached cannot be attributed to anyone.
    let Some(golfer) = score.golfer.as_ref() else {
        return;
    };
    let group = index.group_mut(golfer.club_name().unwrap_or(UNAFFILIATED));

    match group
        .players
        .iter_mut()
        .find(|p| p.is_same_golfer(golfer.id, &golfer.golfer_name))
    {
        Some(entry) => {
            let had_scores = entry.has_scores;
            if entry.golfer_id.is_none() {
                entry.golfer_id = golfer.id;
            }
            entry.front_nine = score.front9_score;
            entry.back_nine = score.back9_score;
            entry.total = score.golfer_event_score;
            entry.is_pro = golfer.is_pro;
            entry.is_senior = golfer.is_senior;
            entry.has_scores = entry.total.is_some();

            match (had_scores, entry.has_scores) {
                (false, true) => group.players_with_scores += 1,
                (true, false) => group.players_with_scores -= 1,
                _ => {}
            }
        }
        None => {
            let entry = GolferEntry {
                golfer_id: golfer.id,
                name: golfer.golfer_name.clone(),
                front_nine: score.front9_score,
                back_nine: score.back9_score,
                total: score.golfer_event_score,
                is_pro: golfer.is_pro,
                is_senior: golfer.is_senior,
                is_nit: false,
                has_scores: score.golfer_event_score.is_some(),
            };
            group.total_players += 1;
            if entry.has_scores {
                group.players_with_scores += 1;
            }
            group.players.push(entry);
        }
    }
}

/// Scored players by total descending, then unscored players by name.
fn compare_players(a: &GolferEntry, b: &GolferEntry) -> Ordering {
    match (a.total, b.total) {
        (Some(x), Some(y)) => y.cmp(&x).then_with(|| a.name.cmp(&b.name)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.name.cmp(&b.name),
    }
}
