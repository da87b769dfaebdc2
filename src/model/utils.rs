use chrono::Duration as ChronoDuration;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;

/// Age of the last refresh as shown in the board footer.
#[must_use]
pub fn format_time_ago(td: ChronoDuration) -> String {
    let secs = td.num_seconds().max(0);

    let (count, unit) = if secs >= DAY {
        (secs / DAY, "day")
    } else if secs >= HOUR {
        (secs / HOUR, "hour")
    } else if secs >= MINUTE {
        (secs / MINUTE, "minute")
    } else if secs >= 5 {
        (secs, "second")
    } else {
        return "just now".to_string();
    };

    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

/// Placeholder for a score that has not been posted.
pub const NO_SCORE: &str = "\u{2014}";

#[must_use]
pub fn score_cell(value: Option<i32>, has_scores: bool) -> String {
    match value {
        Some(v) if has_scores => v.to_string(),
        _ => NO_SCORE.to_string(),
    }
}
