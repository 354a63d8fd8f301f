use crate::completion_log::CompletionLog;
use crate::date_key::DateKey;
use crate::models::StatsResponse;
use crate::tracker::Tracker;

pub fn build_stats(tracker: &Tracker) -> StatsResponse {
    build_stats_at(DateKey::today(), tracker)
}

pub fn build_stats_at(today: DateKey, tracker: &Tracker) -> StatsResponse {
    StatsResponse {
        current_streak: current_streak(&tracker.log, today),
        longest_streak: longest_streak(&tracker.log),
        total_completions: tracker.log.total_completions(),
        completion_rate: completion_rate(&tracker.log, tracker.registry.len()),
    }
}

/// Consecutive days with any completion, counting back from `today`.
/// A day without completions ends the run, so an unlogged today gives 0.
pub fn current_streak(log: &CompletionLog, today: DateKey) -> u32 {
    let mut streak = 0;
    let mut day = Some(today);
    while let Some(date) = day {
        if log.count_for(date) == 0 {
            break;
        }
        streak += 1;
        day = date.pred();
    }
    streak
}

/// Length of the longest run of consecutive logged days.
pub fn longest_streak(log: &CompletionLog) -> u32 {
    let mut longest = 0;
    let mut running = 0;
    let mut prev: Option<DateKey> = None;

    for date in log.date_keys() {
        running = match prev {
            Some(prev) if prev.is_followed_by(date) => running + 1,
            _ => 1,
        };
        longest = longest.max(running);
        prev = Some(date);
    }

    longest
}

/// Percentage of possible completions on days that have any completion at
/// all. Days where nothing was logged are not part of the denominator.
pub fn completion_rate(log: &CompletionLog, habit_count: usize) -> u32 {
    let logged_days = log.len();
    if habit_count == 0 || logged_days == 0 {
        return 0;
    }

    let possible = (logged_days * habit_count) as u64;
    let completed = log.total_completions() as u64;
    // round half up on 100 * completed / possible
    ((completed * 200 + possible) / (possible * 2)) as u32
}
