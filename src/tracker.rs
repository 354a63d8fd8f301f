//! Application state and the use cases that mutate it.
//!
//! The registry and the log know nothing about each other. Anything that has
//! to keep them consistent, such as purging a deleted habit's completions,
//! happens here.

use crate::calendar::heat_level;
use crate::completion_log::CompletionLog;
use crate::date_key::DateKey;
use crate::models::{DayDetail, HabitView, Snapshot};
use crate::registry::{HabitError, HabitRegistry};
use tracing::warn;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tracker {
    pub registry: HabitRegistry,
    pub log: CompletionLog,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds state from a snapshot, dropping anything that would break the
    /// registry or log invariants. Completion names are trimmed the same way
    /// registry names are, so both sides agree on identity.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let mut tracker = Self::new();
        for name in &snapshot.habits {
            if let Err(err) = tracker.registry.add(name) {
                warn!("ignoring habit {name:?}: {err}");
            }
        }
        for (date, habits) in &snapshot.completions {
            for raw in habits {
                let habit = raw.trim();
                if habit.is_empty() {
                    warn!("ignoring blank completion on {date}");
                } else if !tracker.log.insert(*date, habit) {
                    warn!("ignoring repeated completion of {habit:?} on {date}");
                }
            }
        }
        tracker
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            habits: self.registry.list().to_vec(),
            completions: self
                .log
                .entries()
                .map(|(date, habits)| (date, habits.to_vec()))
                .collect(),
        }
    }

    pub fn add_habit(&mut self, name: &str) -> Result<&str, HabitError> {
        self.registry.add(name)
    }

    /// Removes the habit and every completion recorded for it. The log is
    /// purged even when the name is not registered.
    pub fn delete_habit(&mut self, name: &str) -> bool {
        let removed = self.registry.remove(name);
        self.log.remove_habit_everywhere(name);
        removed
    }

    /// Toggles `habit` on `date`. Returns `None` for habits that are not
    /// registered, leaving the log untouched.
    pub fn toggle_completion(&mut self, date: DateKey, habit: &str) -> Option<bool> {
        if !self.registry.contains(habit) {
            return None;
        }
        Some(self.log.toggle(date, habit))
    }

    pub fn habit_views(&self, today: DateKey) -> Vec<HabitView> {
        self.registry
            .list()
            .iter()
            .map(|name| HabitView {
                name: name.clone(),
                completed_today: self.log.is_completed(today, name),
            })
            .collect()
    }

    pub fn day_detail(&self, date: DateKey) -> DayDetail {
        let count = self.log.count_for(date);
        DayDetail {
            date,
            count,
            heat_level: heat_level(count),
            habits: self.log.habits_on(date).to_vec(),
        }
    }
}
