use crate::date_key::DateKey;
use std::collections::BTreeMap;

/// Which habits were completed on which day.
///
/// Invariant: no date maps to an empty list, and a date's list holds each
/// name at most once. Names within a day keep the order they were logged in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionLog {
    days: BTreeMap<DateKey, Vec<String>>,
}

impl CompletionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the completion of `habit` on `date` and returns the new state.
    pub fn toggle(&mut self, date: DateKey, habit: &str) -> bool {
        let habits = self.days.entry(date).or_default();
        if let Some(index) = habits.iter().position(|name| name == habit) {
            habits.remove(index);
            if habits.is_empty() {
                self.days.remove(&date);
            }
            false
        } else {
            habits.push(habit.to_string());
            true
        }
    }

    /// Marks `habit` done on `date` without toggling. Returns false when it
    /// was already recorded.
    pub fn insert(&mut self, date: DateKey, habit: &str) -> bool {
        let habits = self.days.entry(date).or_default();
        if habits.iter().any(|name| name == habit) {
            return false;
        }
        habits.push(habit.to_string());
        true
    }

    pub fn is_completed(&self, date: DateKey, habit: &str) -> bool {
        self.days
            .get(&date)
            .is_some_and(|habits| habits.iter().any(|name| name == habit))
    }

    pub fn count_for(&self, date: DateKey) -> usize {
        self.days.get(&date).map_or(0, Vec::len)
    }

    pub fn habits_on(&self, date: DateKey) -> &[String] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Drops `habit` from every day, pruning days left with nothing.
    /// Returns how many completions were removed.
    pub fn remove_habit_everywhere(&mut self, habit: &str) -> usize {
        let mut removed = 0;
        self.days.retain(|_, habits| {
            let before = habits.len();
            habits.retain(|name| name != habit);
            removed += before - habits.len();
            !habits.is_empty()
        });
        removed
    }

    /// Dates with at least one completion, oldest first.
    pub fn date_keys(&self) -> impl Iterator<Item = DateKey> + '_ {
        self.days.keys().copied()
    }

    pub fn entries(&self) -> impl Iterator<Item = (DateKey, &[String])> + '_ {
        self.days
            .iter()
            .map(|(date, habits)| (*date, habits.as_slice()))
    }

    pub fn total_completions(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// Number of days with any completion.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(value: &str) -> DateKey {
        DateKey::parse(value).unwrap()
    }

    fn assert_no_empty_days(log: &CompletionLog) {
        assert!(log.entries().all(|(_, habits)| !habits.is_empty()));
    }

    #[test]
    fn toggle_twice_restores_prior_state() {
        let mut log = CompletionLog::new();
        log.toggle(key("2024-01-01"), "Read");
        log.toggle(key("2024-01-01"), "Run");
        let before = log.clone();

        assert!(log.toggle(key("2024-01-01"), "Walk"));
        assert!(!log.toggle(key("2024-01-01"), "Walk"));
        assert_eq!(log, before);

        assert!(log.toggle(key("2024-01-02"), "Read"));
        assert!(!log.toggle(key("2024-01-02"), "Read"));
        assert_eq!(log, before);
    }

    #[test]
    fn removing_last_habit_deletes_day() {
        let mut log = CompletionLog::new();
        log.toggle(key("2024-01-01"), "Read");
        assert_eq!(log.len(), 1);
        log.toggle(key("2024-01-01"), "Read");
        assert!(log.is_empty());
        assert_eq!(log.count_for(key("2024-01-01")), 0);
    }

    #[test]
    fn queries_reflect_completions() {
        let mut log = CompletionLog::new();
        log.toggle(key("2024-01-01"), "Read");
        log.toggle(key("2024-01-01"), "Run");
        assert!(log.is_completed(key("2024-01-01"), "Read"));
        assert!(!log.is_completed(key("2024-01-01"), "Walk"));
        assert!(!log.is_completed(key("2024-01-02"), "Read"));
        assert_eq!(log.count_for(key("2024-01-01")), 2);
        assert_eq!(log.habits_on(key("2024-01-01")), ["Read", "Run"]);
        assert!(log.habits_on(key("2024-01-02")).is_empty());
    }

    #[test]
    fn insert_never_duplicates() {
        let mut log = CompletionLog::new();
        assert!(log.insert(key("2024-01-01"), "Read"));
        assert!(!log.insert(key("2024-01-01"), "Read"));
        assert_eq!(log.count_for(key("2024-01-01")), 1);
    }

    #[test]
    fn remove_habit_everywhere_prunes_empty_days() {
        let mut log = CompletionLog::new();
        log.toggle(key("2024-01-01"), "Read");
        log.toggle(key("2024-01-02"), "Read");
        log.toggle(key("2024-01-02"), "Run");
        log.toggle(key("2024-01-03"), "Read");
        log.toggle(key("2024-01-04"), "Run");

        assert_eq!(log.remove_habit_everywhere("Read"), 3);
        assert_no_empty_days(&log);
        let dates: Vec<String> = log.date_keys().map(|d| d.to_string()).collect();
        assert_eq!(dates, ["2024-01-02", "2024-01-04"]);
        assert_eq!(log.total_completions(), 2);

        assert_eq!(log.remove_habit_everywhere("Read"), 0);
        assert_eq!(log.remove_habit_everywhere("Run"), 2);
        assert!(log.is_empty());
    }

    #[test]
    fn date_keys_are_chronological() {
        let mut log = CompletionLog::new();
        log.toggle(key("2024-03-01"), "Read");
        log.toggle(key("2023-12-31"), "Read");
        log.toggle(key("2024-01-15"), "Read");
        let dates: Vec<String> = log.date_keys().map(|d| d.to_string()).collect();
        assert_eq!(dates, ["2023-12-31", "2024-01-15", "2024-03-01"]);
    }
}
