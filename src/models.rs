use crate::date_key::{DateKey, YearMonth};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Persisted form of the tracker.
#[derive(Debug, Clone, Serialize, Default)]
pub struct Snapshot {
    pub habits: Vec<String>,
    pub completions: BTreeMap<DateKey, Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct HabitRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub habit: String,
    /// Defaults to today when omitted.
    pub date: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct CalendarQuery {
    pub year: Option<i32>,
    /// 0-indexed month.
    pub month: Option<u32>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HabitView {
    pub name: String,
    pub completed_today: bool,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub date: DateKey,
    pub habit: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DayDetail {
    pub date: DateKey,
    pub count: usize,
    pub heat_level: u8,
    pub habits: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct MonthRef {
    pub year: i32,
    pub month: u32,
}

impl From<YearMonth> for MonthRef {
    fn from(month: YearMonth) -> Self {
        Self {
            year: month.year(),
            month: month.month0(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CalendarCell {
    pub day: u32,
    pub date: DateKey,
    pub count: usize,
    pub heat_level: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarGrid {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub leading_blanks: u32,
    pub cells: Vec<CalendarCell>,
    pub prev: MonthRef,
    pub next: MonthRef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatsResponse {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_completions: usize,
    pub completion_rate: u32,
}
