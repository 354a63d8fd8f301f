//! Calendar date keys and month arithmetic.
//!
//! Every completion is indexed by a `YYYY-MM-DD` key taken from the local
//! calendar date. All leap-year and weekday logic goes through chrono here so
//! the rest of the crate never touches the calendar directly.

use chrono::{Datelike, Local, Months, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;

/// Canonical `YYYY-MM-DD` key for one calendar day.
///
/// Ordering is chronological, which matches the lexicographic order of the
/// string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Parses the exact zero-padded form. Anything else, including valid
    /// dates written without padding, is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        let bytes = value.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return None;
        }
        let digits_ok = bytes
            .iter()
            .enumerate()
            .all(|(idx, byte)| idx == 4 || idx == 7 || byte.is_ascii_digit());
        if !digits_ok {
            return None;
        }
        NaiveDate::parse_from_str(value, "%Y-%m-%d").ok().map(Self)
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }

    /// The calendar day before this one.
    pub fn pred(self) -> Option<Self> {
        self.0.pred_opt().map(Self)
    }

    /// True when `next` is exactly one calendar day after `self`.
    pub fn is_followed_by(self, next: DateKey) -> bool {
        (next.0 - self.0).num_days() == 1
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub fn to_key(date: NaiveDate) -> String {
    DateKey::from_date(date).to_string()
}

/// Years whose dates still have a four-digit key.
pub const YEAR_RANGE: std::ops::RangeInclusive<i32> = 0..=9999;

/// A displayed month. `month0` is 0-indexed (0 = January), and the year is
/// always within [`YEAR_RANGE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    pub fn new(year: i32, month0: u32) -> Option<Self> {
        if month0 > 11 || !YEAR_RANGE.contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month0 + 1, 1).map(Self)
    }

    fn within_range(date: NaiveDate) -> Option<Self> {
        YEAR_RANGE.contains(&date.year()).then_some(Self(date))
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self(date - chrono::Duration::days(i64::from(date.day0())))
    }

    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month0(self) -> u32 {
        self.0.month0()
    }

    pub fn first_day(self) -> NaiveDate {
        self.0
    }

    pub fn days_in_month(self) -> u32 {
        let count = self
            .0
            .iter_days()
            .take_while(|day| day.month() == self.0.month())
            .count();
        count as u32
    }

    /// Weekday of the 1st, Sunday = 0.
    pub fn first_weekday(self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// Following month; December rolls into January of the next year.
    /// Stays put at December 9999.
    pub fn next(self) -> Self {
        self.0
            .checked_add_months(Months::new(1))
            .and_then(Self::within_range)
            .unwrap_or(self)
    }

    /// Preceding month; January rolls back into December of the prior year.
    /// Stays put at January of year 0.
    pub fn prev(self) -> Self {
        self.0
            .checked_sub_months(Months::new(1))
            .and_then(Self::within_range)
            .unwrap_or(self)
    }

    pub fn label(self) -> String {
        self.0.format("%B %Y").to_string()
    }
}

/// Days in `month0` of `year`, or 0 for a month outside the calendar.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    YearMonth::new(year, month0)
        .map(YearMonth::days_in_month)
        .unwrap_or(0)
}

/// Weekday (Sunday = 0) of the first day of `month0` in `year`.
pub fn first_weekday(year: i32, month0: u32) -> u32 {
    YearMonth::new(year, month0)
        .map(YearMonth::first_weekday)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn keys_are_zero_padded() {
        assert_eq!(to_key(ymd(2024, 3, 7)), "2024-03-07");
        assert_eq!(to_key(ymd(987, 12, 31)), "0987-12-31");
    }

    #[test]
    fn parse_accepts_only_canonical_form() {
        let key = DateKey::parse("2024-02-29").expect("leap day");
        assert_eq!(key.to_string(), "2024-02-29");
        assert!(DateKey::parse("2023-02-29").is_none());
        assert!(DateKey::parse("2024-2-09").is_none());
        assert!(DateKey::parse("2024/02/09").is_none());
        assert!(DateKey::parse("").is_none());
        assert!(DateKey::parse("abcd-ef-gh").is_none());
    }

    #[test]
    fn key_order_is_chronological() {
        let a = DateKey::parse("2023-12-31").unwrap();
        let b = DateKey::parse("2024-01-01").unwrap();
        assert!(a < b);
        assert!(a.is_followed_by(b));
        assert!(!b.is_followed_by(a));
        assert_eq!(b.pred(), Some(a));
    }

    #[test]
    fn february_of_leap_year() {
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2023, 1), 28);
        assert_eq!(days_in_month(1900, 1), 28);
        assert_eq!(days_in_month(2000, 1), 29);
        assert_eq!(first_weekday(2024, 1), 4);
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 0), 31);
        assert_eq!(days_in_month(2024, 3), 30);
        assert_eq!(days_in_month(2024, 11), 31);
        assert_eq!(days_in_month(2024, 12), 0);
    }

    #[test]
    fn first_weekday_uses_sunday_zero() {
        // 2023-10-01 was a Sunday, 2024-06-01 a Saturday.
        assert_eq!(first_weekday(2023, 9), 0);
        assert_eq!(first_weekday(2024, 5), 6);
    }

    #[test]
    fn navigation_rolls_over_year_boundaries() {
        let december = YearMonth::new(2024, 11).unwrap();
        let january = december.next();
        assert_eq!((january.year(), january.month0()), (2025, 0));
        assert_eq!(january.prev(), december);

        let march = YearMonth::new(2024, 2).unwrap();
        assert_eq!(march.next().month0(), 3);
        assert_eq!(march.prev().month0(), 1);
    }

    #[test]
    fn month_from_date_and_label() {
        let month = YearMonth::containing(ymd(2024, 2, 17));
        assert_eq!(month, YearMonth::new(2024, 1).unwrap());
        assert_eq!(month.first_day(), ymd(2024, 2, 1));
        assert_eq!(month.label(), "February 2024");
        assert!(YearMonth::new(2024, 12).is_none());
    }

    #[test]
    fn months_stay_within_four_digit_years() {
        assert!(YearMonth::new(10000, 0).is_none());
        assert!(YearMonth::new(-1, 11).is_none());
        assert_eq!(days_in_month(10000, 0), 0);

        let last = YearMonth::new(9999, 11).unwrap();
        assert_eq!(last.next(), last);
        let first = YearMonth::new(0, 0).unwrap();
        assert_eq!(first.prev(), first);

        for month in [first, last] {
            let key = DateKey::from_date(month.first_day()).to_string();
            assert_eq!(DateKey::parse(&key), Some(DateKey::from_date(month.first_day())));
        }
    }
}
