use crate::completion_log::CompletionLog;
use crate::date_key::{DateKey, YearMonth};
use crate::models::{CalendarCell, CalendarGrid};

pub const MAX_HEAT_LEVEL: u8 = 4;

/// Heat bucket for a day's completion count: 0..=3 map to themselves and
/// anything higher is capped at 4.
pub fn heat_level(count: usize) -> u8 {
    count.min(usize::from(MAX_HEAT_LEVEL)) as u8
}

/// Day cells for `month`, preceded by `leading_blanks` empty slots so the
/// 1st lands under its weekday in a Sunday-first grid.
pub fn build_calendar(log: &CompletionLog, month: YearMonth) -> CalendarGrid {
    let cells = month
        .first_day()
        .iter_days()
        .take(month.days_in_month() as usize)
        .zip(1..)
        .map(|(date, day)| {
            let date = DateKey::from_date(date);
            let count = log.count_for(date);
            CalendarCell {
                day,
                date,
                count,
                heat_level: heat_level(count),
            }
        })
        .collect();

    CalendarGrid {
        year: month.year(),
        month: month.month0(),
        label: month.label(),
        leading_blanks: month.first_weekday(),
        cells,
        prev: month.prev().into(),
        next: month.next().into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthRef;

    fn key(value: &str) -> DateKey {
        DateKey::parse(value).unwrap()
    }

    #[test]
    fn heat_levels_cap_at_four() {
        let levels: Vec<u8> = (0..7).map(heat_level).collect();
        assert_eq!(levels, [0, 1, 2, 3, 4, 4, 4]);
    }

    #[test]
    fn leap_february_has_29_cells() {
        let grid = build_calendar(&CompletionLog::new(), YearMonth::new(2024, 1).unwrap());
        assert_eq!(grid.cells.len(), 29);
        assert_eq!(grid.leading_blanks, 4);
        assert_eq!(grid.label, "February 2024");
        assert_eq!(grid.cells[0].date.to_string(), "2024-02-01");
        assert_eq!(grid.cells[28].day, 29);
        assert_eq!(grid.cells[28].date.to_string(), "2024-02-29");
        assert!(grid.cells.iter().all(|cell| cell.count == 0 && cell.heat_level == 0));
    }

    #[test]
    fn cells_carry_counts_and_heat() {
        let mut log = CompletionLog::new();
        for habit in ["A", "B", "C", "D", "E"] {
            log.toggle(key("2024-03-10"), habit);
        }
        log.toggle(key("2024-03-11"), "A");
        log.toggle(key("2024-04-01"), "A");

        let grid = build_calendar(&log, YearMonth::new(2024, 2).unwrap());
        assert_eq!(grid.cells.len(), 31);
        let tenth = &grid.cells[9];
        assert_eq!((tenth.day, tenth.count, tenth.heat_level), (10, 5, 4));
        let eleventh = &grid.cells[10];
        assert_eq!((eleventh.count, eleventh.heat_level), (1, 1));
        let total: usize = grid.cells.iter().map(|cell| cell.count).sum();
        assert_eq!(total, 6);
    }

    #[test]
    fn neighbours_roll_over_year() {
        let grid = build_calendar(&CompletionLog::new(), YearMonth::new(2024, 0).unwrap());
        assert_eq!(grid.prev, MonthRef { year: 2023, month: 11 });
        assert_eq!(grid.next, MonthRef { year: 2024, month: 1 });

        let grid = build_calendar(&CompletionLog::new(), YearMonth::new(2024, 11).unwrap());
        assert_eq!(grid.prev, MonthRef { year: 2024, month: 10 });
        assert_eq!(grid.next, MonthRef { year: 2025, month: 0 });
    }
}
