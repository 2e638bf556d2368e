use chrono::{Datelike, Duration, NaiveDate};
use std::cmp::Ordering;

/// Where a tracker column sits relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Past,
    Today,
    Future,
}

impl DayStatus {
    pub fn of(date: NaiveDate, today: NaiveDate) -> Self {
        match date.cmp(&today) {
            Ordering::Less => Self::Past,
            Ordering::Equal => Self::Today,
            Ordering::Greater => Self::Future,
        }
    }

    /// Only today's completion mark may be toggled from the tracker
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Today)
    }
}

/// Monday through Sunday of the week containing `today`
pub fn week_dates(today: NaiveDate) -> [NaiveDate; 7] {
    let monday = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
    let mut dates = [monday; 7];
    for (offset, date) in dates.iter_mut().enumerate() {
        *date = monday + Duration::days(offset as i64);
    }
    dates
}

/// Column header, e.g. "MON 15"
pub fn day_label(date: NaiveDate) -> String {
    format!("{} {}", date.format("%a").to_string().to_uppercase(), date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_starts_on_monday() {
        // Wednesday
        let week = week_dates(date(2024, 1, 3));
        assert_eq!(week[0], date(2024, 1, 1));
        assert_eq!(week[6], date(2024, 1, 7));
    }

    #[test]
    fn test_sunday_belongs_to_previous_monday() {
        let week = week_dates(date(2024, 1, 7));
        assert_eq!(week[0], date(2024, 1, 1));
    }

    #[test]
    fn test_week_spans_month_boundary() {
        let week = week_dates(date(2024, 3, 1));
        assert_eq!(week[0], date(2024, 2, 26));
        assert_eq!(week[6], date(2024, 3, 3));
    }

    #[test]
    fn test_day_status_locks_all_but_today() {
        let today = date(2024, 1, 3);
        assert_eq!(DayStatus::of(date(2024, 1, 2), today), DayStatus::Past);
        assert_eq!(DayStatus::of(today, today), DayStatus::Today);
        assert_eq!(DayStatus::of(date(2024, 1, 4), today), DayStatus::Future);
        assert!(DayStatus::Today.is_editable());
        assert!(!DayStatus::Past.is_editable());
        assert!(!DayStatus::Future.is_editable());
    }

    #[test]
    fn test_day_label() {
        assert_eq!(day_label(date(2024, 1, 1)), "MON 1");
    }
}
