//! Ventana semanal semiabierta `[domingo, domingo + 7 días)`

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Semana visible del calendario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl WeekWindow {
    /// Semana que contiene `date`; empieza el domingo anterior o igual
    pub fn containing(date: NaiveDate) -> Self {
        let offset = u64::from(date.weekday().num_days_from_sunday());
        let start = date.checked_sub_days(Days::new(offset)).unwrap_or(NaiveDate::MIN);
        Self::starting_at(start)
    }

    fn starting_at(start: NaiveDate) -> Self {
        let end = start.checked_add_days(Days::new(7)).unwrap_or(NaiveDate::MAX);
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Primer día fuera de la ventana
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        timestamp >= self.start.and_time(NaiveTime::MIN) && timestamp < self.end.and_time(NaiveTime::MIN)
    }

    /// Los 7 días de la semana, de domingo a sábado
    pub fn days(&self) -> Vec<NaiveDate> {
        self.start.iter_days().take_while(|day| *day < self.end).collect()
    }

    pub fn next(&self) -> Self {
        Self::starting_at(self.end)
    }

    pub fn previous(&self) -> Self {
        Self::starting_at(self.start.checked_sub_days(Days::new(7)).unwrap_or(NaiveDate::MIN))
    }
}

/// Columna (0 = domingo) en la que cae un instante
pub fn day_column(timestamp: NaiveDateTime) -> u32 {
    timestamp.weekday().num_days_from_sunday()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_starts_on_sunday() {
        // 2024-01-10 es miércoles
        let week = WeekWindow::containing(date(2024, 1, 10));
        assert_eq!(week.start(), date(2024, 1, 7));
        assert_eq!(week.end(), date(2024, 1, 14));

        let sunday = WeekWindow::containing(date(2024, 1, 7));
        assert_eq!(sunday, week);
    }

    #[test]
    fn test_window_is_half_open() {
        let week = WeekWindow::containing(date(2024, 1, 10));
        assert!(week.contains(date(2024, 1, 7).and_hms_opt(0, 0, 0).unwrap()));
        assert!(week.contains(date(2024, 1, 13).and_hms_opt(23, 59, 59).unwrap()));
        assert!(!week.contains(date(2024, 1, 14).and_hms_opt(0, 0, 0).unwrap()));
        assert!(!week.contains(date(2024, 1, 6).and_hms_opt(23, 59, 59).unwrap()));
    }

    #[test]
    fn test_days_and_navigation() {
        let week = WeekWindow::containing(date(2024, 1, 1));
        let days = week.days();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], date(2023, 12, 31));
        assert_eq!(days[6], date(2024, 1, 6));

        assert_eq!(week.next().start(), date(2024, 1, 7));
        assert_eq!(week.next().previous(), week);
    }

    #[test]
    fn test_day_column() {
        assert_eq!(day_column(date(2024, 1, 7).and_hms_opt(9, 0, 0).unwrap()), 0);
        assert_eq!(day_column(date(2024, 1, 8).and_hms_opt(9, 0, 0).unwrap()), 1);
        assert_eq!(day_column(date(2024, 1, 13).and_hms_opt(9, 0, 0).unwrap()), 6);
    }
}
