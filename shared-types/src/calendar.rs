//! Month-grid model for the booking calendar.
//!
//! Everything here is pure: the Leptos component owns a [`CalendarState`],
//! calls [`CalendarState::render`] on every change and draws the resulting
//! [`CalendarGrid`] from scratch.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Datelike, FixedOffset, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Column headers, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("month must be between 1 and 12, got {0}")]
    InvalidMonth(u32),
    #[error("year {0} is outside the supported range")]
    YearOutOfRange(i32),
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    #[error("{0} has already passed")]
    Past(NaiveDate),
    #[error("{0} is already booked")]
    Booked(NaiveDate),
}

/// A calendar month, stored as its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthView {
    first: NaiveDate,
}

impl MonthView {
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or(CalendarError::YearOutOfRange(year))
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// 1-based month number.
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn days_in_month(&self) -> u32 {
        match self.month() {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            _ => {
                let year = self.year();
                if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 {
                    29
                } else {
                    28
                }
            }
        }
    }

    /// Number of empty cells before day 1 (0 = Sunday ... 6 = Saturday).
    pub fn leading_blanks(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    /// Moves by `delta` months, rolling over year boundaries. Saturates at
    /// the edges of the representable date range.
    pub fn shift(&self, delta: i32) -> Self {
        let months = Months::new(delta.unsigned_abs());
        let shifted = if delta >= 0 {
            self.first.checked_add_months(months)
        } else {
            self.first.checked_sub_months(months)
        };
        Self {
            first: shifted.unwrap_or(self.first),
        }
    }

    pub fn next(&self) -> Self {
        self.shift(1)
    }

    pub fn previous(&self) -> Self {
        self.shift(-1)
    }

    pub fn title(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MonthView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = MONTH_NAMES[(self.month() - 1) as usize];
        write!(f, "{} {}", name, self.year())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Past,
    Booked,
    Limited,
    Available,
}

impl DayStatus {
    pub fn is_selectable(self) -> bool {
        matches!(self, DayStatus::Available | DayStatus::Limited)
    }

    pub fn class_name(self) -> &'static str {
        match self {
            DayStatus::Past => "past",
            DayStatus::Booked => "booked",
            DayStatus::Limited => "limited",
            DayStatus::Available => "available",
        }
    }
}

/// Booked and limited-availability dates, as served by the availability
/// endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub booked_dates: BTreeSet<NaiveDate>,
    pub limited_dates: BTreeSet<NaiveDate>,
}

impl Availability {
    pub fn new<B, L>(booked: B, limited: L) -> Self
    where
        B: IntoIterator<Item = NaiveDate>,
        L: IntoIterator<Item = NaiveDate>,
    {
        Self {
            booked_dates: booked.into_iter().collect(),
            limited_dates: limited.into_iter().collect(),
        }
    }

    /// Past wins over booked, booked over limited.
    pub fn status_of(&self, date: NaiveDate, today: NaiveDate) -> DayStatus {
        if date < today {
            DayStatus::Past
        } else if self.booked_dates.contains(&date) {
            DayStatus::Booked
        } else if self.limited_dates.contains(&date) {
            DayStatus::Limited
        } else {
            DayStatus::Available
        }
    }

    pub fn is_booked(&self, date: NaiveDate) -> bool {
        self.booked_dates.contains(&date)
    }

    /// Parses a comma-separated list of `YYYY-MM-DD` dates. Blank entries
    /// are skipped.
    pub fn parse_dates(list: &str) -> Result<BTreeSet<NaiveDate>, CalendarError> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .map_err(|_| CalendarError::InvalidDate(s.to_string()))
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub status: DayStatus,
    pub selected: bool,
}

impl DayCell {
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn is_selectable(&self) -> bool {
        self.status.is_selectable()
    }

    pub fn css_class(&self) -> String {
        let mut class = format!("calendar-day {}", self.status.class_name());
        if self.selected {
            class.push_str(" selected");
        }
        class
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    Blank,
    Day(DayCell),
}

/// Seven-column month grid: leading blanks, then one cell per day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    pub month: MonthView,
    pub cells: Vec<GridCell>,
}

impl CalendarGrid {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn leading_blanks(&self) -> usize {
        self.cells
            .iter()
            .take_while(|cell| matches!(cell, GridCell::Blank))
            .count()
    }

    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter_map(|cell| match cell {
            GridCell::Day(day) => Some(day),
            GridCell::Blank => None,
        })
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayCell> {
        self.days().find(|cell| cell.date == date)
    }
}

/// State behind one booking calendar widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarState {
    viewed: MonthView,
    selected: Option<NaiveDate>,
    availability: Availability,
}

impl CalendarState {
    pub fn new(today: NaiveDate, availability: Availability) -> Self {
        Self {
            viewed: MonthView::containing(today),
            selected: None,
            availability,
        }
    }

    pub fn viewed(&self) -> MonthView {
        self.viewed
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn availability(&self) -> &Availability {
        &self.availability
    }

    /// Replaces the availability sets. A selection that became booked is
    /// dropped.
    pub fn set_availability(&mut self, availability: Availability) {
        if self.selected.is_some_and(|date| availability.is_booked(date)) {
            self.selected = None;
        }
        self.availability = availability;
    }

    pub fn next_month(&mut self) {
        self.viewed = self.viewed.next();
    }

    pub fn previous_month(&mut self) {
        self.viewed = self.viewed.previous();
    }

    pub fn select(&mut self, date: NaiveDate, today: NaiveDate) -> Result<NaiveDate, SelectionError> {
        match self.availability.status_of(date, today) {
            DayStatus::Past => Err(SelectionError::Past(date)),
            DayStatus::Booked => Err(SelectionError::Booked(date)),
            DayStatus::Limited | DayStatus::Available => {
                self.selected = Some(date);
                Ok(date)
            }
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Long-form label for the selected date, e.g.
    /// "Saturday, February 15, 2025".
    pub fn selected_label(&self) -> Option<String> {
        self.selected.map(format_long_date)
    }

    pub fn render(&self, today: NaiveDate) -> CalendarGrid {
        let month = self.viewed;
        let blanks = month.leading_blanks() as usize;
        let days = month.days_in_month();
        let mut cells = Vec::with_capacity(blanks + days as usize);

        cells.extend(std::iter::repeat(GridCell::Blank).take(blanks));

        let mut date = month.first_day();
        for _ in 0..days {
            let status = self.availability.status_of(date, today);
            let selected = status.is_selectable() && self.selected == Some(date);
            cells.push(GridCell::Day(DayCell {
                date,
                status,
                selected,
            }));
            match date.succ_opt() {
                Some(next) => date = next,
                None => break,
            }
        }

        CalendarGrid { month, cells }
    }
}

pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Saint Lucia time (AST). No daylight saving.
pub const BUSINESS_UTC_OFFSET_HOURS: i32 = -4;

/// Today's date where the events happen. The page and the booking endpoint
/// both judge "past" days against this.
pub fn business_today(now: DateTime<Utc>) -> NaiveDate {
    match FixedOffset::east_opt(BUSINESS_UTC_OFFSET_HOURS * 3600) {
        Some(offset) => now.with_timezone(&offset).date_naive(),
        None => now.date_naive(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn no_dates() -> Vec<NaiveDate> {
        Vec::new()
    }

    #[test]
    fn test_business_today_lags_utc_in_the_evening() {
        use chrono::TimeZone;
        let late_evening = Utc.with_ymd_and_hms(2025, 6, 15, 1, 30, 0).unwrap();
        assert_eq!(business_today(late_evening), ymd(2025, 6, 14));
        let morning = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(business_today(morning), ymd(2025, 6, 15));
    }

    #[test]
    fn test_february_2025_grid() {
        let today = ymd(2025, 1, 1);
        let mut state = CalendarState::new(today, Availability::default());
        state.next_month();
        let grid = state.render(today);
        assert_eq!(grid.month.title(), "February 2025");
        assert_eq!(grid.leading_blanks(), 6);
        assert_eq!(grid.days().count(), 28);
        assert_eq!(grid.len(), 34);
    }

    #[test]
    fn test_cell_count_for_all_months() {
        let today = ymd(1990, 1, 1);
        for year in 1999..=2031 {
            for month in 1..=12 {
                let view = MonthView::new(year, month).unwrap();
                let mut state = CalendarState::new(view.first_day(), Availability::default());
                state.viewed = view;
                let grid = state.render(today);
                let weekday = view.first_day().weekday().num_days_from_sunday();
                assert_eq!(view.leading_blanks(), weekday);
                assert!(view.leading_blanks() <= 6);
                assert_eq!(grid.leading_blanks(), weekday as usize);
                assert_eq!(
                    grid.len(),
                    (view.leading_blanks() + view.days_in_month()) as usize,
                    "{view}"
                );
                let last = grid.days().last().unwrap().date;
                assert_eq!(last.month(), month);
                assert_eq!(last.succ_opt().unwrap().day(), 1);
            }
        }
    }

    #[test]
    fn test_leap_years() {
        assert_eq!(MonthView::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(MonthView::new(2000, 2).unwrap().days_in_month(), 29);
        assert_eq!(MonthView::new(1900, 2).unwrap().days_in_month(), 28);
        assert_eq!(MonthView::new(2025, 2).unwrap().days_in_month(), 28);
    }

    #[test]
    fn test_navigation_rolls_year_boundaries() {
        let december = MonthView::new(2024, 12).unwrap();
        assert_eq!(december.next(), MonthView::new(2025, 1).unwrap());
        let january = MonthView::new(2025, 1).unwrap();
        assert_eq!(january.previous(), december);
        assert_eq!(january.shift(-13), MonthView::new(2023, 12).unwrap());
        assert_eq!(january.shift(25), MonthView::new(2027, 2).unwrap());
        assert_eq!(january.shift(0), january);
    }

    #[test]
    fn test_state_navigation_round_trip() {
        let today = ymd(2024, 12, 20);
        let mut state = CalendarState::new(today, Availability::default());
        state.next_month();
        assert_eq!(state.viewed().title(), "January 2025");
        state.previous_month();
        state.previous_month();
        assert_eq!(state.viewed().title(), "November 2024");
    }

    #[test]
    fn test_invalid_month() {
        assert_eq!(MonthView::new(2025, 0), Err(CalendarError::InvalidMonth(0)));
        assert_eq!(MonthView::new(2025, 13), Err(CalendarError::InvalidMonth(13)));
    }

    #[test]
    fn test_statuses() {
        let today = ymd(2025, 3, 10);
        let availability = Availability::new(
            [ymd(2025, 3, 15), ymd(2025, 3, 5)],
            [ymd(2025, 3, 8), ymd(2025, 3, 15), ymd(2025, 3, 20)],
        );
        let state = CalendarState::new(today, availability);
        let grid = state.render(today);
        let status = |d| grid.day(ymd(2025, 3, d)).unwrap().status;
        assert_eq!(status(5), DayStatus::Past);
        assert_eq!(status(8), DayStatus::Past);
        assert_eq!(status(9), DayStatus::Past);
        assert_eq!(status(10), DayStatus::Available);
        assert_eq!(status(15), DayStatus::Booked);
        assert_eq!(status(20), DayStatus::Limited);
        assert_eq!(status(31), DayStatus::Available);
    }

    #[test]
    fn test_booked_dates_never_available_or_selected() {
        let today = ymd(2025, 1, 1);
        let booked: Vec<_> = (1..=28).step_by(3).map(|d| ymd(2025, 2, d)).collect();
        let mut state = CalendarState::new(today, Availability::new(booked.clone(), no_dates()));
        state.next_month();
        for date in &booked {
            assert_eq!(state.select(*date, today), Err(SelectionError::Booked(*date)));
        }
        state.select(ymd(2025, 2, 3), today).unwrap();
        let grid = state.render(today);
        for cell in grid.days().filter(|c| booked.contains(&c.date)) {
            assert_eq!(cell.status, DayStatus::Booked);
            assert!(!cell.selected);
            assert!(!cell.css_class().contains("available"));
        }
    }

    #[test]
    fn test_select_replaces_previous_selection() {
        let today = ymd(2025, 4, 1);
        let mut state = CalendarState::new(today, Availability::new(no_dates(), [ymd(2025, 4, 5)]));
        assert_eq!(state.select(ymd(2025, 4, 12), today), Ok(ymd(2025, 4, 12)));
        assert_eq!(state.select(ymd(2025, 4, 5), today), Ok(ymd(2025, 4, 5)));
        let grid = state.render(today);
        let selected: Vec<_> = grid.days().filter(|c| c.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].date, ymd(2025, 4, 5));
        assert_eq!(selected[0].css_class(), "calendar-day limited selected");
    }

    #[test]
    fn test_past_selection_rejected_and_prior_kept() {
        let today = ymd(2025, 4, 10);
        let mut state = CalendarState::new(today, Availability::default());
        state.select(ymd(2025, 4, 11), today).unwrap();
        assert_eq!(
            state.select(ymd(2025, 4, 9), today),
            Err(SelectionError::Past(ymd(2025, 4, 9)))
        );
        assert_eq!(state.selected(), Some(ymd(2025, 4, 11)));
        assert!(state.select(today, today).is_ok());
    }

    #[test]
    fn test_selection_dropped_when_it_becomes_booked() {
        let today = ymd(2025, 4, 10);
        let mut state = CalendarState::new(today, Availability::default());
        state.select(ymd(2025, 4, 20), today).unwrap();
        state.set_availability(Availability::new([ymd(2025, 4, 20)], no_dates()));
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_selection_survives_navigation() {
        let today = ymd(2025, 4, 10);
        let mut state = CalendarState::new(today, Availability::default());
        state.select(ymd(2025, 4, 20), today).unwrap();
        state.next_month();
        assert!(state.render(today).days().all(|c| !c.selected));
        state.previous_month();
        assert!(state.render(today).day(ymd(2025, 4, 20)).unwrap().selected);
    }

    #[test]
    fn test_selected_label() {
        let today = ymd(2025, 2, 1);
        let mut state = CalendarState::new(today, Availability::default());
        assert_eq!(state.selected_label(), None);
        state.select(ymd(2025, 2, 15), today).unwrap();
        assert_eq!(state.selected_label().as_deref(), Some("Saturday, February 15, 2025"));
    }

    #[test]
    fn test_parse_dates() {
        let dates = Availability::parse_dates("2025-01-15, 2025-01-22,,").unwrap();
        assert_eq!(dates.len(), 2);
        assert!(dates.contains(&ymd(2025, 1, 22)));
        assert_eq!(
            Availability::parse_dates("2025-13-01"),
            Err(CalendarError::InvalidDate("2025-13-01".to_string()))
        );
        assert!(Availability::parse_dates("").unwrap().is_empty());
    }

    #[test]
    fn test_availability_json_shape() {
        let availability = Availability::new([ymd(2025, 1, 15)], [ymd(2025, 1, 18)]);
        let json = serde_json::to_value(&availability).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"bookedDates": ["2025-01-15"], "limitedDates": ["2025-01-18"]})
        );
    }
}
