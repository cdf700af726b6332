//! Conference-day resolution.

use crate::models::meal::ConferenceDay;
use crate::utils::date;
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// The two fixed calendar dates of the event. They are bound to one year:
/// nothing is derived across a year rollover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConferenceCalendar {
    pub day_one: NaiveDate,
    pub day_two: NaiveDate,
}

impl Default for ConferenceCalendar {
    fn default() -> Self {
        Self {
            day_one: NaiveDate::from_ymd_opt(2025, 12, 19).unwrap_or_default(),
            day_two: NaiveDate::from_ymd_opt(2025, 12, 20).unwrap_or_default(),
        }
    }
}

fn same_day(a: &NaiveDate, b: &NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

impl ConferenceCalendar {
    pub fn new(day_one: NaiveDate, day_two: NaiveDate) -> Self {
        Self { day_one, day_two }
    }

    /// Which conference day `d` falls on, comparing calendar components only.
    pub fn day_for(&self, d: NaiveDate) -> Option<ConferenceDay> {
        if same_day(&d, &self.day_one) {
            Some(ConferenceDay::One)
        } else if same_day(&d, &self.day_two) {
            Some(ConferenceDay::Two)
        } else {
            None
        }
    }

    /// Conference day of the local calendar date.
    pub fn today(&self) -> Option<ConferenceDay> {
        self.day_for(date::today())
    }

    pub fn date_of(&self, day: ConferenceDay) -> NaiveDate {
        match day {
            ConferenceDay::One => self.day_one,
            ConferenceDay::Two => self.day_two,
        }
    }

    /// "Day 1 - Dec 19"
    pub fn label(&self, day: ConferenceDay) -> String {
        format!("Day {} - {}", day.number(), self.date_of(day).format("%b %-d"))
    }

    /// Label for an optional day, as shown in the station header.
    pub fn format_day(&self, day: Option<ConferenceDay>) -> String {
        match day {
            Some(d) => self.label(d),
            None => "Outside Conference Dates".to_string(),
        }
    }

    /// "Dec 19-20"
    pub fn range_label(&self) -> String {
        format!(
            "{}-{}",
            self.day_one.format("%b %-d"),
            self.day_two.format("%-d")
        )
    }

    /// Opening instant of day one at `opening` local time.
    pub fn opening(&self, opening: NaiveTime) -> Option<DateTime<Local>> {
        Local
            .from_local_datetime(&NaiveDateTime::new(self.day_one, opening))
            .earliest()
    }
}

/// Remaining time split the way the landing countdown shows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// Zero once the target is reached.
    pub fn until(now: DateTime<Local>, target: DateTime<Local>) -> Self {
        let diff = (target - now).num_seconds();
        if diff <= 0 {
            return Self::default();
        }
        Self {
            days: diff / 86_400,
            hours: (diff / 3_600) % 24,
            minutes: (diff / 60) % 60,
            seconds: diff % 60,
        }
    }

    pub fn is_over(&self) -> bool {
        *self == Self::default()
    }
}
