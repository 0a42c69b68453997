//! Civil dates in the 8-digit `YYYYMMDD` wire format, plus the calendar
//! helpers the occurrence walks lean on.

use std::fmt;
use std::str::FromStr;

use jiff::civil::Date;
use jiff::Span;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::NextDateError;

/// A zone-less civil date.
///
/// Serialized externally as exactly eight decimal digits (`20240310`),
/// zero-padded, no separators. Always a valid Gregorian date; out-of-range
/// components are rejected at parse time, never normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(Date);

impl CalendarDate {
    /// Build a date from components, rejecting anything that is not a real
    /// calendar date.
    pub fn new(year: i16, month: i8, day: i8) -> Result<Self, NextDateError> {
        Date::new(year, month, day).map(Self).map_err(|e| {
            NextDateError::invalid_date_from(
                format!("invalid calendar date {year:04}-{month:02}-{day:02}"),
                e,
            )
        })
    }

    pub fn from_civil(date: Date) -> Self {
        Self(date)
    }

    pub fn civil(self) -> Date {
        self.0
    }

    /// Parse the 8-digit wire format.
    pub fn parse_compact(input: &str) -> Result<Self, NextDateError> {
        let bytes = input.as_bytes();
        if bytes.len() != 8 || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(NextDateError::invalid_date(format!(
                "expected 8-digit date YYYYMMDD, got '{input}'"
            )));
        }
        let year: i16 = input[0..4]
            .parse()
            .map_err(|e| NextDateError::invalid_date_from(format!("invalid year in '{input}'"), e))?;
        let month: i8 = input[4..6]
            .parse()
            .map_err(|e| NextDateError::invalid_date_from(format!("invalid month in '{input}'"), e))?;
        let day: i8 = input[6..8]
            .parse()
            .map_err(|e| NextDateError::invalid_date_from(format!("invalid day in '{input}'"), e))?;
        Date::new(year, month, day)
            .map(Self)
            .map_err(|e| NextDateError::invalid_date_from(format!("invalid calendar date '{input}'"), e))
    }

    pub fn year(self) -> i16 {
        self.0.year()
    }

    pub fn month(self) -> i8 {
        self.0.month()
    }

    pub fn day(self) -> i8 {
        self.0.day()
    }

    /// ISO weekday number: Monday=1 through Sunday=7.
    pub fn weekday_number(self) -> u8 {
        self.0.weekday().to_monday_one_offset() as u8
    }

    /// Number of days in this date's month, leap-year aware.
    pub fn days_in_month(self) -> i8 {
        self.0.days_in_month()
    }

    /// The following day.
    pub fn tomorrow(self) -> Result<Self, NextDateError> {
        self.0
            .tomorrow()
            .map(Self)
            .map_err(|e| NextDateError::invalid_date_from("date out of representable range", e))
    }

    /// Signed number of whole days from `self` to `other`.
    pub fn days_until(self, other: Self) -> Result<i32, NextDateError> {
        self.0
            .until(other.0)
            .map(|span| span.get_days())
            .map_err(|e| NextDateError::invalid_date_from("date out of representable range", e))
    }

    /// This date shifted by `days`.
    pub fn add_days(self, days: i32) -> Result<Self, NextDateError> {
        self.0
            .checked_add(Span::new().days(days))
            .map(Self)
            .map_err(|e| NextDateError::invalid_date_from("date out of representable range", e))
    }

    /// This date one calendar year later.
    ///
    /// Feb 29 in a non-leap target year rolls forward to Mar 1, matching the
    /// overflow behavior of the wire-compatible reference arithmetic.
    pub fn add_year(self) -> Result<Self, NextDateError> {
        let year = self.0.year() + 1;
        match Date::new(year, self.0.month(), self.0.day()) {
            Ok(date) => Ok(Self(date)),
            Err(_) if self.0.month() == 2 && self.0.day() == 29 => Date::new(year, 3, 1)
                .map(Self)
                .map_err(|e| NextDateError::invalid_date_from("date out of representable range", e)),
            Err(e) => Err(NextDateError::invalid_date_from(
                "date out of representable range",
                e,
            )),
        }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}{:02}{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl FromStr for CalendarDate {
    type Err = NextDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_compact(s)
    }
}

#[cfg(feature = "serde")]
impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse_compact(&s).map_err(serde::de::Error::custom)
    }
}
