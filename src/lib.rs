//! nextdate — compact recurrence rules for task scheduling.
//!
//! Tasks carry a short repeat specifier (`y`, `d 3`, `w 1,5`, `m -1 2,3`)
//! and an anchor date. Given a reference date, the engine computes the next
//! date the task falls due, in the 8-digit `YYYYMMDD` wire format shared
//! with the task store and the query interface.
//!
//! # Examples
//!
//! ```
//! use nextdate::Rule;
//!
//! let rule: Rule = "d 3".parse().unwrap();
//! assert_eq!(rule.to_string(), "d 3");
//!
//! let next = nextdate::next_date("20240310", "20240301", "d 3").unwrap();
//! assert_eq!(next, "20240310");
//! ```

pub mod date;
pub mod display;
pub mod error;
pub mod eval;
pub mod parser;
pub mod rule;
pub mod validate;

pub use date::CalendarDate;
pub use error::NextDateError;
pub use rule::Rule;
pub use validate::{parse_search_date, validate_repeat, validate_search_date};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// --- Rule convenience methods ---

impl Rule {
    /// Parse a repeat specifier.
    pub fn parse(input: &str) -> Result<Self, NextDateError> {
        parser::parse(input)
    }

    /// Grammar check without building a rule.
    pub fn validate(input: &str) -> bool {
        validate::validate_repeat(input)
    }

    /// Compute the next occurrence not before `now`, stepping from `anchor`.
    pub fn next_after(
        &self,
        now: CalendarDate,
        anchor: CalendarDate,
    ) -> Result<CalendarDate, NextDateError> {
        eval::next_occurrence(now, anchor, self)
    }
}

impl FromStr for Rule {
    type Err = NextDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Compute the next occurrence at the string boundary used by the task
/// service: all three inputs arrive as raw text, the result is the 8-digit
/// wire format.
///
/// Failure precedence mirrors the service contract: an unparseable `now`
/// reports `InvalidDateFormat` before the repeat specifier is looked at,
/// a grammar failure reports `InvalidRepeatFormat` before the anchor date
/// is parsed, and semantic range failures surface from the rule parser.
pub fn next_date(now: &str, date: &str, repeat: &str) -> Result<String, NextDateError> {
    let now = CalendarDate::parse_compact(now)
        .map_err(|e| NextDateError::invalid_date_from("invalid task now format", e))?;
    if !validate::validate_repeat(repeat) {
        return Err(NextDateError::invalid_repeat("invalid task repeat format"));
    }
    let anchor = CalendarDate::parse_compact(date)
        .map_err(|e| NextDateError::invalid_date_from("invalid task date format", e))?;
    let rule = parser::parse(repeat)?;
    let next = eval::next_occurrence(now, anchor, &rule)?;
    Ok(next.to_string())
}

#[cfg(feature = "serde")]
impl Serialize for Rule {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(None)?;

        match self {
            Rule::Yearly => {
                map.serialize_entry("kind", "yearly")?;
            }
            Rule::Daily { interval } => {
                map.serialize_entry("kind", "daily")?;
                map.serialize_entry("interval", interval)?;
            }
            Rule::Weekly { days } => {
                map.serialize_entry("kind", "weekly")?;
                map.serialize_entry("days", days)?;
            }
            Rule::Monthly { days, months } => {
                map.serialize_entry("kind", "monthly")?;
                map.serialize_entry("days", days)?;
                map.serialize_entry("months", months)?;
            }
        }

        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Rule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Deserialize from the textual form, the only form that is stored.
        let s = String::deserialize(deserializer)?;
        Rule::parse(&s).map_err(serde::de::Error::custom)
    }
}
