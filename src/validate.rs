//! Grammar checks for repeat specifiers and the task-search date literal.
//!
//! These decide membership only, one explicit checker per sub-grammar; the
//! parser builds the structured rule and enforces the semantic ranges the
//! grammar alone cannot catch. The split is deliberate and observable:
//! `d 0` is accepted here (lexical range `0..=400`) yet rejected by the
//! parser (semantic floor of 1).

use crate::date::CalendarDate;
use crate::error::NextDateError;

/// Check whether `text` belongs to one of the four repeat sub-grammars:
/// `y`, `d <interval>`, `w <weekday-list>`, `m <day-list> [<month-list>]`.
pub fn validate_repeat(text: &str) -> bool {
    text == "y" || is_daily(text) || is_weekly(text) || is_monthly(text)
}

fn is_daily(text: &str) -> bool {
    let Some(rest) = text.strip_prefix("d ") else {
        return false;
    };
    if rest.is_empty() || rest.len() > 3 || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    rest.parse::<u16>().is_ok_and(|n| n <= 400)
}

fn is_weekly(text: &str) -> bool {
    let Some(rest) = text.strip_prefix("w ") else {
        return false;
    };
    let mut count = 0;
    for item in rest.split(',') {
        count += 1;
        if count > 7 {
            return false;
        }
        // Single digit 1..=7; duplicates are lexically legal.
        if item.len() != 1 || !matches!(item.as_bytes()[0], b'1'..=b'7') {
            return false;
        }
    }
    count >= 1
}

fn is_monthly(text: &str) -> bool {
    let Some(rest) = text.strip_prefix("m ") else {
        return false;
    };
    let mut fields = rest.splitn(2, ' ');
    let days = fields.next().unwrap_or("");
    let months = fields.next();
    if !is_list(days, 31, is_day_item) {
        return false;
    }
    match months {
        Some(list) => is_list(list, 12, is_month_item),
        None => true,
    }
}

fn is_list(list: &str, max_items: usize, item_ok: fn(&str) -> bool) -> bool {
    let mut count = 0;
    for item in list.split(',') {
        count += 1;
        if count > max_items || !item_ok(item) {
            return false;
        }
    }
    count >= 1
}

fn is_day_item(item: &str) -> bool {
    if item == "-1" || item == "-2" {
        return true;
    }
    (1..=2).contains(&item.len())
        && item.bytes().all(|b| b.is_ascii_digit())
        && item.parse::<u8>().is_ok_and(|n| n <= 31)
}

fn is_month_item(item: &str) -> bool {
    (1..=2).contains(&item.len())
        && item.bytes().all(|b| b.is_ascii_digit())
        && item.parse::<u8>().is_ok_and(|n| n <= 12)
}

/// Check the independent `DD.MM.YYYY` literal used by the task-search
/// feature: day 01–31, month 01–12, year 1900–2099, full-string match.
pub fn validate_search_date(text: &str) -> bool {
    let b = text.as_bytes();
    if b.len() != 10 || b[2] != b'.' || b[5] != b'.' {
        return false;
    }
    let digit_positions = [0, 1, 3, 4, 6, 7, 8, 9];
    if !digit_positions.iter().all(|&i| b[i].is_ascii_digit()) {
        return false;
    }
    let day = (b[0] - b'0') * 10 + (b[1] - b'0');
    let month = (b[3] - b'0') * 10 + (b[4] - b'0');
    let century_ok = (b[6] == b'1' && b[7] == b'9') || (b[6] == b'2' && b[7] == b'0');
    (1..=31).contains(&day) && (1..=12).contains(&month) && century_ok
}

/// Convert a valid `DD.MM.YYYY` search literal into a [`CalendarDate`].
///
/// The literal pattern admits combinations that are not real dates
/// (`31.02.2024`); those fail here with `InvalidDateFormat`.
pub fn parse_search_date(text: &str) -> Result<CalendarDate, NextDateError> {
    if !validate_search_date(text) {
        return Err(NextDateError::invalid_date(format!(
            "expected search date DD.MM.YYYY, got '{text}'"
        )));
    }
    let day: i8 = text[0..2]
        .parse()
        .map_err(|e| NextDateError::invalid_date_from(format!("invalid day in '{text}'"), e))?;
    let month: i8 = text[3..5]
        .parse()
        .map_err(|e| NextDateError::invalid_date_from(format!("invalid month in '{text}'"), e))?;
    let year: i16 = text[6..10]
        .parse()
        .map_err(|e| NextDateError::invalid_date_from(format!("invalid year in '{text}'"), e))?;
    CalendarDate::new(year, month, day)
}
