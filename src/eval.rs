//! Next-occurrence computation: one walking algorithm per rule kind.
//!
//! Every kind walks forward from a starting point until its predicate
//! holds, where "holds" means "not strictly before `now`". Equality with
//! `now` terminates the walk; that boundary is part of the compatibility
//! contract. Yearly and daily rules step from the anchor alone, weekly and
//! monthly rules step day-by-day from the later of `now` and the anchor.

use std::cmp;

use crate::date::CalendarDate;
use crate::error::NextDateError;
use crate::rule::Rule;

/// Upper bound on the day-by-day weekly and monthly walks. A reachable
/// rule never comes close (a Feb 29 day-of-month walk spans at most eight
/// years, under 3000 days); an unreachable rule such as `m 31 2` hits the
/// cap and reports an error instead of hanging. Yearly and daily rules
/// advance by a fixed stride and need no cap.
const MAX_STEPS: u32 = 4000;

/// Compute the next occurrence not before `now`, stepping from `anchor`.
///
/// Pure and deterministic: reads its inputs, returns a new date, touches
/// nothing else.
pub fn next_occurrence(
    now: CalendarDate,
    anchor: CalendarDate,
    rule: &Rule,
) -> Result<CalendarDate, NextDateError> {
    match rule {
        Rule::Yearly => next_yearly(now, anchor),
        Rule::Daily { interval } => next_daily(now, anchor, *interval),
        Rule::Weekly { days } => next_weekly(now, anchor, days),
        Rule::Monthly { days, months } => next_monthly(now, anchor, days, months),
    }
}

/// Always advances at least one year past the anchor, even when the anchor
/// is already far in the future.
fn next_yearly(now: CalendarDate, anchor: CalendarDate) -> Result<CalendarDate, NextDateError> {
    let mut result = anchor.add_year()?;
    // Each step gains a full year, so the loop covers any in-range span.
    while result < now {
        result = result.add_year()?;
    }
    Ok(result)
}

fn next_daily(
    now: CalendarDate,
    anchor: CalendarDate,
    interval: u16,
) -> Result<CalendarDate, NextDateError> {
    if interval == 0 {
        return Err(NextDateError::invalid_repeat(
            "day interval must be at least 1",
        ));
    }
    let step = i32::from(interval);
    let result = anchor.add_days(step)?;
    if result >= now {
        return Ok(result);
    }
    // The stride is fixed, so jump straight to the smallest multiple of it
    // that closes the remaining gap instead of walking step by step.
    let gap = result.days_until(now)?;
    let catch_up = (gap + step - 1) / step;
    result.add_days(catch_up * step)
}

/// Starts at the later of `now` and the anchor, so the result is strictly
/// after both.
fn next_weekly(
    now: CalendarDate,
    anchor: CalendarDate,
    days: &[u8],
) -> Result<CalendarDate, NextDateError> {
    if days.is_empty() {
        return Err(NextDateError::invalid_repeat("weekday list is empty"));
    }
    let mut result = cmp::max(now, anchor);
    for _ in 0..MAX_STEPS {
        result = result.tomorrow()?;
        if days.contains(&result.weekday_number()) {
            return Ok(result);
        }
    }
    Err(stalled("w"))
}

fn next_monthly(
    now: CalendarDate,
    anchor: CalendarDate,
    days: &[i8],
    months: &[u8],
) -> Result<CalendarDate, NextDateError> {
    if days.is_empty() {
        return Err(NextDateError::invalid_repeat("day-of-month list is empty"));
    }
    let mut result = cmp::max(now, anchor);
    for _ in 0..MAX_STEPS {
        result = result.tomorrow()?;
        let day_hit = matches_month_day(days, result.day(), result.days_in_month());
        let month_hit = months.is_empty() || months.contains(&(result.month() as u8));
        if day_hit && month_hit {
            return Ok(result);
        }
    }
    Err(stalled("m"))
}

/// A positive entry matches the day of month by equality; a non-positive
/// entry `d` matches when `day == days_in_month + d + 1`, so `-1` is the
/// last day and `-2` the second-to-last of that specific month.
fn matches_month_day(days: &[i8], day_of_month: i8, days_in_month: i8) -> bool {
    days.iter()
        .any(|&d| (d > 0 && d == day_of_month) || days_in_month + d + 1 == day_of_month)
}

fn stalled(kind: &str) -> NextDateError {
    NextDateError::invalid_repeat(format!(
        "repeat rule '{kind}' has no reachable occurrence within {MAX_STEPS} steps"
    ))
}
