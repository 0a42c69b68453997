//! Converts a repeat specifier into a structured [`Rule`].
//!
//! The grammar check gates every parse, so a string the validator rejects
//! can never parse. On top of the grammar, this module enforces the
//! semantic ranges the lexical level leaves open: `d 0`, `m 0` and a `0`
//! month all pass [`validate_repeat`] but fail here.

use crate::error::NextDateError;
use crate::rule::{Rule, MAX_DAILY_INTERVAL};
use crate::validate::validate_repeat;

/// Parse a repeat specifier. All failures are `InvalidRepeatFormat`.
pub fn parse(input: &str) -> Result<Rule, NextDateError> {
    if !validate_repeat(input) {
        return Err(NextDateError::invalid_repeat(format!(
            "invalid task repeat format '{input}'"
        )));
    }

    match input.split_once(' ') {
        None if input == "y" => Ok(Rule::Yearly),
        Some(("d", rest)) => parse_daily(rest),
        Some(("w", rest)) => parse_weekly(rest),
        Some(("m", rest)) => parse_monthly(rest),
        _ => Err(NextDateError::invalid_repeat(format!(
            "invalid task repeat format '{input}'"
        ))),
    }
}

fn parse_daily(rest: &str) -> Result<Rule, NextDateError> {
    let interval: u16 = rest.parse().map_err(|e| {
        NextDateError::invalid_repeat_from(format!("invalid day interval '{rest}'"), e)
    })?;
    if interval < 1 || interval > MAX_DAILY_INTERVAL {
        return Err(NextDateError::invalid_repeat(format!(
            "day interval {interval} out of range 1..={MAX_DAILY_INTERVAL}"
        )));
    }
    Ok(Rule::Daily { interval })
}

fn parse_weekly(rest: &str) -> Result<Rule, NextDateError> {
    let mut days = Vec::new();
    for item in rest.split(',') {
        let day: u8 = item
            .parse()
            .map_err(|e| NextDateError::invalid_repeat_from(format!("invalid weekday '{item}'"), e))?;
        if !(1..=7).contains(&day) {
            return Err(NextDateError::invalid_repeat(format!(
                "weekday {day} out of range 1..=7"
            )));
        }
        days.push(day);
    }
    if days.is_empty() || days.len() > 7 {
        return Err(NextDateError::invalid_repeat("expected 1 to 7 weekdays"));
    }
    Ok(Rule::Weekly { days })
}

fn parse_monthly(rest: &str) -> Result<Rule, NextDateError> {
    let (day_list, month_list) = match rest.split_once(' ') {
        Some((days, months)) => (days, Some(months)),
        None => (rest, None),
    };

    let mut days = Vec::new();
    for item in day_list.split(',') {
        let day: i8 = item.parse().map_err(|e| {
            NextDateError::invalid_repeat_from(format!("invalid day of month '{item}'"), e)
        })?;
        if !(1..=31).contains(&day) && day != -1 && day != -2 {
            return Err(NextDateError::invalid_repeat(format!(
                "day of month {day} out of range (-2, -1 or 1..=31)"
            )));
        }
        days.push(day);
    }
    if days.is_empty() || days.len() > 31 {
        return Err(NextDateError::invalid_repeat(
            "expected 1 to 31 days of month",
        ));
    }

    let mut months = Vec::new();
    if let Some(list) = month_list {
        for item in list.split(',') {
            let month: u8 = item.parse().map_err(|e| {
                NextDateError::invalid_repeat_from(format!("invalid month '{item}'"), e)
            })?;
            if !(1..=12).contains(&month) {
                return Err(NextDateError::invalid_repeat(format!(
                    "month {month} out of range 1..=12"
                )));
            }
            months.push(month);
        }
        if months.len() > 12 {
            return Err(NextDateError::invalid_repeat("expected at most 12 months"));
        }
    }

    Ok(Rule::Monthly { days, months })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_yearly() {
        assert_eq!(parse("y").unwrap(), Rule::Yearly);
    }

    #[test]
    fn parses_daily() {
        assert_eq!(parse("d 1").unwrap(), Rule::Daily { interval: 1 });
        assert_eq!(parse("d 400").unwrap(), Rule::Daily { interval: 400 });
        assert_eq!(parse("d 007").unwrap(), Rule::Daily { interval: 7 });
    }

    #[test]
    fn rejects_zero_interval_despite_grammar() {
        // "d 0" is validator-accepted; the semantic floor lives here.
        assert!(validate_repeat("d 0"));
        let err = parse("d 0").unwrap_err();
        assert!(err.is_invalid_repeat());
    }

    #[test]
    fn parses_weekly_without_dedupe() {
        assert_eq!(parse("w 1,3").unwrap(), Rule::Weekly { days: vec![1, 3] });
        assert_eq!(
            parse("w 7,1,7").unwrap(),
            Rule::Weekly {
                days: vec![7, 1, 7]
            }
        );
    }

    #[test]
    fn rejects_weekday_out_of_range() {
        assert!(parse("w 8").unwrap_err().is_invalid_repeat());
        assert!(parse("w 0").unwrap_err().is_invalid_repeat());
        assert!(parse("w 1,2,8").unwrap_err().is_invalid_repeat());
    }

    #[test]
    fn parses_monthly_days_only() {
        assert_eq!(
            parse("m -1").unwrap(),
            Rule::Monthly {
                days: vec![-1],
                months: vec![]
            }
        );
        assert_eq!(
            parse("m 1,15,-2").unwrap(),
            Rule::Monthly {
                days: vec![1, 15, -2],
                months: vec![]
            }
        );
    }

    #[test]
    fn parses_monthly_with_month_filter() {
        assert_eq!(
            parse("m 31 1,3,12").unwrap(),
            Rule::Monthly {
                days: vec![31],
                months: vec![1, 3, 12]
            }
        );
    }

    #[test]
    fn rejects_zero_day_and_zero_month_despite_grammar() {
        assert!(validate_repeat("m 0"));
        assert!(parse("m 0").unwrap_err().is_invalid_repeat());
        assert!(validate_repeat("m 1 0"));
        assert!(parse("m 1 0").unwrap_err().is_invalid_repeat());
    }

    #[test]
    fn rejects_everything_the_validator_rejects() {
        for text in ["", "q 1", "y extra", "d x", "d 401", "w 1,2,3,4,5,6,7,1", "m -3", "m 1 13"] {
            assert!(!validate_repeat(text));
            assert!(parse(text).is_err(), "parsed '{text}'");
        }
    }
}
