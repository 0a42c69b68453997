//! Canonical textual form of a rule, matching what the parser accepts.

use std::fmt;

use crate::rule::Rule;

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Yearly => write!(f, "y"),
            Rule::Daily { interval } => write!(f, "d {interval}"),
            Rule::Weekly { days } => {
                write!(f, "w ")?;
                write_list(f, days)
            }
            Rule::Monthly { days, months } => {
                write!(f, "m ")?;
                write_list(f, days)?;
                if !months.is_empty() {
                    write!(f, " ")?;
                    write_list(f, months)?;
                }
                Ok(())
            }
        }
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::rule::Rule;

    #[test]
    fn renders_each_kind() {
        assert_eq!(Rule::Yearly.to_string(), "y");
        assert_eq!(Rule::Daily { interval: 3 }.to_string(), "d 3");
        assert_eq!(Rule::Weekly { days: vec![1, 3, 5] }.to_string(), "w 1,3,5");
        assert_eq!(
            Rule::Monthly {
                days: vec![-1, 15],
                months: vec![]
            }
            .to_string(),
            "m -1,15"
        );
        assert_eq!(
            Rule::Monthly {
                days: vec![31],
                months: vec![1, 12]
            }
            .to_string(),
            "m 31 1,12"
        );
    }

    #[test]
    fn display_reparses_to_the_same_rule() {
        for text in ["y", "d 3", "d 400", "w 1", "w 7,1,7", "m -2,-1,15", "m 31 1,3,12"] {
            let rule = Rule::parse(text).unwrap();
            let rendered = rule.to_string();
            assert_eq!(Rule::parse(&rendered).unwrap(), rule, "via '{rendered}'");
        }
    }
}
