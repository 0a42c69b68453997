use clap::Parser;
use jiff::Zoned;
use nextdate::{CalendarDate, Rule};
use std::process;

#[derive(Parser)]
#[command(
    name = "nextdate",
    about = "Next-occurrence dates for compact repeat rules",
    version
)]
struct Cli {
    /// Repeat specifier (e.g. "y", "d 3", "w 1,5", "m -1 2,3")
    repeat: Option<String>,

    /// Anchor date, 8 digits YYYYMMDD (the task's stored date)
    #[arg(long)]
    date: Option<String>,

    /// Reference date, 8 digits YYYYMMDD (defaults to today)
    #[arg(long)]
    now: Option<String>,

    /// Validate the repeat specifier without computing
    #[arg(long)]
    check: bool,

    /// Show the parsed rule as JSON
    #[arg(long)]
    parse: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Validate a task-search date literal (DD.MM.YYYY) and print it as YYYYMMDD
    #[arg(long, conflicts_with = "repeat")]
    search_date: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    if let Some(ref literal) = cli.search_date {
        match nextdate::parse_search_date(literal) {
            Ok(date) => {
                println!("{date}");
                process::exit(0);
            }
            Err(e) => {
                eprintln!("error: {e}");
                process::exit(1);
            }
        }
    }

    let repeat = match cli.repeat {
        Some(ref r) => r.as_str(),
        None => {
            eprintln!("error: no repeat specifier provided");
            process::exit(2);
        }
    };

    if cli.check {
        // Grammar check only — "d 0" is valid here and still fails to
        // compute, matching the stored-specifier validation surface.
        if nextdate::validate_repeat(repeat) {
            println!("\u{2713} valid");
            process::exit(0);
        }
        eprintln!("error: invalid repeat specifier '{repeat}'");
        process::exit(1);
    }

    let rule = match Rule::parse(repeat) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    if cli.parse {
        match serde_json::to_string_pretty(&rule) {
            Ok(json) => {
                println!("{json}");
                process::exit(0);
            }
            Err(e) => {
                eprintln!("error: failed to serialize: {e}");
                process::exit(1);
            }
        }
    }

    let anchor = match cli.date {
        Some(ref d) => match CalendarDate::parse_compact(d) {
            Ok(date) => date,
            Err(e) => {
                eprintln!("error: {e}");
                process::exit(1);
            }
        },
        None => {
            eprintln!("error: --date is required to compute an occurrence");
            process::exit(2);
        }
    };

    let now = match cli.now {
        Some(ref n) => match CalendarDate::parse_compact(n) {
            Ok(date) => date,
            Err(e) => {
                eprintln!("error: {e}");
                process::exit(1);
            }
        },
        None => CalendarDate::from_civil(Zoned::now().date()),
    };

    match rule.next_after(now, anchor) {
        Ok(next) => {
            if cli.json {
                println!("{}", serde_json::json!({ "next": next.to_string() }));
            } else {
                println!("{next}");
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
