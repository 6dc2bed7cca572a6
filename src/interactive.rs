//! Interactive numbered menu over the flight queries.
//!
//! Mirrors the subcommand surface for a session-style workflow. Prompts are
//! re-issued until the input parses; the loop only ends on the exit option
//! or end of input.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::commands::{
    ByDateCmd, DEFAULT_REPORT_FILE, DelayChartCmd, DelayedByAirlineCmd, DelayedByAirportCmd,
    Execute, FlightCmd, ReportCmd,
};
use crate::db::FlightDb;
use crate::output::Outputable;
use crate::utils::{parse_date, parse_iata};

const MENU: &str = "\
Menu:
1. Show flight by ID
2. Show flights by date
3. Delayed flights by airline
4. Delayed flights by origin airport
5. Generate flight report
6. Show delayed flight percentage per airline
7. Exit";

/// Run the menu loop against stdin/stdout.
pub fn run(db: &FlightDb) -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    run_loop(db, &mut input, &mut out)
}

fn run_loop(
    db: &FlightDb,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    loop {
        writeln!(out)?;
        writeln!(out, "{MENU}")?;
        let Some(choice) = prompt(input, out, "Choose an option: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => {
                let Some(id) = prompt_flight_id(input, out)? else {
                    return Ok(());
                };
                show(out, FlightCmd { id }.execute(db)?)?;
            }
            "2" => {
                let Some(date) = prompt_date(input, out)? else {
                    return Ok(());
                };
                show(out, ByDateCmd { date }.execute(db)?)?;
            }
            "3" => {
                let Some(airline) = prompt(input, out, "Enter airline name: ")? else {
                    return Ok(());
                };
                show(out, DelayedByAirlineCmd { airline }.execute(db)?)?;
            }
            "4" => {
                let Some(airport) = prompt_airport(input, out)? else {
                    return Ok(());
                };
                show(out, DelayedByAirportCmd { airport }.execute(db)?)?;
            }
            "5" => {
                let Some(date) = prompt_date(input, out)? else {
                    return Ok(());
                };
                let cmd = ReportCmd {
                    date,
                    output: PathBuf::from(DEFAULT_REPORT_FILE),
                };
                show(out, cmd.execute(db)?)?;
            }
            "6" => show(out, DelayChartCmd {}.execute(db)?)?,
            "7" => return Ok(()),
            // Anything else falls through and the menu is shown again
            _ => {}
        }
    }
}

fn show(out: &mut impl Write, result: impl Outputable) -> io::Result<()> {
    writeln!(out, "{}", result.to_table())
}

/// Print a prompt and read one trimmed line. `None` means end of input.
fn prompt(
    input: &mut impl BufRead,
    out: &mut impl Write,
    message: &str,
) -> io::Result<Option<String>> {
    write!(out, "{message}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt_flight_id(
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<Option<i64>> {
    loop {
        let Some(line) = prompt(input, out, "Enter flight ID: ")? else {
            return Ok(None);
        };
        match line.parse::<i64>() {
            Ok(id) => return Ok(Some(id)),
            Err(_) => writeln!(out, "Invalid input. Please enter a numeric flight ID.")?,
        }
    }
}

fn prompt_date(
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<Option<NaiveDate>> {
    loop {
        let Some(line) = prompt(input, out, "Enter date in DD/MM/YYYY format: ")? else {
            return Ok(None);
        };
        match parse_date(&line) {
            Ok(date) => return Ok(Some(date)),
            Err(_) => writeln!(out, "Invalid format. Please try again.")?,
        }
    }
}

fn prompt_airport(
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<Option<String>> {
    loop {
        let Some(line) = prompt(input, out, "Enter origin airport IATA code: ")? else {
            return Ok(None);
        };
        match parse_iata(&line) {
            Ok(code) => return Ok(Some(code)),
            Err(_) => writeln!(out, "Please enter a 3-letter IATA code.")?,
        }
    }
}
