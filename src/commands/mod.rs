//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - `mod.rs`: the command struct with clap attributes for CLI parsing
//! - `execute.rs`: query execution producing a serializable result struct
//! - `output.rs`: `Outputable` formatting for the result

mod by_date;
mod delay_chart;
mod delayed_by_airline;
mod delayed_by_airport;
mod flight;
mod report;

pub use by_date::ByDateCmd;
pub use delay_chart::DelayChartCmd;
pub use delayed_by_airline::DelayedByAirlineCmd;
pub use delayed_by_airport::DelayedByAirportCmd;
pub use flight::FlightCmd;
pub use report::{DEFAULT_OUTPUT as DEFAULT_REPORT_FILE, ReportCmd};

use std::error::Error;

use clap::Subcommand;

use crate::db::FlightDb;
use crate::output::{OutputFormat, Outputable};

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, db: &FlightDb) -> Result<Self::Output, Box<dyn Error>>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up a single flight by its ID
    Flight(FlightCmd),

    /// List flights scheduled on a given date
    ByDate(ByDateCmd),

    /// List delayed flights for an airline
    DelayedByAirline(DelayedByAirlineCmd),

    /// List delayed flights leaving an origin airport
    DelayedByAirport(DelayedByAirportCmd),

    /// Write an HTML report of flights on a given date
    Report(ReportCmd),

    /// Show the share of delayed flights per airline
    DelayChart(DelayChartCmd),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(self, db: &FlightDb, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        match self {
            Command::Flight(cmd) => {
                let result = cmd.execute(db)?;
                Ok(result.format(format))
            }
            Command::ByDate(cmd) => {
                let result = cmd.execute(db)?;
                Ok(result.format(format))
            }
            Command::DelayedByAirline(cmd) => {
                let result = cmd.execute(db)?;
                Ok(result.format(format))
            }
            Command::DelayedByAirport(cmd) => {
                let result = cmd.execute(db)?;
                Ok(result.format(format))
            }
            Command::Report(cmd) => {
                let result = cmd.execute(db)?;
                Ok(result.format(format))
            }
            Command::DelayChart(cmd) => {
                let result = cmd.execute(db)?;
                Ok(result.format(format))
            }
        }
    }
}
