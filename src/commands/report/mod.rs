mod execute;
mod output;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

use crate::utils::parse_date;

/// Default report file, written into the current directory.
pub const DEFAULT_OUTPUT: &str = "flight_report.html";

#[derive(Args, Debug)]
pub struct ReportCmd {
    /// Scheduled date in DD/MM/YYYY format
    #[arg(short, long, value_parser = parse_date)]
    pub date: NaiveDate,

    /// Output file path
    #[arg(short = 'O', long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}
