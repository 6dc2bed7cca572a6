mod execute;
mod output;

use chrono::NaiveDate;
use clap::Args;

use crate::utils::parse_date;

#[derive(Args, Debug)]
pub struct ByDateCmd {
    /// Scheduled date in DD/MM/YYYY format
    #[arg(short, long, value_parser = parse_date)]
    pub date: NaiveDate,
}
