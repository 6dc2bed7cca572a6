mod execute;
mod output;

use clap::Args;

#[derive(Args, Debug)]
pub struct FlightCmd {
    /// Flight ID (primary key in the flights table)
    #[arg(short, long)]
    pub id: i64,
}
