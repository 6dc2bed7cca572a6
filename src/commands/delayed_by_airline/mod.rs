mod execute;
mod output;

use clap::Args;

#[derive(Args, Debug)]
pub struct DelayedByAirlineCmd {
    /// Airline name, exactly as stored in the dataset
    #[arg(short, long)]
    pub airline: String,
}
