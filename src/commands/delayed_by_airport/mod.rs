mod execute;
mod output;

use clap::Args;

use crate::utils::parse_iata;

#[derive(Args, Debug)]
pub struct DelayedByAirportCmd {
    /// Origin airport IATA code (3 letters, case-insensitive)
    #[arg(short, long, value_parser = parse_iata)]
    pub airport: String,
}
