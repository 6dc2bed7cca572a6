use std::error::Error;

use serde::Serialize;

use super::DelayedByAirlineCmd;
use crate::commands::Execute;
use crate::db::FlightDb;
use crate::queries::delayed_by_airline::delayed_by_airline;
use crate::types::FlightRecord;

/// Result of the delayed-by-airline command execution
#[derive(Debug, Default, Serialize)]
pub struct DelayedByAirlineResult {
    pub airline: String,
    pub flights: Vec<FlightRecord>,
}

impl Execute for DelayedByAirlineCmd {
    type Output = DelayedByAirlineResult;

    fn execute(self, db: &FlightDb) -> Result<Self::Output, Box<dyn Error>> {
        let flights = delayed_by_airline(db, &self.airline);
        Ok(DelayedByAirlineResult {
            airline: self.airline,
            flights,
        })
    }
}
