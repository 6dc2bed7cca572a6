use std::error::Error;

use serde::Serialize;

use super::DelayedByAirportCmd;
use crate::commands::Execute;
use crate::db::FlightDb;
use crate::queries::delayed_by_airport::delayed_by_airport;
use crate::types::FlightRecord;

/// Result of the delayed-by-airport command execution
#[derive(Debug, Default, Serialize)]
pub struct DelayedByAirportResult {
    pub airport: String,
    pub flights: Vec<FlightRecord>,
}

impl Execute for DelayedByAirportCmd {
    type Output = DelayedByAirportResult;

    fn execute(self, db: &FlightDb) -> Result<Self::Output, Box<dyn Error>> {
        let flights = delayed_by_airport(db, &self.airport);
        Ok(DelayedByAirportResult {
            airport: self.airport,
            flights,
        })
    }
}
