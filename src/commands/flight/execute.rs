use std::error::Error;

use serde::Serialize;

use super::FlightCmd;
use crate::commands::Execute;
use crate::db::FlightDb;
use crate::queries::flight_by_id::flight_by_id;
use crate::types::FlightDetails;

/// Result of the flight command execution
#[derive(Debug, Default, Serialize)]
pub struct FlightResult {
    pub id: i64,
    pub flights: Vec<FlightDetails>,
}

impl Execute for FlightCmd {
    type Output = FlightResult;

    fn execute(self, db: &FlightDb) -> Result<Self::Output, Box<dyn Error>> {
        Ok(FlightResult {
            id: self.id,
            flights: flight_by_id(db, self.id),
        })
    }
}
