use std::error::Error;

use chrono::Datelike;
use serde::Serialize;

use super::ByDateCmd;
use crate::commands::Execute;
use crate::db::FlightDb;
use crate::queries::flights_by_date::flights_by_date;
use crate::types::FlightRecord;

/// Result of the by-date command execution
#[derive(Debug, Default, Serialize)]
pub struct ByDateResult {
    pub date: String,
    pub flights: Vec<FlightRecord>,
}

impl Execute for ByDateCmd {
    type Output = ByDateResult;

    fn execute(self, db: &FlightDb) -> Result<Self::Output, Box<dyn Error>> {
        let flights = flights_by_date(
            db,
            i64::from(self.date.day()),
            i64::from(self.date.month()),
            i64::from(self.date.year()),
        );
        Ok(ByDateResult {
            date: self.date.format("%d/%m/%Y").to_string(),
            flights,
        })
    }
}
