use std::error::Error;

use chrono::Datelike;
use serde::Serialize;

use super::ReportCmd;
use crate::commands::Execute;
use crate::db::FlightDb;
use crate::queries::flights_by_date::flights_by_date;
use crate::report::write_report;

/// Result of the report command execution
#[derive(Debug, Default, Serialize)]
pub struct ReportResult {
    pub date: String,
    pub output: String,
    pub flight_count: usize,
}

impl Execute for ReportCmd {
    type Output = ReportResult;

    fn execute(self, db: &FlightDb) -> Result<Self::Output, Box<dyn Error>> {
        let flights = flights_by_date(
            db,
            i64::from(self.date.day()),
            i64::from(self.date.month()),
            i64::from(self.date.year()),
        );

        let date = self.date.format("%d/%m/%Y").to_string();
        let title = format!("Flight Delays Report for {date}");
        write_report(&title, &flights, &self.output)?;

        Ok(ReportResult {
            date,
            output: self.output.display().to_string(),
            flight_count: flights.len(),
        })
    }
}
