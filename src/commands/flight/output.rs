//! Output formatting for flight command results.

use super::execute::FlightResult;
use crate::output::Outputable;

impl Outputable for FlightResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Flight {}", self.id));
        lines.push(String::new());

        if self.flights.is_empty() {
            lines.push("No results found.".to_string());
            return lines.join("\n");
        }

        for flight in &self.flights {
            lines.push(format!(
                "{}. {} -> {} by {}, Delay: {} Minutes",
                flight.flight_id,
                flight.origin_airport,
                flight.destination_airport,
                flight.airline,
                flight.delay_minutes()
            ));
            lines.push(format!(
                "   Scheduled: {:02}/{:02}/{:04}",
                flight.day, flight.month, flight.year
            ));
        }

        lines.join("\n")
    }
}
