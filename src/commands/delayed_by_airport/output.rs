//! Output formatting for delayed-by-airport command results.

use super::execute::DelayedByAirportResult;
use crate::output::{Outputable, flight_list_lines};

impl Outputable for DelayedByAirportResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Delayed flights out of {}", self.airport));
        lines.push(String::new());
        lines.extend(flight_list_lines(&self.flights));

        lines.join("\n")
    }
}
