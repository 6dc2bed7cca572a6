//! Output formatting for delayed-by-airline command results.

use super::execute::DelayedByAirlineResult;
use crate::output::{Outputable, flight_list_lines};

impl Outputable for DelayedByAirlineResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Delayed flights for {}", self.airline));
        lines.push(String::new());
        lines.extend(flight_list_lines(&self.flights));

        lines.join("\n")
    }
}
