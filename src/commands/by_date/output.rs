//! Output formatting for by-date command results.

use super::execute::ByDateResult;
use crate::output::{Outputable, flight_list_lines};

impl Outputable for ByDateResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Flights on {}", self.date));
        lines.push(String::new());
        lines.extend(flight_list_lines(&self.flights));

        lines.join("\n")
    }
}
