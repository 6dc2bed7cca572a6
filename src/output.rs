//! Output formatting for command results.
//!
//! Supports multiple output formats: table (human-readable), JSON, and toon.

use clap::ValueEnum;
use serde::Serialize;

use crate::types::FlightRecord;

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Token-efficient toon format
    Toon,
}

/// Trait for types that can be formatted for output
pub trait Outputable: Serialize {
    /// Format as a human-readable table
    fn to_table(&self) -> String;

    /// Format according to the specified output format
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Table => self.to_table(),
            OutputFormat::Json => serde_json::to_string_pretty(self).unwrap_or_default(),
            OutputFormat::Toon => {
                let json_value = serde_json::to_value(self).unwrap_or_default();
                toon::encode(&json_value, None)
            }
        }
    }
}

/// One-line summary of a flight row, shared by the list-style commands.
pub fn flight_row_line(flight: &FlightRecord) -> String {
    format!(
        "{}. {} -> {} by {}, Delay: {} Minutes",
        flight.flight_id,
        flight.origin_airport,
        flight.destination_airport,
        flight.airline,
        flight.delay_minutes()
    )
}

/// Table body for a list of flight rows: a count line followed by one line
/// per flight, or a no-results message.
pub fn flight_list_lines(flights: &[FlightRecord]) -> Vec<String> {
    if flights.is_empty() {
        return vec!["No results found.".to_string()];
    }

    let mut lines = vec![format!("Got {} results.", flights.len())];
    for flight in flights {
        lines.push(flight_row_line(flight));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_flight() -> FlightRecord {
        FlightRecord {
            flight_id: 540,
            origin_airport: "SFO".to_string(),
            destination_airport: "JFK".to_string(),
            delay: Some(25),
            airline: "United Air Lines Inc.".to_string(),
        }
    }

    #[test]
    fn test_flight_row_line() {
        assert_eq!(
            flight_row_line(&sample_flight()),
            "540. SFO -> JFK by United Air Lines Inc., Delay: 25 Minutes"
        );
    }

    #[test]
    fn test_flight_row_line_missing_delay_prints_zero() {
        let mut flight = sample_flight();
        flight.delay = None;
        assert!(flight_row_line(&flight).ends_with("Delay: 0 Minutes"));
    }

    #[test]
    fn test_flight_list_lines_empty() {
        assert_eq!(flight_list_lines(&[]), vec!["No results found."]);
    }

    #[test]
    fn test_flight_list_lines_counts_results() {
        let lines = flight_list_lines(&[sample_flight()]);
        assert_eq!(lines[0], "Got 1 results.");
        assert_eq!(lines.len(), 2);
    }
}
