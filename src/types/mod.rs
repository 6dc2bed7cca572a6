//! Shared result types for flight queries.
//!
//! All types are plain owned data: produced fresh per query, never mutated,
//! discarded by the caller after use.

use serde::Serialize;

/// One flight row as returned by the date and delayed-flight queries.
#[derive(Debug, Clone, Serialize)]
pub struct FlightRecord {
    pub flight_id: i64,
    pub origin_airport: String,
    pub destination_airport: String,
    /// Departure delay in minutes. `None` when the dataset has no value.
    pub delay: Option<i64>,
    pub airline: String,
}

impl FlightRecord {
    /// Delay in minutes, treating a missing value as zero.
    pub fn delay_minutes(&self) -> i64 {
        self.delay.unwrap_or(0)
    }
}

/// Full flight row as returned by the by-id lookup, including the scheduled
/// date columns.
#[derive(Debug, Clone, Serialize)]
pub struct FlightDetails {
    pub flight_id: i64,
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub origin_airport: String,
    pub destination_airport: String,
    pub delay: Option<i64>,
    pub airline: String,
}

impl FlightDetails {
    /// Delay in minutes, treating a missing value as zero.
    pub fn delay_minutes(&self) -> i64 {
        self.delay.unwrap_or(0)
    }
}

/// Per-airline share of flights delayed past the threshold.
#[derive(Debug, Clone, Serialize)]
pub struct AirlineDelayStat {
    pub airline: String,
    pub delay_percentage: f64,
}
