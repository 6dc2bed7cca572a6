//! flight_search library - Flight delay query tool
//!
//! Provides the SQLite data access layer, command execution, and output
//! formatting infrastructure for exploring a flight-delay dataset.

pub mod cli;
pub mod commands;
pub mod db;
pub mod interactive;
pub mod output;
pub mod queries;
pub mod report;
pub mod types;
pub mod utils;

#[cfg(test)]
pub mod fixtures;

#[cfg(test)]
pub mod test_utils;
