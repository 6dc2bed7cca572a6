//! CLI argument definitions.
//!
//! This module contains the top-level CLI structure and shared types.
//! Individual command definitions are in the `commands` module.

use clap::Parser;
use std::path::PathBuf;

use crate::commands::Command;
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the flights SQLite database file
    ///
    /// If not specified, searches for the database in:
    ///   1. data/flights.sqlite3 (project-local)
    ///   2. ./flights.sqlite3 (current directory)
    ///   3. ~/.flight_search/flights.sqlite3 (user-global)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Command to run; opens the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Resolve database path by checking multiple locations in order of preference
pub fn resolve_db_path(explicit_path: Option<PathBuf>) -> PathBuf {
    // If explicitly specified, use that
    if let Some(path) = explicit_path {
        return path;
    }

    // 1. Check data/flights.sqlite3 (project-local)
    let project_db = PathBuf::from("data/flights.sqlite3");
    if project_db.exists() {
        return project_db;
    }

    // 2. Check ./flights.sqlite3 (current directory)
    let local_db = PathBuf::from("./flights.sqlite3");
    if local_db.exists() {
        return local_db;
    }

    // 3. Check ~/.flight_search/flights.sqlite3 (user-global)
    if let Some(home_dir) = home::home_dir() {
        let global_db = home_dir.join(".flight_search/flights.sqlite3");
        if global_db.exists() {
            return global_db;
        }
    }

    // Default: data/flights.sqlite3, so the open error names the expected spot
    project_db
}
