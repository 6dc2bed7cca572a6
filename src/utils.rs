//! Input parsing and validation for user-supplied dates and airport codes.
//!
//! These double as clap value parsers on the subcommand path and as the
//! validation step behind the interactive prompts.

use chrono::NaiveDate;

/// Airport codes are exactly this many letters.
pub const IATA_LENGTH: usize = 3;

/// Parse a `DD/MM/YYYY` date string.
pub fn parse_date(input: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(input.trim(), "%d/%m/%Y")
        .map_err(|_| format!("'{input}' is not a valid DD/MM/YYYY date"))
}

/// Validate a 3-letter IATA airport code, normalizing to upper case.
pub fn parse_iata(input: &str) -> Result<String, String> {
    let code = input.trim();
    if code.len() == IATA_LENGTH && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Ok(code.to_ascii_uppercase())
    } else {
        Err(format!("'{input}' is not a 3-letter IATA airport code"))
    }
}
