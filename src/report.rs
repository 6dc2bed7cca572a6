//! HTML report generation.
//!
//! The report is a static HTML template embedded in the binary, with two
//! placeholders substituted: the title and the generated flight list
//! fragment. An empty flight list still yields a valid document with an
//! empty list section.

use std::fs;
use std::path::Path;

use include_dir::{Dir, include_dir};
use thiserror::Error;

use crate::types::FlightRecord;

static TEMPLATES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

const TEMPLATE_FILE: &str = "report.html";
const TITLE_PLACEHOLDER: &str = "__REPORT_TITLE__";
const LIST_PLACEHOLDER: &str = "__FLIGHT_LIST__";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Template '{name}' is missing from the embedded template set")]
    MissingTemplate { name: String },

    #[error("Failed to write report '{path}': {message}")]
    WriteFailed { path: String, message: String },
}

/// Render the report HTML for the given flights.
pub fn render_report(title: &str, flights: &[FlightRecord]) -> Result<String, ReportError> {
    let template = TEMPLATES
        .get_file(TEMPLATE_FILE)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| ReportError::MissingTemplate {
            name: TEMPLATE_FILE.to_string(),
        })?;

    let items: String = flights.iter().map(flight_item).collect();
    Ok(template
        .replace(TITLE_PLACEHOLDER, &escape_html(title))
        .replace(LIST_PLACEHOLDER, &items))
}

/// Render the report and write it to `path`.
pub fn write_report(
    title: &str,
    flights: &[FlightRecord],
    path: &Path,
) -> Result<(), ReportError> {
    let html = render_report(title, flights)?;
    fs::write(path, html).map_err(|e| ReportError::WriteFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn flight_item(flight: &FlightRecord) -> String {
    format!(
        r#"    <li class="flight">
      <div class="route">{} &mdash; {} to {}</div>
      <div class="airline">Airline: {}</div>
      <div class="delay">Delay: {} minutes</div>
    </li>
"#,
        flight.flight_id,
        escape_html(&flight.origin_airport),
        escape_html(&flight.destination_airport),
        escape_html(&flight.airline),
        flight.delay_minutes()
    )
}

/// Minimal HTML escaping for text interpolated into the template.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
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
    fn test_render_substitutes_both_placeholders() {
        let html = render_report("Flight Delays Report", &[sample_flight()])
            .expect("render should succeed");
        assert!(html.contains("<title>Flight Delays Report</title>"));
        assert!(html.contains("540 &mdash; SFO to JFK"));
        assert!(html.contains("Airline: United Air Lines Inc."));
        assert!(html.contains("Delay: 25 minutes"));
        assert!(!html.contains(TITLE_PLACEHOLDER));
        assert!(!html.contains(LIST_PLACEHOLDER));
    }

    #[test]
    fn test_empty_flight_list_still_renders_valid_document() {
        let html = render_report("Flight Delays Report", &[]).expect("render should succeed");
        assert!(html.contains("<ul class=\"flights\">"));
        assert!(!html.contains("<li"));
        assert!(!html.contains(LIST_PLACEHOLDER));
    }

    #[test]
    fn test_missing_delay_renders_as_zero() {
        let mut flight = sample_flight();
        flight.delay = None;
        let html = render_report("Report", &[flight]).expect("render should succeed");
        assert!(html.contains("Delay: 0 minutes"));
    }

    #[test]
    fn test_markup_in_names_is_escaped() {
        let mut flight = sample_flight();
        flight.airline = "Fly <&> Co.".to_string();
        let html = render_report("Report", &[flight]).expect("render should succeed");
        assert!(html.contains("Fly &lt;&amp;&gt; Co."));
    }

    #[test]
    fn test_write_report_creates_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("flight_report.html");
        write_report("Flight Delays Report", &[sample_flight()], &path)
            .expect("write should succeed");

        let written = fs::read_to_string(&path).expect("report file should exist");
        assert!(written.contains("Flight Delays Report"));
    }

    #[test]
    fn test_write_report_to_missing_directory_fails() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nope").join("flight_report.html");
        let result = write_report("Report", &[], &path);
        assert!(matches!(result, Err(ReportError::WriteFailed { .. })));
    }
}
