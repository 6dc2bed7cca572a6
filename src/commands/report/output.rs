//! Output formatting for report command results.

use super::execute::ReportResult;
use crate::output::Outputable;

impl Outputable for ReportResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "Flight report for {} written to {}",
            self.date, self.output
        ));
        if self.flight_count == 0 {
            lines.push("No flights found for the given date; the report list is empty.".to_string());
        } else {
            lines.push(format!("{} flight(s) included.", self.flight_count));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_to_table_reports_path_and_count() {
        let result = ReportResult {
            date: "01/01/2015".to_string(),
            output: "flight_report.html".to_string(),
            flight_count: 3,
        };
        let output = result.to_table();
        assert!(output.contains("written to flight_report.html"));
        assert!(output.contains("3 flight(s) included."));
    }

    #[rstest]
    fn test_to_table_notes_empty_report() {
        let result = ReportResult {
            date: "25/12/2015".to_string(),
            output: "flight_report.html".to_string(),
            flight_count: 0,
        };
        assert!(result.to_table().contains("the report list is empty"));
    }
}
