//! Output formatting for delay-chart command results.
//!
//! The table format is a horizontal bar chart: one bar per airline, scaled
//! to the highest delay percentage.

use super::execute::DelayChartResult;
use crate::output::Outputable;

const MAX_BAR_WIDTH: usize = 40;

impl Outputable for DelayChartResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push("Share of delayed flights per airline".to_string());
        lines.push(String::new());

        if self.stats.is_empty() {
            lines.push("No data available.".to_string());
            return lines.join("\n");
        }

        let label_width = self
            .stats
            .iter()
            .map(|stat| stat.airline.len())
            .max()
            .unwrap_or(0);
        let max_pct = self
            .stats
            .iter()
            .map(|stat| stat.delay_percentage)
            .fold(0.0_f64, f64::max);
        let bar_width = MAX_BAR_WIDTH;

        for stat in &self.stats {
            let bar_len = if max_pct > 0.0 {
                ((stat.delay_percentage / max_pct) * bar_width as f64).round() as usize
            } else {
                0
            };
            lines.push(format!(
                "{:<label_width$}  {:<bar_width$} {:>5.1}%",
                stat.airline,
                "#".repeat(bar_len),
                stat.delay_percentage
            ));
        }

        lines.join("\n")
    }
}
