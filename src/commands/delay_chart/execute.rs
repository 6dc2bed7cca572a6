use std::error::Error;

use serde::Serialize;

use super::DelayChartCmd;
use crate::commands::Execute;
use crate::db::FlightDb;
use crate::queries::delay_stats::delay_percentages;
use crate::types::AirlineDelayStat;

/// Result of the delay-chart command execution
#[derive(Debug, Default, Serialize)]
pub struct DelayChartResult {
    pub stats: Vec<AirlineDelayStat>,
}

impl Execute for DelayChartCmd {
    type Output = DelayChartResult;

    fn execute(self, db: &FlightDb) -> Result<Self::Output, Box<dyn Error>> {
        Ok(DelayChartResult {
            stats: delay_percentages(db),
        })
    }
}
