mod execute;
mod output;

use clap::Args;

#[derive(Args, Debug)]
pub struct DelayChartCmd {}

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;

    #[rstest]
    fn test_delay_chart_takes_no_args() {
        let args = Args::try_parse_from(["flight_search", "delay-chart"]).unwrap();
        assert!(matches!(
            args.command,
            Some(crate::commands::Command::DelayChart(_))
        ));
    }

    #[rstest]
    fn test_delay_chart_rejects_extra_args() {
        let result = Args::try_parse_from(["flight_search", "delay-chart", "extra"]);
        assert!(result.is_err());
    }
}
