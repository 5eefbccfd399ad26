//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser};
use std::path::PathBuf;

/// Options shared by both runners
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// League config file (or set `ESPN_ROSTERS_CONFIG` env var).
    #[clap(long, short)]
    pub config: Option<PathBuf>,

    /// Directory the spreadsheets are written to (overrides the config file).
    #[clap(long, short)]
    pub data_dir: Option<PathBuf>,

    /// Log debug detail to stderr.
    #[clap(long, short)]
    pub verbose: bool,
}

/// Export ESPN fantasy league rosters to spreadsheets.
#[derive(Debug, Parser)]
#[clap(name = "espn-rosters", about = "ESPN Fantasy Football roster exporter")]
pub struct LocalCli {
    /// NFL week to load rosters for. Falls back to the default week when
    /// missing or not a number.
    #[clap(allow_negative_numbers = true)]
    pub week: Option<String>,

    #[clap(flatten)]
    pub common: CommonArgs,
}

/// Scheduled roster export; the week comes from `ESPN_ROSTERS_WEEK`.
#[derive(Debug, Parser)]
#[clap(
    name = "espn-rosters-scheduled",
    about = "ESPN Fantasy Football roster exporter (scheduled runner)"
)]
pub struct ScheduledCli {
    #[clap(flatten)]
    pub common: CommonArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_cli_without_week() {
        let cli = LocalCli::try_parse_from(["espn-rosters"]).unwrap();
        assert!(cli.week.is_none());
        assert!(cli.common.config.is_none());
        assert!(!cli.common.verbose);
    }

    #[test]
    fn test_local_cli_keeps_raw_week_text() {
        // Non-numeric weeks must reach the lenient resolver instead of failing here.
        let cli = LocalCli::try_parse_from(["espn-rosters", "eleven"]).unwrap();
        assert_eq!(cli.week.as_deref(), Some("eleven"));

        let cli = LocalCli::try_parse_from(["espn-rosters", "-3"]).unwrap();
        assert_eq!(cli.week.as_deref(), Some("-3"));
    }

    #[test]
    fn test_local_cli_with_options() {
        let cli = LocalCli::try_parse_from([
            "espn-rosters",
            "12",
            "--config",
            "conf/leagues.toml",
            "--data-dir",
            "out",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.week.as_deref(), Some("12"));
        assert_eq!(cli.common.config, Some(PathBuf::from("conf/leagues.toml")));
        assert_eq!(cli.common.data_dir, Some(PathBuf::from("out")));
        assert!(cli.common.verbose);
    }

    #[test]
    fn test_scheduled_cli_rejects_positional_week() {
        assert!(ScheduledCli::try_parse_from(["espn-rosters-scheduled", "10"]).is_err());
        assert!(ScheduledCli::try_parse_from(["espn-rosters-scheduled", "--verbose"]).is_ok());
    }
}
