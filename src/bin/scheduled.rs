//! Scheduled runner: same export, week taken from `ESPN_ROSTERS_WEEK`.

use clap::Parser;
use espn_rosters::{
    cli::ScheduledCli,
    commands::{handle_export_rosters, load_run_config},
    logging, EspnClient, WeekSelection, WEEK_ENV_VAR,
};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let app = ScheduledCli::parse();
    logging::init(app.common.verbose);

    let config = match load_run_config(&app.common) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "cannot load league configuration");
            return ExitCode::from(2);
        }
    };

    let raw_week = std::env::var(WEEK_ENV_VAR).ok();
    let selection = WeekSelection::resolve(raw_week.as_deref(), config.default_week);
    if let Some(warning) = selection.warning() {
        tracing::warn!(env = WEEK_ENV_VAR, "{}", warning);
    }

    println!("\n{}", "=".repeat(60));
    println!("ESPN Fantasy Football Roster Scraper (week {})", selection.week);
    println!("{}", "=".repeat(60));

    let client = match EspnClient::new() {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "cannot build HTTP client");
            return ExitCode::from(2);
        }
    };

    let summary = handle_export_rosters(&client, &config, selection.week).await;
    summary.print();

    ExitCode::from(summary.exit_status())
}
