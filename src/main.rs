//! Local runner: `espn-rosters [WEEK]`.

use clap::Parser;
use espn_rosters::{
    cli::LocalCli,
    commands::{handle_export_rosters, load_run_config, next_steps},
    logging, EspnClient, WeekSelection,
};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let app = LocalCli::parse();
    logging::init(app.common.verbose);

    let config = match load_run_config(&app.common) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let selection = WeekSelection::resolve(app.week.as_deref(), config.default_week);
    match selection.warning() {
        Some(warning) => {
            tracing::warn!("{}", warning);
            println!("{}", warning);
        }
        None => println!("{}", selection.describe()),
    }

    println!("\n{}", "=".repeat(60));
    println!("ESPN Fantasy Football Roster Scraper - Local Runner");
    println!("{}", "=".repeat(60));

    let client = match EspnClient::new() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let summary = handle_export_rosters(&client, &config, selection.week).await;
    summary.print();
    println!();
    for line in next_steps(&summary, &config.data_dir) {
        println!("{}", line);
    }

    ExitCode::from(summary.exit_status())
}
