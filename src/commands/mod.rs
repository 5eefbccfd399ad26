//! Command implementations for the roster exporter

pub mod export_rosters;

pub use export_rosters::{
    handle_export_rosters, load_run_config, next_steps, scrape_league, RunSummary, ScrapeResult,
};
