//! ESPN Fantasy Football roster exporter
//!
//! Fetches the roster of every team in a set of ESPN fantasy football leagues
//! for one NFL week and writes one spreadsheet per league.
//!
//! ## Flow
//!
//! 1. [`config::RunConfig`] reads the shared league list (`leagues.toml`).
//! 2. [`espn::EspnClient`] opens each league and loads its roster week.
//! 3. [`export`] flattens teams into rows and writes `data/<output_file>`.
//! 4. [`commands::handle_export_rosters`] runs the leagues one after another,
//!    isolating failures, and reports a summary.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use espn_rosters::{commands::handle_export_rosters, config::RunConfig, espn::EspnClient, Week};
//! use std::path::Path;
//!
//! # async fn example() -> espn_rosters::Result<()> {
//! let config = RunConfig::load(Path::new("leagues.toml"))?;
//! let client = EspnClient::new()?;
//! let summary = handle_export_rosters(&client, &config, Week::new(9)).await;
//! summary.print();
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Auth cookies for private leagues are read from the environment, never from
//! the config file:
//! ```bash
//! export ESPN_S2=...
//! export ESPN_SWID={...}
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod espn;
pub mod export;
pub mod logging;

// Re-export commonly used types
pub use cli::types::{LeagueId, Season, TeamId, Week, WeekSelection};
pub use config::{Credentials, LeagueConfig, RunConfig};
pub use error::{EspnError, Result};
pub use espn::{EspnClient, League, RosterSource};
pub use export::TeamRosterEntry;

/// Config file path override
pub const CONFIG_ENV_VAR: &str = "ESPN_ROSTERS_CONFIG";

/// Week for the scheduled runner
pub const WEEK_ENV_VAR: &str = "ESPN_ROSTERS_WEEK";
