//! ESPN Fantasy Football league client.

pub mod http;
pub mod league;
pub mod maps;
pub mod types;

use crate::{config::LeagueConfig, Result, Week};
pub use league::{EspnClient, EspnLeague, League, Owner, Player, Team};

/// Anything that can produce a league's roster snapshot for a week.
///
/// [`EspnClient`] is the real implementation; the export orchestrator only
/// depends on this trait.
#[allow(async_fn_in_trait)]
pub trait RosterSource {
    async fn fetch_roster_week(&self, config: &LeagueConfig, week: Week) -> Result<League>;
}
