//! Raw shapes of the ESPN league endpoint (`mTeam`, `mSettings`, `mRoster` views).

use crate::cli::types::TeamId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;


/// Body of `/seasons/{season}/segments/0/leagues/{id}`.
///
/// Only `teams` is required; the other parts depend on the requested views.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueResponse {
    #[serde(default)]
    pub settings: Option<LeagueSettingsInfo>,
    #[serde(default)]
    pub members: Vec<Member>,
    pub teams: Vec<TeamInfo>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueSettingsInfo {
    #[serde(default)]
    pub name: Option<String>,
}

/// A league member (team owner candidate), keyed by SWID.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Member {
    pub id: String,
    #[serde(rename = "firstName", default)]
    pub first_name: String,
    #[serde(rename = "lastName", default)]
    pub last_name: String,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TeamInfo {
    pub id: TeamId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    /// Member ids, primary owner first
    #[serde(default)]
    pub owners: Vec<String>,
    #[serde(default)]
    pub roster: Option<RosterInfo>,
}

impl TeamInfo {
    /// `name` when set, otherwise "location nickname" (older leagues).
    pub fn display_name(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                let parts: Vec<&str> = [self.location.as_deref(), self.nickname.as_deref()]
                    .into_iter()
                    .flatten()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .collect();
                parts.join(" ")
            }
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RosterInfo {
    #[serde(default)]
    pub entries: Vec<RosterEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RosterEntry {
    #[serde(rename = "playerId")]
    pub player_id: i64,
    #[serde(rename = "lineupSlotId", default)]
    pub lineup_slot_id: Option<u16>,
    #[serde(rename = "injuryStatus", default)]
    pub injury_status: Option<String>,
    #[serde(rename = "playerPoolEntry")]
    pub player_pool_entry: PlayerPoolEntry,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerPoolEntry {
    pub player: PlayerInfo,
    /// Keyed by rating period; "0" is the season-to-date rating
    #[serde(default)]
    pub ratings: BTreeMap<String, PlayerRating>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerInfo {
    pub id: i64,
    #[serde(rename = "fullName", default)]
    pub full_name: String,
    #[serde(rename = "defaultPositionId", default)]
    pub default_position_id: Option<i16>,
    #[serde(rename = "proTeamId", default)]
    pub pro_team_id: Option<u16>,
    #[serde(rename = "injuryStatus", default)]
    pub injury_status: Option<String>,
    #[serde(rename = "eligibleSlots", default)]
    pub eligible_slots: Vec<u16>,
    #[serde(default)]
    pub ownership: Option<Ownership>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Ownership {
    #[serde(rename = "percentStarted", default)]
    pub percent_started: Option<f64>,
    #[serde(rename = "percentOwned", default)]
    pub percent_owned: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerRating {
    #[serde(rename = "positionalRanking", default)]
    pub positional_ranking: Option<u32>,
    #[serde(rename = "totalRanking", default)]
    pub total_ranking: Option<u32>,
}
