//! League snapshot for one roster week and the ESPN-backed handle that loads it.

use reqwest::{header::HeaderMap, Client};
use std::collections::HashMap;

use crate::{
    cli::types::TeamId,
    config::LeagueConfig,
    error::{EspnError, Result},
    espn::{
        http::{
            build_client, get_league_teams_with_base_url, get_roster_week_with_base_url,
            league_headers, FFL_BASE_URL,
        },
        maps::{default_position_name, lineup_slot_name, position_from_eligible_slots, pro_team_abbrev},
        types::{LeagueResponse, Member, RosterEntry, RosterInfo, TeamInfo},
        RosterSource,
    },
    LeagueId, Season, Week,
};


/// Owner of a fantasy team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    pub first_name: String,
    pub last_name: String,
}

impl Owner {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A rostered player as of the loaded week.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub position: String,
    pub pro_team: String,
    pub lineup_slot: String,
    pub injury_status: Option<String>,
    /// Percent of leagues starting the player; `-1.0` when ESPN omits it
    pub percent_started: f64,
    pub pos_rank: Option<u32>,
}

impl Player {
    pub fn from_entry(entry: &RosterEntry) -> Self {
        let pool = &entry.player_pool_entry;
        let info = &pool.player;

        let position = info
            .default_position_id
            .and_then(default_position_name)
            .or_else(|| position_from_eligible_slots(&info.eligible_slots))
            .unwrap_or("")
            .to_string();

        let percent_started = info
            .ownership
            .as_ref()
            .and_then(|o| o.percent_started)
            .map(round2)
            .unwrap_or(-1.0);

        Self {
            name: info.full_name.clone(),
            position,
            pro_team: pro_team_abbrev(info.pro_team_id.unwrap_or(0)).to_string(),
            lineup_slot: entry
                .lineup_slot_id
                .map(lineup_slot_name)
                .unwrap_or("")
                .to_string(),
            injury_status: info
                .injury_status
                .clone()
                .or_else(|| entry.injury_status.clone()),
            percent_started,
            pos_rank: pool.ratings.get("0").and_then(|r| r.positional_ranking),
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// A fantasy team and its roster for the loaded week.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: TeamId,
    pub team_name: String,
    /// Primary owner first
    pub owners: Vec<Owner>,
    pub roster: Vec<Player>,
}

impl Team {
    /// Build a team, resolving owner ids against league members. Unknown ids are skipped.
    pub fn from_info(info: &TeamInfo, members: &[Member]) -> Self {
        let owners = info
            .owners
            .iter()
            .filter_map(|owner_id| members.iter().find(|m| &m.id == owner_id))
            .map(|m| Owner {
                first_name: m.first_name.clone(),
                last_name: m.last_name.clone(),
            })
            .collect();

        let mut team = Self {
            id: info.id,
            team_name: info.display_name(),
            owners,
            roster: Vec::new(),
        };
        if let Some(roster) = &info.roster {
            team.set_roster(roster);
        }
        team
    }

    pub fn set_roster(&mut self, roster: &RosterInfo) {
        self.roster = roster.entries.iter().map(Player::from_entry).collect();
    }

    /// First listed owner; the team is unusable for export without one.
    pub fn primary_owner(&self) -> Result<&Owner> {
        self.owners.first().ok_or_else(|| EspnError::NoOwner {
            team: self.team_name.clone(),
        })
    }
}

/// League state after `load_roster_week`. Teams are ordered by team id.
#[derive(Debug, Clone, PartialEq)]
pub struct League {
    pub league_id: LeagueId,
    pub season: Season,
    pub name: Option<String>,
    pub teams: Vec<Team>,
}

impl League {
    pub fn from_response(league_id: LeagueId, season: Season, resp: &LeagueResponse) -> Result<Self> {
        if resp.teams.is_empty() {
            return Err(EspnError::NoData);
        }
        let mut teams: Vec<Team> = resp
            .teams
            .iter()
            .map(|t| Team::from_info(t, &resp.members))
            .collect();
        teams.sort_by_key(|t| t.id);

        Ok(Self {
            league_id,
            season,
            name: resp.settings.as_ref().and_then(|s| s.name.clone()),
            teams,
        })
    }

    /// Replace every team's roster from an `mRoster` response.
    ///
    /// Every known team must be present in the response.
    pub fn apply_rosters(&mut self, resp: &LeagueResponse) -> Result<()> {
        let by_team: HashMap<TeamId, &RosterInfo> = resp
            .teams
            .iter()
            .filter_map(|t| t.roster.as_ref().map(|r| (t.id, r)))
            .collect();

        for team in &mut self.teams {
            let roster = by_team
                .get(&team.id)
                .ok_or(EspnError::MissingTeamRoster {
                    team_id: team.id.as_u32(),
                })?;
            team.set_roster(roster);
        }
        Ok(())
    }
}

/// ESPN client for private and public leagues.
#[derive(Debug, Clone)]
pub struct EspnClient {
    http: Client,
    base_url: String,
}

impl EspnClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(FFL_BASE_URL)
    }

    /// Point the client somewhere other than ESPN (tests, proxies).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: build_client()?,
            base_url: base_url.into(),
        })
    }

    /// Open a league: fetch its teams, owners and settings.
    pub async fn connect(&self, config: &LeagueConfig) -> Result<EspnLeague<'_>> {
        let headers = league_headers(config.credentials.as_ref())?;
        let raw = get_league_teams_with_base_url(
            &self.http,
            &self.base_url,
            config.league_id,
            config.season,
            &headers,
        )
        .await?;
        let resp: LeagueResponse = serde_json::from_value(raw)?;
        let league = League::from_response(config.league_id, config.season, &resp)?;

        tracing::debug!(
            league_id = %config.league_id,
            season = %config.season,
            teams = league.teams.len(),
            "connected to league"
        );

        Ok(EspnLeague {
            client: self,
            headers,
            league,
        })
    }
}

/// An opened league, ready to load a roster week.
pub struct EspnLeague<'a> {
    client: &'a EspnClient,
    headers: HeaderMap,
    league: League,
}

impl EspnLeague<'_> {
    /// Load every team's roster as of `week`.
    pub async fn load_roster_week(&mut self, week: Week) -> Result<()> {
        let raw = get_roster_week_with_base_url(
            &self.client.http,
            &self.client.base_url,
            self.league.league_id,
            self.league.season,
            week,
            &self.headers,
        )
        .await?;
        let resp: LeagueResponse = serde_json::from_value(raw)?;
        self.league.apply_rosters(&resp)?;

        tracing::debug!(league_id = %self.league.league_id, %week, "roster week loaded");
        Ok(())
    }

    pub fn teams(&self) -> &[Team] {
        &self.league.teams
    }

    pub fn into_league(self) -> League {
        self.league
    }
}

impl RosterSource for EspnClient {
    async fn fetch_roster_week(&self, config: &LeagueConfig, week: Week) -> Result<League> {
        let mut league = self.connect(config).await?;
        league.load_roster_week(week).await?;
        Ok(league.into_league())
    }
}
