//! HTTP calls against ESPN's fantasy football read API.

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, COOKIE},
    Client,
};
use serde_json::Value;

use crate::{config::Credentials, LeagueId, Result, Season, Week};


/// Base path for ESPN Fantasy Football v3 API.
pub const FFL_BASE_URL: &str = "https://lm-api-reads.fantasy.espn.com/apis/v3/games/ffl";

const USER_AGENT: &str = concat!("espn-rosters/", env!("CARGO_PKG_VERSION"));

/// Build the shared reqwest client.
pub fn build_client() -> Result<Client> {
    Ok(Client::builder().user_agent(USER_AGENT).build()?)
}

/// Request headers for one league: JSON accept, plus the auth cookie for private leagues.
pub fn league_headers(credentials: Option<&Credentials>) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(creds) = credentials {
        let cookie = format!("SWID={}; espn_s2={}", creds.swid, creds.espn_s2);
        let mut value = HeaderValue::from_str(&cookie)?;
        value.set_sensitive(true);
        h.insert(COOKIE, value);
    }
    Ok(h)
}

fn league_url(base_url: &str, league_id: LeagueId, season: Season) -> String {
    format!(
        "{}/seasons/{}/segments/0/leagues/{}",
        base_url.trim_end_matches('/'),
        season,
        league_id
    )
}

async fn get_league_view(
    client: &Client,
    url: &str,
    headers: &HeaderMap,
    params: &[(&str, String)],
) -> Result<Value> {
    let builder = client.get(url).headers(headers.clone()).query(params);

    if tracing::enabled!(tracing::Level::DEBUG) {
        if let Some(req) = builder.try_clone().and_then(|b| b.build().ok()) {
            tracing::debug!(url = %req.url(), "GET");
        }
    }

    let v = builder
        .send()
        .await?
        .error_for_status()?
        .json::<Value>()
        .await?;
    Ok(v)
}

/// League teams, members and settings (`view=mTeam&view=mSettings`).
pub async fn get_league_teams_with_base_url(
    client: &Client,
    base_url: &str,
    league_id: LeagueId,
    season: Season,
    headers: &HeaderMap,
) -> Result<Value> {
    let url = league_url(base_url, league_id, season);
    let params = [("view", "mTeam".to_string()), ("view", "mSettings".to_string())];
    get_league_view(client, &url, headers, &params).await
}

/// Team rosters as of a scoring period (`view=mRoster&scoringPeriodId={week}`).
pub async fn get_roster_week_with_base_url(
    client: &Client,
    base_url: &str,
    league_id: LeagueId,
    season: Season,
    week: Week,
    headers: &HeaderMap,
) -> Result<Value> {
    let url = league_url(base_url, league_id, season);
    let params = [
        ("view", "mRoster".to_string()),
        ("scoringPeriodId", week.to_string()),
    ];
    get_league_view(client, &url, headers, &params).await
}
