//! League configuration loaded from a shared TOML file.
//!
//! Both runners read the same file. Auth tokens never live in the file: each
//! league names the environment variables holding its `espn_s2` and `SWID`
//! cookies, defaulting to [`ESPN_S2_ENV_VAR`] and [`ESPN_SWID_ENV_VAR`].
//!
//! ```toml
//! data_dir = "data"
//! default_week = 9
//!
//! [[leagues]]
//! name = "Dub League"
//! league_id = 96479385
//! season = 2025
//! output_file = "roster_dub.xlsx"
//! espn_s2_env = "DUB_ESPN_S2"
//! swid_env = "DUB_SWID"
//! ```

use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::{
    error::{EspnError, Result},
    LeagueId, Season, Week, CONFIG_ENV_VAR,
};

pub const DEFAULT_CONFIG_FILE: &str = "leagues.toml";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const ESPN_S2_ENV_VAR: &str = "ESPN_S2";
pub const ESPN_SWID_ENV_VAR: &str = "ESPN_SWID";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    data_dir: Option<PathBuf>,
    default_week: Option<Week>,
    #[serde(default)]
    leagues: Vec<LeagueEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LeagueEntry {
    name: String,
    league_id: LeagueId,
    #[serde(default)]
    season: Season,
    output_file: String,
    espn_s2_env: Option<String>,
    swid_env: Option<String>,
}

/// ESPN auth cookies for a private league.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub espn_s2: String,
    pub swid: String,
}

impl Credentials {
    pub fn new(espn_s2: impl Into<String>, swid: impl Into<String>) -> Self {
        Self {
            espn_s2: espn_s2.into(),
            swid: swid.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("espn_s2", &"<redacted>")
            .field("swid", &"<redacted>")
            .finish()
    }
}

/// One league to export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueConfig {
    pub name: String,
    pub league_id: LeagueId,
    pub season: Season,
    /// `None` for public leagues.
    pub credentials: Option<Credentials>,
    pub output_file: String,
}

impl LeagueConfig {
    pub fn new(
        name: impl Into<String>,
        league_id: LeagueId,
        season: Season,
        credentials: Option<Credentials>,
        output_file: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            league_id,
            season,
            credentials,
            output_file: output_file.into(),
        }
    }
}

/// Everything a run needs.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub data_dir: PathBuf,
    pub default_week: Week,
    pub leagues: Vec<LeagueConfig>,
}

impl RunConfig {
    /// Pick the config file: explicit path, then `ESPN_ROSTERS_CONFIG`, then `leagues.toml`.
    pub fn resolve_path(explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| std::env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Read and validate the config file, resolving tokens from the process environment.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| EspnError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&text, path, |name| std::env::var(name).ok())
    }

    /// Parse config text. `lookup_env` resolves token variable names.
    pub fn from_toml_str<F>(text: &str, path: &Path, lookup_env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config_error = |message: String| EspnError::Config {
            path: path.to_path_buf(),
            message,
        };

        let file: ConfigFile = toml::from_str(text).map_err(|e| config_error(e.to_string()))?;

        if file.leagues.is_empty() {
            return Err(config_error("no leagues configured".to_string()));
        }

        let mut seen_outputs = HashSet::new();
        let mut leagues = Vec::with_capacity(file.leagues.len());

        for entry in file.leagues {
            validate_output_file(&entry.output_file).map_err(|m| {
                config_error(format!("league '{}': {}", entry.name, m))
            })?;
            if !seen_outputs.insert(entry.output_file.clone()) {
                return Err(config_error(format!(
                    "output file '{}' is used by more than one league",
                    entry.output_file
                )));
            }

            let s2_var = entry.espn_s2_env.as_deref().unwrap_or(ESPN_S2_ENV_VAR);
            let swid_var = entry.swid_env.as_deref().unwrap_or(ESPN_SWID_ENV_VAR);
            let credentials = match (lookup_env(s2_var), lookup_env(swid_var)) {
                (Some(espn_s2), Some(swid)) => Some(Credentials::new(espn_s2, swid)),
                _ => {
                    tracing::warn!(
                        league = %entry.name,
                        espn_s2_env = s2_var,
                        swid_env = swid_var,
                        "auth tokens not set; treating league as public"
                    );
                    None
                }
            };

            leagues.push(LeagueConfig {
                name: entry.name,
                league_id: entry.league_id,
                season: entry.season,
                credentials,
                output_file: entry.output_file,
            });
        }

        Ok(Self {
            data_dir: file
                .data_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            default_week: file.default_week.unwrap_or_default(),
            leagues,
        })
    }

    /// Path a league's spreadsheet is written to.
    pub fn output_path(&self, league: &LeagueConfig) -> PathBuf {
        self.data_dir.join(&league.output_file)
    }
}

fn validate_output_file(name: &str) -> std::result::Result<(), String> {
    let path = Path::new(name);
    if name.trim().is_empty() {
        return Err("output_file is empty".to_string());
    }
    if path.file_name().map(|f| f != path.as_os_str()).unwrap_or(true) {
        return Err(format!("output_file '{}' must be a plain file name", name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const SAMPLE: &str = r#"
default_week = 11

[[leagues]]
name = "Dub League"
league_id = 96479385
season = 2025
output_file = "roster_dub.xlsx"
espn_s2_env = "DUB_ESPN_S2"
swid_env = "DUB_SWID"

[[leagues]]
name = "Pitt League"
league_id = 1380786104
output_file = "roster_pitt.xlsx"
"#;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_parses_leagues_in_file_order() {
        let config = RunConfig::from_toml_str(SAMPLE, Path::new("leagues.toml"), env(&[])).unwrap();

        assert_eq!(config.default_week, Week::new(11));
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.leagues.len(), 2);
        assert_eq!(config.leagues[0].name, "Dub League");
        assert_eq!(config.leagues[0].league_id, LeagueId::new(96479385));
        assert_eq!(config.leagues[1].season, Season::default());
        assert_eq!(
            config.output_path(&config.leagues[1]),
            PathBuf::from("data").join("roster_pitt.xlsx")
        );
    }

    #[test]
    fn test_tokens_come_from_named_env_vars() {
        let lookup = env(&[
            ("DUB_ESPN_S2", "s2-dub"),
            ("DUB_SWID", "{DUB}"),
            (ESPN_S2_ENV_VAR, "s2-shared"),
            (ESPN_SWID_ENV_VAR, "{SHARED}"),
        ]);
        let config = RunConfig::from_toml_str(SAMPLE, Path::new("leagues.toml"), lookup).unwrap();

        assert_eq!(
            config.leagues[0].credentials,
            Some(Credentials::new("s2-dub", "{DUB}"))
        );
        assert_eq!(
            config.leagues[1].credentials,
            Some(Credentials::new("s2-shared", "{SHARED}"))
        );
    }

    #[test]
    fn test_missing_token_means_public_league() {
        let lookup = env(&[("DUB_ESPN_S2", "s2-dub")]);
        let config = RunConfig::from_toml_str(SAMPLE, Path::new("leagues.toml"), lookup).unwrap();
        assert!(config.leagues[0].credentials.is_none());
    }

    #[test]
    fn test_credentials_debug_is_redacted() {
        let debug = format!("{:?}", Credentials::new("secret-s2", "{SECRET}"));
        assert!(!debug.contains("secret-s2"));
        assert!(!debug.contains("SECRET"));
    }

    #[test]
    fn test_duplicate_output_files_rejected() {
        let text = r#"
[[leagues]]
name = "A"
league_id = 1
output_file = "same.xlsx"

[[leagues]]
name = "B"
league_id = 2
output_file = "same.xlsx"
"#;
        let err = RunConfig::from_toml_str(text, Path::new("x.toml"), env(&[])).unwrap_err();
        assert!(err.to_string().contains("more than one league"));
    }

    #[test]
    fn test_output_file_must_be_plain_name() {
        let text = r#"
[[leagues]]
name = "A"
league_id = 1
output_file = "../escape.xlsx"
"#;
        let err = RunConfig::from_toml_str(text, Path::new("x.toml"), env(&[])).unwrap_err();
        assert!(matches!(err, EspnError::Config { .. }));
    }

    #[test]
    fn test_empty_league_list_rejected() {
        let err = RunConfig::from_toml_str("data_dir = \"out\"", Path::new("x.toml"), env(&[]))
            .unwrap_err();
        assert!(err.to_string().contains("no leagues configured"));
    }

    #[test]
    fn test_inline_secrets_are_not_accepted() {
        let text = r#"
[[leagues]]
name = "A"
league_id = 1
output_file = "a.xlsx"
espn_s2 = "AEBLTk..."
"#;
        assert!(RunConfig::from_toml_str(text, Path::new("x.toml"), env(&[])).is_err());
    }

    #[test]
    fn test_example_config_parses() {
        let text = include_str!("../leagues.example.toml");
        let config =
            RunConfig::from_toml_str(text, Path::new("leagues.example.toml"), env(&[])).unwrap();
        assert_eq!(config.leagues.len(), 3);
        assert_eq!(config.default_week, Week::new(9));
        assert_eq!(config.leagues[2].output_file, "roster_men.xlsx");
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let err = RunConfig::load(Path::new("/nonexistent/leagues.toml")).unwrap_err();
        match err {
            EspnError::Config { path, .. } => {
                assert_eq!(path, PathBuf::from("/nonexistent/leagues.toml"))
            }
            other => panic!("Expected Config error, got {other:?}"),
        }
    }
}
