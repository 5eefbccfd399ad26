//! Roster export command: fetch each configured league and write its spreadsheet.

use std::path::Path;
use tracing::Instrument;

use crate::{
    cli::CommonArgs,
    config::{LeagueConfig, RunConfig},
    espn::RosterSource,
    export::export_league,
    Result, Week,
};

const RULE_WIDTH: usize = 60;

/// Outcome of one league in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeResult {
    pub league_name: String,
    pub success: bool,
    pub error: Option<String>,
}

impl ScrapeResult {
    pub fn succeeded(league_name: impl Into<String>) -> Self {
        Self {
            league_name: league_name.into(),
            success: true,
            error: None,
        }
    }

    pub fn failed(league_name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            league_name: league_name.into(),
            success: false,
            error: Some(error.into()),
        }
    }
}

/// All league outcomes for one run, in config order.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub week: Week,
    pub results: Vec<ScrapeResult>,
}

impl RunSummary {
    pub fn all_succeeded(&self) -> bool {
        self.results.iter().all(|r| r.success)
    }

    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| !r.success).count()
    }

    /// Process exit status: 0 when every league succeeded, 1 otherwise.
    pub fn exit_status(&self) -> u8 {
        if self.all_succeeded() {
            0
        } else {
            1
        }
    }

    /// Summary block lines, one per league.
    pub fn lines(&self) -> Vec<String> {
        self.results
            .iter()
            .map(|r| {
                let status = if r.success { "✓ SUCCESS" } else { "✗ FAILED" };
                format!("{}: {}", status, r.league_name)
            })
            .collect()
    }

    pub fn print(&self) {
        println!("\n{}", "=".repeat(RULE_WIDTH));
        println!("SUMMARY");
        println!("{}", "=".repeat(RULE_WIDTH));
        for line in self.lines() {
            println!("{}", line);
        }

        if self.all_succeeded() {
            println!("\n✓ All leagues scraped successfully!");
        } else {
            println!("\n⚠ Some leagues failed to scrape.");
        }
    }
}

/// Load the config file named by the CLI/env and apply CLI overrides.
pub fn load_run_config(args: &CommonArgs) -> Result<RunConfig> {
    let path = RunConfig::resolve_path(args.config.clone());
    let mut config = RunConfig::load(&path)?;
    if let Some(dir) = &args.data_dir {
        config.data_dir = dir.clone();
    }
    tracing::debug!(
        config = %path.display(),
        data_dir = %config.data_dir.display(),
        leagues = config.leagues.len(),
        "configuration loaded"
    );
    Ok(config)
}

/// Fetch one league's roster week and write its spreadsheet. Returns rows written.
pub async fn scrape_league<S: RosterSource>(
    source: &S,
    league: &LeagueConfig,
    week: Week,
    output_path: &Path,
) -> Result<usize> {
    let snapshot = source.fetch_roster_week(league, week).await?;
    export_league(&snapshot, output_path)
}

/// Process every configured league in order. A failure in one league is
/// recorded and the run moves on.
pub async fn handle_export_rosters<S: RosterSource>(
    source: &S,
    config: &RunConfig,
    week: Week,
) -> RunSummary {
    let mut results = Vec::with_capacity(config.leagues.len());

    for league in &config.leagues {
        println!("\n{}", "=".repeat(RULE_WIDTH));
        println!("Scraping {}...", league.output_file);
        println!("{}", "=".repeat(RULE_WIDTH));

        let span = tracing::info_span!("league", name = %league.name, id = %league.league_id);
        let path = config.output_path(league);
        let outcome = scrape_league(source, league, week, &path)
            .instrument(span.clone())
            .await;
        let _enter = span.enter();

        match outcome {
            Ok(rows) => {
                tracing::info!(rows, path = %path.display(), "roster export written");
                println!("✓ Saved to {}", path.display());
                results.push(ScrapeResult::succeeded(&league.name));
            }
            Err(e) => {
                tracing::error!(error = %e, "roster export failed");
                println!("✗ Error scraping {} ({}): {}", league.output_file, league.name, e);
                results.push(ScrapeResult::failed(&league.name, e.to_string()));
            }
        }
    }

    RunSummary { week, results }
}

/// Hints printed by the local runner after a clean run.
pub fn next_steps(summary: &RunSummary, data_dir: &Path) -> Vec<String> {
    if !summary.all_succeeded() {
        return vec![
            "After you commit and push the successful ones, the failed ones may need credential updates."
                .to_string(),
        ];
    }
    let dir = data_dir.display();
    vec![
        "Next steps:".to_string(),
        format!("  1. Review the updated files in {}/", dir),
        format!("  2. git add {}/*.xlsx", dir),
        format!(
            "  3. git commit -m 'chore: update roster data for week {}'",
            summary.week
        ),
        "  4. git push".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(flags: &[bool]) -> RunSummary {
        RunSummary {
            week: Week::new(10),
            results: flags
                .iter()
                .enumerate()
                .map(|(i, ok)| {
                    let name = format!("League {}", i + 1);
                    if *ok {
                        ScrapeResult::succeeded(name)
                    } else {
                        ScrapeResult::failed(name, "boom")
                    }
                })
                .collect(),
        }
    }

    #[test]
    fn test_exit_status_all_success() {
        let s = summary(&[true, true, true]);
        assert!(s.all_succeeded());
        assert_eq!(s.exit_status(), 0);
        assert_eq!(s.failed_count(), 0);
    }

    #[test]
    fn test_exit_status_any_failure() {
        let s = summary(&[true, false, true]);
        assert!(!s.all_succeeded());
        assert_eq!(s.exit_status(), 1);
        assert_eq!(s.failed_count(), 1);
    }

    #[test]
    fn test_summary_lines() {
        let s = summary(&[true, false]);
        assert_eq!(
            s.lines(),
            vec!["✓ SUCCESS: League 1".to_string(), "✗ FAILED: League 2".to_string()]
        );
    }

    #[test]
    fn test_next_steps_mention_week_and_dir() {
        let steps = next_steps(&summary(&[true]), Path::new("data"));
        assert!(steps.iter().any(|l| l.contains("git add data/*.xlsx")));
        assert!(steps.iter().any(|l| l.contains("week 10")));

        let steps = next_steps(&summary(&[false]), Path::new("data"));
        assert_eq!(steps.len(), 1);
        assert!(steps[0].contains("credential updates"));
    }
}
