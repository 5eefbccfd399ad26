//! Flatten a league snapshot into spreadsheet rows.

use serde::Serialize;

use crate::{espn::League, Result};

/// Column headers, in output order.
pub const HEADERS: [&str; 9] = [
    "Team Name",
    "Player Name",
    "Position",
    "NFL Team",
    "Roster Slot",
    "Injury Status",
    "Percent Started",
    "Pos",
    "Owner Name",
];

/// One exported row: a player on a team's roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamRosterEntry {
    pub team_name: String,
    pub player_name: String,
    pub position: String,
    pub pro_team: String,
    pub roster_slot: String,
    pub injury_status: Option<String>,
    pub percent_started: f64,
    pub pos_rank: Option<u32>,
    pub owner_name: String,
}

/// Rows for every rostered player, team by team in league order.
///
/// Teams with empty rosters add nothing. A team with no owner fails the whole
/// league with [`crate::EspnError::NoOwner`].
pub fn flatten_league(league: &League) -> Result<Vec<TeamRosterEntry>> {
    let mut rows = Vec::new();

    for team in &league.teams {
        println!("  Processing {}...", team.team_name);

        let owner_name = team.primary_owner()?.full_name();

        rows.extend(team.roster.iter().map(|player| TeamRosterEntry {
            team_name: team.team_name.clone(),
            player_name: player.name.clone(),
            position: player.position.clone(),
            pro_team: player.pro_team.clone(),
            roster_slot: player.lineup_slot.clone(),
            injury_status: player.injury_status.clone(),
            percent_started: player.percent_started,
            pos_rank: player.pos_rank,
            owner_name: owner_name.clone(),
        }));
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cli::types::TeamId,
        espn::{Owner, Player, Team},
        EspnError, LeagueId, Season,
    };

    fn player(name: &str) -> Player {
        Player {
            name: name.to_string(),
            position: "WR".to_string(),
            pro_team: "PIT".to_string(),
            lineup_slot: "WR".to_string(),
            injury_status: None,
            percent_started: 50.0,
            pos_rank: Some(12),
        }
    }

    fn team(id: u32, name: &str, owners: Vec<Owner>, roster: Vec<Player>) -> Team {
        Team {
            id: TeamId::new(id),
            team_name: name.to_string(),
            owners,
            roster,
        }
    }

    fn owner(first: &str, last: &str) -> Owner {
        Owner {
            first_name: first.to_string(),
            last_name: last.to_string(),
        }
    }

    fn league(teams: Vec<Team>) -> League {
        League {
            league_id: LeagueId::new(1),
            season: Season::new(2025),
            name: None,
            teams,
        }
    }

    #[test]
    fn test_row_count_is_sum_of_rosters() {
        let league = league(vec![
            team(1, "A", vec![owner("Ann", "One")], vec![player("a1"), player("a2")]),
            team(2, "B", vec![owner("Ben", "Two")], vec![]),
            team(3, "C", vec![owner("Cy", "Three")], vec![player("c1"), player("c2"), player("c3")]),
        ]);

        let rows = flatten_league(&league).unwrap();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| r.team_name != "B"));
    }

    #[test]
    fn test_rows_keep_team_then_player_order() {
        let league = league(vec![
            team(2, "Zeta", vec![owner("Z", "Z")], vec![player("zz"), player("aa")]),
            team(1, "Alpha", vec![owner("A", "A")], vec![player("mm")]),
        ]);

        let names: Vec<(String, String)> = flatten_league(&league)
            .unwrap()
            .into_iter()
            .map(|r| (r.team_name, r.player_name))
            .collect();

        assert_eq!(
            names,
            vec![
                ("Zeta".to_string(), "zz".to_string()),
                ("Zeta".to_string(), "aa".to_string()),
                ("Alpha".to_string(), "mm".to_string()),
            ]
        );
    }

    #[test]
    fn test_single_player_fields_in_order() {
        let p = Player {
            name: "Jaylen Warren".to_string(),
            position: "RB".to_string(),
            pro_team: "PIT".to_string(),
            lineup_slot: "RB/WR/TE".to_string(),
            injury_status: Some("QUESTIONABLE".to_string()),
            percent_started: 61.25,
            pos_rank: Some(18),
        };
        let league = league(vec![team(
            1,
            "Steel Curtain",
            vec![owner("Dana", "Whitfield"), owner("Second", "Owner")],
            vec![p],
        )]);

        let rows = flatten_league(&league).unwrap();
        assert_eq!(
            rows,
            vec![TeamRosterEntry {
                team_name: "Steel Curtain".to_string(),
                player_name: "Jaylen Warren".to_string(),
                position: "RB".to_string(),
                pro_team: "PIT".to_string(),
                roster_slot: "RB/WR/TE".to_string(),
                injury_status: Some("QUESTIONABLE".to_string()),
                percent_started: 61.25,
                pos_rank: Some(18),
                owner_name: "Dana Whitfield".to_string(),
            }]
        );
    }

    #[test]
    fn test_ownerless_team_fails() {
        let league = league(vec![
            team(1, "Owned", vec![owner("A", "B")], vec![player("p")]),
            team(2, "Orphaned", vec![], vec![player("q")]),
        ]);

        match flatten_league(&league) {
            Err(EspnError::NoOwner { team }) => assert_eq!(team, "Orphaned"),
            other => panic!("Expected NoOwner, got {other:?}"),
        }
    }

    #[test]
    fn test_headers_fixed_order() {
        assert_eq!(HEADERS[0], "Team Name");
        assert_eq!(HEADERS[3], "NFL Team");
        assert_eq!(HEADERS[7], "Pos");
        assert_eq!(HEADERS[8], "Owner Name");
    }
}
