//! Tabular export of league rosters.

pub mod rows;
pub mod xlsx;

pub use rows::{flatten_league, TeamRosterEntry, HEADERS};
pub use xlsx::{render_workbook, write_roster_workbook, SHEET_NAME};

use std::path::Path;

use crate::{espn::League, Result};

/// Flatten `league` and write it to `path`. Returns the number of data rows.
pub fn export_league(league: &League, path: &Path) -> Result<usize> {
    let rows = flatten_league(league)?;
    write_roster_workbook(path, &rows)?;
    Ok(rows.len())
}
