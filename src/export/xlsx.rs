//! Spreadsheet output: one workbook per league with a single "Rosters" sheet.

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::{
    fs,
    path::{Path, PathBuf},
};

use super::rows::{TeamRosterEntry, HEADERS};
use crate::Result;

pub const SHEET_NAME: &str = "Rosters";

/// Render the header and rows into an in-memory `.xlsx`.
pub fn render_workbook(rows: &[TeamRosterEntry]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let bold = Format::new().set_bold();
    for (col, title) in HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, &bold)?;
    }

    for (i, row) in rows.iter().enumerate() {
        write_row(sheet, i as u32 + 1, row)?;
    }

    sheet.autofit();
    Ok(workbook.save_to_buffer()?)
}

fn write_row(sheet: &mut Worksheet, r: u32, row: &TeamRosterEntry) -> Result<()> {
    sheet.write_string(r, 0, &row.team_name)?;
    sheet.write_string(r, 1, &row.player_name)?;
    sheet.write_string(r, 2, &row.position)?;
    sheet.write_string(r, 3, &row.pro_team)?;
    sheet.write_string(r, 4, &row.roster_slot)?;
    if let Some(status) = &row.injury_status {
        sheet.write_string(r, 5, status)?;
    }
    sheet.write_number(r, 6, row.percent_started)?;
    if let Some(rank) = row.pos_rank {
        sheet.write_number(r, 7, rank as f64)?;
    }
    sheet.write_string(r, 8, &row.owner_name)?;
    Ok(())
}

/// Write the workbook to `path`, replacing any existing file.
///
/// The bytes land in a sibling temp file first and are renamed into place, so
/// a failed write leaves the previous file untouched.
pub fn write_roster_workbook(path: &Path, rows: &[TeamRosterEntry]) -> Result<()> {
    let bytes = render_workbook(rows)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp = temp_path(path);
    fs::write(&tmp, &bytes)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.tmp"))
}
