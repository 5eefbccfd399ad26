//! ESPN numeric id tables: lineup slots, default positions, pro teams.

/// Lineup slot name for an ESPN `lineupSlotId` / `eligibleSlots` id.
///
/// Unknown ids map to an empty string.
pub fn lineup_slot_name(slot_id: u16) -> &'static str {
    match slot_id {
        0 => "QB",
        1 => "TQB",
        2 => "RB",
        3 => "RB/WR",
        4 => "WR",
        5 => "WR/TE",
        6 => "TE",
        7 => "OP",
        8 => "DT",
        9 => "DE",
        10 => "LB",
        11 => "DL",
        12 => "CB",
        13 => "S",
        14 => "DB",
        15 => "DP",
        16 => "D/ST",
        17 => "K",
        18 => "P",
        19 => "HC",
        20 => "BE",
        21 => "IR",
        23 => "RB/WR/TE",
        24 => "ER",
        25 => "Rookie",
        _ => "",
    }
}

/// Player position for an ESPN `defaultPositionId`.
pub fn default_position_name(position_id: i16) -> Option<&'static str> {
    match position_id {
        1 => Some("QB"),
        2 => Some("RB"),
        3 => Some("WR"),
        4 => Some("TE"),
        5 => Some("K"),
        7 => Some("P"),
        9 => Some("DT"),
        10 => Some("DE"),
        11 => Some("LB"),
        12 => Some("CB"),
        13 => Some("S"),
        14 => Some("HC"),
        16 => Some("D/ST"),
        _ => None,
    }
}

/// Position derived from eligible slots: the first one that is a real
/// position rather than a flex/combo/bench slot.
pub fn position_from_eligible_slots(slots: &[u16]) -> Option<&'static str> {
    slots
        .iter()
        .map(|&id| lineup_slot_name(id))
        .find(|name| {
            !name.is_empty()
                && (*name == "D/ST" || !name.contains('/'))
                && !matches!(*name, "OP" | "BE" | "IR" | "ER" | "Rookie" | "TQB")
        })
}

/// NFL team abbreviation for an ESPN `proTeamId`. Free agents and unknown ids map to `"None"`.
pub fn pro_team_abbrev(pro_team_id: u16) -> &'static str {
    match pro_team_id {
        1 => "ATL",
        2 => "BUF",
        3 => "CHI",
        4 => "CIN",
        5 => "CLE",
        6 => "DAL",
        7 => "DEN",
        8 => "DET",
        9 => "GB",
        10 => "TEN",
        11 => "IND",
        12 => "KC",
        13 => "LV",
        14 => "LAR",
        15 => "MIA",
        16 => "MIN",
        17 => "NE",
        18 => "NO",
        19 => "NYG",
        20 => "NYJ",
        21 => "PHI",
        22 => "ARI",
        23 => "PIT",
        24 => "LAC",
        25 => "SF",
        26 => "SEA",
        27 => "TB",
        28 => "WSH",
        29 => "CAR",
        30 => "JAX",
        33 => "BAL",
        34 => "HOU",
        _ => "None",
    }
}
