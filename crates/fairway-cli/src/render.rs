use fairway_core::SortDirection;
use fairway_core::handicap::HandicapAllocation;
use fairway_core::leaderboard::{EntryDetails, LeaderboardResult};

/// Plain-text leaderboard: position (with "T" for ties), name, score and a
/// one-line summary of the format details.
pub fn leaderboard_table(result: &LeaderboardResult) -> String {
    let name_width = result
        .entries
        .iter()
        .map(|e| e.player_name.len())
        .max()
        .unwrap_or(0)
        .max("Player".len());

    let scoring = if result.metadata.include_handicap {
        "net"
    } else {
        "gross"
    };
    let winner = match result.metadata.sort_direction {
        SortDirection::Asc => "low wins",
        SortDirection::Desc => "high wins",
    };

    let mut lines = vec![
        format!("{} ({scoring}, {winner})", result.metadata.method),
        format!("{:<5} {:<name_width$} {:>6}  Details", "Pos", "Player", "Score"),
    ];
    lines.extend(result.entries.iter().map(|entry| {
        let pos = if result.is_tied(entry.position) {
            format!("T{}", entry.position)
        } else {
            entry.position.to_string()
        };
        format!(
            "{:<5} {:<name_width$} {:>6}  {}",
            pos,
            entry.player_name,
            format_score(entry.score),
            summary(&entry.details)
        )
    }));

    if let Some(carried) = result.metadata.carried_skins.filter(|&n| n > 0) {
        lines.push(format!("{carried} skin(s) carried over"));
    }
    to_block(lines)
}

/// Strokes per hole for an allowance, one row per hole.
pub fn allocation_table(allocation: &HandicapAllocation) -> String {
    let mut lines = vec![format!("Allowance {}", allocation.allowance())];
    lines.extend(
        allocation
            .iter()
            .map(|(hole, strokes)| format!("Hole {hole:>2}: {strokes}")),
    );
    to_block(lines)
}

/// Newline-terminated block, ready for `print!`.
fn to_block(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        format!("{score:.1}")
    }
}

fn summary(details: &EntryDetails) -> String {
    match details {
        EntryDetails::StrokePlay {
            holes_played,
            score_vs_par,
            gross_score,
            ..
        } => format!("{score_vs_par} thru {holes_played} (gross {gross_score})"),
        EntryDetails::MatchPlay {
            holes_won,
            holes_lost,
            holes_tied,
            match_status,
            ..
        } => format!("{match_status} (W{holes_won} L{holes_lost} H{holes_tied})"),
        EntryDetails::Stableford {
            holes_played,
            gross_score,
            ..
        } => format!("thru {holes_played} (gross {gross_score})"),
        EntryDetails::Skins { holes_won, .. } if holes_won.is_empty() => "-".to_string(),
        EntryDetails::Skins { holes_won, .. } => {
            let holes: Vec<String> = holes_won.iter().map(u8::to_string).collect();
            format!("holes {}", holes.join(", "))
        },
    }
}
