use fairway_core::leaderboard::EntryDetails;

use super::Standing;
use crate::normalize::PlayerRound;

/// Render a score relative to par: "E", "+3", "-2".
pub fn format_vs_par(diff: i32) -> String {
    match diff {
        0 => "E".to_string(),
        d if d > 0 => format!("+{d}"),
        d => d.to_string(),
    }
}

/// Net total over played holes; fewest strokes wins.
pub fn evaluate(players: &[PlayerRound]) -> Vec<Standing> {
    players
        .iter()
        .map(|player| {
            let mut holes_played = 0;
            let mut gross_score = 0;
            let mut net_score = 0;
            let mut total_par = 0;
            for hole in player.played() {
                holes_played += 1;
                gross_score += hole.strokes;
                net_score += hole.net();
                total_par += u32::from(hole.par);
            }

            Standing {
                score: f64::from(net_score),
                details: EntryDetails::StrokePlay {
                    holes_played,
                    net_score,
                    total_par,
                    score_vs_par: format_vs_par(net_score - total_par as i32),
                    gross_score,
                },
            }
        })
        .collect()
}
