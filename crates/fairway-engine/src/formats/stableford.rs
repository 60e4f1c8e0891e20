use fairway_core::leaderboard::EntryDetails;

use super::Standing;
use crate::normalize::PlayerRound;

/// Points for a net score relative to par.
///
/// Net eagle or better = 4, birdie = 3, par = 2, bogey = 1, worse = 0.
pub fn points_for(net_vs_par: i32) -> u32 {
    match net_vs_par {
        ..=-2 => 4,
        -1 => 3,
        0 => 2,
        1 => 1,
        _ => 0,
    }
}

pub fn evaluate(players: &[PlayerRound]) -> Vec<Standing> {
    players
        .iter()
        .map(|player| {
            let mut holes_played = 0;
            let mut gross_score = 0;
            let mut total_points = 0;
            for hole in player.played() {
                holes_played += 1;
                gross_score += hole.strokes;
                total_points += points_for(hole.net() - i32::from(hole.par));
            }

            Standing {
                score: f64::from(total_points),
                details: EntryDetails::Stableford {
                    holes_played,
                    gross_score,
                    total_points,
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::NetHole;

    #[test]
    fn points_table() {
        assert_eq!(points_for(-4), 4);
        assert_eq!(points_for(-2), 4);
        assert_eq!(points_for(-1), 3);
        assert_eq!(points_for(0), 2);
        assert_eq!(points_for(1), 1);
        assert_eq!(points_for(2), 0);
        assert_eq!(points_for(7), 0);
    }

    #[test]
    fn handicap_strokes_lift_points() {
        let hole = |hole_number: u8, strokes: u32, handicap_strokes: u32| NetHole {
            hole_number,
            par: 4,
            strokes,
            stroke_index: hole_number,
            handicap_strokes,
        };
        let player = PlayerRound {
            player_id: "a".to_string(),
            player_name: "A".to_string(),
            holes: vec![
                // net 3 on a par 4 -> 3 points
                hole(1, 4, 1),
                // net bogey -> 1
                hole(2, 5, 0),
                // double bogey gross, one stroke -> net bogey -> 1
                hole(3, 6, 1),
                // unplayed
                hole(4, 0, 1),
            ],
        };
        let standings = evaluate(&[player]);
        assert_eq!(standings[0].score, 5.0);
        assert_eq!(
            standings[0].details,
            EntryDetails::Stableford {
                holes_played: 3,
                gross_score: 15,
                total_points: 5,
            }
        );
    }
}
