use fairway_core::leaderboard::EntryDetails;

use super::{FormatOutcome, Standing};
use crate::normalize::{PlayerRound, RoundContext};

/// Award one skin per hole to the single lowest net score.
///
/// A tied low score carries the pot to the next hole. Holes some player has
/// not finished are skipped without touching the pot. Whatever is still in
/// the pot at the end is reported as `carried_skins`.
pub fn evaluate(players: &[PlayerRound], context: &RoundContext) -> FormatOutcome {
    let mut holes_won: Vec<Vec<u8>> = vec![Vec::new(); players.len()];
    let mut skins = vec![0u32; players.len()];
    let mut pot = 0;

    for hole_number in context.holes_played_by_all(players) {
        let Some(nets) = players
            .iter()
            .map(|p| p.hole(hole_number).map(|h| h.net()))
            .collect::<Option<Vec<i32>>>()
        else {
            continue;
        };
        let Some(&low) = nets.iter().min() else {
            continue;
        };

        pot += 1;
        let mut lowest = nets.iter().enumerate().filter(|&(_, &net)| net == low);
        if let (Some((winner, _)), None) = (lowest.next(), lowest.next()) {
            skins[winner] += pot;
            holes_won[winner].push(hole_number);
            pot = 0;
        }
    }

    let standings = holes_won
        .into_iter()
        .zip(skins)
        .map(|(holes_won, skins_won)| Standing {
            score: f64::from(skins_won),
            details: EntryDetails::Skins {
                holes_won,
                skins_won,
            },
        })
        .collect();

    FormatOutcome {
        standings,
        carried_skins: Some(pot),
    }
}
