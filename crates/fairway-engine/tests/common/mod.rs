#![allow(dead_code)]

use fairway_core::hole::{HoleResult, HoleSpec};
use fairway_core::leaderboard::{EntryDetails, LeaderboardResult};
use fairway_core::scorecard::Scorecard;
use fairway_core::test_helpers::{TEST_GAME_ID, par_72_holes};

/// A full 18-hole card at par except for `adjustments` (hole number, delta).
pub fn par_72_card(user_id: &str, adjustments: &[(u8, i32)], playing_handicap: i32) -> Scorecard {
    let holes = par_72_holes()
        .into_iter()
        .map(|spec| {
            let delta = adjustments
                .iter()
                .filter(|(hole, _)| *hole == spec.hole_number)
                .map(|(_, d)| d)
                .sum::<i32>();
            let strokes = (i32::from(spec.par) + delta).max(1) as u32;
            HoleResult::new(spec, strokes, 2)
        })
        .collect();
    Scorecard::new(TEST_GAME_ID, user_id, user_id.to_uppercase(), holes)
        .with_handicaps(playing_handicap, playing_handicap)
}

/// Single-hole card.
pub fn one_hole_card(user_id: &str, spec: HoleSpec, strokes: u32, playing_handicap: i32) -> Scorecard {
    Scorecard::new(
        TEST_GAME_ID,
        user_id,
        user_id.to_uppercase(),
        vec![HoleResult::new(spec, strokes, 2)],
    )
    .with_handicaps(playing_handicap, playing_handicap)
}

/// `(player_id, position)` in leaderboard order.
pub fn order(result: &LeaderboardResult) -> Vec<(&str, u32)> {
    result
        .entries
        .iter()
        .map(|e| (e.player_id.as_str(), e.position))
        .collect()
}

pub fn details<'a>(result: &'a LeaderboardResult, player_id: &str) -> &'a EntryDetails {
    &result
        .entry_for(player_id)
        .unwrap_or_else(|| panic!("no entry for {player_id}"))
        .details
}
