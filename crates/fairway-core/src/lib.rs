pub mod config;
pub mod error;
pub mod handicap;
pub mod hole;
pub mod leaderboard;
pub mod method;
pub mod scorecard;

pub use error::{ScoringError, ScoringResult};
pub use method::{ScoringMethod, SortDirection};

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::hole::{HoleResult, HoleSpec};
    use crate::scorecard::Scorecard;

    /// Game id shared by every card the helpers build.
    pub const TEST_GAME_ID: &str = "game-1";

    /// Par per hole for a standard par-72 layout (36 out, 36 in).
    pub const PAR_72: [u8; 18] = [4, 4, 3, 5, 4, 4, 3, 4, 5, 4, 4, 3, 5, 4, 4, 3, 4, 5];
    /// Stroke indexes: odd on the front nine, even on the back.
    pub const STROKE_INDEX_72: [u8; 18] = [
        7, 11, 15, 1, 3, 17, 13, 5, 9, 8, 12, 16, 2, 4, 18, 14, 6, 10,
    ];

    /// The 18 holes of a par-72 course.
    pub fn par_72_holes() -> Vec<HoleSpec> {
        (0..18)
            .map(|i| HoleSpec::new(i as u8 + 1, PAR_72[i], STROKE_INDEX_72[i]))
            .collect()
    }

    /// `n` par-4 holes whose stroke index equals the hole number.
    pub fn flat_holes(n: u8) -> Vec<HoleSpec> {
        (1..=n).map(|i| HoleSpec::new(i, 4, i)).collect()
    }

    /// Card for `user_id` on `holes`. `strokes[i]` is the score on `holes[i]`;
    /// holes past the end of `strokes` are left unplayed. Putts are 2 per
    /// played hole.
    pub fn make_scorecard(user_id: &str, holes: &[HoleSpec], strokes: &[u32]) -> Scorecard {
        let results = holes
            .iter()
            .enumerate()
            .map(|(i, &spec)| match strokes.get(i) {
                Some(&s) if s > 0 => HoleResult::new(spec, s, 2),
                _ => HoleResult::unplayed(spec),
            })
            .collect();
        Scorecard::new(TEST_GAME_ID, user_id, format!("Player {user_id}"), results)
    }

    /// Same as [`make_scorecard`] with a playing handicap set.
    pub fn make_handicap_scorecard(
        user_id: &str,
        holes: &[HoleSpec],
        strokes: &[u32],
        playing_handicap: i32,
    ) -> Scorecard {
        make_scorecard(user_id, holes, strokes).with_handicaps(playing_handicap, playing_handicap)
    }
}
