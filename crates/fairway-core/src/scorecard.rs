use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{ScoringError, ScoringResult};
use crate::hole::{HoleResult, MAX_STROKES_PER_HOLE};

/// One player's card for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scorecard {
    pub game_id: String,
    pub user_id: String,
    pub player_name: String,
    pub holes: Vec<HoleResult>,
    #[serde(default)]
    pub total_strokes: u32,
    #[serde(default)]
    pub total_putts: u32,
    #[serde(default)]
    pub course_handicap: i32,
    #[serde(default)]
    pub playing_handicap: i32,
}

impl Scorecard {
    /// Build a card with totals derived from `holes`.
    pub fn new(
        game_id: impl Into<String>,
        user_id: impl Into<String>,
        player_name: impl Into<String>,
        holes: Vec<HoleResult>,
    ) -> Self {
        let mut card = Self {
            game_id: game_id.into(),
            user_id: user_id.into(),
            player_name: player_name.into(),
            holes,
            total_strokes: 0,
            total_putts: 0,
            course_handicap: 0,
            playing_handicap: 0,
        };
        card.recompute_totals();
        card
    }

    pub fn with_handicaps(mut self, course_handicap: i32, playing_handicap: i32) -> Self {
        self.course_handicap = course_handicap;
        self.playing_handicap = playing_handicap;
        self
    }

    pub fn recompute_totals(&mut self) {
        self.total_strokes = self.played_strokes();
        self.total_putts = self
            .played_holes()
            .map(|h| h.putts)
            .fold(0, u32::saturating_add);
    }

    /// Cards exported without totals carry zeros; fill them from the holes.
    /// Totals that were supplied are left alone for [`validate`](Self::validate)
    /// to check.
    pub fn fill_missing_totals(&mut self) {
        if self.total_strokes == 0 && self.total_putts == 0 {
            self.recompute_totals();
        }
    }

    fn played_strokes(&self) -> u32 {
        self.played_holes()
            .map(|h| h.strokes)
            .fold(0, u32::saturating_add)
    }

    /// Holes with a score entered.
    pub fn played_holes(&self) -> impl Iterator<Item = &HoleResult> {
        self.holes.iter().filter(|h| h.is_played())
    }

    pub fn hole(&self, hole_number: u8) -> Option<&HoleResult> {
        self.holes.iter().find(|h| h.hole_number == hole_number)
    }

    /// Check the per-hole invariants the engine relies on.
    pub fn validate_holes(&self) -> ScoringResult<()> {
        let mut seen = BTreeSet::new();
        for hole in &self.holes {
            if hole.hole_number == 0 {
                return Err(ScoringError::invalid(format!(
                    "{}: hole numbers start at 1",
                    self.user_id
                )));
            }
            if hole.stroke_index == 0 {
                return Err(ScoringError::invalid(format!(
                    "{}: hole {} has stroke index 0",
                    self.user_id, hole.hole_number
                )));
            }
            if hole.strokes > MAX_STROKES_PER_HOLE || hole.putts > MAX_STROKES_PER_HOLE {
                return Err(ScoringError::invalid(format!(
                    "{}: hole {} records more than {MAX_STROKES_PER_HOLE} strokes or putts",
                    self.user_id, hole.hole_number
                )));
            }
            if !seen.insert(hole.hole_number) {
                return Err(ScoringError::invalid(format!(
                    "{}: hole {} recorded more than once",
                    self.user_id, hole.hole_number
                )));
            }
        }
        Ok(())
    }

    /// Full validation, including that the stored totals match the holes.
    pub fn validate(&self) -> ScoringResult<()> {
        self.validate_holes()?;
        let played = self.played_strokes();
        if played != self.total_strokes {
            return Err(ScoringError::invalid(format!(
                "{}: total_strokes is {} but played holes sum to {played}",
                self.user_id, self.total_strokes
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hole::HoleSpec;

    fn holes() -> Vec<HoleResult> {
        vec![
            HoleResult::new(HoleSpec::new(1, 4, 3), 5, 2),
            HoleResult::new(HoleSpec::new(2, 3, 7), 3, 1),
            HoleResult::unplayed(HoleSpec::new(3, 5, 1)),
        ]
    }

    #[test]
    fn totals_only_count_played_holes() {
        let card = Scorecard::new("g1", "u1", "Ada", holes());
        assert_eq!(card.total_strokes, 8);
        assert_eq!(card.total_putts, 3);
        assert_eq!(card.played_holes().count(), 2);
        assert!(card.validate().is_ok());
    }

    #[test]
    fn duplicate_hole_is_invalid() {
        let mut h = holes();
        h.push(HoleResult::new(HoleSpec::new(2, 3, 7), 4, 2));
        let card = Scorecard::new("g1", "u1", "Ada", h);
        assert!(matches!(
            card.validate_holes(),
            Err(ScoringError::InvalidInput(msg)) if msg.contains("hole 2")
        ));
    }

    #[test]
    fn stale_total_is_invalid() {
        let mut card = Scorecard::new("g1", "u1", "Ada", holes());
        card.total_strokes = 99;
        assert!(card.validate_holes().is_ok());
        assert!(matches!(card.validate(), Err(ScoringError::InvalidInput(_))));
    }

    #[test]
    fn zero_hole_number_is_invalid() {
        let card = Scorecard::new(
            "g1",
            "u1",
            "Ada",
            vec![HoleResult::new(HoleSpec::new(0, 4, 1), 4, 2)],
        );
        assert!(card.validate_holes().is_err());
    }

    #[test]
    fn stroke_count_over_cap_is_invalid() {
        let card = Scorecard::new(
            "g1",
            "u1",
            "Ada",
            vec![
                HoleResult::new(HoleSpec::new(1, 4, 1), u32::MAX, 2),
                HoleResult::new(HoleSpec::new(2, 4, 2), u32::MAX, 2),
            ],
        );
        // Totals saturate instead of overflowing
        assert_eq!(card.total_strokes, u32::MAX);
        assert!(matches!(
            card.validate_holes(),
            Err(ScoringError::InvalidInput(msg)) if msg.contains("hole 1")
        ));

        let at_cap = Scorecard::new(
            "g1",
            "u1",
            "Ada",
            vec![HoleResult::new(HoleSpec::new(1, 4, 1), MAX_STROKES_PER_HOLE, 2)],
        );
        assert!(at_cap.validate().is_ok());
    }

    #[test]
    fn missing_totals_are_filled_from_holes() {
        let mut card = Scorecard::new("g1", "u1", "Ada", holes());
        card.total_strokes = 0;
        card.total_putts = 0;
        card.fill_missing_totals();
        assert_eq!((card.total_strokes, card.total_putts), (8, 3));

        card.total_strokes = 99;
        card.fill_missing_totals();
        assert_eq!(card.total_strokes, 99);
        assert!(card.validate().is_err());
    }

    #[test]
    fn hole_lookup() {
        let card = Scorecard::new("g1", "u1", "Ada", holes());
        assert_eq!(card.hole(2).map(|h| h.strokes), Some(3));
        assert!(card.hole(18).is_none());
    }
}
