//! Handicap rules: course, playing and match handicaps, and how an
//! allowance is spread across holes by stroke index.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::AllowanceTable;
use crate::error::{ScoringError, ScoringResult};
use crate::hole::HoleSpec;
use crate::method::ScoringMethod;

/// Holes in a full round; allowances wrap around the stroke index every 18.
pub const HOLES_PER_ROUND: i32 = 18;
/// Slope rating of a course of standard difficulty.
pub const STANDARD_SLOPE: f64 = 113.0;

/// Round to the nearest integer, halves rounding toward positive infinity.
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Course Handicap for a tee: `index * slope / 113 + (course_rating - par)`.
pub fn course_handicap(
    handicap_index: f64,
    slope: f64,
    course_rating: f64,
    par: i32,
) -> ScoringResult<i32> {
    if !handicap_index.is_finite() {
        return Err(ScoringError::invalid(format!(
            "handicap index must be finite, got {handicap_index}"
        )));
    }
    if !slope.is_finite() || slope <= 0.0 {
        return Err(ScoringError::invalid(format!(
            "slope must be positive, got {slope}"
        )));
    }
    if !course_rating.is_finite() || course_rating <= 0.0 {
        return Err(ScoringError::invalid(format!(
            "course rating must be positive, got {course_rating}"
        )));
    }

    let raw = handicap_index * slope / STANDARD_SLOPE + (course_rating - f64::from(par));
    Ok(round_half_up(raw))
}

/// Playing Handicap: the course handicap scaled by the format's allowance.
///
/// Fails with `UnsupportedFormat` when the table declares no percentage for
/// `method`; there is no fallback allowance.
pub fn playing_handicap(
    course_handicap: i32,
    method: ScoringMethod,
    allowances: &AllowanceTable,
) -> ScoringResult<i32> {
    let percent = allowances.percent(method).ok_or_else(|| {
        ScoringError::UnsupportedFormat(format!("no handicap allowance declared for {method}"))
    })?;
    Ok(round_half_up(
        f64::from(course_handicap) * f64::from(percent) / 100.0,
    ))
}

/// Strokes the player at `index` receives from the lowest handicap in the
/// field. The lowest player(s) get 0.
pub fn match_handicap(all_playing_handicaps: &[i32], index: usize) -> ScoringResult<i32> {
    let lowest = all_playing_handicaps
        .iter()
        .copied()
        .min()
        .ok_or(ScoringError::EmptyField)?;
    let own = all_playing_handicaps.get(index).copied().ok_or_else(|| {
        ScoringError::invalid(format!(
            "player index {index} out of range for {} handicaps",
            all_playing_handicaps.len()
        ))
    })?;
    Ok(own - lowest)
}

/// Extra strokes a hole receives under `allowance`.
///
/// Every hole gets `allowance / 18`; the `allowance % 18` hardest holes
/// (lowest stroke index) get one more. Allowances at or below zero give
/// nothing.
pub fn strokes_on_hole(stroke_index: u8, allowance: i32) -> u32 {
    let allowance = allowance.max(0);
    let full_rounds = allowance / HOLES_PER_ROUND;
    let remainder = allowance % HOLES_PER_ROUND;
    let extra = if i32::from(stroke_index) <= remainder {
        1
    } else {
        0
    };
    (full_rounds + extra) as u32
}

/// Per-hole handicap strokes for one player, derived once per round from a
/// single allowance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandicapAllocation {
    allowance: i32,
    strokes: BTreeMap<u8, u32>,
}

impl HandicapAllocation {
    pub fn for_holes(holes: impl IntoIterator<Item = HoleSpec>, allowance: i32) -> Self {
        let strokes = holes
            .into_iter()
            .map(|hole| {
                (
                    hole.hole_number,
                    strokes_on_hole(hole.stroke_index, allowance),
                )
            })
            .collect();
        Self { allowance, strokes }
    }

    /// Allocation for scratch (gross) scoring: every hole gets 0.
    pub fn scratch(holes: impl IntoIterator<Item = HoleSpec>) -> Self {
        Self::for_holes(holes, 0)
    }

    pub fn allowance(&self) -> i32 {
        self.allowance
    }

    /// Strokes on `hole_number`; holes outside the allocation get none.
    pub fn strokes_for(&self, hole_number: u8) -> u32 {
        self.strokes.get(&hole_number).copied().unwrap_or(0)
    }

    /// Replace the computed strokes on one hole.
    pub fn set_strokes(&mut self, hole_number: u8, strokes: u32) {
        self.strokes.insert(hole_number, strokes);
    }

    pub fn total(&self) -> u32 {
        self.strokes.values().sum()
    }

    /// `(hole_number, strokes)` pairs in hole order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.strokes.iter().map(|(&hole, &strokes)| (hole, strokes))
    }
}
