//! Hole-by-hole match play.
//!
//! Two players is the classic head-to-head match. With more players every
//! player plays a match against each of the others (round robin) and their
//! hole tallies are summed across those matches.

use std::cmp::Ordering;
use std::fmt;

use fairway_core::leaderboard::EntryDetails;

use super::Standing;
use crate::normalize::{PlayerRound, RoundContext};

/// Where a player stands in their match(es).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    AllSquare,
    Up(u32),
    Down(u32),
    /// Decided: more holes up than could still be played.
    Won { up: u32, remaining: u32 },
    Lost { down: u32, remaining: u32 },
}

impl MatchStatus {
    /// Live status for a hole margin (won minus lost).
    pub fn live(margin: i32) -> Self {
        match margin.cmp(&0) {
            Ordering::Equal => Self::AllSquare,
            Ordering::Greater => Self::Up(margin.unsigned_abs()),
            Ordering::Less => Self::Down(margin.unsigned_abs()),
        }
    }

    /// The decided status if `margin` can no longer be overturned in
    /// `remaining` holes.
    pub fn decided(margin: i32, remaining: u32) -> Option<Self> {
        if margin.unsigned_abs() <= remaining {
            return None;
        }
        let holes = margin.unsigned_abs();
        Some(if margin > 0 {
            Self::Won {
                up: holes,
                remaining,
            }
        } else {
            Self::Lost {
                down: holes,
                remaining,
            }
        })
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::AllSquare => f.write_str("AS"),
            Self::Up(n) => write!(f, "{n} UP"),
            Self::Down(n) => write!(f, "{n} DOWN"),
            Self::Won { up, remaining: 0 } => write!(f, "won {up} UP"),
            Self::Won { up, remaining } => write!(f, "won {up}&{remaining}"),
            Self::Lost { down, remaining: 0 } => write!(f, "lost {down} DOWN"),
            Self::Lost { down, remaining } => write!(f, "lost {down}&{remaining}"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    won: u32,
    lost: u32,
    tied: u32,
    decided: Option<MatchStatus>,
}

impl Tally {
    fn margin(&self) -> i32 {
        self.won as i32 - self.lost as i32
    }

    fn points(&self) -> f64 {
        f64::from(self.won) + f64::from(self.tied) * 0.5
    }
}

/// Compare net scores on every hole all players have completed.
///
/// Tallies keep counting after a match is decided so points reflect every
/// compared hole; the status freezes at the hole where it was decided.
pub fn evaluate(players: &[PlayerRound], context: &RoundContext) -> Vec<Standing> {
    let opponents = players.len().saturating_sub(1) as u32;
    let compared = context.holes_played_by_all(players);
    let mut tallies = vec![Tally::default(); players.len()];

    for (done, &hole_number) in compared.iter().enumerate() {
        let Some(nets) = players
            .iter()
            .map(|p| p.hole(hole_number).map(|h| h.net()))
            .collect::<Option<Vec<i32>>>()
        else {
            continue;
        };

        for (i, tally) in tallies.iter_mut().enumerate() {
            for (j, &other) in nets.iter().enumerate() {
                if i == j {
                    continue;
                }
                match nets[i].cmp(&other) {
                    Ordering::Less => tally.won += 1,
                    Ordering::Greater => tally.lost += 1,
                    Ordering::Equal => tally.tied += 1,
                }
            }
        }

        let holes_left = context.holes_in_round().saturating_sub(done as u32 + 1);
        for tally in tallies.iter_mut().filter(|t| t.decided.is_none()) {
            tally.decided = MatchStatus::decided(tally.margin(), holes_left * opponents);
        }
    }

    tallies
        .iter()
        .map(|tally| {
            let status = tally
                .decided
                .unwrap_or_else(|| MatchStatus::live(tally.margin()));
            Standing {
                score: tally.points(),
                details: EntryDetails::MatchPlay {
                    holes_won: tally.won,
                    holes_lost: tally.lost,
                    holes_tied: tally.tied,
                    total_points: tally.points(),
                    match_status: status.to_string(),
                },
            }
        })
        .collect()
}
