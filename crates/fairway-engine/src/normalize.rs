//! Turns borrowed scorecards into owned, hole-ordered rounds with handicap
//! strokes already resolved, so every format works from the same view.

use std::collections::BTreeSet;

use fairway_core::config::{EngineOptions, MatchAllocation};
use fairway_core::handicap::{HandicapAllocation, match_handicap};
use fairway_core::scorecard::Scorecard;
use fairway_core::{ScoringMethod, ScoringResult};

/// One hole of a player's round with handicap strokes attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetHole {
    pub hole_number: u8,
    pub par: u8,
    pub strokes: u32,
    pub stroke_index: u8,
    pub handicap_strokes: u32,
}

impl NetHole {
    pub fn is_played(&self) -> bool {
        self.strokes > 0
    }

    /// Gross strokes less handicap strokes. Can go below zero on paper
    /// (e.g. a 1 with two strokes received).
    pub fn net(&self) -> i32 {
        self.strokes as i32 - self.handicap_strokes as i32
    }
}

/// A player's card after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRound {
    pub player_id: String,
    pub player_name: String,
    /// Sorted by hole number, one entry per hole.
    pub holes: Vec<NetHole>,
}

impl PlayerRound {
    pub fn hole(&self, hole_number: u8) -> Option<&NetHole> {
        self.holes
            .binary_search_by_key(&hole_number, |h| h.hole_number)
            .ok()
            .map(|i| &self.holes[i])
    }

    pub fn played(&self) -> impl Iterator<Item = &NetHole> {
        self.holes.iter().filter(|h| h.is_played())
    }

    fn has_played(&self, hole_number: u8) -> bool {
        self.hole(hole_number).is_some_and(NetHole::is_played)
    }
}

/// Facts about the round shared by every player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundContext {
    pub method: ScoringMethod,
    /// Every hole number appearing on any card, ascending.
    pub hole_numbers: Vec<u8>,
    /// Configured round length, or the highest hole number seen if larger.
    pub round_length: u32,
}

impl RoundContext {
    pub fn holes_in_round(&self) -> u32 {
        self.round_length
    }

    /// Holes that every player has a score on, ascending. Head-to-head
    /// formats only compare these.
    pub fn holes_played_by_all(&self, players: &[PlayerRound]) -> Vec<u8> {
        self.hole_numbers
            .iter()
            .copied()
            .filter(|&n| players.iter().all(|p| p.has_played(n)))
            .collect()
    }
}

/// Validate and copy `scorecards`, resolving each player's allowance.
///
/// Without handicaps every hole gets 0 strokes. With handicaps a hole's
/// `player_match_par` wins over the allocation from the playing handicap.
pub fn normalize(
    scorecards: &[Scorecard],
    method: ScoringMethod,
    include_handicap: bool,
    options: &EngineOptions,
) -> ScoringResult<(Vec<PlayerRound>, RoundContext)> {
    for card in scorecards {
        card.validate_holes()?;
    }

    let playing: Vec<i32> = scorecards.iter().map(|c| c.playing_handicap).collect();
    let relative =
        method == ScoringMethod::MatchPlay && options.match_allocation == MatchAllocation::Relative;

    let mut hole_numbers = BTreeSet::new();
    let mut players = Vec::with_capacity(scorecards.len());

    for (index, card) in scorecards.iter().enumerate() {
        let specs = card.holes.iter().map(|h| h.spec());
        let allocation = if !include_handicap {
            HandicapAllocation::scratch(specs)
        } else {
            let allowance = if relative {
                match_handicap(&playing, index)?
            } else {
                card.playing_handicap
            };
            let mut allocation = HandicapAllocation::for_holes(specs, allowance);
            for hole in &card.holes {
                if let Some(strokes) = hole.precomputed_strokes() {
                    allocation.set_strokes(hole.hole_number, strokes);
                }
            }
            allocation
        };

        let mut holes: Vec<NetHole> = card
            .holes
            .iter()
            .map(|h| NetHole {
                hole_number: h.hole_number,
                par: h.par,
                strokes: h.strokes,
                stroke_index: h.stroke_index,
                handicap_strokes: allocation.strokes_for(h.hole_number),
            })
            .collect();
        holes.sort_by_key(|h| h.hole_number);
        hole_numbers.extend(holes.iter().map(|h| h.hole_number));

        players.push(PlayerRound {
            player_id: card.user_id.clone(),
            player_name: card.player_name.clone(),
            holes,
        });
    }

    let highest = hole_numbers.last().copied().unwrap_or(0);
    let context = RoundContext {
        method,
        hole_numbers: hole_numbers.into_iter().collect(),
        round_length: u32::from(options.holes_per_round.max(highest)),
    };
    Ok((players, context))
}
