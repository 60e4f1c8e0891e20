//! The four scoring formats. Each takes the normalized rounds and returns
//! one [`Standing`] per player, in input order; ranking happens afterwards.

pub mod match_play;
pub mod skins;
pub mod stableford;
pub mod stroke_play;

use fairway_core::ScoringMethod;
use fairway_core::leaderboard::EntryDetails;

use crate::normalize::{PlayerRound, RoundContext};

/// A player's ranking score and its format-specific breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct Standing {
    pub score: f64,
    pub details: EntryDetails,
}

/// Everything a format produces for one round.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatOutcome {
    /// Parallel to the `players` slice passed in.
    pub standings: Vec<Standing>,
    pub carried_skins: Option<u32>,
}

impl FormatOutcome {
    fn standings(standings: Vec<Standing>) -> Self {
        Self {
            standings,
            carried_skins: None,
        }
    }
}

/// Run the format selected by `context.method`.
pub fn evaluate(players: &[PlayerRound], context: &RoundContext) -> FormatOutcome {
    match context.method {
        ScoringMethod::StrokePlay => FormatOutcome::standings(stroke_play::evaluate(players)),
        ScoringMethod::MatchPlay => {
            FormatOutcome::standings(match_play::evaluate(players, context))
        },
        ScoringMethod::Stableford => FormatOutcome::standings(stableford::evaluate(players)),
        ScoringMethod::Skins => skins::evaluate(players, context),
    }
}
