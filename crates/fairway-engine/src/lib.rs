pub mod formats;
pub mod normalize;
pub mod ranking;

use fairway_core::leaderboard::{LeaderboardEntry, LeaderboardMetadata, LeaderboardResult};
use fairway_core::scorecard::Scorecard;
use fairway_core::{ScoringError, ScoringMethod, ScoringResult};

pub use fairway_core::config::{EngineOptions, MatchAllocation};

/// Turns scorecards into ranked leaderboards.
///
/// Holds only options; every call works on its own copy of the input and
/// leaves nothing behind, so one engine can serve any number of games.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine {
    options: EngineOptions,
}

impl ScoringEngine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Score `scorecards` under `method` and rank the players.
    ///
    /// With `include_handicap` false all scoring is gross.
    pub fn leaderboard(
        &self,
        scorecards: &[Scorecard],
        method: ScoringMethod,
        include_handicap: bool,
    ) -> ScoringResult<LeaderboardResult> {
        if scorecards.is_empty() {
            return Err(ScoringError::EmptyField);
        }

        let (players, context) =
            normalize::normalize(scorecards, method, include_handicap, &self.options)?;
        let outcome = formats::evaluate(&players, &context);

        let direction = method.sort_direction();
        let scores: Vec<f64> = outcome.standings.iter().map(|s| s.score).collect();
        let entries: Vec<LeaderboardEntry> = ranking::rank(&scores, direction)
            .into_iter()
            .map(|ranked| {
                let player = &players[ranked.index];
                let standing = &outcome.standings[ranked.index];
                LeaderboardEntry {
                    player_id: player.player_id.clone(),
                    player_name: player.player_name.clone(),
                    position: ranked.position,
                    score: standing.score,
                    details: standing.details.clone(),
                }
            })
            .collect();

        tracing::debug!(
            %method,
            players = entries.len(),
            holes = context.holes_in_round(),
            include_handicap,
            "leaderboard computed"
        );

        Ok(LeaderboardResult {
            entries,
            metadata: LeaderboardMetadata {
                sort_direction: direction,
                method,
                include_handicap,
                carried_skins: outcome.carried_skins,
            },
        })
    }

    /// Same as [`leaderboard`](Self::leaderboard) with the method given by
    /// its wire name ("stroke_play", "match_play", "stableford", "skins").
    pub fn leaderboard_by_name(
        &self,
        scorecards: &[Scorecard],
        method: &str,
        include_handicap: bool,
    ) -> ScoringResult<LeaderboardResult> {
        if scorecards.is_empty() {
            return Err(ScoringError::EmptyField);
        }
        self.leaderboard(scorecards, method.parse()?, include_handicap)
    }
}

/// Score with default engine options.
pub fn calculate_leaderboard(
    scorecards: &[Scorecard],
    method: ScoringMethod,
    include_handicap: bool,
) -> ScoringResult<LeaderboardResult> {
    ScoringEngine::default().leaderboard(scorecards, method, include_handicap)
}
