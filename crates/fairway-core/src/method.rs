use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScoringError;

/// The competitive format a leaderboard is scored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ScoringMethod {
    StrokePlay,
    MatchPlay,
    Stableford,
    Skins,
}

/// Which end of the score range wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Lower score is better.
    Asc,
    /// Higher score is better.
    Desc,
}

impl ScoringMethod {
    pub const ALL: [ScoringMethod; 4] = [
        ScoringMethod::StrokePlay,
        ScoringMethod::MatchPlay,
        ScoringMethod::Stableford,
        ScoringMethod::Skins,
    ];

    /// Wire name, as used in scorecard exports and config files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StrokePlay => "stroke_play",
            Self::MatchPlay => "match_play",
            Self::Stableford => "stableford",
            Self::Skins => "skins",
        }
    }

    /// Stroke play ranks fewest strokes first; every points format ranks
    /// the highest total first.
    pub const fn sort_direction(self) -> SortDirection {
        match self {
            Self::StrokePlay => SortDirection::Asc,
            Self::MatchPlay | Self::Stableford | Self::Skins => SortDirection::Desc,
        }
    }
}

impl fmt::Display for ScoringMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoringMethod {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| ScoringError::UnsupportedFormat(s.to_string()))
    }
}

impl TryFrom<String> for ScoringMethod {
    type Error = ScoringError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}
