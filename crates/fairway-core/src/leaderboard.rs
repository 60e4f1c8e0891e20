use serde::{Deserialize, Serialize};

use crate::method::{ScoringMethod, SortDirection};

/// Format-specific breakdown attached to each leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum EntryDetails {
    StrokePlay {
        holes_played: u32,
        net_score: i32,
        total_par: u32,
        /// "E" at level par, otherwise signed ("-2", "+3").
        score_vs_par: String,
        gross_score: u32,
    },
    MatchPlay {
        holes_won: u32,
        holes_lost: u32,
        holes_tied: u32,
        total_points: f64,
        /// "AS", "2 UP", "1 DOWN", "won 3&2", ...
        match_status: String,
    },
    Stableford {
        holes_played: u32,
        gross_score: u32,
        total_points: u32,
    },
    Skins {
        /// Hole numbers this player won a skin on, in hole order.
        holes_won: Vec<u8>,
        skins_won: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub player_id: String,
    pub player_name: String,
    /// Competition rank: 1 + number of players with a strictly better score.
    pub position: u32,
    pub score: f64,
    pub details: EntryDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardMetadata {
    pub sort_direction: SortDirection,
    pub method: ScoringMethod,
    pub include_handicap: bool,
    /// Skins still in the pot after the last decided hole.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carried_skins: Option<u32>,
}

/// Ranked standings for one game under one scoring method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardResult {
    pub entries: Vec<LeaderboardEntry>,
    pub metadata: LeaderboardMetadata,
}

impl LeaderboardResult {
    /// Every entry sharing position 1.
    pub fn leaders(&self) -> impl Iterator<Item = &LeaderboardEntry> {
        self.entries.iter().filter(|e| e.position == 1)
    }

    pub fn entry_for(&self, player_id: &str) -> Option<&LeaderboardEntry> {
        self.entries.iter().find(|e| e.player_id == player_id)
    }

    /// Whether two or more players share `position`.
    pub fn is_tied(&self, position: u32) -> bool {
        self.entries.iter().filter(|e| e.position == position).count() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, position: u32, score: f64) -> LeaderboardEntry {
        LeaderboardEntry {
            player_id: id.to_string(),
            player_name: id.to_uppercase(),
            position,
            score,
            details: EntryDetails::Skins {
                holes_won: vec![],
                skins_won: score as u32,
            },
        }
    }

    fn result() -> LeaderboardResult {
        LeaderboardResult {
            entries: vec![entry("a", 1, 3.0), entry("b", 1, 3.0), entry("c", 3, 1.0)],
            metadata: LeaderboardMetadata {
                sort_direction: SortDirection::Desc,
                method: ScoringMethod::Skins,
                include_handicap: false,
                carried_skins: None,
            },
        }
    }

    #[test]
    fn lookup_helpers() {
        let r = result();
        assert_eq!(r.leaders().count(), 2);
        assert!(r.is_tied(1));
        assert!(!r.is_tied(3));
        assert_eq!(r.entry_for("c").map(|e| e.position), Some(3));
        assert!(r.entry_for("z").is_none());
    }

    #[test]
    fn details_are_tagged_by_format() {
        let json = serde_json::to_value(&result()).unwrap();
        assert_eq!(json["entries"][0]["details"]["format"], "skins");
        assert_eq!(json["metadata"]["sort_direction"], "desc");
        assert!(json["metadata"].get("carried_skins").is_none());
    }
}
