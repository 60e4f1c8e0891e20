use serde::{Deserialize, Deserializer, Serialize};

/// Highest stroke or putt count a single hole may record.
pub const MAX_STROKES_PER_HOLE: u32 = u8::MAX as u32;

/// Static course data for one hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleSpec {
    pub hole_number: u8,
    pub par: u8,
    /// Difficulty ranking, 1 = hardest. Decides which holes receive
    /// handicap strokes first.
    pub stroke_index: u8,
}

impl HoleSpec {
    pub const fn new(hole_number: u8, par: u8, stroke_index: u8) -> Self {
        Self {
            hole_number,
            par,
            stroke_index,
        }
    }
}

/// One player's recorded result on one hole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoleResult {
    pub hole_number: u8,
    pub par: u8,
    /// Gross strokes. 0 means the hole has not been played yet.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub strokes: u32,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub putts: u32,
    pub stroke_index: u8,
    /// Precomputed par for this player on this hole (par plus strokes
    /// received), when the caller already allocated handicap strokes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_match_par: Option<u8>,
}

impl HoleResult {
    /// A hole on the card with no score entered yet.
    pub fn unplayed(spec: HoleSpec) -> Self {
        Self::new(spec, 0, 0)
    }

    pub fn new(spec: HoleSpec, strokes: u32, putts: u32) -> Self {
        Self {
            hole_number: spec.hole_number,
            par: spec.par,
            strokes,
            putts,
            stroke_index: spec.stroke_index,
            player_match_par: None,
        }
    }

    pub fn is_played(&self) -> bool {
        self.strokes > 0
    }

    pub fn spec(&self) -> HoleSpec {
        HoleSpec::new(self.hole_number, self.par, self.stroke_index)
    }

    /// Handicap strokes implied by `player_match_par`, if one was supplied.
    pub fn precomputed_strokes(&self) -> Option<u32> {
        self.player_match_par
            .map(|match_par| u32::from(match_par.saturating_sub(self.par)))
    }
}

/// Missing values arrive as JSON `null`; treat them as the unplayed sentinel.
fn null_as_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
}
