use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ScoringError, ScoringResult};
use crate::handicap::HOLES_PER_ROUND;
use crate::method::ScoringMethod;

/// Environment variable naming an alternate config file.
pub const CONFIG_ENV: &str = "FAIRWAY_CONFIG";
/// Config file read when `FAIRWAY_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config/fairway.toml";

/// Handicap allowance percentage per scoring format.
///
/// Formats missing from the table have no playing handicap; callers get
/// `UnsupportedFormat` rather than a guessed percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowanceTable {
    percentages: BTreeMap<String, u32>,
}

impl Default for AllowanceTable {
    fn default() -> Self {
        let mut table = Self {
            percentages: BTreeMap::new(),
        };
        table.declare(ScoringMethod::MatchPlay, 100);
        table.declare(ScoringMethod::StrokePlay, 95);
        table
    }
}

impl AllowanceTable {
    /// A table with no formats declared.
    pub fn empty() -> Self {
        Self {
            percentages: BTreeMap::new(),
        }
    }

    pub fn declare(&mut self, method: ScoringMethod, percent: u32) {
        self.percentages.insert(method.as_str().to_string(), percent);
    }

    pub fn percent(&self, method: ScoringMethod) -> Option<u32> {
        self.percentages.get(method.as_str()).copied()
    }

    /// Every key must name a known format and every percentage must be in 1..=100.
    pub fn validate(&self) -> ScoringResult<()> {
        for (name, &percent) in &self.percentages {
            name.parse::<ScoringMethod>()?;
            if !(1..=100).contains(&percent) {
                return Err(ScoringError::Config(format!(
                    "allowance for {name} must be between 1 and 100, got {percent}"
                )));
            }
        }
        Ok(())
    }
}

/// Which handicap drives stroke allocation in match play.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchAllocation {
    /// Each player's own playing handicap.
    #[default]
    Playing,
    /// Playing handicap minus the lowest in the field (strokes given).
    Relative,
}

/// Options that change how the engine allocates strokes and reads the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    pub match_allocation: MatchAllocation,
    /// Length of the round being scored. Cards may carry only the holes
    /// played so far, so match play counts holes left against this. A card
    /// with a higher hole number extends the round.
    pub holes_per_round: u8,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            match_allocation: MatchAllocation::default(),
            holes_per_round: HOLES_PER_ROUND as u8,
        }
    }
}

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FairwayConfig {
    pub allowances: AllowanceTable,
    pub engine: EngineOptions,
}

impl FairwayConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> ScoringResult<Self> {
        let config: Self = toml::from_str(contents)?;
        config
            .allowances
            .validate()
            .map_err(|e| ScoringError::Config(e.to_string()))?;
        if config.engine.holes_per_round == 0 {
            return Err(ScoringError::Config("holes_per_round must be at least 1".to_string()));
        }
        Ok(config)
    }

    /// Load from `$FAIRWAY_CONFIG` or `config/fairway.toml`. Falls back to
    /// defaults if the file is missing or unusable.
    pub fn load() -> Self {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        match std::fs::read_to_string(&path) {
            Ok(contents) => match Self::from_toml_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    Self::default()
                },
            },
            Err(_) => Self::default(),
        }
    }
}
