use thiserror::Error;

/// Result alias for handicap and scoring operations.
pub type ScoringResult<T> = Result<T, ScoringError>;

/// Failure raised by the handicap calculator or the scoring engine.
///
/// All variants are local computation failures; nothing here is transient.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// Malformed numeric input or a scorecard that breaks its invariants.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A scoring method string that is not recognized, or a method with no
    /// declared handicap allowance.
    #[error("unsupported scoring format: {0}")]
    UnsupportedFormat(String),
    /// No scorecards (or no handicaps) were supplied.
    #[error("no players supplied")]
    EmptyField,
    /// A configuration file that parsed but holds unusable values, or did not parse.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ScoringError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

impl From<toml::de::Error> for ScoringError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}
