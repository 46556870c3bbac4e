//! Error types for round operations.

use thiserror::Error;

/// Errors returned by player actions.
///
/// These are ordinary outcomes a caller is expected to handle inline (for
/// example a stale client asking for a card after its player already stood).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The player already stayed, busted, reached 21, or timed out.
    #[error("player cannot hit")]
    PlayerCannotHit,
}

/// Errors raised while building a round configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The timeout action was neither `"stay"` nor `"lose"`.
    #[error("timeout action must be either 'stay' or 'lose', got '{0}' instead")]
    InvalidTimeoutAction(alloc::string::String),
    /// The timeout duration was zero.
    #[error("timeout must be a positive duration")]
    ZeroTimeout,
}

/// Errors raised when parsing a card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RankParseError {
    /// The text is not one of `A, 2..=10, J, Q, K`.
    #[error("invalid card rank")]
    Invalid,
}
