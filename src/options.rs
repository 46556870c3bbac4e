//! Round configuration options.

use core::fmt;
use core::str::FromStr;
use core::time::Duration;

use crate::error::ConfigError;

/// Most players a single round seats.
pub const MAX_PLAYERS: usize = 8;

/// Default time players have to finish before the timeout action applies.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(2 * 60 * 1000);

/// How long players have to finish acting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timeout {
    /// Apply the timeout action once this much time has passed since the deal.
    After(Duration),
    /// Never time out.
    Never,
}

impl Default for Timeout {
    fn default() -> Self {
        Self::After(DEFAULT_TIMEOUT)
    }
}

/// What happens to players still acting when the round times out.
///
/// Both actions stop the remaining players; a timed-out hand is then scored
/// like any other. `Lose` carries no separate forced-loss outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeoutAction {
    /// The player stays on their current hand.
    Stay,
    /// The player forfeits further play.
    #[default]
    Lose,
}

impl TimeoutAction {
    /// The configuration name of the action.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stay => "stay",
            Self::Lose => "lose",
        }
    }
}

impl fmt::Display for TimeoutAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeoutAction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stay" => Ok(Self::Stay),
            "lose" => Ok(Self::Lose),
            other => Err(ConfigError::InvalidTimeoutAction(other.into())),
        }
    }
}

/// Configuration options for a blackjack round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use bjround::{RoundOptions, Timeout, TimeoutAction};
///
/// let options = RoundOptions::default()
///     .with_player_count(3)
///     .with_timeout(Timeout::After(Duration::from_secs(30)))
///     .with_timeout_action(TimeoutAction::Stay);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOptions {
    /// Number of seated players, `1..=8`.
    pub player_count: usize,
    /// How long players have to act.
    pub timeout: Timeout,
    /// What happens to players still acting at the timeout.
    pub timeout_action: TimeoutAction,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            player_count: 1,
            timeout: Timeout::default(),
            timeout_action: TimeoutAction::default(),
        }
    }
}

impl RoundOptions {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_player_count(8);
    /// assert_eq!(options.player_count, 8);
    /// ```
    #[must_use]
    pub const fn with_player_count(mut self, player_count: usize) -> Self {
        self.player_count = player_count;
        self
    }

    /// Sets the timeout.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{RoundOptions, Timeout};
    ///
    /// let options = RoundOptions::default().with_timeout(Timeout::Never);
    /// assert_eq!(options.timeout, Timeout::Never);
    /// ```
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Timeout) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the timeout action.
    #[must_use]
    pub const fn with_timeout_action(mut self, action: TimeoutAction) -> Self {
        self.timeout_action = action;
        self
    }

    /// Sets the timeout action from its configuration name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTimeoutAction`] unless `action` is
    /// `"stay"` or `"lose"`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{RoundOptions, TimeoutAction};
    ///
    /// let options = RoundOptions::default().with_timeout_action_str("stay").unwrap();
    /// assert_eq!(options.timeout_action, TimeoutAction::Stay);
    /// assert!(RoundOptions::default().with_timeout_action_str("fold").is_err());
    /// ```
    pub fn with_timeout_action_str(self, action: &str) -> Result<Self, ConfigError> {
        Ok(self.with_timeout_action(action.parse()?))
    }

    /// Checks the options that are configuration rather than caller contract.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroTimeout`] for a zero-length timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Timeout::After(duration) = self.timeout {
            if duration.is_zero() {
                return Err(ConfigError::ZeroTimeout);
            }
        }
        Ok(())
    }
}
