//! Round phase and timer types.

use core::time::Duration;

/// Phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Initial cards are being dealt. Only observed during construction.
    Dealing,
    /// Players are acting.
    Active,
    /// Every player is done; resolution runs on the next poll.
    Resolving,
    /// The dealer has played and the result is available.
    Resolved,
}

/// State of the round's timeout timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Fires once the elapsed time reaches the deadline.
    Armed(Duration),
    /// Already fired.
    Fired,
    /// The round resolved before the timer fired.
    Cancelled,
    /// The round has no timeout.
    Disabled,
}

impl TimerState {
    /// Returns whether the timer fires at `elapsed`.
    #[must_use]
    pub fn is_due(self, elapsed: Duration) -> bool {
        matches!(self, Self::Armed(deadline) if elapsed >= deadline)
    }

    /// The deadline, while armed.
    #[must_use]
    pub const fn deadline(self) -> Option<Duration> {
        match self {
            Self::Armed(deadline) => Some(deadline),
            _ => None,
        }
    }
}
