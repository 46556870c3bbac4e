//! A single round of blackjack.

use alloc::vec::Vec;
use core::time::Duration;

use tracing::{debug, info};

use crate::card::Card;
use crate::completion::RoundCompletion;
use crate::deck::{Deck, draw_reshuffle_if_needed};
use crate::error::ConfigError;
use crate::hand::{DealerHand, PlayerHand};
use crate::options::{MAX_PLAYERS, RoundOptions, Timeout, TimeoutAction};
use crate::result::RoundResult;
use crate::sync::Mutex;

mod actions;
mod dealer;
pub mod state;

pub use actions::Hit;
pub use state::{RoundPhase, TimerState};

/// Everything a round mutates, kept behind one lock.
struct Table<D> {
    deck: D,
    dealer: DealerHand,
    players: Vec<PlayerHand>,
    phase: RoundPhase,
    timer: TimerState,
}

impl<D: Deck> Table<D> {
    fn player(&self, seat: usize) -> &PlayerHand {
        let count = self.players.len();
        self.players
            .get(seat)
            .unwrap_or_else(|| panic!("player index {seat} out of range for {count} players"))
    }

    fn player_mut(&mut self, seat: usize) -> &mut PlayerHand {
        let count = self.players.len();
        self.players
            .get_mut(seat)
            .unwrap_or_else(|| panic!("player index {seat} out of range for {count} players"))
    }

    /// Schedules resolution once every player is done.
    ///
    /// Nothing is resolved here; the next [`Round::poll`] drains the pending
    /// resolution. Calling this again while resolution is pending is a no-op.
    fn check_end_of_round(&mut self) {
        if self.phase != RoundPhase::Active {
            return;
        }
        if self.players.iter().all(|player| !player.is_playing()) {
            self.phase = RoundPhase::Resolving;
            info!(players = self.players.len(), "all players finished, resolution scheduled");
        }
    }

    /// Forces every player still acting to stop if the timer is due.
    ///
    /// Once every player is done the timer has nothing left to act on; the
    /// pending resolution cancels it instead.
    fn fire_timer_if_due(&mut self, elapsed: Duration, action: TimeoutAction) {
        if self.phase != RoundPhase::Active || !self.timer.is_due(elapsed) {
            return;
        }
        self.timer = TimerState::Fired;

        let mut stopped = 0_usize;
        for player in self.players.iter_mut().filter(|player| player.is_playing()) {
            // Stay and lose both end the player's turn; a timed-out hand is
            // scored like any other.
            match action {
                TimeoutAction::Stay | TimeoutAction::Lose => player.stop(),
            }
            stopped += 1;
        }
        info!(stopped, action = %action, ?elapsed, "round timed out");

        self.check_end_of_round();
    }
}

/// One round of blackjack: the deal, player turns, dealer play, and results.
///
/// The round owns its deck for its whole lifetime. Player actions ([`hit`],
/// [`stay`]) return immediately and never resolve the round themselves; the
/// owner drives the round by calling [`poll`] (or [`poll_now`] with `std`),
/// which fires the timeout and runs a pending resolution. The result is
/// delivered through [`completion`] exactly once.
///
/// [`hit`]: Round::hit
/// [`stay`]: Round::stay
/// [`poll`]: Round::poll
/// [`poll_now`]: Round::poll_now
/// [`completion`]: Round::completion
///
/// # Example
///
/// ```
/// use core::time::Duration;
/// use bjround::{Round, RoundOptions, RoundPhase, Shoe, Timeout};
///
/// let options = RoundOptions::default()
///     .with_player_count(2)
///     .with_timeout(Timeout::Never);
/// let round = Round::new(Shoe::new(1, 42), options).unwrap();
///
/// round.stay(0);
/// round.stay(1);
/// assert_eq!(round.poll(Duration::ZERO), RoundPhase::Resolved);
///
/// let result = round.result().unwrap();
/// assert_eq!(result.players.len(), 2);
/// ```
pub struct Round<D: Deck> {
    table: Mutex<Table<D>>,
    completion: RoundCompletion,
    timeout_action: TimeoutAction,
    #[cfg(feature = "std")]
    started: std::time::Instant,
}

impl<D: Deck> Round<D> {
    /// Deals a new round from `deck`.
    ///
    /// The dealer receives two cards, then each player two cards in seat
    /// order. Players dealt a natural 21 start out finished.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroTimeout`] for a zero-length timeout.
    ///
    /// # Panics
    ///
    /// Panics if the player count is outside `1..=8`, or if the deck and its
    /// discard pile run out of cards while dealing.
    pub fn new(mut deck: D, options: RoundOptions) -> Result<Self, ConfigError> {
        options.validate()?;

        let player_count = options.player_count;
        assert!(
            (1..=MAX_PLAYERS).contains(&player_count),
            "player count must be between 1 and {MAX_PLAYERS}, got {player_count}"
        );

        let up = draw_reshuffle_if_needed(&mut deck);
        let hole = draw_reshuffle_if_needed(&mut deck);
        let dealer = DealerHand::dealt(up, hole);

        let mut players = Vec::with_capacity(player_count);
        for seat in 0..player_count {
            let first = draw_reshuffle_if_needed(&mut deck);
            let second = draw_reshuffle_if_needed(&mut deck);
            let hand = PlayerHand::dealt(first, second);
            debug!(seat, %first, %second, playing = hand.is_playing(), "dealt player");
            players.push(hand);
        }

        let timer = match options.timeout {
            Timeout::After(deadline) => TimerState::Armed(deadline),
            Timeout::Never => TimerState::Disabled,
        };

        let mut table = Table {
            deck,
            dealer,
            players,
            phase: RoundPhase::Dealing,
            timer,
        };
        debug!(%up, player_count, ?timer, "dealt round");

        table.phase = RoundPhase::Active;
        table.check_end_of_round();

        Ok(Self {
            table: Mutex::new(table),
            completion: RoundCompletion::new(),
            timeout_action: options.timeout_action,
            #[cfg(feature = "std")]
            started: std::time::Instant::now(),
        })
    }

    /// Returns the dealer's visible card.
    pub fn dealer_card(&self) -> Card {
        self.table.lock().dealer.up_card()
    }

    /// Returns the dealer's full hand once the hole card has been revealed at
    /// resolution, `None` before that.
    pub fn dealer_cards(&self) -> Option<Vec<Card>> {
        let table = self.table.lock();
        table
            .dealer
            .is_hole_revealed()
            .then(|| table.dealer.cards().to_vec())
    }

    /// Returns a copy of the player's cards.
    ///
    /// # Panics
    ///
    /// Panics if `seat` is not a valid player index.
    pub fn player_cards(&self, seat: usize) -> Vec<Card> {
        self.table.lock().player(seat).cards().to_vec()
    }

    /// Returns whether the player may still act.
    ///
    /// # Panics
    ///
    /// Panics if `seat` is not a valid player index.
    pub fn is_playing(&self, seat: usize) -> bool {
        self.table.lock().player(seat).is_playing()
    }

    /// Number of seated players.
    pub fn player_count(&self) -> usize {
        self.table.lock().players.len()
    }

    /// Current phase of the round.
    pub fn phase(&self) -> RoundPhase {
        self.table.lock().phase
    }

    /// Time after the deal at which the timeout fires, while it is armed.
    pub fn deadline(&self) -> Option<Duration> {
        self.table.lock().timer.deadline()
    }

    /// Current state of the timeout timer.
    pub fn timer(&self) -> TimerState {
        self.table.lock().timer
    }

    /// A handle that completes with the round's result.
    pub fn completion(&self) -> RoundCompletion {
        self.completion.clone()
    }

    /// The result, once the round has resolved.
    pub fn result(&self) -> Option<RoundResult> {
        self.completion.try_result()
    }

    /// Runs one scheduler turn.
    ///
    /// `elapsed` is the time since the round was dealt. The turn first fires
    /// the timeout if it is due, stopping every player still acting, then
    /// runs a pending resolution. Returns the phase after the turn.
    pub fn poll(&self, elapsed: Duration) -> RoundPhase {
        let mut table = self.table.lock();
        table.fire_timer_if_due(elapsed, self.timeout_action);

        if table.phase != RoundPhase::Resolving {
            return table.phase;
        }

        let result = table.resolve();
        // Completed under the table lock so a resolved phase always comes
        // with a result. The completion lock never takes the table lock.
        self.completion.complete(result);
        table.phase
    }

    /// Runs one scheduler turn using the time since the round was dealt.
    #[cfg(feature = "std")]
    pub fn poll_now(&self) -> RoundPhase {
        self.poll(self.started.elapsed())
    }

    /// Ends the round and hands the deck back.
    ///
    /// After resolution every card of the round is on the deck's discard
    /// pile, ready for the next round. A round abandoned before it resolved
    /// discards the cards still in play, so none are lost.
    pub fn into_deck(self) -> D {
        let mut table = self.table.into_inner();
        if table.phase != RoundPhase::Resolved {
            debug!(phase = ?table.phase, "round abandoned, discarding cards in play");
            table.discard_hands();
        }
        table.deck
    }
}
