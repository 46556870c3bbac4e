use tracing::debug;

use crate::card::Card;
use crate::deck::{Deck, draw_reshuffle_if_needed};
use crate::error::ActionError;
use crate::score::ScoreSet;

use super::Round;

/// A card dealt by [`Round::hit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    /// The card drawn.
    pub card: Card,
    /// Every total the player's hand can now reach.
    pub scores: ScoreSet,
}

impl<D: Deck> Round<D> {
    /// Player action: Hit (draw a card).
    ///
    /// The player stops playing automatically once the hand is bust or
    /// reaches 21.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::PlayerCannotHit`] if the player already stayed,
    /// busted, reached 21, or timed out. The hand is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `seat` is not a valid player index, or if the deck and its
    /// discard pile are both empty.
    pub fn hit(&self, seat: usize) -> Result<Hit, ActionError> {
        let mut guard = self.table.lock();
        let table = &mut *guard;

        if !table.player(seat).is_playing() {
            return Err(ActionError::PlayerCannotHit);
        }

        let card = draw_reshuffle_if_needed(&mut table.deck);
        let player = table.player_mut(seat);
        let scores = player.add_card(card);
        let playing = player.is_playing();
        debug!(seat, %card, %scores, playing, "player hit");

        if !playing {
            table.check_end_of_round();
        }

        Ok(Hit { card, scores })
    }

    /// Player action: Stay (keep the current hand).
    ///
    /// Staying again after the player is done has no further effect.
    ///
    /// # Panics
    ///
    /// Panics if `seat` is not a valid player index.
    pub fn stay(&self, seat: usize) {
        let mut table = self.table.lock();
        let player = table.player_mut(seat);
        if player.is_playing() {
            player.stop();
            debug!(seat, score = %player.score(), "player stayed");
        }
        table.check_end_of_round();
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;
    use core::time::Duration;

    use crate::card::{Card, Rank, Suit};
    use crate::deck::Shoe;
    use crate::options::{RoundOptions, Timeout};
    use crate::round::{Round, RoundPhase};

    const fn card(rank: Rank) -> Card {
        Card::new(Suit::Spades, rank)
    }

    fn round(draws: &[Rank], players: usize) -> Round<Shoe> {
        let cards: Vec<Card> = draws.iter().copied().map(card).collect();
        let options = RoundOptions::default()
            .with_player_count(players)
            .with_timeout(Timeout::Never);
        Round::new(Shoe::from_cards(&cards, 1), options).unwrap()
    }

    #[test]
    fn hit_on_finished_player_leaves_hand_alone() {
        let round = round(
            &[Rank::Ten, Rank::Seven, Rank::Nine, Rank::Eight, Rank::Two],
            1,
        );
        round.stay(0);

        assert_eq!(round.hit(0), Err(crate::ActionError::PlayerCannotHit));
        assert_eq!(round.player_cards(0), vec![card(Rank::Nine), card(Rank::Eight)]);
    }

    #[test]
    fn stay_twice_schedules_once() {
        let round = round(&[Rank::Ten, Rank::Seven, Rank::Nine, Rank::Eight], 1);
        round.stay(0);
        round.stay(0);

        assert_eq!(round.phase(), RoundPhase::Resolving);
        assert_eq!(round.poll(Duration::ZERO), RoundPhase::Resolved);
        round.stay(0);
        assert_eq!(round.phase(), RoundPhase::Resolved);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn unknown_seat_panics() {
        let round = round(&[Rank::Ten, Rank::Seven, Rank::Nine, Rank::Eight], 1);
        round.stay(1);
    }
}
