//! Player and dealer hand representations.

use alloc::vec::Vec;

use crate::card::Card;
use crate::score::{Score, ScoreSet};

/// A player's hand for the current round.
#[derive(Debug, Clone)]
pub struct PlayerHand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Whether the player may still act.
    playing: bool,
}

impl PlayerHand {
    /// Creates a hand from the two dealt cards.
    ///
    /// A hand that must stop playing right away (a natural 21) starts out
    /// finished.
    #[must_use]
    pub fn dealt(first: Card, second: Card) -> Self {
        let mut hand = Self {
            cards: alloc::vec![first, second],
            playing: true,
        };
        if hand.scores().must_stop_playing() {
            hand.playing = false;
        }
        hand
    }

    /// Adds a card and returns the recomputed score set.
    ///
    /// The player stops playing when the new hand is bust or reaches 21.
    pub fn add_card(&mut self, card: Card) -> ScoreSet {
        self.cards.push(card);

        let scores = self.scores();
        if scores.must_stop_playing() {
            self.playing = false;
        }
        scores
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the player may still act.
    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.playing
    }

    /// Stops the player from acting. There is no way back.
    pub const fn stop(&mut self) {
        self.playing = false;
    }

    /// All totals the hand can reach.
    #[must_use]
    pub fn scores(&self) -> ScoreSet {
        ScoreSet::from_hand(&self.cards)
    }

    /// The best total of the hand.
    #[must_use]
    pub fn score(&self) -> Score {
        self.scores().high()
    }
}

/// The dealer's hand.
///
/// Only the first card is visible until the hole is revealed at resolution.
#[derive(Debug, Clone)]
pub struct DealerHand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Whether the hole card is revealed.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a hand from the two dealt cards.
    #[must_use]
    pub fn dealt(up: Card, hole: Card) -> Self {
        Self {
            cards: alloc::vec![up, hole],
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Card {
        self.cards[0]
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// The best total of the full hand.
    #[must_use]
    pub fn score(&self) -> Score {
        ScoreSet::from_hand(&self.cards).high()
    }

    /// Returns whether the dealer must take another card: the best total is
    /// below 17 and not bust.
    #[must_use]
    pub fn must_draw(&self) -> bool {
        self.score()
            .value()
            .is_some_and(|value| value < DEALER_STANDS_ON)
    }
}

/// Lowest total the dealer stands on.
pub const DEALER_STANDS_ON: u8 = 17;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    const fn card(rank: Rank) -> Card {
        Card::new(Suit::Diamonds, rank)
    }

    #[test]
    fn natural_starts_finished() {
        let hand = PlayerHand::dealt(card(Rank::Ace), card(Rank::Queen));
        assert!(!hand.is_playing());
        assert_eq!(hand.score(), Score::new(21).unwrap());
    }

    #[test]
    fn bust_stops_player() {
        let mut hand = PlayerHand::dealt(card(Rank::Ten), card(Rank::Six));
        assert!(hand.is_playing());
        let scores = hand.add_card(card(Rank::King));
        assert!(scores.is_all_bust());
        assert!(!hand.is_playing());
    }

    #[test]
    fn soft_total_keeps_playing() {
        let mut hand = PlayerHand::dealt(card(Rank::Ace), card(Rank::Two));
        let scores = hand.add_card(card(Rank::Three));
        assert_eq!(scores.high(), Score::new(16).unwrap());
        assert!(hand.is_playing());
    }

    #[test]
    fn dealer_draws_below_17_only() {
        let mut dealer = DealerHand::dealt(card(Rank::Ten), card(Rank::Six));
        assert!(dealer.must_draw());
        dealer.add_card(card(Rank::Ace));
        assert!(!dealer.must_draw());
        assert_eq!(dealer.up_card(), card(Rank::Ten));

        let soft = DealerHand::dealt(card(Rank::Ace), card(Rank::Six));
        assert!(!soft.must_draw());
    }
}
