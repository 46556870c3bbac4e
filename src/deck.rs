//! The deck a round draws from, and a seeded shoe implementation.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// A source of cards with a discard pile.
///
/// A round takes exclusive ownership of its deck, so implementations need no
/// internal synchronization.
pub trait Deck {
    /// Draws the next card, or `None` when the deck is empty.
    fn draw(&mut self) -> Option<Card>;

    /// Puts a played card on the discard pile.
    fn discard(&mut self, card: Card);

    /// Moves the whole discard pile into the deck and shuffles it.
    fn shuffle_discard_into_deck(&mut self);

    /// Number of cards left to draw.
    fn remaining(&self) -> usize;

    /// Returns whether there is nothing left to draw.
    fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}

/// Draws a card, first shuffling the discard pile into the deck when the deck
/// is empty.
///
/// # Panics
///
/// Panics if both the deck and the discard pile are empty. Callers keep this
/// from happening by discarding every played card back into the deck.
pub fn draw_reshuffle_if_needed<D: Deck + ?Sized>(deck: &mut D) -> Card {
    if deck.is_empty() {
        deck.shuffle_discard_into_deck();
        debug!(remaining = deck.remaining(), "reshuffled discard pile into deck");
    }

    deck.draw()
        .unwrap_or_else(|| panic!("cannot draw: both deck and discard pile are empty"))
}

/// A shuffled stack of one or more 52-card decks with a discard pile.
#[derive(Debug, Clone)]
pub struct Shoe {
    /// Cards left to draw; the next card is at the end.
    cards: Vec<Card>,
    /// Played cards waiting to be reshuffled.
    discard: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates a shoe of `decks` full decks shuffled with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjround::{Deck, Shoe};
    ///
    /// let shoe = Shoe::new(2, 42);
    /// assert_eq!(shoe.remaining(), 104);
    /// ```
    #[must_use]
    pub fn new(decks: u8, seed: u64) -> Self {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in Rank::ALL {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        cards.shuffle(&mut rng);

        Self {
            cards,
            discard: Vec::new(),
            rng,
        }
    }

    /// Creates a shoe that deals `cards` in order, first element first.
    ///
    /// The seed only affects later reshuffles of the discard pile.
    #[must_use]
    pub fn from_cards(cards: &[Card], seed: u64) -> Self {
        let mut stacked = cards.to_vec();
        stacked.reverse();

        Self {
            cards: stacked,
            discard: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Number of cards on the discard pile.
    #[must_use]
    pub fn discarded(&self) -> usize {
        self.discard.len()
    }

    /// The cards on the discard pile, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }
}

impl Deck for Shoe {
    fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    fn discard(&mut self, card: Card) {
        self.discard.push(card);
    }

    fn shuffle_discard_into_deck(&mut self) {
        self.cards.append(&mut self.discard);
        self.cards.shuffle(&mut self.rng);
    }

    fn remaining(&self) -> usize {
        self.cards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn card(rank: Rank) -> Card {
        Card::new(Suit::Hearts, rank)
    }

    #[test]
    fn new_shoe_holds_every_card_once_per_deck() {
        let mut shoe = Shoe::new(1, 3);
        let mut drawn = Vec::new();
        while let Some(card) = shoe.draw() {
            drawn.push(card);
        }
        assert_eq!(drawn.len(), DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                assert!(drawn.contains(&Card::new(suit, rank)));
            }
        }
    }

    #[test]
    fn stacked_shoe_deals_in_order() {
        let mut shoe = Shoe::from_cards(&[card(Rank::Two), card(Rank::Three)], 0);
        assert_eq!(shoe.draw(), Some(card(Rank::Two)));
        assert_eq!(shoe.draw(), Some(card(Rank::Three)));
        assert_eq!(shoe.draw(), None);
    }

    #[test]
    fn empty_deck_reshuffles_discard_before_drawing() {
        let mut shoe = Shoe::from_cards(&[], 9);
        for rank in [Rank::Four, Rank::Five, Rank::Six] {
            shoe.discard(card(rank));
        }

        let drawn = draw_reshuffle_if_needed(&mut shoe);

        assert_eq!(shoe.discarded(), 0);
        assert_eq!(shoe.remaining(), 2);
        assert!([Rank::Four, Rank::Five, Rank::Six].contains(&drawn.rank));

        let mut rest = Vec::new();
        while let Some(card) = shoe.draw() {
            rest.push(card.rank);
        }
        assert!(!rest.contains(&drawn.rank));
    }

    #[test]
    fn non_empty_deck_leaves_discard_alone() {
        let mut shoe = Shoe::from_cards(&[card(Rank::King)], 9);
        shoe.discard(card(Rank::Queen));

        assert_eq!(draw_reshuffle_if_needed(&mut shoe), card(Rank::King));
        assert_eq!(shoe.discard_pile(), &[card(Rank::Queen)]);
    }

    #[test]
    #[should_panic(expected = "both deck and discard pile are empty")]
    fn drawing_from_nothing_panics() {
        let mut shoe = Shoe::from_cards(&[], 0);
        let _ = draw_reshuffle_if_needed(&mut shoe);
    }
}
