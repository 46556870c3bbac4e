//! Card types and deck constants.

use core::fmt;
use core::str::FromStr;

use crate::error::RankParseError;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits in deck-building order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];
}

/// Card rank, drawn from the alphabet `A, 2..=10, J, Q, K`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace. Scores as 1 or 11.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All thirteen ranks, ace first.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// The printed symbol of the rank (`"A"`, `"2"`, ..., `"10"`, `"J"`, `"Q"`, `"K"`).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// Pip value of the rank; the ace counts 1 and face cards count 10.
    #[must_use]
    pub const fn pips(self) -> u8 {
        match self {
            Self::Ace => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Rank {
    type Err = RankParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbol = s.trim();
        Self::ALL
            .into_iter()
            .find(|rank| rank.symbol().eq_ignore_ascii_case(symbol))
            .ok_or(RankParseError::Invalid)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self.suit {
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Spades => 's',
        };
        write!(f, "{}{suit}", self.rank)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_symbols_round_trip_through_from_str() {
        for rank in Rank::ALL {
            assert_eq!(rank.symbol().parse::<Rank>(), Ok(rank));
        }
        assert_eq!("q".parse::<Rank>(), Ok(Rank::Queen));
        assert_eq!("1".parse::<Rank>(), Err(RankParseError::Invalid));
        assert_eq!("T".parse::<Rank>(), Err(RankParseError::Invalid));
    }

    #[test]
    fn face_cards_count_ten_pips() {
        assert_eq!(Rank::Jack.pips(), 10);
        assert_eq!(Rank::King.pips(), 10);
        assert_eq!(Rank::Ace.pips(), 1);
        assert_eq!(Card::new(Suit::Spades, Rank::Ten).to_string(), "10s");
    }
}
