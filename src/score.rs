//! Hand scoring.
//!
//! A blackjack total is not a single number: every ace may count as 1 or 11,
//! so a hand has a *set* of achievable totals. [`ScoreSet`] carries that set
//! explicitly and [`Score`] is one element of it, either a total in `1..=21`
//! or bust.

use core::cmp::Ordering;
use core::fmt;
use core::ops::Add;

use crate::card::{Card, Rank};

/// Highest total that is not a bust.
pub const BLACKJACK: u8 = 21;

/// A single hand total: a number in `1..=21`, or bust.
///
/// Bust orders below every numeric total and absorbs addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Score(u8);

impl Score {
    /// The bust score.
    pub const BUST: Self = Self(0);

    /// Creates a numeric score, or `None` when `value` is outside `1..=21`.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= BLACKJACK {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Returns whether this score is bust.
    #[must_use]
    pub const fn is_bust(self) -> bool {
        self.0 == 0
    }

    /// Returns the numeric total, or `None` when bust.
    #[must_use]
    pub const fn value(self) -> Option<u8> {
        if self.is_bust() { None } else { Some(self.0) }
    }

    /// Three-way comparison as `-1`, `0` or `1`.
    #[must_use]
    pub fn compare(self, other: Self) -> i8 {
        match self.cmp(&other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Returns the higher of two scores; ties return `self`.
    #[must_use]
    pub fn higher_of(self, other: Self) -> Self {
        if self >= other { self } else { other }
    }
}

impl Add for Score {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        if self.is_bust() || other.is_bust() {
            return Self::BUST;
        }
        // Both operands are at most 21, so the sum cannot overflow u8.
        Self::new(self.0 + other.0).unwrap_or(Self::BUST)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("bust"),
        }
    }
}

/// Every total a hand can reach.
///
/// Stored as a bitset over the 22 possible [`Score`] values (bit 0 is bust,
/// bit `n` is the total `n`), so equal totals reached through different ace
/// choices collapse into one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreSet {
    bits: u32,
}

impl ScoreSet {
    const fn single(score: Score) -> Self {
        Self {
            bits: 1u32 << score.0,
        }
    }

    const fn with(self, score: Score) -> Self {
        Self {
            bits: self.bits | (1u32 << score.0),
        }
    }

    /// The possible values of a single card.
    ///
    /// Aces are `{1, 11}`, number cards their face value, face cards `{10}`.
    #[must_use]
    pub const fn from_card(card: &Card) -> Self {
        let low = Score(card.rank.pips());
        match card.rank {
            Rank::Ace => Self::single(low).with(Score(11)),
            _ => Self::single(low),
        }
    }

    /// All totals reachable by the given hand.
    ///
    /// # Panics
    ///
    /// Panics if `cards` is empty; a score set is never empty.
    #[must_use]
    pub fn from_hand(cards: &[Card]) -> Self {
        let (first, rest) = cards
            .split_first()
            .unwrap_or_else(|| panic!("cannot score an empty hand"));

        rest.iter().fold(Self::from_card(first), |scores, card| {
            scores.merge(Self::from_card(card))
        })
    }

    /// Cartesian-sum merge: every total of `self` plus every total of `other`,
    /// with sums over 21 collapsing to bust.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        let mut merged = Self { bits: 0 };
        for left in self.iter() {
            for right in other.iter() {
                merged = merged.with(left + right);
            }
        }
        merged
    }

    /// Iterates the distinct totals in ascending order, bust first.
    pub fn iter(&self) -> impl Iterator<Item = Score> + '_ {
        (0..=BLACKJACK)
            .filter(move |n| self.bits & (1u32 << *n) != 0)
            .map(Score)
    }

    /// Returns whether `score` is one of the achievable totals.
    #[must_use]
    pub const fn contains(&self, score: Score) -> bool {
        self.bits & (1u32 << score.0) != 0
    }

    /// Number of distinct totals.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns whether the set has no totals. Sets built from cards never do.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns whether every total is bust.
    #[must_use]
    pub const fn is_all_bust(&self) -> bool {
        self.bits == 1
    }

    /// Returns whether a player holding this hand can no longer act:
    /// the best total is bust or exactly 21.
    #[must_use]
    pub fn must_stop_playing(&self) -> bool {
        let high = self.high();
        high.is_bust() || high.value() == Some(BLACKJACK)
    }

    /// The best total: the highest one that is not bust, or bust when
    /// nothing else is reachable.
    #[must_use]
    pub fn high(&self) -> Score {
        self.iter().fold(Score::BUST, Score::higher_of)
    }
}

impl fmt::Display for ScoreSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, score) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{score}")?;
        }
        f.write_str("}")
    }
}
