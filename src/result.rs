//! Round result types.

use alloc::vec::Vec;

use crate::card::Card;
use crate::score::Score;

/// The dealer's final hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerResult {
    /// Every card the dealer held, hole card and draws included.
    pub cards: Vec<Card>,
    /// The dealer's best total.
    pub score: Score,
}

/// Result for a single player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// Whether the player beat the dealer.
    ///
    /// True only when the player is not bust and strictly beats the dealer;
    /// ties and a bust against a busted dealer lose.
    pub win: bool,
    /// The player's final cards.
    pub cards: Vec<Card>,
    /// The player's best total.
    pub score: Score,
}

/// Result of the entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The dealer's hand.
    pub dealer: DealerResult,
    /// Results for each player, in seat order.
    pub players: Vec<PlayerResult>,
}

impl RoundResult {
    /// Number of players who won.
    #[must_use]
    pub fn winners(&self) -> usize {
        self.players.iter().filter(|player| player.win).count()
    }
}

/// Decides whether `player` beats `dealer`.
#[must_use]
pub fn player_wins(player: Score, dealer: Score) -> bool {
    !player.is_bust() && player > dealer
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(value: u8) -> Score {
        Score::new(value).unwrap()
    }

    #[test]
    fn higher_total_wins() {
        assert!(player_wins(score(21), score(20)));
        assert!(player_wins(score(12), Score::BUST));
    }

    #[test]
    fn ties_and_busts_lose() {
        assert!(!player_wins(score(18), score(18)));
        assert!(!player_wins(score(17), score(21)));
        assert!(!player_wins(Score::BUST, Score::BUST));
        assert!(!player_wins(Score::BUST, score(17)));
    }
}
