use alloc::vec::Vec;

use tracing::{debug, info, instrument};

use crate::deck::{Deck, draw_reshuffle_if_needed};
use crate::result::{DealerResult, PlayerResult, RoundResult, player_wins};

use super::{RoundPhase, Table, TimerState};

impl<D: Deck> Table<D> {
    /// Dealer plays their hand: draws while the best total is below 17 and
    /// not bust, standing on any 17.
    fn dealer_play(&mut self) {
        self.dealer.reveal_hole();

        while self.dealer.must_draw() {
            let card = draw_reshuffle_if_needed(&mut self.deck);
            self.dealer.add_card(card);
            debug!(%card, score = %self.dealer.score(), "dealer draws");
        }
    }

    /// Puts every dealer and player card on the discard pile.
    pub(super) fn discard_hands(&mut self) {
        let played = self
            .dealer
            .cards()
            .iter()
            .chain(self.players.iter().flat_map(|player| player.cards()));
        for &card in played {
            self.deck.discard(card);
        }
    }

    /// Plays the dealer, scores every hand, and returns all cards to the
    /// discard pile.
    ///
    /// Only called while the round is resolving; leaves it resolved.
    #[instrument(level = "debug", skip_all)]
    pub(super) fn resolve(&mut self) -> RoundResult {
        debug_assert_eq!(self.phase, RoundPhase::Resolving);

        self.dealer_play();
        let dealer_score = self.dealer.score();

        let players: Vec<PlayerResult> = self
            .players
            .iter()
            .map(|player| {
                let score = player.score();
                PlayerResult {
                    win: player_wins(score, dealer_score),
                    cards: player.cards().to_vec(),
                    score,
                }
            })
            .collect();

        let result = RoundResult {
            dealer: DealerResult {
                cards: self.dealer.cards().to_vec(),
                score: dealer_score,
            },
            players,
        };

        self.discard_hands();

        if matches!(self.timer, TimerState::Armed(_)) {
            self.timer = TimerState::Cancelled;
        }
        self.phase = RoundPhase::Resolved;
        info!(
            dealer = %dealer_score,
            winners = result.winners(),
            "round resolved"
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use core::time::Duration;

    use crate::card::{Card, Rank, Suit};
    use crate::deck::Shoe;
    use crate::options::{RoundOptions, Timeout};
    use crate::round::{Round, RoundPhase, TimerState};
    use crate::score::Score;

    fn round(draws: &[Rank]) -> Round<Shoe> {
        let cards: Vec<Card> = draws
            .iter()
            .map(|&rank| Card::new(Suit::Hearts, rank))
            .collect();
        Round::new(Shoe::from_cards(&cards, 5), RoundOptions::default()).unwrap()
    }

    #[test]
    fn dealer_stands_on_soft_17() {
        let round = round(&[Rank::Ace, Rank::Six, Rank::Ten, Rank::Nine]);
        round.stay(0);
        round.poll(Duration::ZERO);

        let result = round.result().unwrap();
        assert_eq!(result.dealer.cards.len(), 2);
        assert_eq!(result.dealer.score, Score::new(17).unwrap());
        assert!(result.players[0].win);
    }

    #[test]
    fn dealer_bust_does_not_save_a_busted_player() {
        let round = round(&[
            Rank::Ten,
            Rank::Six,
            Rank::Ten,
            Rank::Five,
            Rank::King,
            Rank::Queen,
        ]);
        let hit = round.hit(0).unwrap();
        assert!(hit.scores.is_all_bust());
        round.poll(Duration::ZERO);

        let result = round.result().unwrap();
        assert_eq!(result.dealer.score, Score::BUST);
        assert_eq!(result.players[0].score, Score::BUST);
        assert!(!result.players[0].win);
    }

    #[test]
    fn resolution_cancels_timer_and_discards_everything() {
        let round = round(&[Rank::Ten, Rank::Eight, Rank::Nine, Rank::Nine]);
        assert!(round.deadline().is_some());
        round.stay(0);
        assert_eq!(round.poll(Duration::from_secs(1)), RoundPhase::Resolved);
        assert_eq!(round.timer(), TimerState::Cancelled);
        assert_eq!(round.poll(Duration::from_secs(600)), RoundPhase::Resolved);
        assert!(round.dealer_cards().is_some());

        let shoe = round.into_deck();
        assert_eq!(shoe.discarded(), 4);
    }

    #[test]
    fn no_timeout_never_fires() {
        let options = RoundOptions::default().with_timeout(Timeout::Never);
        let cards = [Rank::Ten, Rank::Eight, Rank::Nine, Rank::Five]
            .map(|rank| Card::new(Suit::Clubs, rank));
        let round = Round::new(Shoe::from_cards(&cards, 0), options).unwrap();
        assert_eq!(round.timer(), TimerState::Disabled);
        assert_eq!(round.poll(Duration::MAX), RoundPhase::Active);
        assert!(round.is_playing(0));
    }
}
