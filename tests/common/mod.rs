//! Shared helpers for integration tests.

use std::sync::OnceLock;

use bjround::{Card, Rank, Round, RoundOptions, Shoe, Suit, Timeout};
use tracing_subscriber::{EnvFilter, fmt};

static LOGGING: OnceLock<()> = OnceLock::new();

/// Initializes test logging once. `TEST_LOG`, then `RUST_LOG`, picks the
/// filter; the default is quiet.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map_or_else(|_| EnvFilter::new("warn"), EnvFilter::new);

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// A shoe that deals `draws` in order: dealer up, dealer hole, then two
/// cards per player, then hits and dealer draws.
pub fn stacked(draws: &[Card]) -> Shoe {
    Shoe::from_cards(draws, 7)
}

/// A round without a timeout dealt from `draws`.
pub fn round(draws: &[Card], players: usize) -> Round<Shoe> {
    init_logging();
    let options = RoundOptions::default()
        .with_player_count(players)
        .with_timeout(Timeout::Never);
    Round::new(stacked(draws), options).unwrap()
}
