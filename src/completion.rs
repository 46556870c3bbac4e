//! One-shot round completion.
//!
//! A round completes exactly once. Every [`RoundCompletion`] handle observes
//! the same result, including handles taken after the round resolved.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll, Waker};

use crate::result::RoundResult;
use crate::sync::Mutex;

#[derive(Debug, Default)]
struct Signal {
    result: Option<RoundResult>,
    wakers: Vec<Waker>,
}

/// A handle on a round's completion.
///
/// Cloning the handle is cheap. Await it to receive the [`RoundResult`], or
/// poll [`RoundCompletion::try_result`] from a synchronous loop.
#[derive(Debug, Clone)]
pub struct RoundCompletion {
    signal: Arc<Mutex<Signal>>,
}

impl RoundCompletion {
    pub(crate) fn new() -> Self {
        Self {
            signal: Arc::new(Mutex::new(Signal::default())),
        }
    }

    /// Stores the result and wakes every waiting observer.
    ///
    /// Returns `false`, leaving the stored result untouched, if the signal
    /// already completed.
    pub(crate) fn complete(&self, result: RoundResult) -> bool {
        let mut signal = self.signal.lock();
        if signal.result.is_some() {
            return false;
        }
        signal.result = Some(result);
        let wakers = core::mem::take(&mut signal.wakers);
        drop(signal);

        for waker in wakers {
            waker.wake();
        }
        true
    }

    /// Returns the result if the round has resolved.
    #[must_use]
    pub fn try_result(&self) -> Option<RoundResult> {
        self.signal.lock().result.clone()
    }

    /// Returns whether the round has resolved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.signal.lock().result.is_some()
    }
}

impl Future for RoundCompletion {
    type Output = RoundResult;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<RoundResult> {
        let mut signal = self.signal.lock();
        if let Some(result) = &signal.result {
            return Poll::Ready(result.clone());
        }

        let waker = cx.waker();
        if !signal.wakers.iter().any(|known| known.will_wake(waker)) {
            signal.wakers.push(waker.clone());
        }
        Poll::Pending
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::card::{Card, Rank, Suit};
    use crate::result::DealerResult;
    use crate::score::Score;

    fn result(score: u8) -> RoundResult {
        RoundResult {
            dealer: DealerResult {
                cards: vec![Card::new(Suit::Clubs, Rank::Ten)],
                score: Score::new(score).unwrap(),
            },
            players: vec![],
        }
    }

    #[test]
    fn completes_only_once() {
        let completion = RoundCompletion::new();
        assert!(!completion.is_complete());
        assert!(completion.complete(result(18)));
        assert!(!completion.complete(result(19)));
        assert_eq!(completion.try_result(), Some(result(18)));
    }

    #[test]
    fn late_observers_see_the_result() {
        let completion = RoundCompletion::new();
        let early = completion.clone();
        completion.complete(result(20));
        let late = completion.clone();
        assert_eq!(early.try_result(), late.try_result());
    }
}
