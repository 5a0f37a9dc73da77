//! Time abstraction for testability.
//!
//! Request pacing waits through a [`Sleeper`] so tests can skip or record
//! delays instead of waiting on the wall clock.

use std::future::Future;
use std::time::Duration;

/// Abstraction over asynchronous sleeping.
pub trait Sleeper: Send + Sync {
    /// Suspends the caller for `duration`.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Production sleeper backed by [`tokio::time::sleep`].
///
/// Honors a paused tokio clock, so tests using `start_paused` observe
/// the full delay on `tokio::time::Instant` without waiting.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Sleeper that returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantSleeper;

impl Sleeper for InstantSleeper {
    async fn sleep(&self, _duration: Duration) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn tokio_sleeper_advances_paused_clock() {
        let start = tokio::time::Instant::now();

        TokioSleeper.sleep(Duration::from_millis(250)).await;

        assert!(start.elapsed() >= Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn instant_sleeper_does_not_advance_clock() {
        let start = tokio::time::Instant::now();

        InstantSleeper.sleep(Duration::from_secs(60)).await;

        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[test]
    fn sleepers_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TokioSleeper>();
        assert_send_sync::<InstantSleeper>();
    }
}
