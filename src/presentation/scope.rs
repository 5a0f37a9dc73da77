//! Lifetime scope for fetches issued by a view model.

use std::future::Future;

use tokio_util::sync::CancellationToken;

/// Bounds the lifetime of the fetches a view model starts.
///
/// Once cancelled (explicitly or by dropping the scope) no further result
/// is delivered. Work still pending under [`FetchScope::run`] is dropped at
/// its next suspension point, which also drops any in-flight HTTP request;
/// a request already sent may still be processed by the server.
#[derive(Debug, Default)]
pub struct FetchScope {
    token: CancellationToken,
}

impl FetchScope {
    /// Creates an active scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels the scope. Idempotent.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Returns true once the scope has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Returns a token that is cancelled together with this scope.
    ///
    /// Useful for tasks spawned on behalf of the view model.
    #[must_use]
    pub fn token(&self) -> CancellationToken {
        self.token.child_token()
    }

    /// Drives `work` to completion unless the scope is cancelled first.
    ///
    /// Returns `None` if cancelled, in which case `work` is dropped.
    pub async fn run<F: Future>(&self, work: F) -> Option<F::Output> {
        tokio::select! {
            biased;
            () = self.token.cancelled() => None,
            output = work => Some(output),
        }
    }
}

impl Drop for FetchScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
