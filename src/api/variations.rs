//! Sequential, paced fetching of variation exercises.

use std::time::Duration;

use crate::model::Exercise;
use crate::time::{Sleeper, TokioSleeper};
use crate::transport::HttpClient;

use super::{FetchClient, NetworkError};

/// Default gap between two variation requests.
pub const DEFAULT_PACING_DELAY: Duration = Duration::from_millis(200);

/// Fetches exercise details one ID at a time with a fixed pause in between.
///
/// Requests never overlap: request *n+1* is dispatched only after request
/// *n* has completed and the pacing delay has elapsed. The first failure
/// ends the sequence and already-fetched records are dropped.
///
/// # Type Parameters
///
/// - `S`: The sleeper used for pacing (defaults to [`TokioSleeper`])
#[derive(Debug, Clone, Default)]
pub struct VariationAggregator<S = TokioSleeper> {
    sleeper: S,
}

impl VariationAggregator<TokioSleeper> {
    /// Creates an aggregator pacing with the tokio timer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sleeper: TokioSleeper,
        }
    }
}

impl<S> VariationAggregator<S> {
    /// Replaces the pacing sleeper.
    #[must_use]
    pub fn with_sleeper<S2>(self, sleeper: S2) -> VariationAggregator<S2> {
        VariationAggregator { sleeper }
    }
}

impl<S: Sleeper> VariationAggregator<S> {
    /// Fetches every exercise in `ids`, in order.
    ///
    /// Returns an empty list without any request when `ids` is empty. N ids
    /// produce N-1 pauses of `delay`; there is no pause after the last one.
    ///
    /// # Errors
    ///
    /// Returns the first [`NetworkError`] encountered, unchanged.
    pub async fn fetch_all<H: HttpClient>(
        &self,
        client: &FetchClient<H>,
        ids: &[i64],
        delay: Duration,
    ) -> Result<Vec<Exercise>, NetworkError> {
        let mut exercises = Vec::with_capacity(ids.len());

        for (index, &id) in ids.iter().enumerate() {
            if index > 0 {
                self.sleeper.sleep(delay).await;
            }

            match client.fetch_exercise(id).await {
                Ok(exercise) => exercises.push(exercise),
                Err(e) => {
                    tracing::warn!(
                        id,
                        fetched = index,
                        remaining = ids.len() - index - 1,
                        error = %e,
                        "Variation fetch failed, aborting sequence"
                    );
                    return Err(e);
                }
            }
        }

        tracing::debug!(count = exercises.len(), "Fetched variations");
        Ok(exercises)
    }
}
