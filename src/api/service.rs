//! The exercise service capability handed to presentation code.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::model::{Exercise, ExercisePage};
use crate::time::{Sleeper, TokioSleeper};
use crate::transport::HttpClient;

use super::{FetchClient, NetworkError, VariationAggregator};

/// Operations presentation code may invoke.
///
/// View models depend only on this trait, so screens can be driven by the
/// real API or by a test double, and a parent screen hands the very same
/// service to its children.
pub trait ExerciseService: Send + Sync {
    /// Fetches the first page of the exercise listing.
    fn fetch_exercises(&self) -> impl Future<Output = Result<ExercisePage, NetworkError>> + Send;

    /// Fetches the page behind a pagination cursor.
    fn fetch_page(
        &self,
        cursor: &str,
    ) -> impl Future<Output = Result<ExercisePage, NetworkError>> + Send;

    /// Fetches one exercise by ID.
    fn fetch_exercise(&self, id: i64)
    -> impl Future<Output = Result<Exercise, NetworkError>> + Send;

    /// Fetches all variations sequentially, pausing `delay` between requests.
    fn fetch_all_variations(
        &self,
        ids: &[i64],
        delay: Duration,
    ) -> impl Future<Output = Result<Vec<Exercise>, NetworkError>> + Send;
}

/// [`ExerciseService`] backed by the HTTP API.
///
/// # Example
///
/// ```no_run
/// use wger_exercises::api::{ExerciseApi, ExerciseService, default_base_url};
/// use wger_exercises::transport::ReqwestClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let api = ExerciseApi::new(ReqwestClient::new(), default_base_url());
/// let page = api.fetch_exercises().await?;
/// println!("{} exercises", page.count.unwrap_or_default());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ExerciseApi<H, S = TokioSleeper> {
    client: FetchClient<H>,
    aggregator: VariationAggregator<S>,
}

impl<H> ExerciseApi<H, TokioSleeper> {
    /// Creates a service for the API at `base_url`, pacing with tokio timers.
    #[must_use]
    pub const fn new(http: H, base_url: Url) -> Self {
        Self {
            client: FetchClient::new(http, base_url),
            aggregator: VariationAggregator::new(),
        }
    }
}

impl<H, S> ExerciseApi<H, S> {
    /// Replaces the pacing sleeper.
    #[must_use]
    pub fn with_sleeper<S2>(self, sleeper: S2) -> ExerciseApi<H, S2> {
        ExerciseApi {
            client: self.client,
            aggregator: self.aggregator.with_sleeper(sleeper),
        }
    }

    /// Returns the single-request client.
    #[must_use]
    pub const fn client(&self) -> &FetchClient<H> {
        &self.client
    }
}

impl<H: HttpClient, S: Sleeper> ExerciseService for ExerciseApi<H, S> {
    async fn fetch_exercises(&self) -> Result<ExercisePage, NetworkError> {
        self.client.fetch_exercises().await
    }

    async fn fetch_page(&self, cursor: &str) -> Result<ExercisePage, NetworkError> {
        self.client.fetch_page(cursor).await
    }

    async fn fetch_exercise(&self, id: i64) -> Result<Exercise, NetworkError> {
        self.client.fetch_exercise(id).await
    }

    async fn fetch_all_variations(
        &self,
        ids: &[i64],
        delay: Duration,
    ) -> Result<Vec<Exercise>, NetworkError> {
        self.aggregator.fetch_all(&self.client, ids, delay).await
    }
}

impl<T: ExerciseService> ExerciseService for Arc<T> {
    fn fetch_exercises(&self) -> impl Future<Output = Result<ExercisePage, NetworkError>> + Send {
        (**self).fetch_exercises()
    }

    fn fetch_page(
        &self,
        cursor: &str,
    ) -> impl Future<Output = Result<ExercisePage, NetworkError>> + Send {
        (**self).fetch_page(cursor)
    }

    fn fetch_exercise(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Exercise, NetworkError>> + Send {
        (**self).fetch_exercise(id)
    }

    fn fetch_all_variations(
        &self,
        ids: &[i64],
        delay: Duration,
    ) -> impl Future<Output = Result<Vec<Exercise>, NetworkError>> + Send {
        (**self).fetch_all_variations(ids, delay)
    }
}
