//! View model of the exercise detail screen.

use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::api::{DEFAULT_PACING_DELAY, ExerciseService, NetworkError};
use crate::model::Exercise;

use super::{FetchScope, Observable, begin_loading};

/// Detail of one exercise plus its lazily loaded variations.
#[derive(Debug)]
pub struct ExerciseDetailViewModel<S> {
    service: S,
    exercise: Exercise,
    pacing_delay: Duration,
    variations: Observable<Vec<Exercise>>,
    error: Observable<Option<Arc<NetworkError>>>,
    is_loading: Observable<bool>,
    scope: FetchScope,
}

impl<S> ExerciseDetailViewModel<S> {
    /// Creates the view model for `exercise`.
    ///
    /// Variations are fetched with [`DEFAULT_PACING_DELAY`] between requests
    /// unless overridden with [`Self::with_pacing_delay`].
    #[must_use]
    pub fn new(service: S, exercise: Exercise) -> Self {
        Self {
            service,
            exercise,
            pacing_delay: DEFAULT_PACING_DELAY,
            variations: Observable::default(),
            error: Observable::default(),
            is_loading: Observable::default(),
            scope: FetchScope::new(),
        }
    }

    /// Sets the gap between variation requests.
    #[must_use]
    pub const fn with_pacing_delay(mut self, delay: Duration) -> Self {
        self.pacing_delay = delay;
        self
    }

    /// The exercise shown on this screen.
    #[must_use]
    pub const fn exercise(&self) -> &Exercise {
        &self.exercise
    }

    /// Display name, if the server sent one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.exercise.name.as_deref()
    }

    /// Raw HTML description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.exercise.description.as_deref()
    }

    /// Description with markup stripped.
    #[must_use]
    pub fn plain_description(&self) -> String {
        self.exercise.plain_description()
    }

    /// URL of the main image, if one is present and parses.
    #[must_use]
    pub fn main_image_url(&self) -> Option<Url> {
        self.exercise.main_image_parsed()
    }

    /// True if the exercise has an ID and no variations were loaded yet.
    #[must_use]
    pub fn should_fetch_details(&self) -> bool {
        self.exercise.id.is_some() && self.variations.read(Vec::is_empty)
    }

    /// Variations loaded so far (empty until a load succeeds).
    #[must_use]
    pub const fn variations(&self) -> &Observable<Vec<Exercise>> {
        &self.variations
    }

    /// Latest load failure.
    #[must_use]
    pub const fn error(&self) -> &Observable<Option<Arc<NetworkError>>> {
        &self.error
    }

    /// True while variations are being fetched.
    #[must_use]
    pub const fn is_loading(&self) -> &Observable<bool> {
        &self.is_loading
    }

    /// Stops delivering results; a pending load is abandoned.
    ///
    /// A load cancelled mid-flight clears `is_loading`; loads requested
    /// afterwards do nothing.
    pub fn cancel(&self) {
        self.scope.cancel();
    }
}

impl<S: ExerciseService> ExerciseDetailViewModel<S> {
    /// Fetches the exercise's variations one by one.
    ///
    /// Without variation IDs the list is set to empty and no request is
    /// made; the loading flag is not touched in that case.
    pub async fn load_variations(&self) {
        if self.scope.is_cancelled() {
            tracing::debug!("Detail view is cancelled, load skipped");
            return;
        }

        let ids = self.exercise.variation_ids();
        if ids.is_empty() {
            self.variations.set(Vec::new());
            return;
        }

        if !begin_loading(&self.is_loading) {
            tracing::debug!("Variations are already loading");
            return;
        }

        tracing::debug!(
            exercise = ?self.exercise.id,
            count = ids.len(),
            delay_ms = self.pacing_delay.as_millis(),
            "Loading variations"
        );

        let fetch = self.service.fetch_all_variations(ids, self.pacing_delay);
        let Some(result) = self.scope.run(fetch).await else {
            tracing::debug!("Variation load cancelled");
            self.is_loading.set(false);
            return;
        };

        match result {
            Ok(variations) => self.variations.set(variations),
            Err(e) => {
                tracing::warn!(exercise = ?self.exercise.id, error = %e, "Failed to load variations");
                self.error.set(Some(Arc::new(e)));
            }
        }

        self.is_loading.set(false);
    }
}
