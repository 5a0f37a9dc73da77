//! View model of the exercise list screen.

use std::future::Future;
use std::sync::Arc;

use crate::api::{ExerciseService, NetworkError};
use crate::model::{Exercise, ExercisePage};

use super::{ExerciseDetailViewModel, FetchScope, Observable, begin_loading};

/// State and actions of the exercise list.
///
/// `exercises` starts empty and is replaced wholesale by every successful
/// page load. `error` stays `None` until a load fails and then holds the
/// latest failure; it is never cleared automatically. Only one load runs at
/// a time; a load requested while another is in flight is ignored.
#[derive(Debug)]
pub struct ExercisesViewModel<S> {
    service: S,
    exercises: Observable<Vec<Exercise>>,
    total_count: Observable<Option<i64>>,
    next_page: Observable<Option<String>>,
    error: Observable<Option<Arc<NetworkError>>>,
    is_loading: Observable<bool>,
    scope: FetchScope,
}

impl<S> ExercisesViewModel<S> {
    /// Creates the view model around an exercise service.
    #[must_use]
    pub fn new(service: S) -> Self {
        Self {
            service,
            exercises: Observable::default(),
            total_count: Observable::default(),
            next_page: Observable::default(),
            error: Observable::default(),
            is_loading: Observable::default(),
            scope: FetchScope::new(),
        }
    }

    /// Exercises of the most recently loaded page.
    #[must_use]
    pub const fn exercises(&self) -> &Observable<Vec<Exercise>> {
        &self.exercises
    }

    /// Total number of exercises reported by the server.
    #[must_use]
    pub const fn total_count(&self) -> &Observable<Option<i64>> {
        &self.total_count
    }

    /// Cursor of the page after the current one.
    #[must_use]
    pub const fn next_page(&self) -> &Observable<Option<String>> {
        &self.next_page
    }

    /// Latest load failure.
    #[must_use]
    pub const fn error(&self) -> &Observable<Option<Arc<NetworkError>>> {
        &self.error
    }

    /// True while a load is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> &Observable<bool> {
        &self.is_loading
    }

    /// Stops delivering results; pending loads are abandoned.
    ///
    /// A load cancelled mid-flight clears `is_loading`; loads requested
    /// afterwards do nothing.
    pub fn cancel(&self) {
        self.scope.cancel();
    }
}

impl<S: Clone> ExercisesViewModel<S> {
    /// Creates the detail screen's view model, sharing this screen's service.
    #[must_use]
    pub fn detail_view_model(&self, exercise: Exercise) -> ExerciseDetailViewModel<S> {
        ExerciseDetailViewModel::new(self.service.clone(), exercise)
    }
}

impl<S: ExerciseService> ExercisesViewModel<S> {
    /// Loads the first page of exercises.
    pub async fn load_exercises(&self) {
        self.load_page(self.service.fetch_exercises()).await;
    }

    /// Loads the page after the current one. Does nothing on the last page.
    pub async fn load_next_page(&self) {
        let Some(cursor) = self.next_page.get() else {
            tracing::debug!("No next page to load");
            return;
        };
        self.load_page(self.service.fetch_page(&cursor)).await;
    }

    async fn load_page(&self, fetch: impl Future<Output = Result<ExercisePage, NetworkError>>) {
        if self.scope.is_cancelled() {
            tracing::debug!("Exercise list is cancelled, load skipped");
            return;
        }
        if !begin_loading(&self.is_loading) {
            tracing::debug!("Exercise list is already loading");
            return;
        }

        let Some(result) = self.scope.run(fetch).await else {
            tracing::debug!("Exercise list load cancelled");
            self.is_loading.set(false);
            return;
        };

        match result {
            Ok(page) => {
                tracing::debug!(
                    count = ?page.count,
                    received = page.exercises().len(),
                    "Exercise page loaded"
                );
                self.total_count.set(page.count);
                self.next_page.set(page.next);
                self.exercises.set(page.results.unwrap_or_default());
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load exercises");
                self.error.set(Some(Arc::new(e)));
            }
        }

        self.is_loading.set(false);
    }
}
