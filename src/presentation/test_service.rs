//! Scripted [`ExerciseService`] for view model tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::Notify;

use crate::api::{ExerciseService, NetworkError};
use crate::model::{Exercise, ExercisePage};
use crate::test_fixtures::{exercise_json, page_json};

pub fn exercise(id: i64) -> Exercise {
    serde_json::from_str(&exercise_json(id)).unwrap()
}

pub fn page() -> ExercisePage {
    serde_json::from_str(&page_json()).unwrap()
}

/// Exercise without variation IDs.
pub fn lone_exercise(id: i64) -> Exercise {
    Exercise {
        variations: Some(Vec::new()),
        ..exercise(id)
    }
}

/// Replays scripted results. When gated, every call waits for a
/// notification before answering.
#[derive(Debug, Default)]
pub struct MockService {
    pages: Mutex<VecDeque<Result<ExercisePage, NetworkError>>>,
    variations: Mutex<VecDeque<Result<Vec<Exercise>, NetworkError>>>,
    page_calls: Mutex<Vec<Option<String>>>,
    variation_calls: Mutex<Vec<(Vec<i64>, Duration)>>,
    gate: Option<Arc<Notify>>,
}

impl MockService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    pub fn with_page(self, page: Result<ExercisePage, NetworkError>) -> Self {
        self.pages.lock().unwrap().push_back(page);
        self
    }

    pub fn with_variations(self, variations: Result<Vec<Exercise>, NetworkError>) -> Self {
        self.variations.lock().unwrap().push_back(variations);
        self
    }

    /// Cursors passed to page fetches; `None` for the first page.
    pub fn page_calls(&self) -> Vec<Option<String>> {
        self.page_calls.lock().unwrap().clone()
    }

    pub fn variation_calls(&self) -> Vec<(Vec<i64>, Duration)> {
        self.variation_calls.lock().unwrap().clone()
    }

    async fn wait_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
    }

    async fn next_page(&self, cursor: Option<String>) -> Result<ExercisePage, NetworkError> {
        self.page_calls.lock().unwrap().push(cursor);
        self.wait_gate().await;
        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .expect("MockService ran out of pages")
    }
}

impl ExerciseService for MockService {
    async fn fetch_exercises(&self) -> Result<ExercisePage, NetworkError> {
        self.next_page(None).await
    }

    async fn fetch_page(&self, cursor: &str) -> Result<ExercisePage, NetworkError> {
        self.next_page(Some(cursor.to_string())).await
    }

    async fn fetch_exercise(&self, id: i64) -> Result<Exercise, NetworkError> {
        self.wait_gate().await;
        Ok(exercise(id))
    }

    async fn fetch_all_variations(
        &self,
        ids: &[i64],
        delay: Duration,
    ) -> Result<Vec<Exercise>, NetworkError> {
        self.variation_calls
            .lock()
            .unwrap()
            .push((ids.to_vec(), delay));
        self.wait_gate().await;
        self.variations
            .lock()
            .unwrap()
            .pop_front()
            .expect("MockService ran out of variations")
    }
}
