//! Application execution logic.
//!
//! Runs one CLI command against the exercise service and renders the
//! resulting view model state as text.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use wger_exercises::api::{ExerciseApi, ExerciseService, NetworkError};
use wger_exercises::config::{Command, ValidatedConfig};
use wger_exercises::model::Exercise;
use wger_exercises::presentation::{ExerciseDetailViewModel, ExercisesViewModel, user_message};
use wger_exercises::transport::ReqwestClient;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to build the HTTP client.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// A fetch failed.
    #[error("{}", user_message(.0))]
    Fetch(#[source] Arc<NetworkError>),
}

impl From<NetworkError> for RunError {
    fn from(error: NetworkError) -> Self {
        Self::Fetch(Arc::new(error))
    }
}

/// Executes `command` and returns the text to print.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or a fetch fails.
///
/// # Coverage Note
///
/// This function is excluded from coverage because it talks to the real API.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: ValidatedConfig, command: Command) -> Result<String, RunError> {
    let http = ReqwestClient::with_timeout(config.timeout).map_err(RunError::ClientBuild)?;
    let service = Arc::new(ExerciseApi::new(http, config.base_url));

    match command {
        Command::List { pages } => list(service, pages).await,
        Command::Show { id } => show(service, id).await,
        Command::Variations { id } => variations(service, id, config.pacing_delay).await,
        Command::Init { .. } => Ok(String::new()),
    }
}

/// Lists up to `pages` pages, following `next` cursors.
async fn list<S: ExerciseService>(service: S, pages: u32) -> Result<String, RunError> {
    let vm = ExercisesViewModel::new(service);
    let mut sections = Vec::new();

    for page in 0..pages.max(1) {
        if page == 0 {
            vm.load_exercises().await;
        } else if vm.next_page().read(Option::is_none) {
            tracing::debug!(page, "No more pages");
            break;
        } else {
            vm.load_next_page().await;
        }

        if let Some(error) = vm.error().get() {
            return Err(RunError::Fetch(error));
        }
        sections.push(vm.exercises().read(|exercises| render_list(exercises)));
    }

    let total = vm
        .total_count()
        .get()
        .map_or_else(|| "?".to_string(), |count| count.to_string());
    sections.push(format!("{total} exercises in total"));

    Ok(sections.join("\n"))
}

/// Shows one exercise.
async fn show<S: ExerciseService>(service: S, id: i64) -> Result<String, RunError> {
    let exercise = service.fetch_exercise(id).await?;
    let detail = ExerciseDetailViewModel::new(service, exercise);
    Ok(render_detail(&detail))
}

/// Shows one exercise followed by its variations.
async fn variations<S: ExerciseService>(
    service: S,
    id: i64,
    pacing_delay: Duration,
) -> Result<String, RunError> {
    let exercise = service.fetch_exercise(id).await?;
    let detail = ExerciseDetailViewModel::new(service, exercise).with_pacing_delay(pacing_delay);

    if detail.should_fetch_details() {
        detail.load_variations().await;
    }
    if let Some(error) = detail.error().get() {
        return Err(RunError::Fetch(error));
    }

    let variations = detail.variations().get();
    let listing = if variations.is_empty() {
        "No variations".to_string()
    } else {
        format!("Variations:\n{}", render_list(&variations))
    };

    Ok(format!("{}\n\n{listing}", render_detail(&detail)))
}

fn render_list(exercises: &[Exercise]) -> String {
    exercises.iter().map(render_row).collect::<Vec<_>>().join("\n")
}

fn render_row(exercise: &Exercise) -> String {
    let id = exercise
        .id
        .map_or_else(|| "?".to_string(), |id| id.to_string());
    let name = exercise.name.as_deref().unwrap_or("(unnamed)");

    match exercise.main_image_url() {
        Some(image) => format!("{id:>6}  {name}  [{image}]"),
        None => format!("{id:>6}  {name}"),
    }
}

fn render_detail<S>(detail: &ExerciseDetailViewModel<S>) -> String {
    let exercise = detail.exercise();
    let mut lines = vec![format!(
        "#{} {}",
        exercise
            .id
            .map_or_else(|| "?".to_string(), |id| id.to_string()),
        detail.name().unwrap_or("(unnamed)")
    )];

    if let Some(url) = detail.main_image_url() {
        lines.push(format!("Image: {url}"));
    }

    let ids = exercise.variation_ids();
    if !ids.is_empty() {
        let ids: Vec<_> = ids.iter().map(ToString::to_string).collect();
        lines.push(format!("Variation IDs: {}", ids.join(", ")));
    }

    let description = detail.plain_description();
    if !description.is_empty() {
        lines.push(String::new());
        lines.push(description);
    }

    lines.join("\n")
}
