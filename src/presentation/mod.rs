//! Presentation adapters over the exercise service.
//!
//! View models expose their state as [`Observable`] values and run every
//! fetch inside a [`FetchScope`] they own. Renderers (the CLI, or any UI
//! shell) read or subscribe to the observables; they never touch the
//! network directly.

mod detail;
mod exercises;
mod message;
mod observable;
mod scope;

#[cfg(test)]
mod test_service;

pub use detail::ExerciseDetailViewModel;
pub use exercises::ExercisesViewModel;
pub use message::{GENERIC_NETWORK_MESSAGE, user_message};
pub use observable::Observable;
pub use scope::FetchScope;

/// Flips `flag` to true unless it already is. Returns whether it flipped.
fn begin_loading(flag: &Observable<bool>) -> bool {
    flag.update_if(|loading| !std::mem::replace(loading, true))
}
