//! Single-value observable state.

use tokio::sync::watch;

/// A current value that observers can read or subscribe to.
///
/// Only the owning view model writes; everyone else gets a
/// [`watch::Receiver`] and sees each replacement.
#[derive(Debug)]
pub struct Observable<T> {
    tx: watch::Sender<T>,
}

impl<T> Observable<T> {
    /// Creates an observable holding `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Subscribes to future replacements. The receiver starts at the
    /// current value, marked as seen.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    /// Runs `f` against the current value without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.tx.borrow())
    }

    /// Replaces the value, waking every subscriber.
    pub(crate) fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Modifies the value in place; subscribers are notified only when
    /// `f` returns true. Returns what `f` returned.
    pub(crate) fn update_if(&self, f: impl FnOnce(&mut T) -> bool) -> bool {
        self.tx.send_if_modified(f)
    }
}

impl<T: Clone> Observable<T> {
    /// Returns a copy of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
