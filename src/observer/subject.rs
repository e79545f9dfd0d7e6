//! # Subject: single-threaded observable state holder.
//!
//! [`Subject`] owns a value and an ordered list of registered observers.
//! `set_state` installs the new value, then synchronously notifies every
//! observer in registration order before returning.
//!
//! ## Re-entrancy
//! Observers receive `&S` and the pass holds `&self`, so the borrow
//! checker statically rules out registering/unregistering from inside
//! `update`. That is this type's mutation-during-notification policy;
//! [`SharedSubject`](crate::observer::SharedSubject) relaxes it.

use std::sync::Arc;

use crate::error::NotifyError;

use super::Observe;

/// Observable state holder with ordered, duplicate-tolerant registration.
///
/// ### Properties
/// - **FIFO**: observers are notified in registration order.
/// - **At-least-once per registration**: duplicates are not collapsed; an
///   observer registered twice is updated twice per pass.
/// - **Fail-fast**: the first observer error aborts the pass and is
///   returned to the caller; earlier observers have already run and the
///   new state stays installed.
pub struct Subject<S> {
    state: S,
    observers: Vec<Arc<dyn Observe<S>>>,
}

impl<S> Subject<S> {
    /// Creates a subject with the given initial state and no observers.
    pub fn new(initial: S) -> Self {
        Self {
            state: initial,
            observers: Vec::new(),
        }
    }

    /// Current state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Appends `observer` to the notification list.
    ///
    /// Duplicates are permitted: registering the same observer again is
    /// not an error and means one extra `update` per pass.
    pub fn register(&mut self, observer: Arc<dyn Observe<S>>) {
        self.observers.push(observer);
    }

    /// Removes the first entry pointing at the same observer.
    ///
    /// Matching is by allocation identity (`Arc::ptr_eq`), not value
    /// equality. A no-op, not an error, if the observer is absent.
    pub fn unregister(&mut self, observer: &Arc<dyn Observe<S>>) {
        if let Some(pos) = self
            .observers
            .iter()
            .position(|o| Arc::ptr_eq(o, observer))
        {
            self.observers.remove(pos);
        }
    }

    /// Number of registered entries (duplicates counted).
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// True if no observers are registered.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Installs `next`, then synchronously notifies all observers.
    ///
    /// # Errors
    /// Propagates the first observer failure (fail-fast). The state is
    /// installed before the pass starts and stays installed on error.
    pub fn set_state(&mut self, next: S) -> Result<(), NotifyError> {
        self.state = next;
        self.notify_all()
    }

    /// Runs one notification pass over the current observer list.
    ///
    /// Calls `update(&state)` exactly once per registered entry, in
    /// registration order.
    ///
    /// # Errors
    /// Stops at the first failing observer and reports it.
    pub fn notify_all(&self) -> Result<(), NotifyError> {
        for observer in &self.observers {
            observer
                .update(&self.state)
                .map_err(|source| NotifyError::ObserverFailed {
                    observer: observer.name(),
                    source,
                })?;
        }
        Ok(())
    }
}
