//! # Core observer trait
//!
//! `Observe` is the capability an object must expose to be registered on a
//! [`Subject`](crate::observer::Subject): a single `update` operation.
//! The subject is agnostic to observer internals; anything implementing
//! the trait can be registered.

use crate::error::UpdateError;

/// Contract for state-change observers.
///
/// Called synchronously from the subject's notification pass, on the
/// thread that called `set_state`.
pub trait Observe<S>: Send + Sync {
    /// Handle one state change.
    ///
    /// # Parameters
    /// - `state`: the subject's state as installed by the triggering
    ///   `set_state` call (never a snapshot from registration time).
    ///
    /// # Errors
    /// Returning `Err` aborts the notification pass (fail-fast) and the
    /// error reaches the `set_state` caller wrapped in
    /// [`NotifyError`](crate::error::NotifyError).
    fn update(&self, state: &S) -> Result<(), UpdateError>;

    /// Human-readable name (for error reports).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
