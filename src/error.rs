//! Error types used across the pattern modules.
//!
//! This module defines three error types:
//!
//! - [`UpdateError`] - a failure raised by an observer's own `update` logic.
//! - [`NotifyError`] - raised by a notification pass; names the observer
//!   that failed and carries its [`UpdateError`] as the source.
//! - [`DispatchError`] - lookup failures in the pattern demonstrations
//!   (unknown mediator participant, missing memento snapshot).
//!
//! All types provide `as_label()` returning a short stable snake_case
//! label for logs and assertions.

use thiserror::Error;

/// Failure raised by an observer while handling an update.
///
/// Observers are arbitrary client code; the library does not interpret the
/// reason beyond carrying it to the caller of `set_state`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct UpdateError {
    /// Human-readable failure description.
    pub reason: String,
}

impl UpdateError {
    /// Creates an update error with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// # Errors produced by a notification pass.
///
/// A pass is fail-fast: the first observer failure aborts the pass and is
/// reported to the caller of `set_state`/`notify_all`. Observers notified
/// before the failing one have already run; the new state stays installed.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum NotifyError {
    /// An observer returned an error during `update`.
    #[error("observer '{observer}' failed during notification: {source}")]
    ObserverFailed {
        /// Name of the failing observer (see `Observe::name`).
        observer: &'static str,
        /// The observer's own failure.
        #[source]
        source: UpdateError,
    },
}

impl NotifyError {
    /// Returns a short stable label (snake_case) for use in logs/assertions.
    ///
    /// # Example
    /// ```
    /// use patternkit::{NotifyError, UpdateError};
    ///
    /// let err = NotifyError::ObserverFailed {
    ///     observer: "audit",
    ///     source: UpdateError::new("boom"),
    /// };
    /// assert_eq!(err.as_label(), "observer_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            NotifyError::ObserverFailed { .. } => "observer_failed",
        }
    }
}

/// # Errors produced by pattern demonstrations that look things up.
///
/// `register`-style operations never fail; only lookups do.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// A mediator was asked to route to a participant it does not know.
    #[error("unknown participant '{name}'")]
    UnknownParticipant {
        /// The recipient name that failed to resolve.
        name: String,
    },

    /// A caretaker was asked for a snapshot index it does not hold.
    #[error("no snapshot at index {index} (history holds {len})")]
    SnapshotMissing {
        /// Requested index.
        index: usize,
        /// Number of snapshots currently held.
        len: usize,
    },
}

impl DispatchError {
    /// Returns a short stable label (snake_case) for use in logs/assertions.
    pub fn as_label(&self) -> &'static str {
        match self {
            DispatchError::UnknownParticipant { .. } => "unknown_participant",
            DispatchError::SnapshotMissing { .. } => "snapshot_missing",
        }
    }
}
