//! # Observer / Publisher-Subscriber: the synchronous core.
//!
//! One-to-many dependency between objects: when the subject changes state,
//! every registered observer is told, in registration order, on the
//! caller's thread, before `set_state` returns.
//!
//! ## Architecture
//! ```text
//!   set_state(next)
//!        │ install next
//!        ▼
//!   notify_all() ──► observer #1.update(&state)
//!                ──► observer #2.update(&state)
//!                ──► observer #N.update(&state)
//!        │
//!        └─ first Err aborts the pass (fail-fast) ──► NotifyError
//! ```
//!
//! ## Contents
//! - [`Observe`] - the capability contract (one required operation).
//! - [`Subject`] - single-threaded subject; `&mut self` mutators.
//! - [`SharedSubject`] - the same contract behind one mutex, for use
//!   across threads.
//!
//! ## Rules
//! - Registration order is notification order (FIFO).
//! - Duplicates are permitted: registering the same observer twice means
//!   it is updated twice per pass.
//! - `unregister` removes the first matching entry and is a no-op when the
//!   observer is absent.
//! - Observers see the state installed by the triggering `set_state`,
//!   never a stale value.

mod observe;
mod shared;
mod subject;

pub use observe::Observe;
pub use shared::SharedSubject;
pub use subject::Subject;
