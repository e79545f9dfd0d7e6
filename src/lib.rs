//! # patternkit
//!
//! **Patternkit** is a study library of the classic object-oriented design
//! patterns, rendered as small, tested, idiomatic Rust modules.
//!
//! The centerpiece is the Observer / Publisher-Subscriber mechanism - the
//! one pattern in the collection with a reusable contract
//! (register/unregister/notify) - implemented three ways. The remaining
//! patterns live as self-contained demonstrations under
//! [`behavioral`], [`creational`] and [`structural`].
//!
//! ## Architecture
//! ### The observer core, three renditions
//! ```text
//!   Subject<T> (single-threaded)         SharedSubject<T> (one mutex)
//!   ┌─────────────────────────┐          ┌─────────────────────────┐
//!   │ state: T                │          │ Mutex<{ state, list }>  │
//!   │ observers: Vec<Arc<dyn>>│          │ snapshot, then notify   │
//!   └──────────┬──────────────┘          └──────────┬──────────────┘
//!              │ set_state(next)                    │ set_state(next)
//!              ▼                                    ▼
//!      update(&state) per observer,         update(&state) per snapshot
//!      registration order, fail-fast        entry, outside the lock
//!
//!   Hub<E> + SubscriberSet<E> (async)
//!   ┌───────────┐    forward()    ┌──────────────────────────────┐
//!   │ broadcast │ ──────────────► │ per-subscriber queue + worker│
//!   └───────────┘                 │ panic isolation, FIFO each   │
//!                                 └──────────────────────────────┘
//! ```
//!
//! ## Features
//! | Area            | Description                                         | Key types / traits                  |
//! |-----------------|-----------------------------------------------------|-------------------------------------|
//! | **Observer**    | Synchronous subject with FIFO, fail-fast passes.    | [`Subject`], [`Observe`]            |
//! | **Shared**      | The same contract across threads, one lock.         | [`SharedSubject`]                   |
//! | **PubSub**      | Async broadcast + fan-out with bounded queues.      | [`Hub`], [`Subscribe`], [`SubscriberSet`] |
//! | **Errors**      | Typed, labeled errors for passes and lookups.       | [`NotifyError`], [`DispatchError`]  |
//! | **Catalog**     | The remaining classic patterns, one module each.    | [`behavioral`], [`creational`], [`structural`] |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`ConsoleLogger`] subscriber
//!   _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use patternkit::{Observe, Subject, UpdateError};
//!
//! struct PriceTag {
//!     seen: Mutex<Vec<i64>>,
//! }
//!
//! impl Observe<i64> for PriceTag {
//!     fn update(&self, price: &i64) -> Result<(), UpdateError> {
//!         self.seen.lock().unwrap().push(*price);
//!         Ok(())
//!     }
//! }
//!
//! let tag = Arc::new(PriceTag { seen: Mutex::new(Vec::new()) });
//! let mut product = Subject::new(0i64);
//! product.register(tag.clone());
//!
//! product.set_state(115)?;
//! assert_eq!(*tag.seen.lock().unwrap(), vec![115]);
//! # Ok::<(), patternkit::NotifyError>(())
//! ```

pub mod behavioral;
pub mod creational;
mod error;
pub mod observer;
pub mod pubsub;
pub mod structural;

// ---- Public re-exports ----

pub use error::{DispatchError, NotifyError, UpdateError};
pub use observer::{Observe, SharedSubject, Subject};
pub use pubsub::{forward, Hub, HubConfig, Subscribe, SubscriberSet};

// Optional: expose a simple built-in logger subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use pubsub::ConsoleLogger;
