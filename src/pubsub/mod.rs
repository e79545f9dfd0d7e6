//! # Publisher-Subscriber, asynchronous rendition.
//!
//! The synchronous [`observer`](crate::observer) module notifies on the
//! caller's thread; this module is the same one-to-many idea adapted to an
//! async environment: publishers broadcast through a [`Hub`], and a
//! [`SubscriberSet`] fans events out to independent subscribers through
//! per-subscriber bounded queues.
//!
//! ## Architecture
//! ```text
//! Publishers (many):                    Fan-out:
//!   producer 1 ──┐
//!   producer 2 ──┼──► Hub ──► forward() ──► SubscriberSet
//!   producer N ──┘ (broadcast)                  │
//!                                 ┌─────────────┼─────────────┐
//!                                 ▼             ▼             ▼
//!                             [queue S1]    [queue S2]    [queue SN]
//!                                 ▼             ▼             ▼
//!                             worker S1     worker S2     worker SN
//!                                 ▼             ▼             ▼
//!                             on_event()    on_event()    on_event()
//! ```
//!
//! ## Guarantees
//! - `publish` and `emit` never block.
//! - Per-subscriber FIFO; no ordering across subscribers.
//! - Panics inside subscribers are caught and reported, never propagate.
//!
//! ## Non-guarantees
//! - No delivery durability: events published with no receivers are lost,
//!   and a full subscriber queue drops events for that subscriber (warn).

mod config;
mod hub;
mod set;
mod subscribe;

#[cfg(feature = "logging")]
mod log;

pub use config::HubConfig;
pub use hub::Hub;
pub use set::{forward, SubscriberSet};
pub use subscribe::Subscribe;

#[cfg(feature = "logging")]
pub use log::ConsoleLogger;
