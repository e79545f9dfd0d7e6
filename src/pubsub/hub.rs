//! # Hub: broadcast channel for events.
//!
//! [`Hub`] is a thin wrapper around [`tokio::sync::broadcast`] that gives
//! multiple publishers a non-blocking `publish` and hands out independent
//! receivers.
//!
//! ## Rules
//! - **Non-blocking publish**: `publish()` never blocks or awaits.
//! - **Bounded capacity**: one ring buffer stores recent events for all
//!   receivers.
//! - **Lag handling**: slow receivers get `RecvError::Lagged(n)` and skip
//!   the `n` oldest items.
//! - **No persistence**: events published while no receiver is subscribed
//!   are dropped.

use tokio::sync::broadcast;

use super::HubConfig;

/// Broadcast channel for a clonable event type.
///
/// ### Properties
/// - **Non-blocking**: `publish()` returns immediately.
/// - **Fire-and-forget**: no delivery or durability guarantees.
/// - **Cloneable**: cheap to clone (internally an `Arc`-backed sender).
#[derive(Clone, Debug)]
pub struct Hub<E> {
    tx: broadcast::Sender<E>,
}

impl<E: Clone + Send + 'static> Hub<E> {
    /// Creates a hub with the given channel capacity (clamped to 1).
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel::<E>(capacity.max(1));
        Self { tx }
    }

    /// Creates a hub from a [`HubConfig`].
    pub fn with_config(cfg: HubConfig) -> Self {
        Self::new(cfg.capacity_clamped())
    }

    /// Publishes an event to all active receivers.
    ///
    /// Takes ownership; the channel clones per receiver. With no active
    /// receivers the event is dropped and this still returns immediately.
    pub fn publish(&self, event: E) {
        let _ = self.tx.send(event);
    }

    /// Publishes a borrowed event by cloning it.
    pub fn publish_ref(&self, event: &E) {
        let _ = self.tx.send(event.clone());
    }

    /// Creates a new receiver observing subsequent events.
    ///
    /// Each call creates an independent receiver; a receiver only sees
    /// events sent after it subscribed.
    pub fn subscribe(&self) -> broadcast::Receiver<E> {
        self.tx.subscribe()
    }

    /// Number of currently active receivers.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}
