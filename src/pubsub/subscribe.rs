//! # Async subscriber trait
//!
//! `Subscribe` is the extension point for plugging event handlers into the
//! fan-out. Each subscriber is driven by a dedicated worker loop fed from
//! a bounded queue owned by the
//! [`SubscriberSet`](crate::pubsub::SubscriberSet).
//!
//! ## Contract
//! - Implementations may be slow (I/O, batching) - they do **not** block
//!   the publisher nor other subscribers.
//! - Each subscriber declares its preferred queue depth via
//!   [`Subscribe::queue_capacity`]. On overflow, events for that
//!   subscriber are dropped (warn).

use async_trait::async_trait;

/// Contract for async event subscribers.
///
/// Called from a subscriber-dedicated worker task. Implementations should
/// avoid blocking the runtime (prefer async I/O and cooperative waits).
#[async_trait]
pub trait Subscribe<E>: Send + Sync + 'static {
    /// Handle a single event for this subscriber.
    async fn on_event(&self, event: &E);

    /// Human-readable name (for overflow/panic warnings).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Preferred capacity of this subscriber's queue.
    fn queue_capacity(&self) -> usize {
        1024
    }
}
