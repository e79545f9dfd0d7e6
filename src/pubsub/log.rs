//! # Simple logging subscriber for debugging and demos.
//!
//! [`ConsoleLogger`] prints events to stdout in a human-readable format.
//! Enabled via the `logging` feature; primarily useful for development
//! and the runnable demos.
//!
//! ## Output format
//! ```text
//! [event] price changed: 115
//! [event] price changed: 200
//! ```

use std::fmt::Display;

use async_trait::async_trait;

use super::Subscribe;

/// Stdout logging subscriber for any `Display` event type.
///
/// Not intended for production use - implement a custom
/// [`Subscribe`](crate::pubsub::Subscribe) for structured logging or
/// metrics collection.
#[derive(Default)]
pub struct ConsoleLogger;

#[async_trait]
impl<E> Subscribe<E> for ConsoleLogger
where
    E: Display + Send + Sync + 'static,
{
    async fn on_event(&self, event: &E) {
        println!("[event] {event}");
    }

    fn name(&self) -> &'static str {
        "console_logger"
    }
}
