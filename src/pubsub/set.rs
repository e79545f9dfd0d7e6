//! # SubscriberSet: non-blocking fan-out over multiple subscribers.
//!
//! [`SubscriberSet`] distributes each event to multiple subscribers
//! **without awaiting** their processing.
//!
//! ## What it guarantees
//! - `emit(&E)` returns immediately.
//! - Per-subscriber FIFO (queue order).
//! - Panics inside subscribers are caught and reported (isolation).
//!
//! ## What it does **not** guarantee
//! - No global ordering across different subscribers.
//! - No retries on queue overflow (events are dropped for that subscriber).
//!
//! ## Diagram
//! ```text
//!    emit(&E)
//!        │                        (Arc-clone per subscriber)
//!        ├────────────────► [queue S1] ─► worker S1 ─► on_event()
//!        ├────────────────► [queue S2] ─► worker S2 ─► on_event()
//!        └────────────────► [queue SN] ─► worker SN ─► on_event()
//! ```

use std::sync::Arc;

use futures::FutureExt;
use tokio::{sync::mpsc, task::JoinHandle};
use tokio_util::sync::CancellationToken;

use super::{Hub, Subscribe};

/// Per-subscriber channel with metadata.
struct SubscriberChannel<E> {
    name: &'static str,
    sender: mpsc::Sender<Arc<E>>,
}

/// Composite fan-out with per-subscriber bounded queues and worker tasks.
pub struct SubscriberSet<E> {
    channels: Vec<SubscriberChannel<E>>,
    workers: Vec<JoinHandle<()>>,
}

impl<E: Send + Sync + 'static> SubscriberSet<E> {
    /// Creates a new set and spawns one worker per subscriber.
    #[must_use]
    pub fn new(subs: Vec<Arc<dyn Subscribe<E>>>) -> Self {
        let mut channels = Vec::with_capacity(subs.len());
        let mut workers = Vec::with_capacity(subs.len());

        for sub in subs {
            let cap = sub.queue_capacity().max(1);
            let name = sub.name();
            let (tx, mut rx) = mpsc::channel::<Arc<E>>(cap);
            let s = Arc::clone(&sub);

            let handle = tokio::spawn(async move {
                while let Some(ev) = rx.recv().await {
                    let fut = s.on_event(ev.as_ref());
                    if let Err(panic_err) = std::panic::AssertUnwindSafe(fut).catch_unwind().await {
                        eprintln!(
                            "[patternkit] subscriber '{}' panicked: {:?}",
                            s.name(),
                            panic_err
                        );
                    }
                }
            });

            channels.push(SubscriberChannel { name, sender: tx });
            workers.push(handle);
        }

        Self { channels, workers }
    }

    /// Fan-out one event to all subscribers (non-blocking).
    ///
    /// If a subscriber's queue is full or closed, the event is dropped for
    /// it and a warning names the subscriber.
    pub fn emit(&self, event: &E)
    where
        E: Clone,
    {
        let ev = Arc::new(event.clone());
        for channel in &self.channels {
            match channel.sender.try_send(Arc::clone(&ev)) {
                Ok(()) => {}
                Err(mpsc::error::TrySendError::Full(_)) => {
                    eprintln!(
                        "[patternkit] subscriber '{}' dropped event: queue full",
                        channel.name
                    );
                }
                Err(mpsc::error::TrySendError::Closed(_)) => {
                    eprintln!(
                        "[patternkit] subscriber '{}' dropped event: worker closed",
                        channel.name
                    );
                }
            }
        }
    }

    /// Graceful shutdown: close all queues and await worker completion.
    ///
    /// Already-queued events are still delivered before workers exit.
    pub async fn shutdown(self) {
        drop(self.channels);
        for h in self.workers {
            let _ = h.await;
        }
    }

    /// True if there are no subscribers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Number of subscribers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.channels.len()
    }
}

/// Bridges a [`Hub`] into a [`SubscriberSet`].
///
/// Spawns a task that pumps every event from a fresh hub receiver into
/// `set.emit` until the hub closes (all senders dropped) or `token` is
/// cancelled. A lagging bridge skips the oldest events and keeps going
/// (warn).
pub fn forward<E>(
    hub: &Hub<E>,
    set: Arc<SubscriberSet<E>>,
    token: CancellationToken,
) -> JoinHandle<()>
where
    E: Clone + Send + Sync + 'static,
{
    use tokio::sync::broadcast::error::RecvError;

    let mut rx = hub.subscribe();
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                received = rx.recv() => match received {
                    Ok(ev) => set.emit(&ev),
                    Err(RecvError::Lagged(n)) => {
                        eprintln!("[patternkit] forward bridge lagged, skipped {n} events");
                    }
                    Err(RecvError::Closed) => break,
                },
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    struct Recorder {
        seen: Mutex<Vec<u32>>,
    }

    impl Recorder {
        fn arc() -> Arc<Self> {
            Arc::new(Self {
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl Subscribe<u32> for Recorder {
        async fn on_event(&self, event: &u32) {
            self.seen.lock().unwrap().push(*event);
        }

        fn name(&self) -> &'static str {
            "recorder"
        }
    }

    struct PanicsOnOdd;

    #[async_trait]
    impl Subscribe<u32> for PanicsOnOdd {
        async fn on_event(&self, event: &u32) {
            if event % 2 == 1 {
                panic!("odd event {event}");
            }
        }

        fn name(&self) -> &'static str {
            "panics_on_odd"
        }
    }

    #[tokio::test]
    async fn test_per_subscriber_fifo() {
        let recorder = Recorder::arc();
        let set = SubscriberSet::new(vec![recorder.clone() as Arc<dyn Subscribe<u32>>]);

        for i in 0..10 {
            set.emit(&i);
        }
        set.shutdown().await;

        assert_eq!(*recorder.seen.lock().unwrap(), (0..10).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn test_panicking_subscriber_is_isolated() {
        let recorder = Recorder::arc();
        let set = SubscriberSet::new(vec![
            Arc::new(PanicsOnOdd) as Arc<dyn Subscribe<u32>>,
            recorder.clone() as Arc<dyn Subscribe<u32>>,
        ]);

        for i in 0..4 {
            set.emit(&i);
        }
        set.shutdown().await;

        // The panicking neighbour lost nothing for the recorder.
        assert_eq!(*recorder.seen.lock().unwrap(), vec![0, 1, 2, 3]);
    }

    #[tokio::test]
    async fn test_forward_drains_hub_until_closed() {
        let hub: Hub<u32> = Hub::new(16);
        let recorder = Recorder::arc();
        let set = Arc::new(SubscriberSet::new(vec![
            recorder.clone() as Arc<dyn Subscribe<u32>>
        ]));

        let bridge = forward(&hub, set.clone(), CancellationToken::new());
        hub.publish(7);
        hub.publish(8);
        drop(hub); // closes the channel; the bridge drains and exits

        bridge.await.unwrap();
        let set = Arc::try_unwrap(set).ok().unwrap();
        set.shutdown().await;

        assert_eq!(*recorder.seen.lock().unwrap(), vec![7, 8]);
    }

    #[tokio::test]
    async fn test_forward_stops_on_cancellation() {
        let hub: Hub<u32> = Hub::new(16);
        let set = Arc::new(SubscriberSet::new(Vec::new()));
        let token = CancellationToken::new();

        let bridge = forward(&hub, set, token.clone());
        token.cancel();
        bridge.await.unwrap();
    }

    #[tokio::test]
    async fn test_len_and_empty() {
        let set: SubscriberSet<u32> = SubscriberSet::new(Vec::new());
        assert!(set.is_empty());

        let set = SubscriberSet::new(vec![Recorder::arc() as Arc<dyn Subscribe<u32>>]);
        assert_eq!(set.len(), 1);
        set.shutdown().await;
    }
}
