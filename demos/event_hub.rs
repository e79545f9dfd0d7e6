//! PubSub demo: prices broadcast through a hub to logging subscribers.
//!
//! Run with: `cargo run --example event_hub --features logging`

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use patternkit::{forward, ConsoleLogger, Hub, Subscribe, SubscriberSet};

#[derive(Clone, Debug)]
struct PriceChanged {
    product: &'static str,
    price: f64,
}

impl fmt::Display for PriceChanged {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "price changed: {} -> {:.2}", self.product, self.price)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let hub: Hub<PriceChanged> = Hub::new(64);
    let set = Arc::new(SubscriberSet::new(vec![
        Arc::new(ConsoleLogger) as Arc<dyn Subscribe<PriceChanged>>
    ]));

    let token = CancellationToken::new();
    let bridge = forward(&hub, set.clone(), token.clone());

    for price in [115.0, 138.0, 200.0] {
        hub.publish(PriceChanged {
            product: "apple-pie",
            price,
        });
    }

    // Let the fan-out drain, then shut down cleanly.
    tokio::time::sleep(Duration::from_millis(50)).await;
    token.cancel();
    bridge.await.expect("bridge task");

    if let Ok(set) = Arc::try_unwrap(set) {
        set.shutdown().await;
    }
}
