//! Observer demo: a product price with two pricing observers.
//!
//! Run with: `cargo run --example pricing`

use std::sync::Arc;

use patternkit::{Observe, Subject, UpdateError};

/// Adds the sales fee on top of whatever base price it observes.
struct Fees;

impl Observe<f64> for Fees {
    fn update(&self, price: &f64) -> Result<(), UpdateError> {
        println!("[fees]   base {price:>7.2} -> with fees   {:>7.2}", price * 1.2);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "fees"
    }
}

/// Computes the target sale price.
struct Profit;

impl Observe<f64> for Profit {
    fn update(&self, price: &f64) -> Result<(), UpdateError> {
        println!("[profit] base {price:>7.2} -> with margin {:>7.2}", price * 2.0);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "profit"
    }
}

fn main() -> Result<(), patternkit::NotifyError> {
    let mut product = Subject::new(0.0f64);

    let fees: Arc<dyn Observe<f64>> = Arc::new(Fees);
    let profit: Arc<dyn Observe<f64>> = Arc::new(Profit);
    product.register(fees.clone());
    product.register(profit);

    println!("setting base price to 115");
    product.set_state(115.0)?;

    println!("unregistering the fee observer, setting base price to 200");
    product.unregister(&fees);
    product.set_state(200.0)?;

    Ok(())
}
