//! # Facade: one simple call over several subsystems.
//!
//! [`ShopFacade::calc`] is the whole public surface: discount, fees and
//! shipping stay separate components, but callers price an order with a
//! single call and never learn the pipeline's shape.

/// Percentage discount subsystem.
#[derive(Debug, Default)]
struct Discount;

impl Discount {
    fn calc(&self, value: f64) -> f64 {
        value * 0.9
    }
}

/// Flat-rate shipping subsystem.
#[derive(Debug, Default)]
struct Shipping;

impl Shipping {
    fn calc(&self) -> f64 {
        5.0
    }
}

/// Processing-fee subsystem.
#[derive(Debug, Default)]
struct Fees;

impl Fees {
    fn calc(&self, value: f64) -> f64 {
        value * 1.05
    }
}

/// Unified storefront over the pricing subsystems.
#[derive(Debug, Default)]
pub struct ShopFacade {
    discount: Discount,
    shipping: Shipping,
    fees: Fees,
}

impl ShopFacade {
    /// Creates the facade with its subsystems.
    pub fn new() -> Self {
        Self::default()
    }

    /// Final price for an order: discount, then fees, plus shipping.
    pub fn calc(&self, price: f64) -> f64 {
        let price = self.discount.calc(price);
        let price = self.fees.calc(price);
        price + self.shipping.calc()
    }
}
