//! # Adapter: old interface over a new implementation.
//!
//! Existing callers quote shipping through [`QuoteShipping`]. The
//! refactored [`AdvancedShipping`] API is multi-step and incompatible;
//! [`ShippingAdapter`] keeps the old one-call contract alive on top of
//! it. Prices are integer cents.

/// The interface existing callers depend on.
pub trait QuoteShipping {
    /// Quotes a shipment in cents.
    fn request(&mut self, zip_start: &str, zip_end: &str, weight_lbs: u32) -> u32;
}

/// The legacy implementation behind the old interface.
#[derive(Debug, Default)]
pub struct Shipping;

impl QuoteShipping for Shipping {
    fn request(&mut self, _zip_start: &str, _zip_end: &str, _weight_lbs: u32) -> u32 {
        4975
    }
}

/// The new multi-step API. Not compatible with [`QuoteShipping`].
#[derive(Debug, Default)]
pub struct AdvancedShipping {
    authenticated: bool,
    start: Option<String>,
    destination: Option<String>,
}

impl AdvancedShipping {
    /// Creates an unauthenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Authenticates the session.
    pub fn login(&mut self, _token: &str) {
        self.authenticated = true;
    }

    /// Sets the origin zip.
    pub fn set_start(&mut self, start: &str) {
        self.start = Some(start.to_string());
    }

    /// Sets the destination zip.
    pub fn set_destination(&mut self, destination: &str) {
        self.destination = Some(destination.to_string());
    }

    /// Quotes the configured route in cents. The new carrier is cheaper.
    ///
    /// Returns 0 when the session is unauthenticated or the route is
    /// incomplete.
    pub fn calculate(&self, _weight_lbs: u32) -> u32 {
        if !self.authenticated || self.start.is_none() || self.destination.is_none() {
            return 0;
        }
        3950
    }
}

/// Adapts [`AdvancedShipping`] to the legacy [`QuoteShipping`] contract.
pub struct ShippingAdapter {
    shipping: AdvancedShipping,
}

impl ShippingAdapter {
    /// Wraps a fresh advanced session authenticated with `token`.
    pub fn new(token: &str) -> Self {
        let mut shipping = AdvancedShipping::new();
        shipping.login(token);
        Self { shipping }
    }
}

impl QuoteShipping for ShippingAdapter {
    fn request(&mut self, zip_start: &str, zip_end: &str, weight_lbs: u32) -> u32 {
        self.shipping.set_start(zip_start);
        self.shipping.set_destination(zip_end);
        self.shipping.calculate(weight_lbs)
    }
}
