//! # Builder: stepwise construction with a fluent API.
//!
//! [`RaptorBuilder`] separates how a [`Raptor`] is assembled from the
//! finished value. Required data goes into the builder's constructor;
//! optional traits are `with_*` steps; `build()` produces the bird.

/// A finished specimen.
#[derive(Debug, Clone, PartialEq)]
pub struct Raptor {
    specimen_id: String,
    speed: Option<u32>,
    plumage: Option<String>,
}

impl Raptor {
    /// Starts a builder for the given specimen id.
    pub fn builder(specimen_id: impl Into<String>) -> RaptorBuilder {
        RaptorBuilder::new(specimen_id)
    }

    /// Specimen identifier.
    pub fn specimen_id(&self) -> &str {
        &self.specimen_id
    }

    /// Top speed, if measured.
    pub fn speed(&self) -> Option<u32> {
        self.speed
    }

    /// Plumage description, if recorded.
    pub fn plumage(&self) -> Option<&str> {
        self.plumage.as_deref()
    }
}

/// Builder for [`Raptor`] with fluent `with_*` steps.
#[derive(Debug, Clone)]
pub struct RaptorBuilder {
    specimen_id: String,
    speed: Option<u32>,
    plumage: Option<String>,
}

impl RaptorBuilder {
    /// Creates a builder with the required specimen id.
    pub fn new(specimen_id: impl Into<String>) -> Self {
        Self {
            specimen_id: specimen_id.into(),
            speed: None,
            plumage: None,
        }
    }

    /// Records the measured top speed.
    pub fn with_speed(mut self, speed: u32) -> Self {
        self.speed = Some(speed);
        self
    }

    /// Records the plumage.
    pub fn with_plumage(mut self, plumage: impl Into<String>) -> Self {
        self.plumage = Some(plumage.into());
        self
    }

    /// Finishes construction.
    pub fn build(self) -> Raptor {
        Raptor {
            specimen_id: self.specimen_id,
            speed: self.speed,
            plumage: self.plumage,
        }
    }
}
