//! # Flyweight: shared intrinsic state behind an interning pool.
//!
//! Thousands of computers share a handful of hardware specs. The
//! intrinsic part ([`ComputerSpec`]) is interned once per distinct
//! make/model in an explicitly constructed [`SpecPool`] and shared by
//! reference; the extrinsic part (memory, tag) stays per-computer.
//!
//! The pool is an owned value passed to whoever needs it - there is no
//! ambient global cache, so two pools never contaminate each other.

use std::collections::HashMap;
use std::sync::Arc;

/// Intrinsic, shared hardware description.
#[derive(Debug, PartialEq, Eq)]
pub struct ComputerSpec {
    make: String,
    model: String,
    processor: String,
}

impl ComputerSpec {
    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn processor(&self) -> &str {
        &self.processor
    }
}

/// Interning pool for [`ComputerSpec`], keyed by make and model.
#[derive(Debug, Default)]
pub struct SpecPool {
    specs: HashMap<(String, String), Arc<ComputerSpec>>,
}

impl SpecPool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared spec for make/model, creating it on first use.
    pub fn get(&mut self, make: &str, model: &str, processor: &str) -> Arc<ComputerSpec> {
        self.specs
            .entry((make.to_string(), model.to_string()))
            .or_insert_with(|| {
                Arc::new(ComputerSpec {
                    make: make.to_string(),
                    model: model.to_string(),
                    processor: processor.to_string(),
                })
            })
            .clone()
    }

    /// Number of distinct specs interned so far.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// True if nothing has been interned.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

/// One machine: shared spec plus per-machine extrinsic state.
#[derive(Debug)]
pub struct Computer {
    spec: Arc<ComputerSpec>,
    memory: String,
    tag: String,
}

impl Computer {
    /// The shared spec.
    pub fn spec(&self) -> &Arc<ComputerSpec> {
        &self.spec
    }

    pub fn make(&self) -> &str {
        self.spec.make()
    }

    pub fn memory(&self) -> &str {
        &self.memory
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

/// Inventory of computers, interning specs through its own pool.
#[derive(Debug, Default)]
pub struct Fleet {
    pool: SpecPool,
    computers: HashMap<String, Computer>,
}

impl Fleet {
    /// Creates an empty fleet with its own spec pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a machine under `tag`, sharing its spec through the pool.
    pub fn add(&mut self, make: &str, model: &str, processor: &str, memory: &str, tag: &str) {
        let spec = self.pool.get(make, model, processor);
        self.computers.insert(
            tag.to_string(),
            Computer {
                spec,
                memory: memory.to_string(),
                tag: tag.to_string(),
            },
        );
    }

    /// Looks up a machine by tag.
    pub fn get(&self, tag: &str) -> Option<&Computer> {
        self.computers.get(tag)
    }

    /// Number of machines.
    pub fn len(&self) -> usize {
        self.computers.len()
    }

    /// True if the fleet has no machines.
    pub fn is_empty(&self) -> bool {
        self.computers.is_empty()
    }

    /// Number of distinct specs backing the fleet.
    pub fn spec_count(&self) -> usize {
        self.pool.len()
    }
}
