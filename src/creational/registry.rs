//! # Registry: the singleton, redesigned.
//!
//! The classic singleton hides one mutable instance behind a global
//! access point. Here the instance is an explicitly constructed
//! [`Database`] and "global access" becomes handle sharing: every clone
//! of the `Arc` handle reaches the same instance, and two explicitly
//! constructed databases are fully independent - which is what keeps
//! lifetimes and tests clear.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A shared connection registry with one mutable data slot.
#[derive(Debug)]
pub struct Database {
    data: Mutex<String>,
}

impl Database {
    /// Creates an independent database instance.
    pub fn new(data: impl Into<String>) -> Self {
        Self {
            data: Mutex::new(data.into()),
        }
    }

    /// Creates an instance and wraps it in a shareable handle.
    ///
    /// Clone the handle to hand the same instance to other owners; there
    /// is no ambient global to reach it any other way.
    pub fn shared(data: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::new(data))
    }

    fn lock(&self) -> MutexGuard<'_, String> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current data.
    pub fn get_data(&self) -> String {
        self.lock().clone()
    }

    /// Replaces the data.
    pub fn set_data(&self, data: impl Into<String>) {
        *self.lock() = data.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_clones_share_one_instance() {
        let mongo = Database::shared("mongo");
        let alias = Arc::clone(&mongo);

        alias.set_data("mongo-replica");
        assert_eq!(mongo.get_data(), "mongo-replica");
    }

    #[test]
    fn test_separate_instances_stay_independent() {
        let mongo = Database::shared("mongo");
        let mysql = Database::shared("mysql");

        mongo.set_data("changed");
        assert_eq!(mysql.get_data(), "mysql");
    }
}
