//! # SharedSubject: the subject contract across threads.
//!
//! The single-threaded [`Subject`](crate::observer::Subject) uses
//! `&mut self` mutators; this variant guards the observer list and the
//! state with one mutex so register/unregister/notify may race from
//! multiple threads without corrupting the iteration.
//!
//! ## Snapshot policy
//! `notify_all` clones the observer list and the state under the lock,
//! releases the lock, then runs the pass:
//! - concurrent registration cannot skip or duplicate entries of an
//!   in-flight pass;
//! - `update` never runs under the lock, so observers may re-enter
//!   `register`/`unregister` - the change takes effect on the NEXT pass;
//! - an observer removed while a pass is in flight may still see that
//!   pass's notification. Each registered observer sees every
//!   notification issued after its registration and before its removal.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::NotifyError;

use super::Observe;

struct Inner<S> {
    state: S,
    observers: Vec<Arc<dyn Observe<S>>>,
}

/// Thread-safe observable state holder.
///
/// Same contract as [`Subject`](crate::observer::Subject) - FIFO order,
/// duplicates permitted, first-match unregister, fail-fast notification -
/// with `&self` receivers throughout. Requires `S: Clone` for the
/// per-pass state snapshot.
pub struct SharedSubject<S> {
    inner: Mutex<Inner<S>>,
}

impl<S: Clone> SharedSubject<S> {
    /// Creates a shared subject with the given initial state.
    pub fn new(initial: S) -> Self {
        Self {
            inner: Mutex::new(Inner {
                state: initial,
                observers: Vec::new(),
            }),
        }
    }

    // A poisoned lock still holds coherent data: observer code never runs
    // under the lock, so a panicking observer cannot poison it mid-update.
    fn lock(&self) -> MutexGuard<'_, Inner<S>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Clone of the current state.
    pub fn state(&self) -> S {
        self.lock().state.clone()
    }

    /// Appends `observer` to the notification list. Duplicates permitted.
    pub fn register(&self, observer: Arc<dyn Observe<S>>) {
        self.lock().observers.push(observer);
    }

    /// Removes the first entry pointing at the same observer
    /// (`Arc::ptr_eq`). A no-op if absent.
    pub fn unregister(&self, observer: &Arc<dyn Observe<S>>) {
        let mut inner = self.lock();
        if let Some(pos) = inner
            .observers
            .iter()
            .position(|o| Arc::ptr_eq(o, observer))
        {
            inner.observers.remove(pos);
        }
    }

    /// Number of registered entries (duplicates counted).
    pub fn len(&self) -> usize {
        self.lock().observers.len()
    }

    /// True if no observers are registered.
    pub fn is_empty(&self) -> bool {
        self.lock().observers.is_empty()
    }

    /// Installs `next`, then notifies the observers registered at that
    /// moment.
    ///
    /// # Errors
    /// Propagates the first observer failure (fail-fast); the new state
    /// stays installed.
    pub fn set_state(&self, next: S) -> Result<(), NotifyError> {
        let (state, snapshot) = {
            let mut inner = self.lock();
            inner.state = next;
            (inner.state.clone(), inner.observers.clone())
        };
        Self::run_pass(&state, &snapshot)
    }

    /// Re-notifies the current observers with the current state.
    ///
    /// # Errors
    /// Propagates the first observer failure (fail-fast).
    pub fn notify_all(&self) -> Result<(), NotifyError> {
        let (state, snapshot) = {
            let inner = self.lock();
            (inner.state.clone(), inner.observers.clone())
        };
        Self::run_pass(&state, &snapshot)
    }

    fn run_pass(state: &S, snapshot: &[Arc<dyn Observe<S>>]) -> Result<(), NotifyError> {
        for observer in snapshot {
            observer
                .update(state)
                .map_err(|source| NotifyError::ObserverFailed {
                    observer: observer.name(),
                    source,
                })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    use crate::error::UpdateError;

    use super::*;

    struct Counter {
        hits: AtomicUsize,
    }

    impl Counter {
        fn arc() -> Arc<Self> {
            Arc::new(Self {
                hits: AtomicUsize::new(0),
            })
        }
    }

    impl Observe<u64> for Counter {
        fn update(&self, _state: &u64) -> Result<(), UpdateError> {
            self.hits.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn name(&self) -> &'static str {
            "counter"
        }
    }

    /// Registers another observer on its subject from inside `update`.
    struct SelfExpanding {
        subject: Mutex<Option<Arc<SharedSubject<u64>>>>,
        spawned: Arc<Counter>,
    }

    impl Observe<u64> for SelfExpanding {
        fn update(&self, _state: &u64) -> Result<(), UpdateError> {
            if let Some(subject) = self.subject.lock().unwrap().take() {
                subject.register(self.spawned.clone());
            }
            Ok(())
        }

        fn name(&self) -> &'static str {
            "self_expanding"
        }
    }

    #[test]
    fn test_same_contract_as_subject() {
        let subject = SharedSubject::new(0u64);
        let a = Counter::arc();
        let b = Counter::arc();
        subject.register(a.clone());
        subject.register(b.clone());

        subject.set_state(115).unwrap();
        assert_eq!(subject.state(), 115);
        assert_eq!(a.hits.load(Ordering::SeqCst), 1);
        assert_eq!(b.hits.load(Ordering::SeqCst), 1);

        let a_dyn: Arc<dyn Observe<u64>> = a.clone();
        subject.unregister(&a_dyn);
        subject.set_state(200).unwrap();
        assert_eq!(a.hits.load(Ordering::SeqCst), 1);
        assert_eq!(b.hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_registration_inside_update_lands_next_pass() {
        let subject = Arc::new(SharedSubject::new(0u64));
        let spawned = Counter::arc();
        subject.register(Arc::new(SelfExpanding {
            subject: Mutex::new(Some(subject.clone())),
            spawned: spawned.clone(),
        }));

        // Pass 1: the snapshot was taken before the re-entrant register.
        subject.set_state(1).unwrap();
        assert_eq!(spawned.hits.load(Ordering::SeqCst), 0);
        assert_eq!(subject.len(), 2);

        // Pass 2: the spawned observer is now part of the snapshot.
        subject.set_state(2).unwrap();
        assert_eq!(spawned.hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_concurrent_registration_then_full_delivery() {
        let subject = Arc::new(SharedSubject::new(0u64));
        let total = Counter::arc();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let subject = subject.clone();
                let counter: Arc<dyn Observe<u64>> = total.clone();
                thread::spawn(move || {
                    for _ in 0..16 {
                        subject.register(counter.clone());
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(subject.len(), 128);
        subject.set_state(1).unwrap();
        assert_eq!(total.hits.load(Ordering::SeqCst), 128);
    }

    #[test]
    fn test_notify_races_registration_without_corruption() {
        let subject = Arc::new(SharedSubject::new(0u64));

        let writer = {
            let subject = subject.clone();
            thread::spawn(move || {
                for i in 0..50 {
                    subject.set_state(i).unwrap();
                }
            })
        };
        let registrar = {
            let subject = subject.clone();
            thread::spawn(move || {
                for _ in 0..50 {
                    subject.register(Counter::arc());
                }
            })
        };

        writer.join().unwrap();
        registrar.join().unwrap();
        assert_eq!(subject.len(), 50);
    }
}
