//! Behavioral patterns: how objects distribute responsibility and talk.
//!
//! Each submodule is a self-contained demonstration with its own tests.
//! The observer - the one behavioral pattern with a reusable contract -
//! lives in the top-level [`observer`](crate::observer) and
//! [`pubsub`](crate::pubsub) modules instead.
//!
//! ## Contents
//! - [`chain`] - fluent self-returning accumulator
//! - [`command`] - requests as values, dispatched exhaustively
//! - [`iterator`] - sequential access without exposing representation
//! - [`mediator`] - participants talk through a hub, not each other
//! - [`memento`] - capture and restore state without breaking encapsulation
//! - [`state`] - behavior keyed on a closed set of internal states
//! - [`strategy`] - interchangeable algorithms behind one seam
//! - [`template`] - fixed skeleton, deferred steps
//! - [`visitor`] - new operations over a structure without changing it

pub mod chain;
pub mod command;
pub mod iterator;
pub mod mediator;
pub mod memento;
pub mod state;
pub mod strategy;
pub mod template;
pub mod visitor;
