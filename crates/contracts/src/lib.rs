//! Pure domain core for the dojo dashboard.
//!
//! Everything in this crate is synchronous, in-memory and free of I/O:
//! the rendering layer owns the collections, calls into these functions
//! from its event handlers and re-derives the roster aggregates on
//! demand.

pub mod attendance;
pub mod domain;
pub mod error;
pub mod id;
pub mod promotion;
pub mod roster;
pub mod search;
pub mod seed;
pub mod store;

pub use error::CoreError;
