//! Held-key and repeat-timer state for the input engine.
//!
//! This crate provides:
//! - `KeyTracker` - which physical keys are down, with a logical modifier view
//! - `RepeatTimer` - one-shot re-fire scheduling for held printable keys

mod repeat;
mod tracker;

pub use repeat::RepeatTimer;
pub use tracker::KeyTracker;
