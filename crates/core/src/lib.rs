//! LED video-wall estimation engine.
//!
//! Pure, synchronous calculators: no I/O and no state shared between
//! requests. [`estimate::estimate`] runs them in dependency order.

pub mod error;
pub mod estimate;
pub mod format;
pub mod labeled;
pub mod layout;
pub mod power;
pub mod processor;
pub mod rigging;
pub mod signal;
pub mod types;
