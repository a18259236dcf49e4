//! Word lists for Ghost solving
//!
//! Provides an embedded sample dictionary plus file loading with
//! sanitation.

mod embedded;
pub mod loader;

pub use embedded::{SAMPLE, SAMPLE_COUNT};
