//! Core deterministic primitives.
//!
//! Nothing in here reads the clock or ambient entropy; every random draw
//! traces back to a seed the caller chose.

pub mod rng;

pub use rng::{derive_visit_seed, DeterministicRng};
