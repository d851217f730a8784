//! Transformation module.
//!
//! - Executor: per-row validation into cards
//! - Pipeline: whole-document and whole-file conversion

pub mod executor;
pub mod pipeline;

pub use executor::*;
pub use pipeline::*;
