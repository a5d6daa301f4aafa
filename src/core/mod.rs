// EN: src/core/mod.rs

//! # Core
//!
//! Pure building blocks: the two escapers, the case-insensitive environment, the
//! batch-script classifier and the optional user configuration.

pub mod classifier;
pub mod config;
pub mod env;
pub mod escape;
