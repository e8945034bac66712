//! Core data types for the strata resolution-strategy engine.
//!
//! This crate defines the value types the strategy layer is built from:
//! module coordinates and the declarative `[resolution]` configuration
//! block.
//!
//! This crate is intentionally free of async code and I/O.

pub mod config;
pub mod coordinate;
