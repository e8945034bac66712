//! Shared utilities for the strata resolution-strategy engine.
//!
//! This crate provides the cross-cutting error types used by all other
//! strata crates.

pub mod errors;
