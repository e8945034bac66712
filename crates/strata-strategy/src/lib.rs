//! Resolution strategy engine: per-dependency version overrides, component
//! selection rules, cache-freshness policy, and conflict-resolution mode,
//! with copy-on-freeze snapshot semantics.

pub mod cache;
pub mod conflict;
pub mod forced;
pub mod guard;
pub mod rules;
pub mod selection;
pub mod strategy;
