//! Mutation validation for live strategies.
//!
//! The owning configuration attaches a validator to the strategy it hands
//! to build scripts; once the configuration has been resolved the validator
//! starts rejecting further mutation. Snapshot copies carry no validator,
//! so the resolution engine operates on them without ever consulting one.

use strata_util::errors::StrataError;

/// What kind of state a mutation is about to change.
///
/// The strategy reports every mutation under the single `Strategy` tag; the
/// enum leaves room for the owning configuration's other mutation domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    /// Resolution strategy state: forced modules, rules, conflict mode,
    /// cache TTLs.
    Strategy,
}

/// Decides whether a mutation is currently permitted.
pub trait MutationValidator: Send + Sync {
    /// Validate an about-to-happen mutation; return an error to block it.
    fn validate_mutation(&self, kind: MutationKind) -> miette::Result<()>;
}

/// A validator that rejects every mutation, for configurations already
/// resolved.
#[derive(Debug, Clone)]
pub struct FrozenValidator {
    description: String,
}

impl FrozenValidator {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

impl MutationValidator for FrozenValidator {
    fn validate_mutation(&self, _kind: MutationKind) -> miette::Result<()> {
        Err(StrataError::MutationNotAllowed {
            message: format!("{} has already been resolved", self.description),
        }
        .into())
    }
}
