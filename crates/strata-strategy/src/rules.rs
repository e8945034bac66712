//! Per-dependency version rewrite rules and their composition.
//!
//! The resolution engine calls the composite [`ResolveRulePipeline`] once
//! per dependency edge. The pipeline runs a synthetic forcing step first,
//! then every user rule in registration order. Later writes win, but every
//! rule always runs; when nothing applies the details value is left
//! untouched so the engine can tell "nothing matched" apart from "matched
//! and re-chose the requested version".

use std::sync::Arc;

use strata_core::coordinate::ModuleCoordinate;

use crate::forced::ForcedModuleRegistry;

/// Why a version was chosen for a dependency edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionReason {
    /// No override applied; the requested version stands.
    Requested,
    /// A forced-module entry rewrote the version.
    Forced,
    /// A user resolve rule rewrote the version.
    SelectedByRule,
}

/// A chosen version together with the reason it was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedVersion {
    pub version: String,
    pub reason: SelectionReason,
}

/// Mutable per-edge resolution context handed to resolve rules.
#[derive(Debug, Clone)]
pub struct DependencyResolveDetails {
    requested: ModuleCoordinate,
    target: Option<SelectedVersion>,
}

impl DependencyResolveDetails {
    pub fn new(requested: ModuleCoordinate) -> Self {
        Self {
            requested,
            target: None,
        }
    }

    pub fn requested(&self) -> &ModuleCoordinate {
        &self.requested
    }

    /// Overwrite the chosen version from a user rule.
    pub fn use_version(&mut self, version: impl Into<String>) {
        self.select(version.into(), SelectionReason::SelectedByRule);
    }

    pub(crate) fn select(&mut self, version: String, reason: SelectionReason) {
        self.target = Some(SelectedVersion { version, reason });
    }

    /// The current chosen version and reason, if any rule has written one.
    pub fn target(&self) -> Option<&SelectedVersion> {
        self.target.as_ref()
    }

    /// Whether any rule (forcing or user) touched this edge.
    pub fn is_updated(&self) -> bool {
        self.target.is_some()
    }

    /// The version the engine should resolve: the chosen one, or the
    /// requested one when no rule applied.
    pub fn selected_version(&self) -> &str {
        self.target
            .as_ref()
            .map(|t| t.version.as_str())
            .unwrap_or(&self.requested.version)
    }
}

/// A user-registered resolve rule.
///
/// Rules are treated as immutable values once registered; strategy copies
/// share the same rule objects.
pub type DependencyResolveRule =
    Arc<dyn Fn(&mut DependencyResolveDetails) -> miette::Result<()> + Send + Sync>;

/// The composite callable the resolution engine invokes per dependency edge.
///
/// Owned snapshot of the forced-module registry plus the user rules at the
/// moment it was built; safe to call from many reader threads.
#[derive(Clone)]
pub struct ResolveRulePipeline {
    forced: ForcedModuleRegistry,
    rules: Vec<DependencyResolveRule>,
}

impl ResolveRulePipeline {
    pub fn new(forced: ForcedModuleRegistry, rules: Vec<DependencyResolveRule>) -> Self {
        Self { forced, rules }
    }

    /// Run the forcing step, then every user rule in registration order.
    ///
    /// A failing user rule aborts the pipeline and propagates unmodified.
    pub fn apply(&self, details: &mut DependencyResolveDetails) -> miette::Result<()> {
        let requested = details.requested().clone();
        if let Some(forced) = self.forced.find(&requested.group, &requested.name) {
            tracing::debug!("forcing {}:{} to {}", requested.group, requested.name, forced.version);
            details.select(forced.version.clone(), SelectionReason::Forced);
        }
        for rule in &self.rules {
            rule(details)?;
        }
        Ok(())
    }

    /// Whether applying the pipeline can ever touch a details value.
    pub fn is_empty(&self) -> bool {
        self.forced.is_empty() && self.rules.is_empty()
    }
}
