//! The resolution strategy aggregate: the mutable configuration surface the
//! build script sees, and the frozen snapshot the resolution engine reads.

use std::sync::Arc;

use strata_core::config::ResolutionConfig;
use strata_core::coordinate::ModuleCoordinate;

use crate::cache::CachePolicy;
use crate::conflict::ConflictResolution;
use crate::forced::ForcedModuleRegistry;
use crate::guard::{MutationKind, MutationValidator};
use crate::rules::{DependencyResolveDetails, DependencyResolveRule, ResolveRulePipeline};
use crate::selection::ComponentSelectionRuleSet;

/// Per-configuration resolution strategy.
///
/// One instance lives per dependency configuration. Build-script code
/// mutates it up to the freeze point; every mutator consults the attached
/// mutation validator first. When resolution starts, [`copy`] produces an
/// independent snapshot with no validator, which the engine may read from
/// many worker threads because it is never mutated again.
///
/// [`copy`]: ResolutionStrategy::copy
#[derive(Default)]
pub struct ResolutionStrategy {
    cache_policy: CachePolicy,
    forced_modules: ForcedModuleRegistry,
    resolve_rules: Vec<DependencyResolveRule>,
    selection_rules: ComponentSelectionRuleSet,
    conflict_resolution: ConflictResolution,
    mutation_validator: Option<Arc<dyn MutationValidator>>,
}

impl ResolutionStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the validator consulted before every mutation.
    ///
    /// The owning configuration installs this; it is not itself a guarded
    /// strategy mutation.
    pub fn set_mutation_validator(&mut self, validator: Arc<dyn MutationValidator>) {
        self.mutation_validator = Some(validator);
    }

    fn validate_mutation(&self) -> miette::Result<()> {
        if let Some(validator) = &self.mutation_validator {
            validator.validate_mutation(MutationKind::Strategy)?;
        }
        Ok(())
    }

    /// Append forced module versions given as `"group:name:version"` text.
    pub fn force(&mut self, notations: &[&str]) -> miette::Result<()> {
        self.validate_mutation()?;
        let coordinates = notations
            .iter()
            .map(|n| ModuleCoordinate::parse(n))
            .collect::<miette::Result<Vec<_>>>()?;
        self.forced_modules.force(coordinates);
        Ok(())
    }

    /// Append forced module versions in structured form.
    pub fn force_coordinates(
        &mut self,
        coordinates: impl IntoIterator<Item = ModuleCoordinate>,
    ) -> miette::Result<()> {
        self.validate_mutation()?;
        self.forced_modules.force(coordinates);
        Ok(())
    }

    /// Replace the forced-module registry wholesale.
    pub fn set_forced_modules(&mut self, coordinates: Vec<ModuleCoordinate>) -> miette::Result<()> {
        self.validate_mutation()?;
        self.forced_modules.set(coordinates);
        Ok(())
    }

    pub fn forced_modules(&self) -> &ForcedModuleRegistry {
        &self.forced_modules
    }

    /// Register a resolve rule invoked for every dependency edge, after any
    /// forcing step and after all previously registered rules.
    pub fn each_dependency<F>(&mut self, rule: F) -> miette::Result<()>
    where
        F: Fn(&mut DependencyResolveDetails) -> miette::Result<()> + Send + Sync + 'static,
    {
        self.validate_mutation()?;
        self.resolve_rules.push(Arc::new(rule));
        Ok(())
    }

    /// User resolve rules in registration order.
    pub fn resolve_rules(&self) -> &[DependencyResolveRule] {
        &self.resolve_rules
    }

    /// The composite callable the resolution engine invokes once per edge.
    ///
    /// Captures the forced modules and rules as of this call; shares the
    /// rule objects themselves.
    pub fn dependency_resolve_rule(&self) -> ResolveRulePipeline {
        ResolveRulePipeline::new(self.forced_modules.clone(), self.resolve_rules.clone())
    }

    /// Configure component selection rules. One mutation check covers the
    /// whole configuration block.
    pub fn component_selection(
        &mut self,
        configure: impl FnOnce(&mut ComponentSelectionRuleSet),
    ) -> miette::Result<()> {
        self.validate_mutation()?;
        configure(&mut self.selection_rules);
        Ok(())
    }

    pub fn component_selection_rules(&self) -> &ComponentSelectionRuleSet {
        &self.selection_rules
    }

    /// Treat any version conflict detected during graph resolution as a
    /// hard failure instead of picking the highest version.
    pub fn fail_on_version_conflict(&mut self) -> miette::Result<()> {
        self.validate_mutation()?;
        self.conflict_resolution = ConflictResolution::Strict;
        Ok(())
    }

    pub fn conflict_resolution(&self) -> ConflictResolution {
        self.conflict_resolution
    }

    pub fn cache_dynamic_versions_for(&mut self, amount: u64, unit: &str) -> miette::Result<()> {
        self.validate_mutation()?;
        self.cache_policy.cache_dynamic_versions_for(amount, unit)
    }

    pub fn cache_changing_modules_for(&mut self, amount: u64, unit: &str) -> miette::Result<()> {
        self.validate_mutation()?;
        self.cache_policy.cache_changing_modules_for(amount, unit)
    }

    pub fn cache_policy(&self) -> &CachePolicy {
        &self.cache_policy
    }

    /// Apply a declarative `[resolution]` block through the regular guarded
    /// mutators.
    pub fn apply_config(&mut self, config: &ResolutionConfig) -> miette::Result<()> {
        if !config.force.is_empty() {
            let notations: Vec<&str> = config.force.iter().map(String::as_str).collect();
            self.force(&notations)?;
        }
        if config.fail_on_version_conflict {
            self.fail_on_version_conflict()?;
        }
        if let Some(ttl) = &config.cache.dynamic_versions {
            self.cache_dynamic_versions_for(ttl.amount, &ttl.unit)?;
        }
        if let Some(ttl) = &config.cache.changing_modules {
            self.cache_changing_modules_for(ttl.amount, &ttl.unit)?;
        }
        Ok(())
    }

    /// An independent snapshot for one resolution.
    ///
    /// Cache policy, forced modules, selection rules, and conflict mode are
    /// structurally copied; resolve-rule objects are shared by reference
    /// since rules are immutable once registered. The snapshot carries no
    /// mutation validator.
    pub fn copy(&self) -> Self {
        tracing::debug!(
            "snapshotting resolution strategy ({} forced, {} rules)",
            self.forced_modules.all().len(),
            self.resolve_rules.len()
        );
        Self {
            cache_policy: self.cache_policy.copy(),
            forced_modules: self.forced_modules.clone(),
            resolve_rules: self.resolve_rules.clone(),
            selection_rules: self.selection_rules.clone(),
            conflict_resolution: self.conflict_resolution,
            mutation_validator: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn force_parses_and_appends() {
        let mut strategy = ResolutionStrategy::new();
        strategy.force(&["org:lib:1.0", "org:other:2.0"]).unwrap();
        strategy.force(&["com:thing:3.0"]).unwrap();
        let all: Vec<String> = strategy
            .forced_modules()
            .all()
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(all, vec!["org:lib:1.0", "org:other:2.0", "com:thing:3.0"]);
    }

    #[test]
    fn force_rejects_malformed_notation() {
        let mut strategy = ResolutionStrategy::new();
        assert!(strategy.force(&["not-a-coordinate"]).is_err());
        assert!(strategy.forced_modules().is_empty());
    }

    #[test]
    fn fail_on_version_conflict_switches_mode() {
        let mut strategy = ResolutionStrategy::new();
        assert_eq!(strategy.conflict_resolution(), ConflictResolution::Latest);
        strategy.fail_on_version_conflict().unwrap();
        assert_eq!(strategy.conflict_resolution(), ConflictResolution::Strict);
    }

    #[test]
    fn cache_setters_reach_the_policy() {
        let mut strategy = ResolutionStrategy::new();
        strategy.cache_dynamic_versions_for(10, "minutes").unwrap();
        strategy.cache_changing_modules_for(4, "hours").unwrap();
        assert_eq!(strategy.cache_policy().dynamic_versions_ttl_millis(), 600_000);
        assert_eq!(
            strategy.cache_policy().changing_modules_ttl_millis(),
            14_400_000
        );
    }
}
