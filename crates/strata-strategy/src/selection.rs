//! Component selection rules: accept or reject candidate component
//! versions during selection, independent of version overriding.

use std::sync::Arc;

use strata_core::coordinate::ModuleCoordinate;

/// Resolved metadata for a candidate component, injected into rules that
/// declared they need it.
///
/// Produced by an external metadata provider; only the fields selection
/// rules actually inspect are carried here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentMetadata {
    /// Publication status, e.g. `"integration"`, `"milestone"`, `"release"`.
    pub status: String,
    /// The ordered status scheme the status belongs to.
    pub status_scheme: Vec<String>,
    /// Whether the component's content may change under this coordinate.
    pub changing: bool,
}

/// The accept/reject decision slot for one candidate.
#[derive(Debug, Clone)]
pub struct ComponentSelection {
    candidate: ModuleCoordinate,
    rejection: Option<String>,
}

impl ComponentSelection {
    pub fn new(candidate: ModuleCoordinate) -> Self {
        Self {
            candidate,
            rejection: None,
        }
    }

    pub fn candidate(&self) -> &ModuleCoordinate {
        &self.candidate
    }

    /// Exclude this candidate with a human-readable reason.
    pub fn reject(&mut self, reason: impl Into<String>) {
        self.rejection = Some(reason.into());
    }

    pub fn is_rejected(&self) -> bool {
        self.rejection.is_some()
    }

    pub fn rejection_reason(&self) -> Option<&str> {
        self.rejection.as_deref()
    }
}

type AllRuleFn = dyn Fn(&mut ComponentSelection) -> miette::Result<()> + Send + Sync;
type MetadataRuleFn =
    dyn Fn(&mut ComponentSelection, &ComponentMetadata) -> miette::Result<()> + Send + Sync;

/// A single selection rule, either unconditional or scoped to resolved
/// component metadata.
#[derive(Clone)]
pub enum ComponentSelectionRule {
    /// Runs for every candidate with its identity alone.
    All(Arc<AllRuleFn>),
    /// Runs only when component metadata could be resolved for the candidate.
    WithMetadata(Arc<MetadataRuleFn>),
}

/// Ordered set of component selection rules.
///
/// Insertion order is evaluation order; the first rule to reject a
/// candidate decides, and later rules are not consulted for that candidate.
#[derive(Clone, Default)]
pub struct ComponentSelectionRuleSet {
    rules: Vec<ComponentSelectionRule>,
}

impl ComponentSelectionRuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_rule(&mut self, rule: ComponentSelectionRule) {
        self.rules.push(rule);
    }

    /// Register an unconditional rule evaluated for every candidate.
    pub fn all<F>(&mut self, rule: F)
    where
        F: Fn(&mut ComponentSelection) -> miette::Result<()> + Send + Sync + 'static,
    {
        self.rules.push(ComponentSelectionRule::All(Arc::new(rule)));
    }

    /// Register a rule that additionally receives resolved component metadata.
    pub fn with_metadata<F>(&mut self, rule: F)
    where
        F: Fn(&mut ComponentSelection, &ComponentMetadata) -> miette::Result<()>
            + Send
            + Sync
            + 'static,
    {
        self.rules
            .push(ComponentSelectionRule::WithMetadata(Arc::new(rule)));
    }

    /// Fluent sub-configuration: registers further rules into the same
    /// ordered sequence. Grouping only, no semantic difference.
    pub fn nested_configure(&mut self, configure: impl FnOnce(&mut Self)) {
        configure(self);
    }

    /// All rules in registration order.
    pub fn rules(&self) -> &[ComponentSelectionRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run the rules against one candidate, stopping at the first rejection.
    ///
    /// Metadata-scoped rules are skipped when no metadata was supplied; an
    /// absent descriptor cannot reject a candidate. A failing rule aborts
    /// evaluation and propagates unmodified.
    pub fn evaluate(
        &self,
        candidate: ModuleCoordinate,
        metadata: Option<&ComponentMetadata>,
    ) -> miette::Result<ComponentSelection> {
        let mut selection = ComponentSelection::new(candidate);
        for rule in &self.rules {
            match rule {
                ComponentSelectionRule::All(f) => f(&mut selection)?,
                ComponentSelectionRule::WithMetadata(f) => {
                    if let Some(metadata) = metadata {
                        f(&mut selection, metadata)?;
                    }
                }
            }
            if selection.is_rejected() {
                break;
            }
        }
        Ok(selection)
    }
}
