//! Ordered registry of forced module versions.

use strata_core::coordinate::ModuleCoordinate;

/// An ordered, duplicate-permitting sequence of forced module coordinates.
///
/// Order is preserved for reporting; lookup is by `(group, name)` with
/// first match winning. Duplicate entries for one `(group, name)` are a
/// caller error and are not validated here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForcedModuleRegistry {
    modules: Vec<ModuleCoordinate>,
}

impl ForcedModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append coordinates to the registry, keeping call order.
    pub fn force(&mut self, coordinates: impl IntoIterator<Item = ModuleCoordinate>) {
        self.modules.extend(coordinates);
    }

    /// Replace the entire registry contents.
    pub fn set(&mut self, coordinates: Vec<ModuleCoordinate>) {
        self.modules = coordinates;
    }

    /// All forced coordinates in insertion order, duplicates included.
    pub fn all(&self) -> &[ModuleCoordinate] {
        &self.modules
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// The first entry forcing the given `(group, name)`, if any.
    pub fn find(&self, group: &str, name: &str) -> Option<&ModuleCoordinate> {
        self.modules.iter().find(|m| m.matches_id(group, name))
    }
}
