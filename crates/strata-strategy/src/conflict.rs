//! Conflict-resolution policy consumed by the resolution engine.

/// How the resolution engine should react when multiple versions of one
/// module are requested across the graph.
///
/// Pure policy data: the strategy stores and copies it, the engine
/// interprets it during traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConflictResolution {
    /// Pick the highest requested version, no special handling.
    #[default]
    Latest,
    /// Any detected version conflict is a hard failure.
    Strict,
}

impl ConflictResolution {
    pub fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_latest() {
        assert_eq!(ConflictResolution::default(), ConflictResolution::Latest);
        assert!(!ConflictResolution::default().is_strict());
    }

    #[test]
    fn strict_is_strict() {
        assert!(ConflictResolution::Strict.is_strict());
    }
}
