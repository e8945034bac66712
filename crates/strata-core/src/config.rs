use serde::{Deserialize, Serialize};
use strata_util::errors::StrataError;

/// Declarative resolution settings from a `[resolution]` block.
///
/// This is the data-only mirror of the imperative strategy API: forced
/// module versions, the conflict-resolution switch, and cache TTLs. The
/// strategy crate applies a parsed block onto a live strategy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolutionConfig {
    /// Forced module versions as `"group:name:version"` strings, in order.
    #[serde(default)]
    pub force: Vec<String>,

    #[serde(default, rename = "fail-on-version-conflict")]
    pub fail_on_version_conflict: bool,

    #[serde(default)]
    pub cache: CacheConfigSection,
}

/// Cache TTL settings from `[resolution.cache]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheConfigSection {
    #[serde(default, rename = "dynamic-versions")]
    pub dynamic_versions: Option<CacheTtlConfig>,

    #[serde(default, rename = "changing-modules")]
    pub changing_modules: Option<CacheTtlConfig>,
}

/// A TTL given as an amount plus a unit name (e.g. `{ amount = 5, unit = "minutes" }`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheTtlConfig {
    pub amount: u64,
    pub unit: String,
}

impl ResolutionConfig {
    /// Parse a `[resolution]` block from TOML text.
    pub fn parse_toml(content: &str) -> miette::Result<Self> {
        toml::from_str(content).map_err(|e| {
            StrataError::Config {
                message: format!("Failed to parse resolution config: {e}"),
            }
            .into()
        })
    }
}
