//! Cache-freshness policy for time-variant dependency metadata.
//!
//! Two kinds of entries are inherently time-variant: dynamic-version
//! listings (a range or "latest" marker resolved to a concrete version)
//! and changing-module content (a fixed coordinate whose artifact may be
//! republished). The policy stores one TTL for each, normalized to
//! milliseconds. The caching layer that owns timestamped entries compares
//! `now - timestamp > ttl`; no expiry happens here.

use strata_util::errors::StrataError;

/// Both TTLs default to 24 hours.
pub const DEFAULT_TTL_MILLIS: u64 = 24 * 60 * 60 * 1000;

/// TTL value meaning "never re-check".
pub const CACHE_FOREVER_MILLIS: u64 = u64::MAX;

/// A recognized cache-duration unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl DurationUnit {
    /// Parse a unit name, case-insensitively, accepting both abbreviations
    /// and full words (singular or plural).
    pub fn parse(s: &str) -> miette::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ms" | "milli" | "millis" | "millisecond" | "milliseconds" => Ok(Self::Milliseconds),
            "s" | "sec" | "secs" | "second" | "seconds" => Ok(Self::Seconds),
            "m" | "min" | "mins" | "minute" | "minutes" => Ok(Self::Minutes),
            "h" | "hr" | "hrs" | "hour" | "hours" => Ok(Self::Hours),
            "d" | "day" | "days" => Ok(Self::Days),
            _ => Err(StrataError::InvalidArgument {
                message: format!("unrecognized duration unit \"{s}\""),
            }
            .into()),
        }
    }

    /// Milliseconds in one of this unit.
    pub fn as_millis(self) -> u64 {
        match self {
            Self::Milliseconds => 1,
            Self::Seconds => 1000,
            Self::Minutes => 60 * 1000,
            Self::Hours => 60 * 60 * 1000,
            Self::Days => 24 * 60 * 60 * 1000,
        }
    }
}

/// TTLs controlling when cached dynamic-version listings and changing-module
/// content must be revalidated.
///
/// `0` means always revalidate; [`CACHE_FOREVER_MILLIS`] means cache forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachePolicy {
    dynamic_versions_ttl: u64,
    changing_modules_ttl: u64,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            dynamic_versions_ttl: DEFAULT_TTL_MILLIS,
            changing_modules_ttl: DEFAULT_TTL_MILLIS,
        }
    }
}

impl CachePolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how long resolved dynamic-version listings stay fresh.
    pub fn cache_dynamic_versions_for(&mut self, amount: u64, unit: &str) -> miette::Result<()> {
        self.dynamic_versions_ttl = normalize_millis(amount, unit)?;
        Ok(())
    }

    /// Set how long changing-module content stays fresh.
    pub fn cache_changing_modules_for(&mut self, amount: u64, unit: &str) -> miette::Result<()> {
        self.changing_modules_ttl = normalize_millis(amount, unit)?;
        Ok(())
    }

    pub fn dynamic_versions_ttl_millis(&self) -> u64 {
        self.dynamic_versions_ttl
    }

    pub fn changing_modules_ttl_millis(&self) -> u64 {
        self.changing_modules_ttl
    }

    /// Never re-check cached dynamic-version listings or changing-module
    /// content.
    pub fn keep_forever(&mut self) {
        self.dynamic_versions_ttl = CACHE_FOREVER_MILLIS;
        self.changing_modules_ttl = CACHE_FOREVER_MILLIS;
    }

    /// Revalidate both kinds of entry on every resolution.
    pub fn always_refresh(&mut self) {
        self.dynamic_versions_ttl = 0;
        self.changing_modules_ttl = 0;
    }

    /// A fully independent policy with identical TTLs.
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

/// Exact integer normalization of `amount * unit` to milliseconds.
fn normalize_millis(amount: u64, unit: &str) -> miette::Result<u64> {
    let unit = DurationUnit::parse(unit)?;
    amount.checked_mul(unit.as_millis()).ok_or_else(|| {
        StrataError::InvalidArgument {
            message: format!("cache duration {amount} overflows the millisecond range"),
        }
        .into()
    })
}
