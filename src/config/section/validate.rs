//! Loader options.
//!
//! # Example
//!
//! ```toml
//! [validate]
//! sidebar_keys = "warn"        # Orphan sidebar keys: warn | ignore
//! unknown_fields = "ignore"    # Keys the schema does not know: warn | ignore
//!
//! [validate.external_links]
//! strict = true                # Require a parseable URL with a host
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidateConfig {
    /// Report sidebar keys that match no internal nav link.
    pub sidebar_keys: CheckLevel,

    /// Report keys in the input that the schema does not know.
    pub unknown_fields: CheckLevel,

    /// External link checks.
    pub external_links: ExternalLinkConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalLinkConfig {
    /// Besides the `http(s)://` prefix, require the URL to parse with a host.
    pub strict: bool,
}

/// How a soft check reports its findings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckLevel {
    /// Emit a warning alongside the successful result.
    #[default]
    Warn,
    /// Skip the check.
    Ignore,
}

impl CheckLevel {
    #[inline]
    pub fn is_enabled(self) -> bool {
        self == Self::Warn
    }
}
