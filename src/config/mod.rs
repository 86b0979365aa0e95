//! Site navigation configuration: load, validate, normalize.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── raw.rs         # RawConfig (unvalidated input)
//! ├── section/       # Per-field normalization and validation
//! │   ├── base       # base
//! │   ├── nav        # themeConfig.nav
//! │   ├── sidebar    # themeConfig.sidebar
//! │   └── validate   # loader options
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, Warning, ConfigDiagnostics, LoadError
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Input
//!
//! | Field                 | Purpose                                       |
//! |-----------------------|-----------------------------------------------|
//! | `title`               | Site display title (required)                 |
//! | `description`         | Meta description (optional)                   |
//! | `base`                | Deployment path prefix (required)             |
//! | `themeConfig.nav`     | Top navigation, in render order               |
//! | `themeConfig.sidebar` | Sidebar sections keyed by page path prefix    |

pub mod raw;
pub mod section;
pub mod types;
mod util;

use util::{Format, find_config_file, non_empty};

pub use raw::{RawConfig, RawNavItem, RawSidebar, RawThemeConfig};
pub use section::{
    CheckLevel, ExternalLinkConfig, Link, NavItem, Sidebar, SidebarSection, ValidateConfig,
};
pub use types::{
    ConfigDiagnostics, ConfigError, FIELDS, FieldPath, LoadError, Warning, cfg, init_config,
    reload_config,
};

use crate::debug;
use serde::Serialize;
use std::{fs, path::Path};

// ============================================================================
// root configuration
// ============================================================================

/// Validated, normalized site configuration.
///
/// Serializes back to the input shape, so a serialized config loads into
/// an identical value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    /// Site display title, non-empty.
    pub title: String,

    /// Meta description, possibly empty.
    pub description: String,

    /// Deployment path prefix: `/` or `/name/`.
    pub base: String,

    #[serde(rename = "themeConfig")]
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ThemeConfig {
    /// Top navigation, in render order.
    pub nav: Vec<NavItem>,

    /// Sidebar sections keyed by path prefix.
    pub sidebar: Sidebar,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            base: "/".to_owned(),
            theme: ThemeConfig::default(),
        }
    }
}

/// A successful load: the config plus non-fatal findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded {
    pub config: SiteConfig,
    pub warnings: Vec<Warning>,
}

impl Loaded {
    /// Print warnings grouped under one header.
    pub fn print_warnings(&self) {
        types::print_warnings(&self.warnings);
    }
}

/// Validate and normalize `raw` with default options.
pub fn load(raw: &RawConfig) -> Result<Loaded, ConfigDiagnostics> {
    load_with(raw, &ValidateConfig::default())
}

/// Validate and normalize `raw`.
///
/// Never stops at the first problem: every failure in the input is
/// collected and returned together.
pub fn load_with(raw: &RawConfig, opts: &ValidateConfig) -> Result<Loaded, ConfigDiagnostics> {
    let mut diag = ConfigDiagnostics::new();
    let config = SiteConfig::build(raw, opts, &mut diag);
    let warnings = diag.into_result()?;
    Ok(Loaded { config, warnings })
}

impl SiteConfig {
    /// Single validate-and-normalize pass. The result is only meaningful
    /// when `diag` holds no errors afterwards.
    fn build(raw: &RawConfig, opts: &ValidateConfig, diag: &mut ConfigDiagnostics) -> Self {
        let title = non_empty(raw.title.as_deref());
        if title.is_none() {
            diag.error(ConfigError::MissingField(FIELDS.title));
        }

        let base = non_empty(raw.base.as_deref()).map(section::normalize_base);
        if base.is_none() {
            diag.error(ConfigError::MissingField(FIELDS.base));
        }

        let theme = &raw.theme_config;
        let nav = section::validate_items(&FIELDS.nav, &theme.nav, opts, diag);
        let sidebar = section::validate_sidebar(&theme.sidebar, opts, diag);
        section::check_keys_against_nav(&sidebar, &nav, opts, diag);

        debug!(
            "config";
            "{} nav items, {} sidebar sections, {} error(s)",
            nav.len(),
            sidebar.len(),
            diag.len()
        );

        Self {
            title: title.unwrap_or_default().to_owned(),
            description: raw.description.as_deref().unwrap_or_default().trim().to_owned(),
            base: base.unwrap_or_else(|| "/".to_owned()),
            theme: ThemeConfig { nav, sidebar },
        }
    }

    /// Parse and validate TOML content.
    pub fn from_toml_str(content: &str, opts: &ValidateConfig) -> Result<Loaded, LoadError> {
        let (raw, ignored) = RawConfig::parse_toml(content)?;
        Self::finish(&raw, ignored, opts)
    }

    /// Parse and validate JSON content.
    pub fn from_json_str(content: &str, opts: &ValidateConfig) -> Result<Loaded, LoadError> {
        let (raw, ignored) = RawConfig::parse_json(content)?;
        Self::finish(&raw, ignored, opts)
    }

    /// Load a `.toml` or `.json` config file.
    pub fn from_path(path: &Path, opts: &ValidateConfig) -> Result<Loaded, LoadError> {
        Self::check_format(path)?;
        debug!("config"; "reading {}", path.display());

        let content =
            fs::read_to_string(path).map_err(|err| LoadError::Io(path.to_path_buf(), err))?;

        Self::from_content(path, &content, opts)
    }

    /// Validate content already read from `path`, choosing the format by extension.
    pub(crate) fn from_content(
        path: &Path,
        content: &str,
        opts: &ValidateConfig,
    ) -> Result<Loaded, LoadError> {
        match Self::check_format(path)? {
            Format::Toml => Self::from_toml_str(content, opts),
            Format::Json => Self::from_json_str(content, opts),
        }
    }

    fn check_format(path: &Path) -> Result<Format, LoadError> {
        Format::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat(path.to_path_buf()))
    }

    /// Search `start` and its ancestors for `config_name`, then load it.
    pub fn discover(
        config_name: &Path,
        start: &Path,
        opts: &ValidateConfig,
    ) -> Result<Loaded, LoadError> {
        let path = find_config_file(start, config_name)
            .ok_or_else(|| LoadError::NotFound(config_name.to_path_buf()))?;
        Self::from_path(&path, opts)
    }

    /// Validate parsed input, adding unknown-field warnings ahead of the rest.
    fn finish(
        raw: &RawConfig,
        ignored: Vec<String>,
        opts: &ValidateConfig,
    ) -> Result<Loaded, LoadError> {
        let mut diag = ConfigDiagnostics::new();
        if opts.unknown_fields.is_enabled() {
            for field in ignored {
                diag.warn(Warning::UnknownField(field));
            }
        }

        let config = Self::build(raw, opts, &mut diag);
        let warnings = diag.into_result()?;
        Ok(Loaded { config, warnings })
    }

    // ========================================================================
    // lookups
    // ========================================================================

    #[inline]
    pub fn nav(&self) -> &[NavItem] {
        &self.theme.nav
    }

    #[inline]
    pub fn sidebar(&self) -> &Sidebar {
        &self.theme.sidebar
    }

    /// Sidebar entries for a page path (site-relative, without `base`).
    pub fn sidebar_for(&self, page_path: &str) -> Option<&[NavItem]> {
        self.theme
            .sidebar
            .for_page(page_path)
            .map(|section| section.items.as_slice())
    }

    /// Public URL of a link under this site's `base`.
    pub fn resolve(&self, link: &Link) -> String {
        section::resolve_link(&self.base, link)
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// Parse TOML into a `RawConfig`.
/// Panics if there are unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_raw(content: &str) -> RawConfig {
    let (raw, ignored) = RawConfig::parse_toml(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    raw
}

// ============================================================================
// tests
// ============================================================================
