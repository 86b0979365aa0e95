//! sitenav - navigation config loader for documentation sites.
//!
//! Reads a site declaration (title, description, base path, top nav and
//! sidebar sections), validates every entry in one pass and hands back a
//! normalized [`SiteConfig`] for the site renderer.
//!
//! ```ignore
//! let loaded = SiteConfig::from_path(Path::new("site.toml"), &ValidateConfig::default())?;
//! loaded.print_warnings();
//! let config = init_config(loaded.config);
//! ```

pub mod config;
pub mod core;
pub mod logger;
pub mod utils;

pub use config::{
    CheckLevel, ConfigDiagnostics, ConfigError, FieldPath, Link, LoadError, Loaded, NavItem,
    RawConfig, Sidebar, SiteConfig, ValidateConfig, Warning, cfg, init_config, load, load_with,
    reload_config,
};
