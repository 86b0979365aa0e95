//! Process-wide site config with atomic reload support.
//!
//! Uses `arc-swap` for lock-free reads. A reload swaps in a freshly
//! validated instance; the previous one is never mutated.

use crate::config::{SiteConfig, ValidateConfig};
use crate::utils::hash;
use anyhow::{Context, Result};
use arc_swap::ArcSwap;
use std::{
    fs,
    path::Path,
    sync::{
        Arc, LazyLock,
        atomic::{AtomicU64, Ordering},
    },
};

/// Global config storage.
pub static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

/// Hash of the config file content and options last loaded by [`reload_config`].
static CONFIG_HASH: AtomicU64 = AtomicU64::new(0);

#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

/// Install an already validated config as the process-wide instance.
#[inline]
pub fn init_config(config: SiteConfig) -> Arc<SiteConfig> {
    CONFIG_HASH.store(0, Ordering::Relaxed);
    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}

/// Reload config from disk if content or options changed.
///
/// Returns `Ok(true)` if config was replaced, `Ok(false)` if unchanged.
/// On validation failure the current config stays in place.
pub fn reload_config(path: &Path, opts: &ValidateConfig) -> Result<bool> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config `{}`", path.display()))?;
    let opts_bytes = serde_json::to_vec(opts).context("failed to encode validate options")?;
    let new_hash = hash::compute_all(&[content.as_bytes(), opts_bytes.as_slice()]);

    if new_hash == CONFIG_HASH.load(Ordering::Relaxed) {
        return Ok(false);
    }

    let loaded = SiteConfig::from_content(path, &content, opts)?;
    loaded.print_warnings();
    CONFIG.store(Arc::new(loaded.config));
    CONFIG_HASH.store(new_hash, Ordering::Relaxed);
    crate::debug!("reload"; "site config reloaded from {}", path.display());

    Ok(true)
}
