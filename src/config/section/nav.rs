//! `themeConfig.nav`: top navigation entries.
//!
//! # Example
//!
//! ```toml
//! [[themeConfig.nav]]
//! text = "Home"
//! link = "/"
//!
//! [[themeConfig.nav]]
//! text = "Arcsecond.io"
//! link = "https://www.arcsecond.io"
//! ```

use crate::config::raw::RawNavItem;
use crate::config::section::ValidateConfig;
use crate::config::types::{ConfigDiagnostics, ConfigError, FieldPath};
use crate::config::util::non_empty;
use crate::core::LinkKind;
use rustc_hash::FxHashSet;
use serde::{Serialize, Serializer};
use std::fmt;

/// A validated navigation entry. Order within its list is render order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub text: String,
    pub link: Link,
}

impl NavItem {
    #[inline]
    pub fn is_internal(&self) -> bool {
        self.link.is_internal()
    }
}

/// Destination of a navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Link {
    /// Site-root-relative path, starts with `/`.
    Internal(String),
    /// Absolute `http://` or `https://` URL.
    External(String),
}

impl Link {
    /// Classify a trimmed, non-empty link. `None` if it has neither form.
    pub fn classify(link: &str, strict_external: bool) -> Option<Self> {
        match LinkKind::parse(link) {
            LinkKind::Internal(path) => Some(Self::Internal(path.to_owned())),
            LinkKind::External(url) if !strict_external || LinkKind::has_host(url) => {
                Some(Self::External(url.to_owned()))
            }
            LinkKind::External(_) | LinkKind::Unsupported(_) => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Internal(s) | Self::External(s) => s,
        }
    }

    #[inline]
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }

    #[inline]
    pub fn is_external(&self) -> bool {
        matches!(self, Self::External(_))
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Link {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Validate one list of entries (the nav bar or a sidebar section).
///
/// Every offending entry is recorded in `diag`; the returned list holds the
/// entries that passed.
pub fn validate_items(
    list: &FieldPath,
    raw: &[RawNavItem],
    opts: &ValidateConfig,
    diag: &mut ConfigDiagnostics,
) -> Vec<NavItem> {
    let mut items = Vec::with_capacity(raw.len());

    for (index, entry) in raw.iter().enumerate() {
        let text = non_empty(entry.text.as_deref());
        let link = non_empty(entry.link.as_deref());

        let (Some(text), Some(link)) = (text, link) else {
            let missing = if text.is_none() { "text" } else { "link" };
            diag.error(ConfigError::InvalidNavItem {
                list: list.clone(),
                index,
                missing,
            });
            continue;
        };

        match Link::classify(link, opts.external_links.strict) {
            Some(link) => items.push(NavItem {
                text: text.to_owned(),
                link,
            }),
            None => diag.error(ConfigError::InvalidLinkForm {
                list: list.clone(),
                index,
                link: link.to_owned(),
            }),
        }
    }

    check_duplicate_text(list, raw, diag);
    items
}

/// Report each label used more than once, once per label.
fn check_duplicate_text(list: &FieldPath, raw: &[RawNavItem], diag: &mut ConfigDiagnostics) {
    let mut seen = FxHashSet::default();
    let mut reported = FxHashSet::default();

    for text in raw.iter().filter_map(|e| non_empty(e.text.as_deref())) {
        if !seen.insert(text) && reported.insert(text) {
            diag.error(ConfigError::DuplicateNavText {
                list: list.clone(),
                text: text.to_owned(),
            });
        }
    }
}
