//! `themeConfig.sidebar`: per-section navigation keyed by path prefix.
//!
//! A section is active for pages whose path starts with its key. Keys are
//! site paths and do not include `base`.
//!
//! # Example
//!
//! ```toml
//! [themeConfig.sidebar]
//! "/guide/" = [
//!     { text = "Usage Guide", link = "/guide/" },
//!     { text = "Datasets", link = "/guide/datasets/" },
//! ]
//! ```

use super::nav::{NavItem, validate_items};
use crate::config::raw::{RawNavItem, RawSidebar};
use crate::config::section::ValidateConfig;
use crate::config::types::{ConfigDiagnostics, ConfigError, FIELDS, FieldPath, Warning};
use crate::core::path_part;
use rustc_hash::FxHashSet;
use serde::{Serialize, Serializer, ser::SerializeMap};

/// Key used for a sidebar declared as a bare list.
pub const GLOBAL_KEY: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarSection {
    pub key: String,
    pub items: Vec<NavItem>,
}

/// Validated sidebar mapping. Keys are unique; sections keep declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sidebar {
    sections: Vec<SidebarSection>,
}

impl Sidebar {
    #[inline]
    pub fn sections(&self) -> &[SidebarSection] {
        &self.sections
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.key.as_str())
    }

    /// Items declared under exactly `key`.
    pub fn get(&self, key: &str) -> Option<&[NavItem]> {
        self.sections
            .iter()
            .find(|s| s.key == key)
            .map(|s| s.items.as_slice())
    }

    /// Section active for `page_path`: the one with the longest matching key.
    ///
    /// `/guide` also matches a `/guide/` key.
    pub fn for_page(&self, page_path: &str) -> Option<&SidebarSection> {
        let page = path_part(page_path);
        self.sections
            .iter()
            .filter(|s| key_matches(&s.key, page))
            .max_by_key(|s| s.key.len())
    }
}

impl Serialize for Sidebar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in &self.sections {
            map.serialize_entry(&section.key, &section.items)?;
        }
        map.end()
    }
}

/// `path` falls under `key`. A key's trailing slash is optional in `path`.
fn key_matches(key: &str, path: &str) -> bool {
    path.starts_with(key) || key.strip_suffix('/') == Some(path)
}

/// Validate every section, scoping item errors to the section's key.
pub fn validate_sidebar(
    raw: &RawSidebar,
    opts: &ValidateConfig,
    diag: &mut ConfigDiagnostics,
) -> Sidebar {
    let sections = match raw {
        RawSidebar::Global(items) => {
            vec![SidebarSection {
                key: GLOBAL_KEY.to_owned(),
                items: validate_items(&FIELDS.sidebar, items, opts, diag),
            }]
        }
        RawSidebar::Sections(entries) => validate_sections(entries, opts, diag),
    };
    Sidebar { sections }
}

fn validate_sections(
    entries: &[(String, Vec<RawNavItem>)],
    opts: &ValidateConfig,
    diag: &mut ConfigDiagnostics,
) -> Vec<SidebarSection> {
    let mut sections = Vec::with_capacity(entries.len());
    let mut seen = FxHashSet::default();

    for (key, items) in entries {
        let list: FieldPath = FIELDS.sidebar.key(key);
        let items = validate_items(&list, items, opts, diag);

        if !key.starts_with('/') {
            diag.error(ConfigError::InvalidSidebarKey(key.clone()));
            continue;
        }
        if !seen.insert(key.as_str()) {
            diag.error(ConfigError::DuplicateSidebarKey(key.clone()));
            continue;
        }
        sections.push(SidebarSection {
            key: key.clone(),
            items,
        });
    }

    sections
}

/// Warn for each sidebar key that matches no internal nav link.
///
/// The root key [`GLOBAL_KEY`], also used for a bare-list sidebar, applies to
/// every page and is never reported.
pub fn check_keys_against_nav(
    sidebar: &Sidebar,
    nav: &[NavItem],
    opts: &ValidateConfig,
    diag: &mut ConfigDiagnostics,
) {
    if !opts.sidebar_keys.is_enabled() {
        return;
    }

    for key in sidebar.keys() {
        if key == GLOBAL_KEY {
            continue;
        }
        let covered = nav
            .iter()
            .filter(|item| item.is_internal())
            .any(|item| key_matches(key, path_part(item.link.as_str())));
        if !covered {
            diag.warn(Warning::SidebarKeyNotInNav(key.to_owned()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::section::{CheckLevel, Link};

    fn sections(entries: Vec<(&str, Vec<RawNavItem>)>) -> RawSidebar {
        RawSidebar::Sections(
            entries
                .into_iter()
                .map(|(k, items)| (k.to_owned(), items))
                .collect(),
        )
    }

    fn nav(links: &[&str]) -> Vec<NavItem> {
        links
            .iter()
            .enumerate()
            .map(|(i, link)| NavItem {
                text: format!("item {i}"),
                link: Link::classify(link, false).unwrap(),
            })
            .collect()
    }

    #[test]
    fn test_validate_sections() {
        let mut diag = ConfigDiagnostics::new();
        let raw = sections(vec![
            ("/guide/", vec![RawNavItem::new("Usage Guide", "/guide/")]),
            ("/install/", vec![RawNavItem::new("Install", "/install/")]),
        ]);
        let sidebar = validate_sidebar(&raw, &ValidateConfig::default(), &mut diag);
        assert!(diag.is_empty());
        assert_eq!(sidebar.keys().collect::<Vec<_>>(), ["/guide/", "/install/"]);
        assert_eq!(sidebar.get("/guide/").unwrap()[0].text, "Usage Guide");
    }

    #[test]
    fn test_item_errors_scoped_to_key() {
        let mut diag = ConfigDiagnostics::new();
        let raw = sections(vec![(
            "/guide/",
            vec![
                RawNavItem::new("Usage Guide", "ftp://x"),
                RawNavItem::new("Usage Guide", "/guide/"),
            ],
        )]);
        validate_sidebar(&raw, &ValidateConfig::default(), &mut diag);
        assert_eq!(
            diag.errors(),
            [
                ConfigError::InvalidLinkForm {
                    list: FIELDS.sidebar.key("/guide/"),
                    index: 0,
                    link: "ftp://x".into(),
                },
                ConfigError::DuplicateNavText {
                    list: FIELDS.sidebar.key("/guide/"),
                    text: "Usage Guide".into(),
                },
            ]
        );
    }

    #[test]
    fn test_same_label_in_different_sections_is_fine() {
        let mut diag = ConfigDiagnostics::new();
        let raw = sections(vec![
            ("/guide/", vec![RawNavItem::new("Overview", "/guide/")]),
            ("/install/", vec![RawNavItem::new("Overview", "/install/")]),
        ]);
        validate_sidebar(&raw, &ValidateConfig::default(), &mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_invalid_and_duplicate_keys() {
        let mut diag = ConfigDiagnostics::new();
        let raw = sections(vec![
            ("guide/", vec![]),
            ("/api/", vec![]),
            ("/api/", vec![RawNavItem::new("API", "/api/")]),
        ]);
        let sidebar = validate_sidebar(&raw, &ValidateConfig::default(), &mut diag);
        assert_eq!(
            diag.errors(),
            [
                ConfigError::InvalidSidebarKey("guide/".into()),
                ConfigError::DuplicateSidebarKey("/api/".into()),
            ]
        );
        assert_eq!(sidebar.len(), 1);
    }

    #[test]
    fn test_global_sidebar() {
        let mut diag = ConfigDiagnostics::new();
        let raw = RawSidebar::Global(vec![RawNavItem::new("Intro", "/")]);
        let sidebar = validate_sidebar(&raw, &ValidateConfig::default(), &mut diag);
        assert!(diag.is_empty());
        assert_eq!(sidebar.for_page("/anything/deep").unwrap().key, GLOBAL_KEY);
    }

    #[test]
    fn test_for_page_longest_prefix() {
        let mut diag = ConfigDiagnostics::new();
        let raw = sections(vec![
            ("/", vec![RawNavItem::new("Home", "/")]),
            ("/guide/", vec![RawNavItem::new("Guide", "/guide/")]),
            ("/guide/advanced/", vec![RawNavItem::new("Advanced", "/guide/advanced/")]),
        ]);
        let sidebar = validate_sidebar(&raw, &ValidateConfig::default(), &mut diag);

        assert_eq!(sidebar.for_page("/guide/datasets/").unwrap().key, "/guide/");
        assert_eq!(
            sidebar.for_page("/guide/advanced/uploads#top").unwrap().key,
            "/guide/advanced/"
        );
        assert_eq!(sidebar.for_page("/guide").unwrap().key, "/guide/");
        assert_eq!(sidebar.for_page("/install/").unwrap().key, "/");
    }

    #[test]
    fn test_for_page_no_match() {
        let mut diag = ConfigDiagnostics::new();
        let raw = sections(vec![("/guide/", vec![RawNavItem::new("Guide", "/guide/")])]);
        let sidebar = validate_sidebar(&raw, &ValidateConfig::default(), &mut diag);
        assert!(sidebar.for_page("/install/").is_none());
        assert!(sidebar.for_page("/guidebook/").is_none());
    }

    #[test]
    fn test_keys_against_nav() {
        let mut diag = ConfigDiagnostics::new();
        let raw = sections(vec![("/guide/", vec![]), ("/observations/", vec![])]);
        let sidebar = validate_sidebar(&raw, &ValidateConfig::default(), &mut diag);

        check_keys_against_nav(
            &sidebar,
            &nav(&["/", "/guide/intro#start", "https://www.arcsecond.io/observations/"]),
            &ValidateConfig::default(),
            &mut diag,
        );
        assert!(diag.is_empty());
        assert_eq!(
            diag.warnings(),
            [Warning::SidebarKeyNotInNav("/observations/".into())]
        );
    }

    #[test]
    fn test_key_without_trailing_slash_in_nav() {
        let mut diag = ConfigDiagnostics::new();
        let raw = sections(vec![("/guide/", vec![RawNavItem::new("Guide", "/guide/")])]);
        let sidebar = validate_sidebar(&raw, &ValidateConfig::default(), &mut diag);

        check_keys_against_nav(&sidebar, &nav(&["/guide"]), &ValidateConfig::default(), &mut diag);
        assert!(diag.warnings().is_empty());
        assert_eq!(sidebar.for_page("/guide").unwrap().key, "/guide/");
    }

    #[test]
    fn test_global_sidebar_not_reported() {
        let mut diag = ConfigDiagnostics::new();
        let raw = RawSidebar::Global(vec![RawNavItem::new("Intro", "/")]);
        let sidebar = validate_sidebar(&raw, &ValidateConfig::default(), &mut diag);

        check_keys_against_nav(&sidebar, &[], &ValidateConfig::default(), &mut diag);
        check_keys_against_nav(
            &sidebar,
            &nav(&["https://www.arcsecond.io"]),
            &ValidateConfig::default(),
            &mut diag,
        );
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_keys_against_nav_ignored() {
        let mut diag = ConfigDiagnostics::new();
        let raw = sections(vec![("/guide/", vec![])]);
        let sidebar = validate_sidebar(&raw, &ValidateConfig::default(), &mut diag);
        let opts = ValidateConfig {
            sidebar_keys: CheckLevel::Ignore,
            ..ValidateConfig::default()
        };
        check_keys_against_nav(&sidebar, &[], &opts, &mut diag);
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_serialize_keeps_order() {
        let mut diag = ConfigDiagnostics::new();
        let raw = sections(vec![
            ("/z/", vec![RawNavItem::new("Z", "/z/")]),
            ("/a/", vec![RawNavItem::new("A", "/a/")]),
        ]);
        let sidebar = validate_sidebar(&raw, &ValidateConfig::default(), &mut diag);
        let json = serde_json::to_string(&sidebar).unwrap();
        assert_eq!(
            json,
            r#"{"/z/":[{"text":"Z","link":"/z/"}],"/a/":[{"text":"A","link":"/a/"}]}"#
        );
    }
}
