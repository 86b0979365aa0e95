//! Unvalidated input model.
//!
//! Every field is optional so that absence is reported by validation with
//! the field's name, rather than by the parser.
//!
//! # Example
//!
//! ```toml
//! title = "Arcsecond CLI"
//! description = "The command-line / Python module of Arcsecond.io."
//! base = "/"
//!
//! [[themeConfig.nav]]
//! text = "Home"
//! link = "/"
//!
//! [themeConfig.sidebar]
//! "/guide/" = [{ text = "Usage Guide", link = "/guide/" }]
//! ```

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, SeqAccess, Visitor},
    ser::SerializeMap,
};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    #[serde(rename = "themeConfig")]
    pub theme_config: RawThemeConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawThemeConfig {
    pub nav: Vec<RawNavItem>,
    pub sidebar: RawSidebar,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawNavItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl RawNavItem {
    pub fn new(text: &str, link: &str) -> Self {
        Self {
            text: Some(text.to_owned()),
            link: Some(link.to_owned()),
        }
    }
}

/// `themeConfig.sidebar`: a mapping from path prefix to items, or a bare
/// list that applies to every page.
///
/// Mapping entries keep their written order, duplicates included, so that
/// validation can report repeated keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawSidebar {
    Sections(Vec<(String, Vec<RawNavItem>)>),
    Global(Vec<RawNavItem>),
}

impl Default for RawSidebar {
    fn default() -> Self {
        Self::Sections(Vec::new())
    }
}

impl Serialize for RawSidebar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Sections(sections) => {
                let mut map = serializer.serialize_map(Some(sections.len()))?;
                for (key, items) in sections {
                    map.serialize_entry(key, items)?;
                }
                map.end()
            }
            Self::Global(items) => items.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for RawSidebar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SidebarVisitor)
    }
}

struct SidebarVisitor;

impl<'de> Visitor<'de> for SidebarVisitor {
    type Value = RawSidebar;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a mapping from path prefix to nav items, or a list of nav items")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut sections = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, items)) = map.next_entry::<String, Vec<RawNavItem>>()? {
            sections.push((key, items));
        }
        Ok(RawSidebar::Sections(sections))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<RawNavItem>()? {
            items.push(item);
        }
        Ok(RawSidebar::Global(items))
    }

    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(RawSidebar::default())
    }
}

impl RawConfig {
    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_toml(content: &str) -> Result<(Self, Vec<String>), toml::de::Error> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let raw = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((raw, ignored))
    }

    /// Parse JSON content, collecting any unknown fields.
    pub fn parse_json(content: &str) -> Result<(Self, Vec<String>), serde_json::Error> {
        let mut ignored = Vec::new();
        let mut deserializer = serde_json::Deserializer::from_str(content);
        let raw = serde_ignored::deserialize(&mut deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        deserializer.end()?;
        Ok((raw, ignored))
    }
}
