//! Config field path used to locate diagnostics in the source declaration.

use std::borrow::Cow;
use std::fmt;

/// Dotted path to a config field.
///
/// Static paths name top-level fields; nested paths are built with
/// [`FieldPath::key`] and [`FieldPath::index`].
///
/// # Example
///
/// ```ignore
/// FIELDS.sidebar.key("/guide/").index(2)  // themeConfig.sidebar["/guide/"][2]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path to a list element: `nav` -> `nav[3]`.
    pub fn index(&self, index: usize) -> Self {
        Self(Cow::Owned(format!("{}[{index}]", self.0)))
    }

    /// Path to a mapping entry: `sidebar` -> `sidebar["/guide/"]`.
    pub fn key(&self, key: &str) -> Self {
        Self(Cow::Owned(format!("{}[{key:?}]", self.0)))
    }

    /// Path to a named sub-field: `nav[0]` -> `nav[0].link`.
    pub fn field(&self, name: &str) -> Self {
        Self(Cow::Owned(format!("{}.{name}", self.0)))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Paths of the fields in the input mapping.
pub struct Fields {
    pub title: FieldPath,
    pub description: FieldPath,
    pub base: FieldPath,
    pub nav: FieldPath,
    pub sidebar: FieldPath,
}

/// Field paths as they are spelled in the input.
pub const FIELDS: Fields = Fields {
    title: FieldPath::new("title"),
    description: FieldPath::new("description"),
    base: FieldPath::new("base"),
    nav: FieldPath::new("themeConfig.nav"),
    sidebar: FieldPath::new("themeConfig.sidebar"),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_paths() {
        assert_eq!(FIELDS.nav.index(3).as_str(), "themeConfig.nav[3]");
        assert_eq!(
            FIELDS.sidebar.key("/guide/").index(0).field("link").as_str(),
            "themeConfig.sidebar[\"/guide/\"][0].link"
        );
    }

    #[test]
    fn test_static_path_equality() {
        assert_eq!(FIELDS.base, FieldPath::new("base"));
        assert_eq!(FIELDS.title.to_string(), "title");
    }
}
