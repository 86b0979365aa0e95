//! `base`: the path prefix the site is deployed under.
//!
//! Normalized form is `/` or `/a/b/`: leading and trailing slash, no empty
//! segments.

use super::nav::Link;

/// Normalize a non-empty base path.
///
/// ```ignore
/// normalize_base("/cli")     -> "/cli/"
/// normalize_base("cli/")     -> "/cli/"
/// normalize_base("//docs//") -> "/docs/"
/// normalize_base("/")        -> "/"
/// ```
pub fn normalize_base(raw: &str) -> String {
    let segments: Vec<&str> = raw.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        return "/".to_owned();
    }
    format!("/{}/", segments.join("/"))
}

/// Public URL of a link when the site is served under `base`.
///
/// Internal links are prefixed with `base`; external links are returned as is.
pub fn resolve_link(base: &str, link: &Link) -> String {
    match link {
        Link::Internal(path) => {
            let base = base.trim_end_matches('/');
            format!("{base}{path}")
        }
        Link::External(url) => url.clone(),
    }
}
