//! Link classification for navigation entries.

/// Syntactic classification of a navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// Site-root-relative path (`/`, `/guide/`, `/install/#docker`).
    Internal(&'a str),
    /// Absolute `http://` or `https://` URL.
    External(&'a str),
    /// Anything else (`ftp://x`, `guide/`, `//cdn.host/x`, `mailto:a@b`).
    Unsupported(&'a str),
}

impl<'a> LinkKind<'a> {
    /// Parse a link string into its syntactic kind.
    #[inline]
    pub fn parse(link: &'a str) -> Self {
        if Self::is_http(link) {
            Self::External(link)
        } else if link.starts_with("//") {
            // Protocol-relative: neither a site path nor an explicit URL.
            Self::Unsupported(link)
        } else if link.starts_with('/') {
            Self::Internal(link)
        } else {
            Self::Unsupported(link)
        }
    }

    /// Check if link is HTTP/HTTPS.
    #[inline]
    pub fn is_http(link: &str) -> bool {
        link.starts_with("http://") || link.starts_with("https://")
    }

    /// Check if an external link parses as a URL with a host.
    pub fn has_host(link: &str) -> bool {
        url::Url::parse(link).is_ok_and(|parsed| parsed.host_str().is_some_and(|h| !h.is_empty()))
    }
}

/// Path part of an internal link, without query string or fragment.
///
/// ```ignore
/// path_part("/guide/#setup")   -> "/guide/"
/// path_part("/search?q=stars") -> "/search"
/// ```
#[inline]
pub fn path_part(link: &str) -> &str {
    link.split(['?', '#']).next().unwrap_or(link)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_internal() {
        assert!(matches!(LinkKind::parse("/"), LinkKind::Internal("/")));
        assert!(matches!(
            LinkKind::parse("/guide/"),
            LinkKind::Internal("/guide/")
        ));
        // With fragment
        assert!(matches!(
            LinkKind::parse("/install/#docker"),
            LinkKind::Internal("/install/#docker")
        ));
    }

    #[test]
    fn test_parse_external() {
        assert!(matches!(
            LinkKind::parse("https://docs.arcsecond.io"),
            LinkKind::External("https://docs.arcsecond.io")
        ));
        assert!(matches!(
            LinkKind::parse("http://localhost:8080/api"),
            LinkKind::External(_)
        ));
    }

    #[test]
    fn test_parse_unsupported() {
        assert!(matches!(LinkKind::parse("ftp://x"), LinkKind::Unsupported("ftp://x")));
        assert!(matches!(LinkKind::parse("guide/"), LinkKind::Unsupported(_)));
        assert!(matches!(
            LinkKind::parse("mailto:team@arcsecond.io"),
            LinkKind::Unsupported(_)
        ));
        assert!(matches!(
            LinkKind::parse("//cdn.example.com/x"),
            LinkKind::Unsupported(_)
        ));
        // Scheme match is case-sensitive, as authored configs use lowercase
        assert!(matches!(LinkKind::parse("HTTPS://x"), LinkKind::Unsupported(_)));
    }

    #[test]
    fn test_has_host() {
        assert!(LinkKind::has_host("https://arcsecond.io"));
        assert!(LinkKind::has_host("http://localhost:8000/"));
        assert!(!LinkKind::has_host("https://"));
    }

    #[test]
    fn test_path_part() {
        assert_eq!(path_part("/guide/#setup"), "/guide/");
        assert_eq!(path_part("/search?q=stars"), "/search");
        assert_eq!(path_part("/"), "/");
    }
}
