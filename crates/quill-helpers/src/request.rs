//! Per-request metadata and the URL and client-identity helpers built on it.
//!
//! The host constructs one [`RequestMeta`] per incoming request from its own
//! header and query state. URL building stays on the host side behind the
//! [`SiteLinks`] seam; this module only decides which URL to ask for.

/// Snapshot of the request state the helpers read.
///
/// All header values are optional; absent and empty are treated the same.
#[derive(Debug, Clone, Default)]
pub struct RequestMeta {
    /// `X-Forwarded-For` header, when a proxy supplied one.
    pub forwarded_for: Option<String>,
    /// Remote socket address of the connection.
    pub remote_addr: Option<String>,
    /// `User-Agent` header.
    pub user_agent: Option<String>,
    /// `Referer` header.
    pub referrer: Option<String>,
    /// Whether this request is the host's main query.
    pub is_main_query: bool,
    /// Whether the request is rendering a single resource.
    pub is_singular: bool,
    /// Path plus query string of the request, as received.
    pub path_and_query: String,
}

/// Host-side URL building for the current request.
pub trait SiteLinks {
    /// Canonical site URL for the given path-and-query, absolute.
    fn home_url(&self, path_and_query: &str) -> String;

    /// Permalink of the resource currently being rendered, if any.
    fn permalink(&self) -> Option<String>;
}

/// Canonical URL of the current request, always with a trailing slash.
///
/// A request that is neither the main query nor rendering a single resource
/// gets the site URL rebuilt from its own path and query string; otherwise
/// the rendered resource's permalink is used (falling back to the rebuilt
/// site URL when no permalink exists).
pub fn current_url<L: SiteLinks + ?Sized>(request: &RequestMeta, links: &L) -> String {
    if !request.is_main_query && !request.is_singular {
        return ensure_trailing_slash(&links.home_url(&request.path_and_query));
    }

    match links.permalink() {
        Some(permalink) => ensure_trailing_slash(&permalink),
        None => ensure_trailing_slash(&links.home_url(&request.path_and_query)),
    }
}

/// Append a single trailing slash, collapsing any the input already has.
#[must_use]
pub fn ensure_trailing_slash(url: &str) -> String {
    format!("{}/", url.trim_end_matches('/'))
}

/// Opaque client key derived from the forwarded-for and remote-address
/// headers: `"<forwarded-for>-<remote-addr>"`, the hyphen omitted when the
/// forwarded-for half is absent.
///
/// Both headers are client-controlled and spoofable. This is a best-effort
/// deduplication key (e.g. for anonymous ratings), never a security
/// boundary.
#[must_use]
pub fn client_fingerprint(request: &RequestMeta) -> String {
    let forwarded = request.forwarded_for.as_deref().unwrap_or("");
    let remote = request.remote_addr.as_deref().unwrap_or("");

    if forwarded.is_empty() {
        remote.to_string()
    } else {
        format!("{forwarded}-{remote}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeLinks {
        home: String,
        permalink: Option<String>,
    }

    impl SiteLinks for FakeLinks {
        fn home_url(&self, path_and_query: &str) -> String {
            format!("{}{path_and_query}", self.home)
        }

        fn permalink(&self) -> Option<String> {
            self.permalink.clone()
        }
    }

    fn meta(forwarded: Option<&str>, remote: Option<&str>) -> RequestMeta {
        RequestMeta {
            forwarded_for: forwarded.map(str::to_string),
            remote_addr: remote.map(str::to_string),
            ..RequestMeta::default()
        }
    }

    #[test]
    fn test_fingerprint_joins_both_halves() {
        let request = meta(Some("1.2.3.4"), Some("5.6.7.8"));
        assert_eq!(client_fingerprint(&request), "1.2.3.4-5.6.7.8");
    }

    #[test]
    fn test_fingerprint_remote_only() {
        assert_eq!(client_fingerprint(&meta(None, Some("5.6.7.8"))), "5.6.7.8");
        assert_eq!(
            client_fingerprint(&meta(Some(""), Some("5.6.7.8"))),
            "5.6.7.8"
        );
    }

    #[test]
    fn test_fingerprint_forwarded_only_keeps_hyphen() {
        assert_eq!(client_fingerprint(&meta(Some("1.2.3.4"), None)), "1.2.3.4-");
    }

    #[test]
    fn test_fingerprint_both_empty() {
        assert_eq!(client_fingerprint(&meta(None, None)), "");
    }

    #[test]
    fn test_current_url_secondary_query_uses_request_path() {
        let request = RequestMeta {
            path_and_query: "/archive?page=2".to_string(),
            ..RequestMeta::default()
        };
        let links = FakeLinks {
            home: "https://example.com".to_string(),
            permalink: Some("https://example.com/post/hello".to_string()),
        };

        assert_eq!(
            current_url(&request, &links),
            "https://example.com/archive?page=2/"
        );
    }

    #[test]
    fn test_current_url_singular_uses_permalink() {
        let request = RequestMeta {
            is_singular: true,
            path_and_query: "/post/hello".to_string(),
            ..RequestMeta::default()
        };
        let links = FakeLinks {
            home: "https://example.com".to_string(),
            permalink: Some("https://example.com/post/hello".to_string()),
        };

        assert_eq!(
            current_url(&request, &links),
            "https://example.com/post/hello/"
        );
    }

    #[test]
    fn test_current_url_main_query_without_permalink_falls_back() {
        let request = RequestMeta {
            is_main_query: true,
            path_and_query: "/".to_string(),
            ..RequestMeta::default()
        };
        let links = FakeLinks {
            home: "https://example.com".to_string(),
            permalink: None,
        };

        assert_eq!(current_url(&request, &links), "https://example.com/");
    }

    #[test]
    fn test_ensure_trailing_slash() {
        assert_eq!(ensure_trailing_slash("https://example.com"), "https://example.com/");
        assert_eq!(ensure_trailing_slash("https://example.com/"), "https://example.com/");
        assert_eq!(ensure_trailing_slash("https://example.com//"), "https://example.com/");
        assert_eq!(ensure_trailing_slash(""), "/");
    }
}
