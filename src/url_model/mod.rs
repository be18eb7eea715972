//! Response URL tracking and path extraction.
//!
//! Tracks the URL a download was requested with alongside the response URL
//! reported after any redirects, and derives the response URL's path
//! component on demand.

mod error;

pub use error::UrlError;

/// Tracks a requested URL together with the response URL reported after
/// redirects.
///
/// The construction URL is stored verbatim and never changes. The response
/// URL starts unset; reading it (or deriving the path) before a transfer has
/// recorded it fails with [`UrlError::ResponseUrlUnset`].
#[derive(Debug, Clone)]
pub struct Url {
    url: String,
    response_url: Option<String>,
}

impl Url {
    /// Creates a tracker for `url`.
    ///
    /// The value is stored verbatim: no validation, no normalization, empty
    /// strings allowed.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            response_url: None,
        }
    }

    /// The URL given at construction, unchanged.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The response URL recorded by [`set_response_url`](Self::set_response_url).
    ///
    /// Fails with [`UrlError::ResponseUrlUnset`] until a value has been
    /// recorded.
    pub fn response_url(&self) -> Result<&str, UrlError> {
        self.response_url
            .as_deref()
            .ok_or(UrlError::ResponseUrlUnset)
    }

    /// Records the response URL, verbatim. A later call replaces the previous
    /// value.
    pub fn set_response_url(&mut self, value: impl Into<String>) {
        self.response_url = Some(value.into());
    }

    /// The path component of the current response URL (no scheme, host, query,
    /// or fragment).
    ///
    /// Re-parses the response URL on every call; the construction URL is never
    /// consulted. Fails with [`UrlError::ResponseUrlUnset`] if no response URL
    /// has been recorded, or [`UrlError::MalformedResponseUrl`] if the
    /// recorded value cannot be parsed. The parser's own error type stops
    /// here.
    pub fn url_path(&self) -> Result<String, UrlError> {
        let response_url = self.response_url()?;
        let parsed = url::Url::parse(response_url).map_err(|e| {
            tracing::debug!("response URL failed to parse: {}", e);
            UrlError::MalformedResponseUrl {
                url: response_url.to_string(),
            }
        })?;
        Ok(parsed.path().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_preserves_url() {
        assert_eq!(Url::new("").url(), "");
        assert_eq!(
            Url::new("http://example.com/home/foo?abc=cde").url(),
            "http://example.com/home/foo?abc=cde"
        );
        assert_eq!(Url::new("not even a url").url(), "not even a url");
    }

    #[test]
    fn response_url_before_set_errors() {
        let url_obj = Url::new("");
        assert!(matches!(
            url_obj.response_url(),
            Err(UrlError::ResponseUrlUnset)
        ));
    }

    #[test]
    fn response_url_set_then_get() {
        let mut url_obj = Url::new("");
        url_obj.set_response_url("ftp://x/y");
        assert_eq!(url_obj.response_url().unwrap(), "ftp://x/y");
    }

    #[test]
    fn url_path_from_response_url() {
        let mut url_obj = Url::new("http://original.example/ignored");
        url_obj.set_response_url("http://a/b/c.txt");
        assert_eq!(url_obj.url_path().unwrap(), "/b/c.txt");
    }

    #[test]
    fn url_path_excludes_query() {
        let mut url_obj = Url::new("");
        url_obj.set_response_url("http://example.com/home/foo?abc=cde");
        assert_eq!(url_obj.url_path().unwrap(), "/home/foo");
    }

    #[test]
    fn url_path_before_set_errors() {
        let url_obj = Url::new("http://example.com/");
        assert!(matches!(url_obj.url_path(), Err(UrlError::ResponseUrlUnset)));
    }

    #[test]
    fn url_path_malformed_response_url() {
        let mut url_obj = Url::new("");
        url_obj.set_response_url("not a url \u{0}");
        assert!(matches!(
            url_obj.url_path(),
            Err(UrlError::MalformedResponseUrl { .. })
        ));
    }

    #[test]
    fn url_path_tracks_reassignment() {
        let mut url_obj = Url::new("");
        url_obj.set_response_url("http://a/b");
        assert_eq!(url_obj.url_path().unwrap(), "/b");
        url_obj.set_response_url("http://a/c/d");
        assert_eq!(url_obj.url_path().unwrap(), "/c/d");
    }
}
