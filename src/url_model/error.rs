//! Error type for response URL access and path derivation.

use thiserror::Error;

/// Failure surfaced by [`Url`](crate::url_model::Url) accessors.
///
/// Both conditions are invalid-state errors the object cannot recover from on
/// its own; callers get this one type regardless of which condition fired.
#[derive(Debug, Error)]
pub enum UrlError {
    /// Response URL read before any value was recorded.
    #[error("response URL has not been set")]
    ResponseUrlUnset,
    /// Current response URL could not be parsed as a URL.
    #[error("malformed response URL: {url:?}")]
    MalformedResponseUrl { url: String },
}
