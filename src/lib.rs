//! Response URL modeling for redirect-following download clients.
//!
//! A client constructs a [`Url`] from the URL it was asked to fetch, then
//! records the response URL (the URL ultimately reached after redirects) once
//! the transfer reports it. The path component of the response URL is derived
//! on demand for filename and routing decisions.

pub mod logging;
pub mod url_model;

pub use url_model::{Url, UrlError};
