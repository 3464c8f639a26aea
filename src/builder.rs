//! Staged construction of [`Request`] values.
//!
//! [`RequestBuilder`] validates every input as soon as it is supplied, so a bad header
//! or a blank method is reported by the call that introduced it rather than by
//! [`build`](RequestBuilder::build). Only completeness (method and URI both set) is
//! checked at build time.
//!
//! Header names are lower-cased on insertion. HTTP treats header names
//! case-insensitively, and a signer cannot tell `Host` and `host` apart, so two names
//! that only differ by case are rejected as duplicates instead of being merged or
//! overwritten.
//!
//! # Examples
//!
//! ```rust
//! use canonical_request::RequestBuilder;
//! use std::collections::HashMap;
//!
//! let mut headers = HashMap::new();
//! headers.insert("Content-Type", "application/json");
//! headers.insert("X-Request-Id", "42");
//!
//! let mut builder = RequestBuilder::new();
//! builder
//!     .method("PUT")?
//!     .uri_with_query("https://example.com/items/7")?
//!     .headers(&headers)?
//!     .body(b"{}");
//!
//! let request = builder.build()?;
//! assert_eq!(request.header("x-request-id"), Some("42"));
//! # Ok::<(), canonical_request::Error>(())
//! ```
use crate::error::{Error, MissingField, Result};
use crate::request::{Headers, Request, UriWithQuery};
use alloc::{borrow::ToOwned, string::String};
use bytes::Bytes;
use core::fmt::Debug;

pub(crate) fn normalize_header_name(name: &str) -> String {
    name.to_lowercase()
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// A mutable, single-use staging area for a [`Request`].
///
/// Setters take `&mut self` and return `Result<&mut Self>`, so calls chain with `?`
/// and a rejected input never reaches the builder state. The body defaults to empty;
/// method and URI have no default and must be set before [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    body: Bytes,
    headers: Headers,
    method: Option<String>,
    uri_with_query: Option<UriWithQuery>,
}

impl RequestBuilder {
    /// Creates an empty builder.
    ///
    /// Equivalent to [`Request::builder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the request body. Defaults to empty when never called.
    ///
    /// The bytes are copied, so later changes to the caller's buffer are not observed
    /// by the builder or by any request it produces.
    ///
    /// ```rust
    /// use canonical_request::Request;
    ///
    /// let mut buf = b"original".to_vec();
    /// let mut builder = Request::builder();
    /// builder.body(&buf).method("POST")?.uri_with_query("https://example.com/")?;
    /// buf.fill(b'x');
    ///
    /// assert_eq!(builder.build()?.body(), b"original");
    /// # Ok::<(), canonical_request::Error>(())
    /// ```
    pub fn body(&mut self, body: impl AsRef<[u8]>) -> &mut Self {
        self.body = Bytes::copy_from_slice(body.as_ref());
        self
    }

    /// Adds a single header.
    ///
    /// The name is lower-cased before it is stored; the value is stored as given.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `name` or `value` is empty or only whitespace.
    /// - [`Error::DuplicateHeader`] if a header with the same lower-cased name was
    ///   already added.
    pub fn header(&mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<&mut Self> {
        let (name, value) = (name.as_ref(), value.as_ref());
        if is_blank(name) {
            log::debug!("rejected header with blank name");
            return Err(Error::invalid("header name", "cannot be blank"));
        }
        if is_blank(value) {
            log::debug!("rejected header {name:?} with blank value");
            return Err(Error::invalid("header value", "cannot be blank"));
        }

        let name = normalize_header_name(name);
        if self.headers.contains_key(&name) {
            log::debug!("rejected duplicate header {name:?}");
            return Err(Error::DuplicateHeader(name));
        }
        self.headers.insert(name, value.to_owned());
        Ok(self)
    }

    /// Adds every header yielded by `headers`, in iteration order.
    ///
    /// Each entry goes through [`header`](Self::header), so duplicates are detected
    /// against headers added earlier as well as within `headers` itself. Iteration stops
    /// at the first rejected entry; entries before it stay added.
    ///
    /// ```rust
    /// use canonical_request::Request;
    ///
    /// let mut builder = Request::builder();
    /// builder.headers([("Accept", "*/*")])?;
    ///
    /// let err = builder.headers([("X-Trace", "1"), ("ACCEPT", "text/html")]).unwrap_err();
    /// assert!(err.is_duplicate_header());
    /// assert_eq!(builder.headers_view().len(), 2);
    /// # Ok::<(), canonical_request::Error>(())
    /// ```
    pub fn headers<I, K, V>(&mut self, headers: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (name, value) in headers {
            self.header(name, value)?;
        }
        Ok(self)
    }

    /// Sets the HTTP method. It is stored verbatim, without case normalization.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `method` is empty or only whitespace.
    pub fn method(&mut self, method: impl Into<String>) -> Result<&mut Self> {
        let method = method.into();
        if is_blank(&method) {
            log::debug!("rejected blank method");
            return Err(Error::invalid("method", "cannot be blank"));
        }
        self.method = Some(method);
        Ok(self)
    }

    /// Sets the URI of the request, including its query string.
    ///
    /// Text input is stored verbatim, including any fragment; it only has to parse as
    /// an [`http::Uri`]. A [`http::Uri`] value is stored as it renders.
    ///
    /// ```rust
    /// use canonical_request::Request;
    ///
    /// let mut builder = Request::builder();
    /// builder.method("GET")?.uri_with_query("https://example.com?page=2#top")?;
    ///
    /// let request = builder.build()?;
    /// assert_eq!(request.uri_with_query().as_str(), "https://example.com?page=2#top");
    /// # Ok::<(), canonical_request::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `uri` cannot be parsed as a URI.
    pub fn uri_with_query<U>(&mut self, uri: U) -> Result<&mut Self>
    where
        U: TryInto<UriWithQuery>,
        U::Error: Debug,
    {
        match uri.try_into() {
            Ok(uri) => {
                self.uri_with_query = Some(uri);
                Ok(self)
            }
            Err(error) => {
                log::debug!("rejected uri: {error:?}");
                Err(Error::invalid("uri", "is not a valid URI"))
            }
        }
    }

    /// Returns the body staged so far.
    pub fn body_view(&self) -> &[u8] {
        &self.body
    }

    /// Returns the headers staged so far, keyed by lower-cased name.
    pub const fn headers_view(&self) -> &Headers {
        &self.headers
    }

    /// Returns the method, if one was set.
    pub fn method_view(&self) -> Option<&str> {
        self.method.as_deref()
    }

    /// Returns the URI, if one was set.
    pub const fn uri_with_query_view(&self) -> Option<&UriWithQuery> {
        self.uri_with_query.as_ref()
    }

    /// Builds an immutable [`Request`] from the staged fields.
    ///
    /// The request receives its own copies of the headers, method and URI; the body is
    /// an immutable [`Bytes`] shared with the builder, so later setter calls on the
    /// builder never affect the returned request.
    ///
    /// # Errors
    ///
    /// [`Error::IncompleteRequest`] if the method or the URI was never set. The builder
    /// is left as it was.
    pub fn build(&self) -> Result<Request> {
        let Some(method) = &self.method else {
            log::debug!("build attempted without a method");
            return Err(Error::IncompleteRequest(MissingField::Method));
        };
        let Some(uri_with_query) = &self.uri_with_query else {
            log::debug!("build attempted without a uri");
            return Err(Error::IncompleteRequest(MissingField::UriWithQuery));
        };

        log::trace!(
            "built request {} {} with {} header(s) and {} body byte(s)",
            method,
            uri_with_query,
            self.headers.len(),
            self.body.len()
        );
        Ok(Request::from_builder_parts(
            self.body.clone(),
            self.headers.clone(),
            method.clone(),
            uri_with_query.clone(),
        ))
    }
}

impl From<&Request> for RequestBuilder {
    fn from(request: &Request) -> Self {
        Self {
            body: request.body_bytes(),
            headers: request.headers().clone(),
            method: Some(request.method().to_owned()),
            uri_with_query: Some(request.uri_with_query().clone()),
        }
    }
}
