//! Canonical HTTP request implementation.
//!
//! This module provides the immutable [`Request`] value handed to a request signer. A
//! `Request` can only come out of a successful [`RequestBuilder::build`], so every value
//! of this type already satisfies the following:
//!
//! - `method` is not blank
//! - `uri_with_query` is set
//! - header names are lower case and unique
//! - `body` is an independent copy of whatever the caller supplied
//!
//! Requests are totally ordered. Two requests compare field by field in the order
//! `body`, `headers`, `method`, `uri_with_query`, and the first differing field decides.
//! Equality and hashing are defined on top of that same comparison.
//!
//! # Examples
//!
//! ```rust
//! use canonical_request::Request;
//!
//! let request = Request::builder()
//!     .method("POST")?
//!     .uri_with_query("https://api.example.com/users?limit=10")?
//!     .header("Content-Type", "application/json")?
//!     .body(br#"{"name":"Alice"}"#)
//!     .build()?;
//!
//! assert_eq!(request.method(), "POST");
//! assert_eq!(request.header("CONTENT-TYPE"), Some("application/json"));
//! # Ok::<(), canonical_request::Error>(())
//! ```
use crate::builder::{normalize_header_name, RequestBuilder};
use alloc::{borrow::ToOwned, collections::BTreeMap, string::String, string::ToString};
use bytes::Bytes;
use core::{
    cmp::Ordering,
    fmt::{self, Display},
    hash::{Hash, Hasher},
    str::FromStr,
};
use http::{uri::InvalidUri, Uri};

/// Header mapping of a [`Request`], keyed by lower-cased header name.
pub type Headers = BTreeMap<String, String>;

/// The target of a [`Request`]: an absolute URI including its query component.
///
/// The text is kept exactly as supplied, fragment and all, next to its parsed [`Uri`].
/// Ordering, equality, hashing and rendering use the text, so two inputs that `Uri`
/// would normalize to the same value stay distinct.
///
/// ```rust
/// use canonical_request::request::UriWithQuery;
///
/// let uri: UriWithQuery = "https://example.com?q=1#top".parse()?;
/// assert_eq!(uri.as_str(), "https://example.com?q=1#top");
/// assert_eq!(uri.uri().query(), Some("q=1"));
/// # Ok::<(), http::uri::InvalidUri>(())
/// ```
#[derive(Debug, Clone)]
pub struct UriWithQuery {
    text: String,
    uri: Uri,
}

impl UriWithQuery {
    /// Returns the URI text exactly as it was supplied.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the parsed URI.
    pub const fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Returns the parsed URI, dropping the original text.
    pub fn into_uri(self) -> Uri {
        self.uri
    }
}

impl FromStr for UriWithQuery {
    type Err = InvalidUri;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(Self {
            uri: Uri::try_from(text)?,
            text: text.to_owned(),
        })
    }
}

impl TryFrom<&str> for UriWithQuery {
    type Error = InvalidUri;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl TryFrom<String> for UriWithQuery {
    type Error = InvalidUri;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Ok(Self {
            uri: Uri::try_from(text.as_str())?,
            text,
        })
    }
}

impl From<Uri> for UriWithQuery {
    fn from(uri: Uri) -> Self {
        Self {
            text: uri.to_string(),
            uri,
        }
    }
}

impl Ord for UriWithQuery {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl PartialOrd for UriWithQuery {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for UriWithQuery {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for UriWithQuery {}

impl Hash for UriWithQuery {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl Display for UriWithQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl serde::Serialize for UriWithQuery {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

/// An immutable, canonical HTTP request.
///
/// See the [module documentation](self) for the guarantees every value carries.
#[derive(Debug, Clone)]
pub struct Request {
    body: Bytes,
    headers: Headers,
    method: String,
    uri_with_query: UriWithQuery,
}

impl Request {
    pub(crate) fn from_builder_parts(
        body: Bytes,
        headers: Headers,
        method: String,
        uri_with_query: UriWithQuery,
    ) -> Self {
        Self {
            body,
            headers,
            method,
            uri_with_query,
        }
    }

    /// Returns a fresh [`RequestBuilder`].
    ///
    /// This is equivalent to [`RequestBuilder::new`].
    pub fn builder() -> RequestBuilder {
        RequestBuilder::new()
    }

    /// Returns a builder pre-populated with this request's fields.
    ///
    /// Useful for deriving a new request, e.g. one carrying an extra header. The
    /// original request is left untouched.
    ///
    /// ```rust
    /// use canonical_request::Request;
    ///
    /// let request = Request::builder()
    ///     .method("GET")?
    ///     .uri_with_query("https://example.com/")?
    ///     .build()?;
    ///
    /// let signed = request
    ///     .to_builder()
    ///     .header("Authorization", "EG1-HMAC-SHA256 ...")?
    ///     .build()?;
    ///
    /// assert!(request.header("authorization").is_none());
    /// assert!(signed.header("authorization").is_some());
    /// # Ok::<(), canonical_request::Error>(())
    /// ```
    pub fn to_builder(&self) -> RequestBuilder {
        RequestBuilder::from(self)
    }

    /// Returns the request body.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns the request body as a shared [`Bytes`] handle.
    ///
    /// `Bytes` cannot be mutated through, so the handle shares storage with the request
    /// without exposing it to writes.
    pub fn body_bytes(&self) -> Bytes {
        self.body.clone()
    }

    /// Returns a read-only view of the headers, keyed by lower-cased name.
    pub const fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Looks up a header value. `name` is lower-cased before the lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(normalize_header_name(name).as_str())
            .map(String::as_str)
    }

    /// Returns the HTTP method, exactly as it was supplied.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Returns the URI including its query component, as it was supplied.
    pub const fn uri_with_query(&self) -> &UriWithQuery {
        &self.uri_with_query
    }

    /// Destructures the request into `(body, headers, method, uri_with_query)`.
    pub fn into_parts(self) -> (Bytes, Headers, String, UriWithQuery) {
        (self.body, self.headers, self.method, self.uri_with_query)
    }
}

impl Ord for Request {
    fn cmp(&self, other: &Self) -> Ordering {
        self.body
            .cmp(&other.body)
            .then_with(|| self.headers.cmp(&other.headers))
            .then_with(|| self.method.cmp(&other.method))
            .then_with(|| self.uri_with_query.cmp(&other.uri_with_query))
    }
}

impl PartialOrd for Request {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Request {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Request {}

impl Hash for Request {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.body.hash(state);
        self.headers.hash(state);
        self.method.hash(state);
        self.uri_with_query.hash(state);
    }
}

/// Renders the request as a JSON object, for diagnostics only.
///
/// The rendering is the [`Serialize`](serde::Serialize) form written by `serde_json`.
///
/// ```rust
/// use canonical_request::Request;
///
/// let request = Request::builder()
///     .method("GET")?
///     .uri_with_query("https://example.com/?q=1")?
///     .header("Accept", "*/*")?
///     .body(b"hi")
///     .build()?;
///
/// assert_eq!(
///     request.to_string(),
///     r#"{"body":[104,105],"headers":{"accept":"*/*"},"method":"GET","uriWithQuery":"https://example.com/?q=1"}"#
/// );
/// # Ok::<(), canonical_request::Error>(())
/// ```
impl Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl serde::Serialize for Request {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Request", 4)?;
        state.serialize_field("body", &self.body[..])?;
        state.serialize_field("headers", &self.headers)?;
        state.serialize_field("method", &self.method)?;
        state.serialize_field("uriWithQuery", &self.uri_with_query)?;
        state.end()
    }
}
