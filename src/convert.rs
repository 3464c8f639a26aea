//! Conversions from [`http`] request types, routed through [`RequestBuilder`].
use crate::error::{Error, Result};
use crate::{Request, RequestBuilder};
use http::{request::Parts, HeaderMap, Method, Uri};

fn canonicalize(
    method: &Method,
    uri: &Uri,
    headers: &HeaderMap,
    body: impl AsRef<[u8]>,
) -> Result<Request> {
    let mut builder = RequestBuilder::new();
    builder
        .body(body)
        .method(method.as_str())?
        .uri_with_query(uri.clone())?;

    for (name, value) in headers {
        let value = value.to_str().map_err(|_| {
            log::debug!("rejected non-text value for header {name:?}");
            Error::invalid("header value", "is not visible ASCII")
        })?;
        builder.header(name.as_str(), value)?;
    }
    builder.build()
}

impl Request {
    /// Builds a canonical request from `http` request parts and a body.
    ///
    /// Every header goes through [`RequestBuilder::header`], so names are lower-cased
    /// and the usual duplicate rule applies.
    ///
    /// ```rust
    /// use canonical_request::Request;
    ///
    /// let (parts, body) = http::Request::builder()
    ///     .method("PUT")
    ///     .uri("https://example.com/doc?rev=4")
    ///     .header("If-Match", "\"v3\"")
    ///     .body(b"text".to_vec())
    ///     .unwrap()
    ///     .into_parts();
    ///
    /// let request = Request::from_parts(&parts, body)?;
    /// assert_eq!(request.header("if-match"), Some("\"v3\""));
    /// assert_eq!(request.uri_with_query().as_str(), "https://example.com/doc?rev=4");
    /// # Ok::<(), canonical_request::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if a header value is not visible ASCII.
    /// - [`Error::DuplicateHeader`] if a header name carries more than one value.
    pub fn from_parts(parts: &Parts, body: impl AsRef<[u8]>) -> Result<Self> {
        canonicalize(&parts.method, &parts.uri, &parts.headers, body)
    }
}

/// Builds a canonical request from an [`http::Request`] whose body is already in memory.
///
/// A header name that appears more than once in the [`HeaderMap`] is a
/// [`DuplicateHeader`](Error::DuplicateHeader) error.
///
/// ```rust
/// use canonical_request::Request;
///
/// let http_request = http::Request::builder()
///     .method("POST")
///     .uri("https://example.com/upload?part=1")
///     .header("Content-Type", "text/plain")
///     .body(b"payload".to_vec())
///     .unwrap();
///
/// let request = Request::try_from(&http_request)?;
/// assert_eq!(request.method(), "POST");
/// assert_eq!(request.body(), b"payload");
/// assert_eq!(request.header("content-type"), Some("text/plain"));
/// # Ok::<(), canonical_request::Error>(())
/// ```
impl<B> TryFrom<&http::Request<B>> for Request
where
    B: AsRef<[u8]>,
{
    type Error = Error;

    fn try_from(request: &http::Request<B>) -> Result<Self> {
        canonicalize(
            request.method(),
            request.uri(),
            request.headers(),
            request.body(),
        )
    }
}
