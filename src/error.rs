//! Error types and utilities.
//!
//! Every failure in this crate is a caller-input validation failure. None of them are
//! transient, so there is nothing to retry:
//!
//! - [`Error::InvalidArgument`] - a setter received an unusable value
//! - [`Error::DuplicateHeader`] - a header name collided with one already added
//! - [`Error::IncompleteRequest`] - [`build`](crate::RequestBuilder::build) ran before a
//!   mandatory field was set
//!
//! # Examples
//!
//! ```rust
//! use canonical_request::{Error, Request};
//!
//! let mut builder = Request::builder();
//! builder.header("Host", "example.com")?;
//!
//! let err = builder.header("host", "example.org").unwrap_err();
//! assert!(err.is_duplicate_header());
//! # Ok::<(), Error>(())
//! ```
use alloc::string::String;
use core::fmt::{self, Display};

/// A specialized Result type for request construction.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for building a [`Request`](crate::Request).
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A setter was called with a value it cannot accept.
    InvalidArgument(InvalidArgument),
    /// A header with the same lower-cased name was already added.
    ///
    /// Carries the normalized name.
    DuplicateHeader(String),
    /// `build()` was called before a mandatory field was set.
    IncompleteRequest(MissingField),
}

/// Details of a rejected argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidArgument {
    argument: &'static str,
    reason: &'static str,
}

impl InvalidArgument {
    pub(crate) const fn new(argument: &'static str, reason: &'static str) -> Self {
        Self { argument, reason }
    }

    /// Name of the rejected argument, e.g. `"header name"`.
    pub const fn argument(&self) -> &'static str {
        self.argument
    }

    /// Why the argument was rejected.
    pub const fn reason(&self) -> &'static str {
        self.reason
    }
}

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.argument, self.reason)
    }
}

impl core::error::Error for InvalidArgument {}

/// A mandatory request field that was never set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MissingField {
    /// The HTTP method.
    Method,
    /// The absolute URI including its query.
    UriWithQuery,
}

impl MissingField {
    /// The field name as it appears in diagnostics.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Method => "method",
            Self::UriWithQuery => "uriWithQuery",
        }
    }
}

impl Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Error {
    pub(crate) const fn invalid(argument: &'static str, reason: &'static str) -> Self {
        Self::InvalidArgument(InvalidArgument::new(argument, reason))
    }

    /// Returns `true` for [`Error::InvalidArgument`].
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns `true` for [`Error::DuplicateHeader`].
    pub const fn is_duplicate_header(&self) -> bool {
        matches!(self, Self::DuplicateHeader(_))
    }

    /// Returns `true` for [`Error::IncompleteRequest`].
    pub const fn is_incomplete_request(&self) -> bool {
        matches!(self, Self::IncompleteRequest(_))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(error) => error.fmt(f),
            Self::DuplicateHeader(name) => write!(f, "duplicate header found: {name}"),
            Self::IncompleteRequest(field) => write!(f, "{field} must be set before build"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidArgument(error) => Some(error),
            Self::DuplicateHeader(_) | Self::IncompleteRequest(_) => None,
        }
    }
}

impl From<InvalidArgument> for Error {
    fn from(error: InvalidArgument) -> Self {
        Self::InvalidArgument(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use core::error::Error as _;

    #[test]
    fn messages() {
        assert_eq!(
            Error::invalid("header name", "cannot be blank").to_string(),
            "header name cannot be blank"
        );
        assert_eq!(
            Error::DuplicateHeader("content-type".into()).to_string(),
            "duplicate header found: content-type"
        );
        assert_eq!(
            Error::IncompleteRequest(MissingField::UriWithQuery).to_string(),
            "uriWithQuery must be set before build"
        );
    }

    #[test]
    fn source_only_for_invalid_argument() {
        assert!(Error::invalid("method", "cannot be blank").source().is_some());
        assert!(Error::DuplicateHeader("a".into()).source().is_none());
        assert!(Error::IncompleteRequest(MissingField::Method).source().is_none());
    }

    #[test]
    fn kind_predicates() {
        let err = Error::invalid("body", "cannot be null");
        assert!(err.is_invalid_argument());
        assert!(!err.is_duplicate_header());
        assert!(!err.is_incomplete_request());

        match err {
            Error::InvalidArgument(inner) => {
                assert_eq!(inner.argument(), "body");
                assert_eq!(inner.reason(), "cannot be null");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
