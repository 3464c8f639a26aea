//! Re-exports of the types that appear in this crate's public API.
//!
//! These save you from depending on `bytes` and `http` directly just to name the
//! body and URI types of a [`Request`](crate::Request).
//!
//! # Examples
//!
//! ```rust
//! use canonical_request::utils::{Bytes, Uri};
//!
//! let uri: Uri = "https://example.com/search?q=rust".parse().unwrap();
//! assert_eq!(uri.query(), Some("q=rust"));
//!
//! let body = Bytes::from_static(b"payload");
//! assert_eq!(body.len(), 7);
//! ```

/// Immutable, reference-counted byte buffer holding a request body.
///
/// Returned by [`Request::body_bytes`](crate::Request::body_bytes). Clones share
/// storage, and no handle can write to it.
///
/// This is a re-export from the `bytes` crate.
pub use bytes::Bytes;

/// A parsed URI, including its query component.
///
/// This is a re-export from the `http` crate.
pub use http::Uri;
