#![deny(unsafe_code)]
#![no_std]
#![warn(missing_docs, missing_debug_implementations)]
//! Canonical, immutable HTTP requests for request signing.
//!
//! A request signer needs a stable view of the request it signs: one method, one URI,
//! one value per header name and a body nobody else can change underneath it. This
//! crate provides that view as [`Request`], which can only be produced by a
//! [`RequestBuilder`] that validates each input as it arrives.
//!
//! # Features
//!
//! - **Fail-fast validation** - blank methods, blank header names or values and
//!   case-insensitive duplicate headers are rejected by the call that supplies them
//! - **Normalized headers** - header names are stored lower case
//! - **Immutable values** - bodies are copied in, accessors only hand out shared views
//! - **Total ordering** - `Ord`, `Eq` and `Hash` all derive from one comparison over
//!   body, headers, method and URI, in that order
//!
//! # Interop
//!
//! - A [`Request`] can be built from an `http::Request` or its parts
//! - [`Request`] implements `serde::Serialize`; its `Display` form is that JSON
//!
//! # Examples
//!
//! ```rust
//! use canonical_request::{Request, Result};
//!
//! fn signing_input() -> Result<Request> {
//!     Request::builder()
//!         .method("GET")?
//!         .uri_with_query("https://akab.example.net/billing/v1/invoices?month=3")?
//!         .header("X-Correlation-Id", "f3a1")?
//!         .build()
//! }
//!
//! let request = signing_input()?;
//! assert_eq!(request.headers().get("x-correlation-id").map(String::as_str), Some("f3a1"));
//! # Ok::<(), canonical_request::Error>(())
//! ```
extern crate alloc;

pub mod error;
pub use error::{Error, Result};

pub mod builder;
#[doc(inline)]
pub use builder::RequestBuilder;

pub mod request;
#[doc(inline)]
pub use request::{Headers, Request, UriWithQuery};

mod convert;

pub mod utils;
pub use utils::{Bytes, Uri};
