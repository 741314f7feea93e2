//! Core components for signing OAuth 1.0 requests.
//!
//! This crate provides the protocol independent plumbing of the oauthsign
//! workspace: the error type, hashing and time helpers, environment access
//! and the request abstraction signers work against.
//!
//! ## Overview
//!
//! - **RequestView**: the capability a signer needs from an outbound request
//!   (read method, URI, headers and body; set a header, the URI or the body).
//!   It is implemented for [`http::Request`] and can be implemented by any
//!   HTTP client integration for its own request type.
//! - **SigningRequest**: a call-local snapshot of a request. Signers read the
//!   decoded query and form parameters from it and stage their mutations on
//!   it. Staged mutations reach the request all at once, or not at all.
//! - **Context**: environment access used when loading configuration.
//!
//! ## Example
//!
//! ```
//! use http::header::USER_AGENT;
//! use oauthsign_core::{Result, SigningRequest};
//!
//! # fn main() -> Result<()> {
//! let mut req = http::Request::get("https://example.com/photos?size=original")
//!     .body(Vec::new())?;
//!
//! let mut ctx = SigningRequest::build(&req)?;
//! assert_eq!(ctx.query_params, vec![("size".to_string(), "original".to_string())]);
//!
//! ctx.header_insert(USER_AGENT, "demo".parse()?);
//! ctx.apply(&mut req)?;
//! assert_eq!(req.headers()[USER_AGENT], "demo");
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};

mod request;
pub use request::{
    form_encode, is_form_encoded, parse_form, RequestView, SigningRequest, FORM_URLENCODED,
};
