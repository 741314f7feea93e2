//! OAuth 1.0 request signing.
//!
//! This crate signs outbound HTTP requests per [RFC 5849] and injects the
//! OAuth parameters into them as an `Authorization` header, as query
//! parameters, or as form-encoded body parameters.
//!
//! ## Example
//!
//! ```
//! use http::header::AUTHORIZATION;
//! use oauthsign_oauth1::{Consumer, RequestSigner, SigningOptions, Token};
//!
//! # fn main() -> oauthsign_oauth1::Result<()> {
//! let mut req = http::Request::get("http://photos.example.net/photos?file=vacation.jpg&size=original")
//!     .body(Vec::new())?;
//!
//! let signer = RequestSigner::new(
//!     SigningOptions::new()
//!         .with_nonce("kllo9940pd9333jh")
//!         .with_timestamp(1191242096),
//! );
//! signer.sign_and_inject(
//!     &mut req,
//!     &Consumer::new("dpf43f3p2l4k3l03", "kd94hf93k423kf44"),
//!     Some(&Token::new("nnch734d00sl2jdk", "pfkkdhi9sl3r4s00")),
//! )?;
//!
//! let header = req.headers()[AUTHORIZATION].to_str()?;
//! assert!(header.ends_with(r#"oauth_signature="tR3%2BTy81lMeYAr%2FFid0kMTYa%2FWM%3D""#));
//! # Ok(())
//! # }
//! ```
//!
//! Options can also be loaded from text, see [`Config`].
//!
//! ## Caveat
//!
//! With [`Scheme::Body`] the request's query parameters are folded into the
//! new body while the URI keeps them, so they are sent twice.
//!
//! [RFC 5849]: https://www.rfc-editor.org/rfc/rfc5849

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod constants;

mod base_string;
pub use base_string::{normalize_uri, signature_base_string};

mod config;
pub use config::Config;

mod credential;
pub use credential::{Consumer, Token};

mod encode;
pub use encode::{normalize_parameters, percent_encode};

mod inject;
pub use inject::authorization_header;

mod key;
pub use key::load_private_key;

mod nonce;
pub use nonce::{generate_nonce, generate_timestamp};

mod options;
pub use options::{Scheme, SignatureMethod, SigningOptions};

mod params;
pub use params::{OAuthParameters, SignedParameters};

mod sign_request;
pub use sign_request::RequestSigner;

mod signature;
pub use signature::{compute_signature, signing_key};

pub use oauthsign_core::{Error, ErrorKind, RequestView, Result};
