use std::fmt::{Display, Formatter};
use std::str::FromStr;

use oauthsign_core::Error;

/// Scheme is how the OAuth parameters travel with the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    /// `Authorization: OAuth ...` header.
    #[default]
    Header,
    /// Form-encoded request body.
    Body,
    /// URI query string.
    QueryString,
}

impl Scheme {
    /// Canonical name of the scheme.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Header => "header",
            Scheme::Body => "body",
            Scheme::QueryString => "query_string",
        }
    }
}

impl FromStr for Scheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "header" => Ok(Scheme::Header),
            "body" => Ok(Scheme::Body),
            "query_string" | "query" => Ok(Scheme::QueryString),
            _ => Err(Error::unsupported_scheme(format!(
                "scheme {s:?} is not one of header, body, query_string"
            ))),
        }
    }
}

impl Display for Scheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SignatureMethod is the algorithm producing `oauth_signature`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureMethod {
    /// HMAC-SHA1 keyed with both secrets.
    #[default]
    HmacSha1,
    /// HMAC-SHA256 keyed with both secrets.
    HmacSha256,
    /// RSASSA-PKCS1-v1_5 with SHA1, using the consumer's private key.
    RsaSha1,
    /// Both secrets in clear, only safe over TLS.
    Plaintext,
}

impl SignatureMethod {
    /// Name sent as `oauth_signature_method`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureMethod::HmacSha1 => "HMAC-SHA1",
            SignatureMethod::HmacSha256 => "HMAC-SHA256",
            SignatureMethod::RsaSha1 => "RSA-SHA1",
            SignatureMethod::Plaintext => "PLAINTEXT",
        }
    }
}

impl FromStr for SignatureMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HMAC-SHA1" => Ok(SignatureMethod::HmacSha1),
            "HMAC-SHA256" => Ok(SignatureMethod::HmacSha256),
            "RSA-SHA1" => Ok(SignatureMethod::RsaSha1),
            "PLAINTEXT" => Ok(SignatureMethod::Plaintext),
            _ => Err(Error::unsupported_signature_method(format!(
                "signature method {s:?} is not supported"
            ))),
        }
    }
}

impl Display for SignatureMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SigningOptions controls a single signing call.
///
/// Defaults: header scheme, HMAC-SHA1, fresh nonce and current timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SigningOptions {
    /// URI used in the signature base string instead of the request's own.
    ///
    /// Needed when the request only carries an origin-form target, or when
    /// the server sees a different URI than the one being dialed.
    pub request_uri: Option<String>,
    /// Where the OAuth parameters are injected.
    pub scheme: Scheme,
    /// How `oauth_signature` is computed.
    pub signature_method: SignatureMethod,
    /// Fixed `oauth_nonce`. Only meant for reproducing known signatures.
    pub nonce: Option<String>,
    /// Fixed `oauth_timestamp` in unix seconds. Only meant for reproducing
    /// known signatures.
    pub timestamp: Option<i64>,
    /// `realm` rendered in the Authorization header.
    pub realm: Option<String>,
    /// `oauth_callback` to sign along.
    pub callback: Option<String>,
    /// `oauth_verifier` to sign along.
    pub verifier: Option<String>,
    /// Add `oauth_body_hash` for bodies that are not form-encoded.
    pub body_hash: bool,
}

impl SigningOptions {
    /// Create options with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set request_uri
    pub fn with_request_uri(mut self, request_uri: impl Into<String>) -> Self {
        self.request_uri = Some(request_uri.into());
        self
    }

    /// Set scheme
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Set signature_method
    pub fn with_signature_method(mut self, signature_method: SignatureMethod) -> Self {
        self.signature_method = signature_method;
        self
    }

    /// Set nonce
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    /// Set timestamp
    pub fn with_timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Set realm
    pub fn with_realm(mut self, realm: impl Into<String>) -> Self {
        self.realm = Some(realm.into());
        self
    }

    /// Set callback
    pub fn with_callback(mut self, callback: impl Into<String>) -> Self {
        self.callback = Some(callback.into());
        self
    }

    /// Set verifier
    pub fn with_verifier(mut self, verifier: impl Into<String>) -> Self {
        self.verifier = Some(verifier.into());
        self
    }

    /// Enable or disable oauth_body_hash
    pub fn with_body_hash(mut self, enabled: bool) -> Self {
        self.body_hash = enabled;
        self
    }
}
