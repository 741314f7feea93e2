use http::Uri;
use oauthsign_core::{Context, Error};
use serde::Deserialize;

use crate::constants::*;
use crate::{Scheme, SignatureMethod, SigningOptions};

/// Config carries textual signing configuration, as read from a file or the
/// environment by the caller's integration layer.
///
/// Scheme and signature method names are only validated when converting
/// into [`SigningOptions`], so unknown names surface as
/// `UnsupportedScheme` / `UnsupportedSignatureMethod` before any request is
/// touched.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `scheme` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH1_SCHEME`]
    pub scheme: Option<String>,
    /// `signature_method` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH1_SIGNATURE_METHOD`]
    pub signature_method: Option<String>,
    /// `request_uri` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH1_REQUEST_URI`]
    pub request_uri: Option<String>,
    /// `realm` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH1_REALM`]
    pub realm: Option<String>,
    /// `body_hash` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH1_BODY_HASH`]
    pub body_hash: Option<bool>,
    /// `oauth_callback` to sign along.
    pub callback: Option<String>,
    /// `oauth_verifier` to sign along.
    pub verifier: Option<String>,
    /// Fixed `oauth_nonce`.
    pub nonce: Option<String>,
    /// Fixed `oauth_timestamp`.
    pub timestamp: Option<i64>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set scheme
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    /// Set signature_method
    pub fn with_signature_method(mut self, signature_method: impl Into<String>) -> Self {
        self.signature_method = Some(signature_method.into());
        self
    }

    /// Set request_uri
    pub fn with_request_uri(mut self, request_uri: impl Into<String>) -> Self {
        self.request_uri = Some(request_uri.into());
        self
    }

    /// Set realm
    pub fn with_realm(mut self, realm: impl Into<String>) -> Self {
        self.realm = Some(realm.into());
        self
    }

    /// Load config from env.
    ///
    /// Fields that are already set are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(OAUTH1_SCHEME) {
            self.scheme.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(OAUTH1_SIGNATURE_METHOD) {
            self.signature_method.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(OAUTH1_REQUEST_URI) {
            self.request_uri.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(OAUTH1_REALM) {
            self.realm.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(OAUTH1_BODY_HASH) {
            self.body_hash.get_or_insert(matches!(
                v.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "on" | "yes"
            ));
        }

        self
    }
}

impl TryFrom<Config> for SigningOptions {
    type Error = Error;

    fn try_from(cfg: Config) -> Result<Self, Self::Error> {
        let scheme = match cfg.scheme.as_deref() {
            Some(v) => v.parse::<Scheme>()?,
            None => Scheme::default(),
        };
        let signature_method = match cfg.signature_method.as_deref() {
            Some(v) => v.parse::<SignatureMethod>()?,
            None => SignatureMethod::default(),
        };
        if let Some(uri) = cfg.request_uri.as_deref() {
            parse_request_uri(uri)?;
        }

        Ok(SigningOptions {
            request_uri: cfg.request_uri,
            scheme,
            signature_method,
            nonce: cfg.nonce,
            timestamp: cfg.timestamp,
            realm: cfg.realm,
            callback: cfg.callback,
            verifier: cfg.verifier,
            body_hash: cfg.body_hash.unwrap_or_default(),
        })
    }
}

/// Parse an explicit request URI, which must be absolute.
pub(crate) fn parse_request_uri(uri: &str) -> Result<Uri, Error> {
    let parsed: Uri = uri.parse().map_err(|e| {
        Error::config_invalid(format!("request_uri {uri:?} is not a valid uri")).with_source(e)
    })?;
    if parsed.scheme().is_none() || parsed.host().is_none() {
        return Err(Error::config_invalid(format!(
            "request_uri {uri:?} must be absolute"
        )));
    }

    Ok(parsed)
}
