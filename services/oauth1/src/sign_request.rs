use http::{Method, Uri};
use log::debug;
use oauthsign_core::hash::base64_sha1;
use oauthsign_core::{Error, RequestView, Result, SigningRequest};

use crate::base_string::{normalize_uri, signature_base_string};
use crate::config::parse_request_uri;
use crate::encode::normalize_parameters;
use crate::inject::inject;
use crate::nonce::{generate_nonce, generate_timestamp};
use crate::signature::compute_signature;
use crate::{Config, Consumer, OAuthParameters, Scheme, SigningOptions, Token};

/// RequestSigner that implements OAuth 1.0 request signing.
///
/// - [The OAuth 1.0 Protocol (RFC 5849)](https://www.rfc-editor.org/rfc/rfc5849)
///
/// A signer holds no per-request state. Every call builds a fresh parameter
/// set, so one signer can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct RequestSigner {
    options: SigningOptions,
}

impl RequestSigner {
    /// Create a signer with the given options.
    pub fn new(options: SigningOptions) -> Self {
        Self { options }
    }

    /// Options this signer uses.
    pub fn options(&self) -> &SigningOptions {
        &self.options
    }

    /// Sign the request and inject the OAuth parameters into it.
    ///
    /// On error the request is left exactly as it was.
    pub fn sign_and_inject<R: RequestView + ?Sized>(
        &self,
        req: &mut R,
        consumer: &Consumer,
        token: Option<&Token>,
    ) -> Result<()> {
        let mut ctx = SigningRequest::build(&*req)?;
        let params = self.build_parameters(&ctx, consumer, token);
        let base_string = self.base_string(&ctx, req.uri(), &params)?;

        let signature = compute_signature(
            self.options.signature_method,
            &base_string,
            consumer,
            token,
        )?;
        let params = params.sign(signature);

        inject(
            self.options.scheme,
            &mut ctx,
            &params,
            self.options.realm.as_deref(),
        )?;
        ctx.apply(req)
    }

    /// Compute the signature base string without signing or mutating the
    /// request.
    ///
    /// Nonce and timestamp are generated unless fixed in the options, so two
    /// calls only agree when both are fixed.
    pub fn signature_base_string<R: RequestView + ?Sized>(
        &self,
        req: &R,
        consumer: &Consumer,
        token: Option<&Token>,
    ) -> Result<String> {
        let ctx = SigningRequest::build(req)?;
        let params = self.build_parameters(&ctx, consumer, token);
        self.base_string(&ctx, req.uri(), &params)
    }

    fn build_parameters(
        &self,
        ctx: &SigningRequest,
        consumer: &Consumer,
        token: Option<&Token>,
    ) -> OAuthParameters {
        let nonce = self.options.nonce.clone().unwrap_or_else(generate_nonce);
        let timestamp = self.options.timestamp.unwrap_or_else(generate_timestamp);

        OAuthParameters::build(
            consumer,
            token,
            &self.options,
            nonce,
            timestamp,
            self.body_hash(ctx),
        )
    }

    /// `oauth_body_hash` is only carried by requests with an entity body
    /// that is not form-encoded.
    ///
    /// - [OAuth Request Body Hash](https://oauth.googlecode.com/svn/spec/ext/body_hash/1.0/oauth-bodyhash.html)
    fn body_hash(&self, ctx: &SigningRequest) -> Option<String> {
        if !self.options.body_hash
            || self.options.scheme == Scheme::Body
            || ctx.form_params.is_some()
            || ctx.method == Method::GET
            || ctx.method == Method::HEAD
        {
            return None;
        }

        Some(base64_sha1(&ctx.body))
    }

    fn base_string(
        &self,
        ctx: &SigningRequest,
        uri: &Uri,
        params: &OAuthParameters,
    ) -> Result<String> {
        let uri = match &self.options.request_uri {
            Some(v) => normalize_uri(&parse_request_uri(v)?)?,
            None => normalize_uri(uri)?,
        };

        let existing = ctx
            .query_params
            .iter()
            .chain(ctx.form_params.iter().flatten())
            // A request signed before carries stale oauth values, never sign them.
            .filter(|(k, _)| !params.contains_key(k))
            .map(|(k, v)| (k.as_str(), v.as_str()));
        let normalized = normalize_parameters(existing.chain(params.iter()));

        let s = signature_base_string(ctx.method.as_str(), &uri, &normalized);
        debug!(
            "signature base string with {}: {}",
            self.options.signature_method, s
        );
        Ok(s)
    }
}

impl TryFrom<Config> for RequestSigner {
    type Error = Error;

    fn try_from(cfg: Config) -> Result<Self> {
        Ok(Self::new(SigningOptions::try_from(cfg)?))
    }
}
