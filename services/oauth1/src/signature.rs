use oauthsign_core::hash::{base64_encode, base64_hmac_sha1, base64_hmac_sha256};
use oauthsign_core::{Error, Result};
use rsa::pkcs1v15::SigningKey;
use rsa::signature::{SignatureEncoding, Signer};
use sha1::Sha1;

use crate::encode::percent_encode;
use crate::key::consumer_private_key;
use crate::{Consumer, SignatureMethod, Token};

/// Compute `oauth_signature` over a signature base string.
///
/// - `HMAC-SHA1` / `HMAC-SHA256`: keyed with [`signing_key`].
/// - `RSA-SHA1`: RSASSA-PKCS1-v1_5 over SHA1 with the consumer's private key.
/// - `PLAINTEXT`: [`signing_key`] itself, the base string is not used.
///
/// ## Reference
///
/// - [Signature (RFC 5849 3.4)](https://www.rfc-editor.org/rfc/rfc5849#section-3.4)
pub fn compute_signature(
    method: SignatureMethod,
    base_string: &str,
    consumer: &Consumer,
    token: Option<&Token>,
) -> Result<String> {
    let signature = match method {
        SignatureMethod::HmacSha1 => base64_hmac_sha1(
            signing_key(consumer, token).as_bytes(),
            base_string.as_bytes(),
        ),
        SignatureMethod::HmacSha256 => base64_hmac_sha256(
            signing_key(consumer, token).as_bytes(),
            base_string.as_bytes(),
        ),
        SignatureMethod::RsaSha1 => {
            let key = SigningKey::<Sha1>::new(consumer_private_key(consumer)?);
            let signature = key.try_sign(base_string.as_bytes()).map_err(|e| {
                Error::signing_failed("RSA-SHA1 signing failed").with_source(e)
            })?;
            base64_encode(&signature.to_bytes())
        }
        SignatureMethod::Plaintext => signing_key(consumer, token),
    };

    Ok(signature)
}

/// Build the shared secret key: `encode(consumer secret) & encode(token secret)`.
///
/// The token secret is empty when no token is given, the `&` is always there.
pub fn signing_key(consumer: &Consumer, token: Option<&Token>) -> String {
    format!(
        "{}&{}",
        percent_encode(&consumer.secret),
        percent_encode(token.map(|t| t.secret.as_str()).unwrap_or_default())
    )
}
