use crate::constants::*;
use crate::{Consumer, SigningOptions, Token};

/// OAuthParameters is the set of `oauth_*` protocol parameters of one
/// signing call, before `oauth_signature` exists.
///
/// Entries keep protocol order, which is the order they are rendered in.
/// Normalization sorts them on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthParameters {
    entries: Vec<(&'static str, String)>,
}

impl OAuthParameters {
    /// Build the parameter set for a signing call.
    ///
    /// `nonce` and `timestamp` are already resolved, `body_hash` is only
    /// given for bodies that are not form-encoded.
    pub(crate) fn build(
        consumer: &Consumer,
        token: Option<&Token>,
        options: &SigningOptions,
        nonce: String,
        timestamp: i64,
        body_hash: Option<String>,
    ) -> Self {
        let mut entries = Vec::with_capacity(10);

        if let Some(v) = body_hash {
            entries.push((OAUTH_BODY_HASH, v));
        }
        if let Some(v) = &options.callback {
            entries.push((OAUTH_CALLBACK, v.clone()));
        }
        entries.push((OAUTH_CONSUMER_KEY, consumer.key.clone()));
        if let Some(t) = token {
            entries.push((OAUTH_TOKEN, t.key.clone()));
        }
        entries.push((
            OAUTH_SIGNATURE_METHOD,
            options.signature_method.as_str().to_string(),
        ));
        entries.push((OAUTH_TIMESTAMP, timestamp.to_string()));
        entries.push((OAUTH_NONCE, nonce));
        if let Some(v) = &options.verifier {
            entries.push((OAUTH_VERIFIER, v.clone()));
        }
        entries.push((OAUTH_VERSION, OAUTH_VERSION_1_0.to_string()));

        Self { entries }
    }

    /// Get a parameter value by name.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over the parameters in protocol order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Check if `key` is a parameter this set will carry once signed.
    ///
    /// `oauth_signature` always counts.
    pub fn contains_key(&self, key: &str) -> bool {
        key == OAUTH_SIGNATURE || self.entries.iter().any(|(k, _)| *k == key)
    }

    /// Attach the signature, which can only happen once.
    pub fn sign(self, signature: String) -> SignedParameters {
        SignedParameters {
            params: self,
            signature,
        }
    }
}

/// SignedParameters is the final parameter set, `oauth_signature` included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedParameters {
    params: OAuthParameters,
    signature: String,
}

impl SignedParameters {
    /// The computed `oauth_signature`.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Check if `key` is one of the parameters.
    pub fn contains_key(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Iterate over the parameters in protocol order, `oauth_signature` last.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .chain(std::iter::once((OAUTH_SIGNATURE, self.signature.as_str())))
    }
}
