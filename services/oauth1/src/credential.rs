// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt::{Debug, Formatter};

use oauthsign_core::utils::Redact;

/// Consumer is the credential pair issued to the client application.
///
/// RSA-SHA1 signs with a private key instead of the shared secret. The key
/// is taken from [`Consumer::with_private_key`] when set, otherwise the
/// secret itself is read as a PEM encoded key.
#[derive(Clone)]
pub struct Consumer {
    /// Consumer key, sent as `oauth_consumer_key`.
    pub key: String,
    /// Consumer secret, never sent.
    pub secret: String,
    /// PEM encoded RSA private key for RSA-SHA1.
    pub private_key: Option<String>,
}

impl Consumer {
    /// Create a new consumer.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
            private_key: None,
        }
    }

    /// Set the PEM encoded (PKCS#8 or PKCS#1) RSA private key.
    pub fn with_private_key(mut self, pem: impl Into<String>) -> Self {
        self.private_key = Some(pem.into());
        self
    }
}

impl Debug for Consumer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Consumer")
            .field("key", &Redact::from(&self.key))
            .field("secret", &Redact::full(&self.secret))
            .field(
                "private_key",
                &self.private_key.as_deref().map(Redact::full),
            )
            .finish()
    }
}

/// Token is the per-user credential pair, absent in two-legged requests.
#[derive(Clone)]
pub struct Token {
    /// Token key, sent as `oauth_token`.
    pub key: String,
    /// Token secret, never sent.
    pub secret: String,
}

impl Token {
    /// Create a new token.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
        }
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("key", &Redact::from(&self.key))
            .field("secret", &Redact::full(&self.secret))
            .finish()
    }
}
