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

mod errors;
mod header;

use oauthsign_oauth1::{Consumer, RequestSigner, Scheme, SignatureMethod, SigningOptions, Token};

pub const NONCE: &str = "abc123";
pub const TIMESTAMP: i64 = 1_000_000_000;

pub const RSA_PRIVATE_KEY: &str = include_str!("../testdata/rsa_pkcs8.pem");

/// Initialize test logging, safe to call from every test.
pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Signer with a fixed nonce and timestamp, so signatures are reproducible.
pub fn fixed_signer(scheme: Scheme, method: SignatureMethod) -> RequestSigner {
    RequestSigner::new(
        SigningOptions::new()
            .with_scheme(scheme)
            .with_signature_method(method)
            .with_nonce(NONCE)
            .with_timestamp(TIMESTAMP),
    )
}

pub fn consumer() -> Consumer {
    Consumer::new("ck", "cs")
}

pub fn token() -> Token {
    Token::new("tk", "ts")
}

/// Extract a parameter from an `OAuth ...` authorization header value.
pub fn header_param<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header
        .strip_prefix("OAuth ")?
        .split(", ")
        .filter_map(|kv| kv.split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.trim_matches('"'))
}
