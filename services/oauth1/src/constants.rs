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

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

// Env values used by the config loader.
pub const OAUTH1_SCHEME: &str = "OAUTH1_SCHEME";
pub const OAUTH1_SIGNATURE_METHOD: &str = "OAUTH1_SIGNATURE_METHOD";
pub const OAUTH1_REQUEST_URI: &str = "OAUTH1_REQUEST_URI";
pub const OAUTH1_REALM: &str = "OAUTH1_REALM";
pub const OAUTH1_BODY_HASH: &str = "OAUTH1_BODY_HASH";

// Protocol parameters.
pub const OAUTH_BODY_HASH: &str = "oauth_body_hash";
pub const OAUTH_CALLBACK: &str = "oauth_callback";
pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
pub const OAUTH_TOKEN: &str = "oauth_token";
pub const OAUTH_SIGNATURE_METHOD: &str = "oauth_signature_method";
pub const OAUTH_TIMESTAMP: &str = "oauth_timestamp";
pub const OAUTH_NONCE: &str = "oauth_nonce";
pub const OAUTH_VERIFIER: &str = "oauth_verifier";
pub const OAUTH_VERSION: &str = "oauth_version";
pub const OAUTH_SIGNATURE: &str = "oauth_signature";

pub const OAUTH_VERSION_1_0: &str = "1.0";

/// Value identifying this library in the `User-Agent` header.
pub const USER_AGENT_VALUE: &str = concat!("oauthsign/", env!("CARGO_PKG_VERSION"));

/// RFC 3986 unreserved characters: `ALPHA / DIGIT / "-" / "." / "_" / "~"`.
///
/// Everything outside this set is percent-encoded with uppercase hex.
pub const RFC3986_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
