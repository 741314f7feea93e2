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

use anyhow::Result;
use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use http::header::{AUTHORIZATION, USER_AGENT};
use http::Request;
use oauthsign_oauth1::{
    load_private_key, Consumer, RequestSigner, Scheme, SignatureMethod, SigningOptions, Token,
};
use percent_encoding::percent_decode_str;
use pretty_assertions::assert_eq;
use rsa::pkcs1v15::{Signature, VerifyingKey};
use rsa::signature::Verifier;
use sha1::Sha1;

use super::*;

#[test]
fn test_header_golden() -> Result<()> {
    init();

    let mut req = Request::get("http://example.com/resource?foo=bar").body(Vec::new())?;
    fixed_signer(Scheme::Header, SignatureMethod::HmacSha1).sign_and_inject(
        &mut req,
        &consumer(),
        None,
    )?;

    assert_eq!(
        req.headers()[AUTHORIZATION].to_str()?,
        r#"OAuth oauth_consumer_key="ck", oauth_signature_method="HMAC-SHA1", oauth_timestamp="1000000000", oauth_nonce="abc123", oauth_version="1.0", oauth_signature="z7NRbagD8D%2FcN7YWD1IAS8Pm30E%3D""#
    );
    // The uri is left alone.
    assert_eq!(req.uri().to_string(), "http://example.com/resource?foo=bar");

    Ok(())
}

#[test]
fn test_header_rfc5849_photos() -> Result<()> {
    init();

    let mut req = Request::get("http://photos.example.net/photos?file=vacation.jpg&size=original")
        .body(Vec::new())?;
    let signer = RequestSigner::new(
        SigningOptions::new()
            .with_realm("Photos")
            .with_nonce("kllo9940pd9333jh")
            .with_timestamp(1191242096),
    );
    signer.sign_and_inject(
        &mut req,
        &Consumer::new("dpf43f3p2l4k3l03", "kd94hf93k423kf44"),
        Some(&Token::new("nnch734d00sl2jdk", "pfkkdhi9sl3r4s00")),
    )?;

    let header = req.headers()[AUTHORIZATION].to_str()?;
    assert!(header.starts_with(r#"OAuth realm="Photos", oauth_consumer_key="dpf43f3p2l4k3l03", oauth_token="nnch734d00sl2jdk""#));
    assert_eq!(
        header_param(header, "oauth_signature"),
        Some("tR3%2BTy81lMeYAr%2FFid0kMTYa%2FWM%3D")
    );

    Ok(())
}

#[test]
fn test_header_port_path_and_repeated_keys() -> Result<()> {
    init();

    let mut req = Request::get("http://example.com:8080/a%20b?q=x%20y&q=a").body(Vec::new())?;
    let signer = fixed_signer(Scheme::Header, SignatureMethod::HmacSha1);

    assert_eq!(
        signer.signature_base_string(&req, &consumer(), None)?,
        "GET&http%3A%2F%2Fexample.com%3A8080%2Fa%2520b&oauth_consumer_key%3Dck\
         %26oauth_nonce%3Dabc123%26oauth_signature_method%3DHMAC-SHA1\
         %26oauth_timestamp%3D1000000000%26oauth_version%3D1.0%26q%3Da%26q%3Dx%2520y"
    );

    signer.sign_and_inject(&mut req, &consumer(), None)?;
    assert_eq!(
        header_param(req.headers()[AUTHORIZATION].to_str()?, "oauth_signature"),
        Some("x%2BrDUOCsNjS842%2FUVKKSZohF%2FrQ%3D")
    );

    Ok(())
}

#[test]
fn test_header_hmac_sha256() -> Result<()> {
    init();

    let mut req = Request::get("http://example.com/resource?foo=bar").body(Vec::new())?;
    fixed_signer(Scheme::Header, SignatureMethod::HmacSha256).sign_and_inject(
        &mut req,
        &consumer(),
        None,
    )?;

    let header = req.headers()[AUTHORIZATION].to_str()?;
    assert_eq!(
        header_param(header, "oauth_signature_method"),
        Some("HMAC-SHA256")
    );
    assert_eq!(
        header_param(header, "oauth_signature"),
        Some("R0tZSvY1c1pCWzOd%2FId%2BJyqhjpXv49nwkDNOeTTSACk%3D")
    );

    Ok(())
}

#[test]
fn test_header_plaintext() -> Result<()> {
    init();

    let mut req = Request::get("https://example.com/").body(Vec::new())?;
    fixed_signer(Scheme::Header, SignatureMethod::Plaintext).sign_and_inject(
        &mut req,
        &consumer(),
        None,
    )?;
    assert_eq!(
        header_param(req.headers()[AUTHORIZATION].to_str()?, "oauth_signature"),
        Some("cs%26")
    );

    let mut req = Request::get("https://example.com/").body(Vec::new())?;
    fixed_signer(Scheme::Header, SignatureMethod::Plaintext).sign_and_inject(
        &mut req,
        &consumer(),
        Some(&token()),
    )?;
    assert_eq!(
        header_param(req.headers()[AUTHORIZATION].to_str()?, "oauth_signature"),
        Some("cs%26ts")
    );

    Ok(())
}

#[test]
fn test_header_rsa_sha1() -> Result<()> {
    init();

    let mut req = Request::get("http://example.com/resource?foo=bar").body(Vec::new())?;
    let signer = fixed_signer(Scheme::Header, SignatureMethod::RsaSha1);
    let consumer = consumer().with_private_key(RSA_PRIVATE_KEY);

    let base_string = signer.signature_base_string(&req, &consumer, None)?;
    signer.sign_and_inject(&mut req, &consumer, None)?;

    let encoded = header_param(req.headers()[AUTHORIZATION].to_str()?, "oauth_signature")
        .expect("oauth_signature must be present")
        .to_string();
    let signature = percent_decode_str(&encoded).decode_utf8()?.into_owned();
    assert_eq!(
        signature,
        "kyxc4QEnAASA33YLMeI8P/eorvuz5naXVE1lmiXlHFecD3yAMg2OnwJm7dzD4aMWTnoEQyNFgf73xisGLFqf3UTG\
         oZfm5lnNWwiuns57I6rsFkMNzzs6ZeqOOgVrVDRGFBIn1hIHYUmFeAESZi9saSgqud4urZpULJdeSn96ijs="
    );

    let verifying_key = VerifyingKey::<Sha1>::new(load_private_key(RSA_PRIVATE_KEY)?.to_public_key());
    let signature = Signature::try_from(BASE64_STANDARD.decode(signature)?.as_slice())?;
    verifying_key.verify(base_string.as_bytes(), &signature)?;

    Ok(())
}

#[test]
fn test_header_single_signature() -> Result<()> {
    init();

    let mut req = Request::get("http://example.com/resource")
        .header(AUTHORIZATION, "OAuth oauth_signature=\"stale\"")
        .body(Vec::new())?;
    fixed_signer(Scheme::Header, SignatureMethod::HmacSha1).sign_and_inject(
        &mut req,
        &consumer(),
        Some(&token()),
    )?;

    let values: Vec<_> = req.headers().get_all(AUTHORIZATION).iter().collect();
    assert_eq!(values.len(), 1);
    let header = values[0].to_str()?;
    assert_eq!(header.matches("oauth_signature=").count(), 1);
    assert_eq!(header_param(header, "oauth_token"), Some("tk"));

    Ok(())
}

#[test]
fn test_header_fresh_nonce_per_request() -> Result<()> {
    init();

    let signer = RequestSigner::default();
    let mut req = Request::get("http://example.com/resource").body(Vec::new())?;

    signer.sign_and_inject(&mut req, &consumer(), None)?;
    let first = req.headers()[AUTHORIZATION].to_str()?.to_string();
    signer.sign_and_inject(&mut req, &consumer(), None)?;
    let second = req.headers()[AUTHORIZATION].to_str()?.to_string();

    assert_ne!(
        header_param(&first, "oauth_nonce"),
        header_param(&second, "oauth_nonce")
    );
    assert_ne!(
        header_param(&first, "oauth_signature"),
        header_param(&second, "oauth_signature")
    );
    // The user agent is tagged once, no matter how often we sign.
    assert_eq!(
        req.headers()[USER_AGENT].to_str()?.matches("oauthsign/").count(),
        1
    );

    Ok(())
}
