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
use http::header::CONTENT_TYPE;
use http::Request;
use oauthsign_oauth1::{Config, ErrorKind, RequestSigner, Scheme, SignatureMethod};
use pretty_assertions::assert_eq;

use super::*;

type Snapshot = (String, String, Vec<(String, Vec<u8>)>, Vec<u8>);

/// Everything observable about a request.
fn snapshot(req: &Request<Vec<u8>>) -> Snapshot {
    (
        req.method().to_string(),
        req.uri().to_string(),
        req.headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.as_bytes().to_vec()))
            .collect(),
        req.body().clone(),
    )
}

fn request() -> Result<Request<Vec<u8>>> {
    Ok(Request::post("http://example.com/resource?foo=bar")
        .header(CONTENT_TYPE, "application/json")
        .body(br#"{"a":1}"#.to_vec())?)
}

#[test]
fn test_unsupported_scheme() -> Result<()> {
    init();

    let req = request()?;
    let before = snapshot(&req);

    let err = RequestSigner::try_from(Config::new().with_scheme("cookie")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedScheme);
    assert!(err.is_unsupported());
    assert_eq!(snapshot(&req), before);

    Ok(())
}

#[test]
fn test_unsupported_signature_method() -> Result<()> {
    init();

    let req = request()?;
    let before = snapshot(&req);

    let err = RequestSigner::try_from(Config::new().with_signature_method("MD5")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedSignatureMethod);
    assert_eq!(snapshot(&req), before);

    Ok(())
}

#[test]
fn test_rsa_without_key() -> Result<()> {
    init();

    let mut req = request()?;
    let before = snapshot(&req);

    let err = fixed_signer(Scheme::Header, SignatureMethod::RsaSha1)
        .sign_and_inject(&mut req, &consumer(), None)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::SigningFailed);
    assert_eq!(snapshot(&req), before);

    Ok(())
}

#[test]
fn test_body_scheme_with_foreign_body() -> Result<()> {
    init();

    let mut req = request()?;
    let before = snapshot(&req);

    let err = fixed_signer(Scheme::Body, SignatureMethod::HmacSha1)
        .sign_and_inject(&mut req, &consumer(), None)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert_eq!(snapshot(&req), before);

    Ok(())
}

#[test]
fn test_relative_uri_without_override() -> Result<()> {
    init();

    let mut req = Request::get("/resource?foo=bar").body(Vec::new())?;
    let before = snapshot(&req);

    let err = fixed_signer(Scheme::QueryString, SignatureMethod::HmacSha1)
        .sign_and_inject(&mut req, &consumer(), None)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert_eq!(snapshot(&req), before);

    Ok(())
}

#[test]
fn test_invalid_utf8_parameters() -> Result<()> {
    init();

    let mut req = Request::get("http://example.com/resource?name=%FF").body(Vec::new())?;
    let before = snapshot(&req);

    let err = fixed_signer(Scheme::Header, SignatureMethod::HmacSha1)
        .sign_and_inject(&mut req, &consumer(), None)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EncodingInvalid);
    assert_eq!(snapshot(&req), before);

    Ok(())
}
