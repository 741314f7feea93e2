use std::fmt::Write;

use http::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use http::HeaderValue;
use log::debug;
use oauthsign_core::{form_encode, parse_form, Error, Result, SigningRequest, FORM_URLENCODED};

use crate::constants::USER_AGENT_VALUE;
use crate::encode::percent_encode;
use crate::{Scheme, SignedParameters};

/// Stage the signed parameters on the request for the given scheme.
///
/// Nothing reaches the request until [`SigningRequest::apply`].
pub(crate) fn inject(
    scheme: Scheme,
    ctx: &mut SigningRequest,
    params: &SignedParameters,
    realm: Option<&str>,
) -> Result<()> {
    debug!("inject oauth parameters with scheme: {scheme}");

    match scheme {
        Scheme::Header => {
            let mut value = HeaderValue::from_str(&authorization_header(params, realm)?)?;
            value.set_sensitive(true);
            ctx.header_insert(AUTHORIZATION, value);
        }
        Scheme::QueryString => {
            // Raw segments are kept as sent, only those we are about to set are dropped.
            let mut query = String::new();
            for seg in ctx.query.as_deref().unwrap_or_default().split('&') {
                if seg.is_empty()
                    || parse_form(seg.as_bytes())?
                        .iter()
                        .any(|(k, _)| params.contains_key(k))
                {
                    continue;
                }
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(seg);
            }
            for (k, v) in params.iter() {
                if !query.is_empty() {
                    query.push('&');
                }
                write!(query, "{}={}", percent_encode(k), percent_encode(v))?;
            }
            ctx.query_replace(query);
        }
        Scheme::Body => {
            let form_params = match &ctx.form_params {
                Some(v) => v.as_slice(),
                None if ctx.body.is_empty() => &[],
                None => {
                    return Err(Error::request_invalid(
                        "body scheme requires an empty or form-encoded body",
                    ))
                }
            };

            // Query parameters are folded into the body as well, the uri keeps them.
            let body = form_encode(
                ctx.query_params
                    .iter()
                    .chain(form_params)
                    .filter(|(k, _)| !params.contains_key(k))
                    .map(|(k, v)| (k.as_str(), v.as_str()))
                    .chain(params.iter()),
            );
            ctx.header_insert(CONTENT_TYPE, HeaderValue::from_static(FORM_URLENCODED));
            ctx.body_replace(body);
        }
    }

    user_agent(ctx)
}

/// Render the `Authorization` header value.
///
/// ```text
/// OAuth realm="Example", oauth_consumer_key="ck", ..., oauth_signature="..."
/// ```
///
/// ## Reference
///
/// - [Authorization Header (RFC 5849 3.5.1)](https://www.rfc-editor.org/rfc/rfc5849#section-3.5.1)
pub fn authorization_header(params: &SignedParameters, realm: Option<&str>) -> Result<String> {
    let mut s = String::from("OAuth ");
    if let Some(realm) = realm {
        // realm is a quoted-string, not percent-encoded.
        let realm = realm.replace('\\', "\\\\").replace('"', "\\\"");
        write!(s, "realm=\"{realm}\", ")?;
    }
    for (idx, (k, v)) in params.iter().enumerate() {
        if idx != 0 {
            s.push_str(", ");
        }
        write!(s, "{}=\"{}\"", percent_encode(k), percent_encode(v))?;
    }

    Ok(s)
}

/// Identify the signer in `User-Agent`, once.
fn user_agent(ctx: &mut SigningRequest) -> Result<()> {
    let value = match ctx.header_str(&USER_AGENT) {
        Some(v) if v.contains(USER_AGENT_VALUE) => return Ok(()),
        Some(v) => HeaderValue::from_str(&format!("{v} ({USER_AGENT_VALUE})"))?,
        // Opaque bytes are left alone.
        None if ctx.headers.contains_key(USER_AGENT) => return Ok(()),
        None => HeaderValue::from_static(USER_AGENT_VALUE),
    };
    ctx.header_insert(USER_AGENT, value);

    Ok(())
}
