use std::str::FromStr;

use http::header::{HeaderName, CONTENT_LENGTH, CONTENT_TYPE};
use http::uri::{Authority, PathAndQuery, Scheme};
use http::{HeaderMap, HeaderValue, Method, Uri};
use percent_encoding::percent_decode;

use crate::{Error, Result};

/// Media type of form-encoded bodies.
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// RequestView is the capability a signer needs from an outbound request.
///
/// HTTP client integrations adapt their own request type to this trait.
/// An implementation for [`http::Request`] is provided for every body type
/// that can be read as bytes and rebuilt from a `Vec<u8>`.
pub trait RequestView {
    /// HTTP method of the request.
    fn method(&self) -> &Method;

    /// Target URI, usually in absolute form.
    fn uri(&self) -> &Uri;

    /// Current request headers.
    fn headers(&self) -> &HeaderMap;

    /// Current request body.
    fn body(&self) -> &[u8];

    /// Set a header, replacing every existing value of it.
    fn set_header(&mut self, name: HeaderName, value: HeaderValue);

    /// Replace the target URI.
    fn set_uri(&mut self, uri: Uri);

    /// Replace the request body.
    fn set_body(&mut self, body: Vec<u8>);
}

impl<B> RequestView for http::Request<B>
where
    B: AsRef<[u8]> + From<Vec<u8>>,
{
    fn method(&self) -> &Method {
        http::Request::method(self)
    }

    fn uri(&self) -> &Uri {
        http::Request::uri(self)
    }

    fn headers(&self) -> &HeaderMap {
        http::Request::headers(self)
    }

    fn body(&self) -> &[u8] {
        http::Request::body(self).as_ref()
    }

    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers_mut().insert(name, value);
    }

    fn set_uri(&mut self, uri: Uri) {
        *self.uri_mut() = uri;
    }

    fn set_body(&mut self, body: Vec<u8>) {
        // Keep an explicit length in sync, never invent one.
        if self.headers().contains_key(CONTENT_LENGTH) {
            self.headers_mut()
                .insert(CONTENT_LENGTH, HeaderValue::from(body.len()));
        }
        *self.body_mut() = B::from(body);
    }
}

/// Call-local snapshot of a request being signed.
///
/// Everything a signer reads is decoded up front by [`SigningRequest::build`].
/// Mutations are staged on the snapshot and only reach the request in
/// [`SigningRequest::apply`], once every fallible step has succeeded.
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// URI scheme, `None` for origin-form targets.
    pub scheme: Option<Scheme>,
    /// URI authority, `None` for origin-form targets.
    pub authority: Option<Authority>,
    /// URI path, never empty.
    pub path: String,
    /// Raw query string as found on the request.
    pub query: Option<String>,
    /// Decoded query parameters.
    pub query_params: Vec<(String, String)>,
    /// Decoded body parameters, `Some` only for form-encoded bodies.
    pub form_params: Option<Vec<(String, String)>>,
    /// Raw request body.
    pub body: Vec<u8>,
    /// Request headers at build time.
    pub headers: HeaderMap,

    staged_headers: Vec<(HeaderName, HeaderValue)>,
    staged_query: Option<String>,
    staged_body: Option<Vec<u8>>,
}

impl SigningRequest {
    /// Build a signing snapshot from a request.
    pub fn build<R: RequestView + ?Sized>(req: &R) -> Result<Self> {
        let uri = req.uri();
        let path = match uri.path() {
            "" => "/".to_string(),
            v => v.to_string(),
        };
        let query = uri.query().map(|v| v.to_string());
        let query_params = match &query {
            Some(q) => parse_form(q.as_bytes())?,
            None => Vec::new(),
        };

        let headers = req.headers().clone();
        let form_params = if is_form_encoded(&headers) {
            Some(parse_form(req.body())?)
        } else {
            None
        };

        Ok(SigningRequest {
            method: req.method().clone(),
            scheme: uri.scheme().cloned(),
            authority: uri.authority().cloned(),
            path,
            query,
            query_params,
            form_params,
            body: req.body().to_vec(),
            headers,

            staged_headers: Vec::new(),
            staged_query: None,
            staged_body: None,
        })
    }

    /// Get a header value as str.
    ///
    /// Returns `None` if the header is absent or not visible ascii.
    pub fn header_str(&self, name: &HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Stage a header write, later writes of the same name win.
    pub fn header_insert(&mut self, name: HeaderName, value: HeaderValue) {
        self.staged_headers.retain(|(k, _)| *k != name);
        self.staged_headers.push((name, value));
    }

    /// Stage a replacement of the whole query string.
    ///
    /// The value must already be percent-encoded.
    pub fn query_replace(&mut self, query: impl Into<String>) {
        self.staged_query = Some(query.into());
    }

    /// Stage a replacement of the body.
    pub fn body_replace(&mut self, body: impl Into<Vec<u8>>) {
        self.staged_body = Some(body.into());
    }

    /// Apply all staged mutations to the request.
    ///
    /// The request is left untouched if this returns an error.
    pub fn apply<R: RequestView + ?Sized>(self, req: &mut R) -> Result<()> {
        let uri = match &self.staged_query {
            Some(query) => {
                let mut parts = req.uri().clone().into_parts();
                let paq = if query.is_empty() {
                    self.path.clone()
                } else {
                    format!("{}?{}", self.path, query)
                };
                parts.path_and_query = Some(PathAndQuery::from_str(&paq)?);
                Some(Uri::from_parts(parts)?)
            }
            None => None,
        };

        for (name, value) in self.staged_headers {
            req.set_header(name, value);
        }
        if let Some(uri) = uri {
            req.set_uri(uri);
        }
        if let Some(body) = self.staged_body {
            req.set_body(body);
        }

        Ok(())
    }
}

/// Check if the headers declare a form-encoded body.
///
/// Media type parameters such as `charset` are ignored.
pub fn is_form_encoded(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|v| v.trim().eq_ignore_ascii_case(FORM_URLENCODED))
        .unwrap_or(false)
}

/// Parse `application/x-www-form-urlencoded` data into decoded pairs.
///
/// `+` decodes to a space and a segment without `=` has an empty value.
/// Data that does not decode to utf-8 is rejected.
pub fn parse_form(input: &[u8]) -> Result<Vec<(String, String)>> {
    input
        .split(|b| *b == b'&')
        .filter(|s| !s.is_empty())
        .map(|pair| {
            let (k, v) = match pair.iter().position(|b| *b == b'=') {
                Some(idx) => (&pair[..idx], &pair[idx + 1..]),
                None => (pair, &[][..]),
            };
            Ok((form_decode(k)?, form_decode(v)?))
        })
        .collect()
}

/// Serialize pairs as `application/x-www-form-urlencoded`.
pub fn form_encode<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

fn form_decode(input: &[u8]) -> Result<String> {
    let plus_replaced: Vec<u8> = input
        .iter()
        .map(|b| if *b == b'+' { b' ' } else { *b })
        .collect();

    String::from_utf8(percent_decode(&plus_replaced).collect()).map_err(|e| {
        Error::encoding_invalid(format!(
            "parameter {:?} is not valid utf-8 after decoding",
            String::from_utf8_lossy(input)
        ))
        .with_source(e)
    })
}
