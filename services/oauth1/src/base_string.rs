use std::fmt::Write;

use http::Uri;
use oauthsign_core::{Error, Result};

use crate::encode::percent_encode;

/// Normalize the target URI of a request.
///
/// Scheme and host are lowercased, the default port of the scheme is
/// dropped, an empty path becomes `/`. Query and fragment never appear.
///
/// ## Reference
///
/// - [Base String URI (RFC 5849 3.4.1.2)](https://www.rfc-editor.org/rfc/rfc5849#section-3.4.1.2)
pub fn normalize_uri(uri: &Uri) -> Result<String> {
    let (scheme, host) = match (uri.scheme_str(), uri.host()) {
        (Some(scheme), Some(host)) => (scheme.to_ascii_lowercase(), host.to_ascii_lowercase()),
        _ => {
            return Err(Error::request_invalid(format!(
                "uri {uri} is not absolute, set request_uri to sign it"
            )))
        }
    };

    let mut s = String::new();
    write!(s, "{scheme}://{host}")?;
    match (scheme.as_str(), uri.port_u16()) {
        ("http", Some(80)) | ("https", Some(443)) | (_, None) => {}
        (_, Some(port)) => write!(s, ":{port}")?,
    }
    match uri.path() {
        "" => s.push('/'),
        path => s.push_str(path),
    }

    Ok(s)
}

/// Build the signature base string.
///
/// ```text
/// UPPERCASE(method) + "&" + encode(normalized uri) + "&" + encode(normalized parameters)
/// ```
///
/// ## Reference
///
/// - [Signature Base String (RFC 5849 3.4.1)](https://www.rfc-editor.org/rfc/rfc5849#section-3.4.1)
pub fn signature_base_string(method: &str, normalized_uri: &str, normalized_params: &str) -> String {
    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        percent_encode(normalized_uri),
        percent_encode(normalized_params)
    )
}
