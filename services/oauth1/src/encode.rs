//! Parameter codec.
//!
//! - [Parameter Encoding (RFC 5849 3.6)](https://www.rfc-editor.org/rfc/rfc5849#section-3.6)
//! - [Parameters Normalization (RFC 5849 3.4.1.3.2)](https://www.rfc-editor.org/rfc/rfc5849#section-3.4.1.3.2)

use percent_encoding::utf8_percent_encode;

use crate::constants::RFC3986_ENCODE_SET;

/// Percent-encode a value per RFC 3986.
///
/// Unreserved characters pass through, every other byte of the utf-8
/// representation becomes `%XX` with uppercase hex. Space is `%20`, never `+`.
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, RFC3986_ENCODE_SET).to_string()
}

/// Build the normalized parameter string.
///
/// Keys and values are encoded one by one, then pairs are sorted by encoded
/// key and encoded value, byte-wise ascending. Repeated keys stay separate
/// pairs. The result is `k=v` pairs joined with `&`.
pub fn normalize_parameters<'a>(params: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let mut pairs: Vec<(String, String)> = params
        .into_iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    // sort_by is stable, fully equal pairs keep their input order.
    pairs.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

    let mut s = String::with_capacity(pairs.iter().map(|(k, v)| k.len() + v.len() + 2).sum());
    for (idx, (k, v)) in pairs.iter().enumerate() {
        if idx != 0 {
            s.push('&');
        }
        s.push_str(k);
        s.push('=');
        s.push_str(v);
    }

    s
}
