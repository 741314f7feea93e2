//! Utility functions and types.

use std::fmt::{Debug, Display, Formatter};

/// Redacts credential material in `Debug` and `Display` output.
///
/// Values shorter than 16 bytes are fully hidden. Longer values keep their
/// first four bytes so that keys can still be told apart in logs.
/// Secrets and PEM blocks should go through [`Redact::full`] instead.
pub struct Redact<'a> {
    value: &'a str,
    full: bool,
}

impl<'a> Redact<'a> {
    /// Hide the whole value, whatever its length.
    pub fn full(value: &'a str) -> Self {
        Self { value, full: true }
    }

    fn write(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let v = self.value;
        if v.is_empty() {
            return f.write_str("EMPTY");
        }
        if self.full || v.len() < 16 || !v.is_char_boundary(4) {
            return f.write_str("***");
        }

        write!(f, "{}***", &v[..4])
    }
}

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Self { value, full: false }
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Self::from(value.as_str())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.write(f)
    }
}

impl Display for Redact<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.write(f)
    }
}
