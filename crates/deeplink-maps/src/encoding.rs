//! Percent-encoding for map query values.

use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Letters, digits and the unreserved marks pass through; space and every
/// reserved character is escaped.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub(crate) fn encode_value(raw: &str) -> String {
    utf8_percent_encode(raw, QUERY_VALUE).to_string()
}

/// Decode a percent-encoded query value back to text.
///
/// Invalid UTF-8 sequences are replaced with `U+FFFD`.
#[must_use]
pub fn decode_value(encoded: &str) -> Cow<'_, str> {
    percent_decode_str(encoded).decode_utf8_lossy()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreserved_characters_pass_through() {
        assert_eq!(encode_value("Pizza-Hut_2.0~"), "Pizza-Hut_2.0~");
    }

    #[test]
    fn space_and_reserved_characters_are_escaped() {
        assert_eq!(encode_value("1 Infinite Loop"), "1%20Infinite%20Loop");
        assert_eq!(encode_value("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_value("x,y/z?#"), "x%2Cy%2Fz%3F%23");
    }

    #[test]
    fn non_ascii_is_encoded_as_utf8_bytes() {
        assert_eq!(encode_value("café"), "caf%C3%A9");
    }

    #[test]
    fn decode_reverses_encode() {
        let raw = "Straße 5, München & more";
        assert_eq!(decode_value(&encode_value(raw)), raw);
    }
}
