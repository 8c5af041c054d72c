// ABOUTME: Base64url codec with padding normalization for token segments
// ABOUTME: Encodes without padding and accepts both padded and unpadded input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Harbor Social Platform

//! Base64url codec for token segments.
//!
//! Token segments are URL-safe by construction so the whole token can ride
//! in a query parameter without percent-encoding. Encoding never emits
//! padding; decoding strips any padding first so tokens minted by stricter
//! encoders still verify.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

/// Encode bytes as unpadded base64url
#[must_use]
pub fn encode(data: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(data)
}

/// Decode a base64url string, tolerating trailing `=` padding
///
/// # Errors
///
/// Returns a `base64::DecodeError` when the input is not valid base64url.
pub fn decode(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD.decode(input.trim_end_matches('='))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_has_no_padding_or_unsafe_chars() {
        // 1-, 2-, and 0-byte tails exercise every padding case
        for input in ["a", "ab", "abc", "abcd", ""] {
            let encoded = encode(input);
            assert!(!encoded.contains('='), "padding in {encoded:?}");
            assert!(!encoded.contains('+'), "plus in {encoded:?}");
            assert!(!encoded.contains('/'), "slash in {encoded:?}");
        }
    }

    #[test]
    fn test_decode_accepts_padded_and_unpadded() {
        assert_eq!(decode("aGVsbG8").unwrap(), b"hello");
        assert_eq!(decode("aGVsbG8=").unwrap(), b"hello");
    }

    #[test]
    fn test_round_trip_url_safe_alphabet() {
        // 0xfb 0xff forces '-' and '_' in the output
        let bytes = [0xfbu8, 0xff, 0x00, 0x10];
        let encoded = encode(bytes);
        assert_eq!(decode(&encoded).unwrap(), bytes);
    }

    #[test]
    fn test_decode_rejects_malformed_input() {
        assert!(decode("not base64!").is_err());
        assert!(decode("a=b").is_err());
    }
}
