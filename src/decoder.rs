//! Message decoding.
//!
//! The decoder scans every character of the input:
//! 1. Characters outside the selector blocks are skipped (carrier, whitespace, anything)
//! 2. Selectors are mapped back to bytes in the order they appear
//! 3. The bytes are validated as UTF-8
//!
//! Decoding does not need to know the carrier. Input with no selectors at all
//! decodes to an empty message.

use thiserror::Error;
use tracing::{debug, trace};

use crate::selector::byte_for_selector;

/// Errors that can occur while decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The recovered bytes are not valid UTF-8.
    #[error("Hidden payload is not valid UTF-8 (invalid sequence at byte {valid_up_to} of {payload_len})")]
    InvalidPayloadEncoding {
        /// Length of the longest valid UTF-8 prefix.
        valid_up_to: usize,
        /// Total number of recovered bytes.
        payload_len: usize,
    },
}

/// Recovers the hidden text from a tagged string.
///
/// Fails only when the hidden bytes are not valid UTF-8; a string with no
/// hidden payload decodes to `""`.
///
/// # Example
/// ```
/// let tagged = varvault::encode("🦀", "hello");
/// assert_eq!(varvault::decode(&tagged).unwrap(), "hello");
/// assert_eq!(varvault::decode("just text").unwrap(), "");
/// ```
pub fn decode(tagged: &str) -> Result<String, DecodeError> {
    let payload = decode_bytes(tagged);
    let payload_len = payload.len();

    String::from_utf8(payload).map_err(|e| {
        let valid_up_to = e.utf8_error().valid_up_to();
        debug!(valid_up_to, payload_len, "payload is not valid UTF-8");
        DecodeError::InvalidPayloadEncoding {
            valid_up_to,
            payload_len,
        }
    })
}

/// Recovers the hidden bytes from a tagged string.
///
/// Never fails: characters that are not variation selectors are ignored.
pub fn decode_bytes(tagged: &str) -> Vec<u8> {
    let mut payload = Vec::new();
    let mut skipped = 0usize;

    for c in tagged.chars() {
        match byte_for_selector(c) {
            Some(byte) => payload.push(byte),
            None => skipped += 1,
        }
    }

    trace!(skipped, "ignored ordinary characters");
    debug!(payload_bytes = payload.len(), "decoded payload");

    payload
}
