//! Message encoding.
//!
//! Each byte of the message becomes one variation selector appended after
//! the carrier:
//! 1. Map every byte through the selector table
//! 2. Emit the carrier unchanged
//! 3. Emit the selectors in byte order, no separators

use thiserror::Error;
use tracing::debug;

use crate::selector::{is_variation_selector, selector_for_byte};

/// Errors reported by the checked encoders.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Empty carrier")]
    EmptyCarrier,

    #[error("Carrier already contains a variation selector at character {position} (U+{codepoint:04X})")]
    CarrierContainsSelector {
        /// Character index of the first selector inside the carrier.
        position: usize,
        /// The offending codepoint.
        codepoint: u32,
    },
}

/// Hides `message` after `carrier`.
///
/// The carrier must not contain variation selectors; if it does the output
/// cannot be told apart from the payload and decodes to the wrong bytes.
/// Use [`encode_checked`] to have that rejected instead.
///
/// An empty message returns the carrier unchanged.
///
/// # Example
/// ```
/// let tagged = varvault::encode("😀", "hi");
/// assert_eq!(tagged, "😀\u{E0158}\u{E0159}");
/// ```
pub fn encode(carrier: &str, message: &str) -> String {
    encode_bytes(carrier, message.as_bytes())
}

/// Hides raw bytes after `carrier`. Same contract as [`encode`].
pub fn encode_bytes(carrier: &str, payload: &[u8]) -> String {
    debug_assert!(
        !carrier.chars().any(is_variation_selector),
        "carrier must not contain variation selectors"
    );

    // Low-range selectors are 3 UTF-8 bytes, high-range ones are 4.
    let mut tagged = String::with_capacity(carrier.len() + payload.len() * 4);
    tagged.push_str(carrier);
    tagged.extend(payload.iter().map(|&b| selector_for_byte(b)));

    debug!(
        carrier_chars = carrier.chars().count(),
        payload_bytes = payload.len(),
        "encoded payload"
    );

    tagged
}

/// Like [`encode`], but validates the carrier first.
pub fn encode_checked(carrier: &str, message: &str) -> Result<String, EncodeError> {
    encode_bytes_checked(carrier, message.as_bytes())
}

/// Like [`encode_bytes`], but validates the carrier first.
pub fn encode_bytes_checked(carrier: &str, payload: &[u8]) -> Result<String, EncodeError> {
    validate_carrier(carrier)?;
    Ok(encode_bytes(carrier, payload))
}

/// Checks that a carrier is non-empty and free of variation selectors.
pub fn validate_carrier(carrier: &str) -> Result<(), EncodeError> {
    if carrier.is_empty() {
        return Err(EncodeError::EmptyCarrier);
    }

    if let Some((position, c)) = carrier
        .chars()
        .enumerate()
        .find(|(_, c)| is_variation_selector(*c))
    {
        return Err(EncodeError::CarrierContainsSelector {
            position,
            codepoint: u32::from(c),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_hi() {
        let tagged = encode("😀", "hi");
        let chars: Vec<char> = tagged.chars().collect();
        // 'h' = 0x68 -> 88th high selector, 'i' = 0x69 -> 89th
        assert_eq!(chars, vec!['😀', '\u{E0158}', '\u{E0159}']);
    }

    #[test]
    fn test_encode_empty_message_is_carrier() {
        assert_eq!(encode("😀", ""), "😀");
        assert_eq!(encode("abc", ""), "abc");
    }

    #[test]
    fn test_encode_low_range_bytes() {
        let tagged = encode_bytes("x", &[0x00, 0x0F, 0x10]);
        assert_eq!(tagged, "x\u{FE00}\u{FE0F}\u{E0100}");
    }

    #[test]
    fn test_encode_multi_byte_utf8() {
        // 'é' is 0xC3 0xA9 in UTF-8
        let tagged = encode("A", "é");
        assert_eq!(tagged.chars().count(), 3);
        assert_eq!(tagged, "A\u{E01B3}\u{E0199}");
    }

    #[test]
    fn test_encode_multi_scalar_carrier() {
        let carrier = "👨\u{200D}👩\u{200D}👧";
        let tagged = encode(carrier, "a");
        assert!(tagged.starts_with(carrier));
        assert_eq!(tagged.chars().count(), carrier.chars().count() + 1);
    }

    #[test]
    fn test_encode_checked_ok() {
        assert_eq!(encode_checked("😀", "hi").unwrap(), encode("😀", "hi"));
    }

    #[test]
    fn test_encode_checked_empty_carrier() {
        assert_eq!(encode_checked("", "hi"), Err(EncodeError::EmptyCarrier));
    }

    #[test]
    fn test_encode_checked_rejects_selector_in_carrier() {
        // Heart with emoji presentation selector (VS16)
        let result = encode_checked("❤\u{FE0F}", "hi");
        assert_eq!(
            result,
            Err(EncodeError::CarrierContainsSelector {
                position: 1,
                codepoint: 0xFE0F,
            })
        );
    }

    #[test]
    fn test_encode_checked_rejects_already_tagged_carrier() {
        let tagged = encode("😀", "x");
        assert!(matches!(
            encode_checked(&tagged, "y"),
            Err(EncodeError::CarrierContainsSelector { position: 1, .. })
        ));
    }

    #[test]
    fn test_error_message() {
        let err = EncodeError::CarrierContainsSelector {
            position: 2,
            codepoint: 0xFE0F,
        };
        assert_eq!(
            err.to_string(),
            "Carrier already contains a variation selector at character 2 (U+FE0F)"
        );
    }
}
