//! Payload inspection: what a tagged string looks like and what it hides.

use crate::decoder::{decode_bytes, DecodeError};
use crate::selector::{byte_for_selector, is_variation_selector, range_of, SelectorRange};

/// A summary of the visible and hidden parts of a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadReport {
    /// The input with every selector removed.
    pub visible: String,
    /// Number of visible characters.
    pub visible_chars: usize,
    /// Selectors from U+FE00..=U+FE0F.
    pub low_selectors: usize,
    /// Selectors from U+E0100..=U+E01EF.
    pub high_selectors: usize,
    /// The recovered payload.
    pub payload: Vec<u8>,
    /// The payload as text, or why it isn't text.
    pub text: Result<String, DecodeError>,
}

impl PayloadReport {
    /// Total payload size in bytes (one per selector).
    pub fn payload_len(&self) -> usize {
        self.low_selectors + self.high_selectors
    }

    /// True if any hidden bytes were found.
    pub fn has_payload(&self) -> bool {
        self.payload_len() > 0
    }
}

/// Builds a [`PayloadReport`] for `input`.
pub fn inspect(input: &str) -> PayloadReport {
    let mut visible = String::with_capacity(input.len());
    let mut visible_chars = 0;
    let mut low_selectors = 0;
    let mut high_selectors = 0;

    for c in input.chars() {
        match range_of(c) {
            Some(SelectorRange::Low) => low_selectors += 1,
            Some(SelectorRange::High) => high_selectors += 1,
            None => {
                visible.push(c);
                visible_chars += 1;
            }
        }
    }

    let payload = decode_bytes(input);
    let text = String::from_utf8(payload.clone()).map_err(|e| {
        DecodeError::InvalidPayloadEncoding {
            valid_up_to: e.utf8_error().valid_up_to(),
            payload_len: payload.len(),
        }
    });

    PayloadReport {
        visible,
        visible_chars,
        low_selectors,
        high_selectors,
        payload,
        text,
    }
}

/// Removes every variation selector, leaving only what renders.
pub fn strip_payload(input: &str) -> String {
    input.chars().filter(|c| !is_variation_selector(*c)).collect()
}

/// True if `input` carries at least one hidden byte.
pub fn has_payload(input: &str) -> bool {
    input.chars().any(is_variation_selector)
}

/// Lists each selector in `input` with the byte it carries.
pub fn selector_table(input: &str) -> Vec<(char, u8)> {
    input
        .chars()
        .filter_map(|c| byte_for_selector(c).map(|b| (c, b)))
        .collect()
}
