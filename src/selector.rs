//! Byte to variation-selector mapping.
//!
//! Unicode reserves 256 variation selectors split over two blocks:
//! - VS1..VS16 at U+FE00..=U+FE0F carry bytes 0x00..=0x0F
//! - VS17..VS256 at U+E0100..=U+E01EF carry bytes 0x10..=0xFF
//!
//! The mapping is a bijection, so every byte has exactly one selector and
//! every selector decodes to exactly one byte.

/// First codepoint of the low selector block (VS1).
pub const LOW_RANGE_BASE: u32 = 0xFE00;

/// Number of selectors in the low block.
pub const LOW_RANGE_LEN: u32 = 16;

/// First codepoint of the high (supplementary) selector block (VS17).
pub const HIGH_RANGE_BASE: u32 = 0xE0100;

/// Number of selectors in the high block.
pub const HIGH_RANGE_LEN: u32 = 240;

/// Which block a selector belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorRange {
    /// U+FE00..=U+FE0F
    Low,
    /// U+E0100..=U+E01EF
    High,
}

/// Maps a byte to its variation selector.
pub fn selector_for_byte(byte: u8) -> char {
    let byte = u32::from(byte);
    let code = if byte < LOW_RANGE_LEN {
        LOW_RANGE_BASE + byte
    } else {
        HIGH_RANGE_BASE + (byte - LOW_RANGE_LEN)
    };

    // Both blocks lie outside the surrogate range.
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Maps a variation selector back to its byte, or `None` for any other character.
pub fn byte_for_selector(c: char) -> Option<u8> {
    let code = u32::from(c);
    match range_of(c)? {
        SelectorRange::Low => Some((code - LOW_RANGE_BASE) as u8),
        SelectorRange::High => Some((code - HIGH_RANGE_BASE + LOW_RANGE_LEN) as u8),
    }
}

/// Returns the block `c` belongs to, if it is a variation selector.
pub fn range_of(c: char) -> Option<SelectorRange> {
    let code = u32::from(c);
    if (LOW_RANGE_BASE..LOW_RANGE_BASE + LOW_RANGE_LEN).contains(&code) {
        Some(SelectorRange::Low)
    } else if (HIGH_RANGE_BASE..HIGH_RANGE_BASE + HIGH_RANGE_LEN).contains(&code) {
        Some(SelectorRange::High)
    } else {
        None
    }
}

/// True if `c` is one of the 256 variation selectors.
pub fn is_variation_selector(c: char) -> bool {
    range_of(c).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_low_range_boundaries() {
        assert_eq!(selector_for_byte(0x00), '\u{FE00}');
        assert_eq!(selector_for_byte(0x0F), '\u{FE0F}');
        assert_eq!(byte_for_selector('\u{FE00}'), Some(0x00));
        assert_eq!(byte_for_selector('\u{FE0F}'), Some(0x0F));
    }

    #[test]
    fn test_high_range_boundaries() {
        assert_eq!(selector_for_byte(0x10), '\u{E0100}');
        assert_eq!(selector_for_byte(0xFF), '\u{E01EF}');
        assert_eq!(byte_for_selector('\u{E0100}'), Some(0x10));
        assert_eq!(byte_for_selector('\u{E01EF}'), Some(0xFF));
    }

    #[test]
    fn test_bijection_over_all_bytes() {
        let mut seen = HashSet::new();
        for byte in 0..=u8::MAX {
            let selector = selector_for_byte(byte);
            assert!(is_variation_selector(selector));
            assert!(seen.insert(selector), "selector reused for {:#04x}", byte);
            assert_eq!(byte_for_selector(selector), Some(byte));
        }
        assert_eq!(seen.len(), 256);
    }

    #[test]
    fn test_every_selector_maps_back() {
        let low = (LOW_RANGE_BASE..LOW_RANGE_BASE + LOW_RANGE_LEN).filter_map(char::from_u32);
        let high = (HIGH_RANGE_BASE..HIGH_RANGE_BASE + HIGH_RANGE_LEN).filter_map(char::from_u32);

        let bytes: HashSet<u8> = low
            .chain(high)
            .map(|c| byte_for_selector(c).unwrap())
            .collect();
        assert_eq!(bytes.len(), 256);
    }

    #[test]
    fn test_neighbours_are_not_selectors() {
        for c in ['\u{FDFF}', '\u{FE10}', '\u{E00FF}', '\u{E01F0}', 'a', '😀', '\u{200D}'] {
            assert!(!is_variation_selector(c), "{:?}", c);
            assert_eq!(byte_for_selector(c), None);
        }
    }

    #[test]
    fn test_range_of() {
        assert_eq!(range_of('\u{FE05}'), Some(SelectorRange::Low));
        assert_eq!(range_of('\u{E0150}'), Some(SelectorRange::High));
        assert_eq!(range_of('x'), None);
    }
}
