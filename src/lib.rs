//! # varvault - hide text in plain sight
//!
//! varvault hides a message inside an emoji or any other character by
//! appending invisible Unicode variation selectors, one per message byte.
//! The result renders as the carrier alone but decodes back to the message.
//!
//! ## Overview
//!
//! - Bytes `0x00..=0x0F` map to VS1..VS16 (U+FE00..=U+FE0F)
//! - Bytes `0x10..=0xFF` map to VS17..VS256 (U+E0100..=U+E01EF)
//! - Encoding appends one selector per byte after the carrier
//! - Decoding collects every selector in the input and ignores everything else,
//!   so the decoder never needs to know the carrier
//!
//! There is no encryption and no compression: anyone running a decoder can
//! read the message.
//!
//! ## Example Usage
//!
//! ```rust
//! use varvault::{decode, encode};
//!
//! let tagged = encode("😀", "hi");
//! assert_eq!(tagged, "😀\u{E0158}\u{E0159}");
//!
//! assert_eq!(decode(&tagged).unwrap(), "hi");
//! assert_eq!(decode("nothing here").unwrap(), "");
//! ```
//!
//! ## Modules
//!
//! - [`selector`]: the byte to variation-selector table
//! - [`encoder`]: message encoding
//! - [`decoder`]: message decoding
//! - [`inspect`]: payload detection and stripping
//! - [`carriers`]: preset carrier lists
//! - [`vault`]: mode and carrier selection for front ends
//! - [`config`]: user configuration file

pub mod carriers;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod inspect;
pub mod selector;
pub mod vault;

// Re-export commonly used types at the crate root
pub use carriers::{Category, PresetRef, DEFAULT_CARRIER};
pub use config::{Config, ConfigError};
pub use decoder::{decode, decode_bytes, DecodeError};
pub use encoder::{
    encode, encode_bytes, encode_bytes_checked, encode_checked, validate_carrier, EncodeError,
};
pub use inspect::{has_payload, inspect, strip_payload, PayloadReport};
pub use selector::{byte_for_selector, is_variation_selector, selector_for_byte};
pub use vault::{CarrierChoice, Mode, Vault, VaultError};
