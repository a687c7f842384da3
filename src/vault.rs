//! Front-end state: which way to convert and which carrier to use.
//!
//! A front end keeps a [`Vault`] and calls [`Vault::convert`] every time the
//! input changes, showing either the output or the error's message.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::carriers::DEFAULT_CARRIER;
use crate::decoder::{decode, DecodeError};
use crate::encoder::{encode_checked, EncodeError};

/// Conversion direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Encode,
    Decode,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown mode '{0}' (expected encode or decode)")]
pub struct ModeError(pub String);

impl Mode {
    /// Reads a `mode=` query value, falling back to the default when it is
    /// missing or unrecognised.
    pub fn from_query(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Encode => "encode",
            Mode::Decode => "decode",
        }
    }

    /// The other direction.
    pub fn toggled(self) -> Self {
        match self {
            Mode::Encode => Mode::Decode,
            Mode::Decode => Mode::Encode,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "encode" => Ok(Mode::Encode),
            "decode" => Ok(Mode::Decode),
            _ => Err(ModeError(s.to_string())),
        }
    }
}

/// The user's carrier selection: free-form input overrides the picked preset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarrierChoice {
    pub custom: Option<String>,
    pub preset: Option<String>,
}

impl CarrierChoice {
    pub fn custom(text: impl Into<String>) -> Self {
        Self {
            custom: Some(text.into()),
            preset: None,
        }
    }

    pub fn preset(carrier: impl Into<String>) -> Self {
        Self {
            custom: None,
            preset: Some(carrier.into()),
        }
    }

    /// The carrier to encode with: non-empty custom input, else the preset,
    /// else [`DEFAULT_CARRIER`].
    pub fn resolve(&self) -> &str {
        [self.custom.as_deref(), self.preset.as_deref()]
            .into_iter()
            .flatten()
            .find(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CARRIER)
    }
}

/// A failed conversion. Displays the notice a front end shows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VaultError {
    #[error("Error encoding: Invalid input")]
    Encode(#[source] EncodeError),

    #[error("Error decoding: Invalid input")]
    Decode(#[source] DecodeError),
}

/// Mode plus carrier selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vault {
    pub mode: Mode,
    pub carrier: CarrierChoice,
}

impl Vault {
    pub fn new(mode: Mode, carrier: CarrierChoice) -> Self {
        Self { mode, carrier }
    }

    /// Switches direction. The caller should clear its input, as the old
    /// text belongs to the other direction.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Encodes `input` under the chosen carrier, or decodes it, depending on the mode.
    pub fn convert(&self, input: &str) -> Result<String, VaultError> {
        debug!(mode = %self.mode, input_len = input.len(), "converting");
        match self.mode {
            Mode::Encode => encode_checked(self.carrier.resolve(), input).map_err(VaultError::Encode),
            Mode::Decode => decode(input).map_err(VaultError::Decode),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode_bytes;

    #[test]
    fn test_mode_parse_and_display() {
        assert_eq!("encode".parse::<Mode>(), Ok(Mode::Encode));
        assert_eq!("DECODE".parse::<Mode>(), Ok(Mode::Decode));
        assert_eq!("both".parse::<Mode>(), Err(ModeError("both".into())));
        assert_eq!(Mode::Decode.to_string(), "decode");
    }

    #[test]
    fn test_mode_from_query() {
        assert_eq!(Mode::from_query(None), Mode::Encode);
        assert_eq!(Mode::from_query(Some("decode")), Mode::Decode);
        assert_eq!(Mode::from_query(Some("garbage")), Mode::Encode);
    }

    #[test]
    fn test_mode_toggled() {
        assert_eq!(Mode::Encode.toggled(), Mode::Decode);
        assert_eq!(Mode::Decode.toggled(), Mode::Encode);
    }

    #[test]
    fn test_carrier_choice_resolution() {
        assert_eq!(CarrierChoice::default().resolve(), DEFAULT_CARRIER);
        assert_eq!(CarrierChoice::preset("🦊").resolve(), "🦊");
        assert_eq!(CarrierChoice::custom("word").resolve(), "word");

        let both = CarrierChoice {
            custom: Some("word".into()),
            preset: Some("🦊".into()),
        };
        assert_eq!(both.resolve(), "word");

        let empty_custom = CarrierChoice {
            custom: Some(String::new()),
            preset: Some("🦊".into()),
        };
        assert_eq!(empty_custom.resolve(), "🦊");
    }

    #[test]
    fn test_vault_round_trip() {
        let mut vault = Vault::new(Mode::Encode, CarrierChoice::preset("🐙"));
        let tagged = vault.convert("meet at noon").unwrap();
        assert!(tagged.starts_with("🐙"));

        vault.set_mode(Mode::Decode);
        assert_eq!(vault.convert(&tagged).unwrap(), "meet at noon");
    }

    #[test]
    fn test_vault_decode_error_notice() {
        let vault = Vault::new(Mode::Decode, CarrierChoice::default());
        let err = vault.convert(&encode_bytes("x", &[0xC0])).unwrap_err();
        assert_eq!(err.to_string(), "Error decoding: Invalid input");
        assert!(matches!(err, VaultError::Decode(_)));
    }

    #[test]
    fn test_vault_encode_error_notice() {
        let vault = Vault::new(Mode::Encode, CarrierChoice::custom("❤\u{FE0F}"));
        let err = vault.convert("hi").unwrap_err();
        assert_eq!(err.to_string(), "Error encoding: Invalid input");
    }
}
