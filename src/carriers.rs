//! Preset carrier characters.
//!
//! Read-only lists a front end offers as one-click carriers. None of them
//! contain variation selectors, so all are safe to pass to the encoder.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Carrier used when nothing else is chosen.
pub const DEFAULT_CARRIER: &str = "😀";

/// Emoji carriers.
pub const EMOJI_LIST: &[&str] = &[
    "😀", "😂", "🥰", "😎", "🤔", "😴", "🤯", "🥳", "😇", "🤖", "👻", "💀", "👽", "🎃", "😺",
    "🐶", "🐱", "🦊", "🐼", "🐸", "🦄", "🐙", "🦀", "🐢", "🌈", "🔥", "⭐", "🌙", "🌸", "🍕",
    "🍩", "🍉", "🎉", "🎁", "🎈", "💎", "🔒", "🔑", "💡", "🚀", "⚡", "🎵", "💯", "👍", "👀",
    "🙈", "💌", "🧩",
];

/// Latin letter carriers.
pub const ALPHABET_LIST: &[&str] = &[
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R",
    "S", "T", "U", "V", "W", "X", "Y", "Z", "a", "b", "c", "d", "e", "f", "g", "h", "i", "j",
    "k", "l", "m", "n", "o", "p", "q", "r", "s", "t", "u", "v", "w", "x", "y", "z",
];

/// Digit carriers.
pub const NUMBER_LIST: &[&str] = &["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Punctuation and symbol carriers.
pub const SPECIAL_CHAR_LIST: &[&str] = &[
    "!", "@", "#", "$", "%", "^", "&", "*", "(", ")", "-", "_", "+", "=", "[", "]", "{", "}",
    "|", ";", ":", "'", "\"", ",", ".", "<", ">", "/", "?", "~", "`", "★", "♥", "♦", "♣", "♠",
    "→", "←", "↑", "↓", "∞", "✓", "§", "¶", "•", "©",
];

/// Errors when parsing a category or preset reference.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PresetError {
    #[error("Unknown carrier category '{0}' (expected emoji, alphabet, number or special)")]
    UnknownCategory(String),

    #[error("Invalid preset '{0}' (expected CATEGORY:INDEX, e.g. emoji:3)")]
    InvalidFormat(String),

    #[error("No preset at index {index} in {category} (has {len})")]
    OutOfRange {
        category: Category,
        index: usize,
        len: usize,
    },
}

/// A preset list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Emoji,
    Alphabet,
    Number,
    Special,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::Emoji,
        Category::Alphabet,
        Category::Number,
        Category::Special,
    ];

    /// The carriers in this category.
    pub fn list(self) -> &'static [&'static str] {
        match self {
            Category::Emoji => EMOJI_LIST,
            Category::Alphabet => ALPHABET_LIST,
            Category::Number => NUMBER_LIST,
            Category::Special => SPECIAL_CHAR_LIST,
        }
    }

    /// Heading shown above the list.
    pub fn title(self) -> &'static str {
        match self {
            Category::Emoji => "Pick an emoji",
            Category::Alphabet => "Or pick a letter",
            Category::Number => "Or pick a number",
            Category::Special => "Or pick a special character",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Emoji => "emoji",
            Category::Alphabet => "alphabet",
            Category::Number => "number",
            Category::Special => "special",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "emoji" | "emojis" => Ok(Category::Emoji),
            "alphabet" | "letter" | "letters" => Ok(Category::Alphabet),
            "number" | "numbers" | "digit" | "digits" => Ok(Category::Number),
            "special" | "symbol" | "symbols" => Ok(Category::Special),
            _ => Err(PresetError::UnknownCategory(s.to_string())),
        }
    }
}

/// A `CATEGORY:INDEX` reference into the preset lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetRef {
    pub category: Category,
    pub index: usize,
}

impl PresetRef {
    /// Looks up the referenced carrier.
    pub fn resolve(self) -> Result<&'static str, PresetError> {
        preset(self.category, self.index).ok_or(PresetError::OutOfRange {
            category: self.category,
            index: self.index,
            len: self.category.list().len(),
        })
    }
}

impl FromStr for PresetRef {
    type Err = PresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, index) = s
            .split_once(':')
            .ok_or_else(|| PresetError::InvalidFormat(s.to_string()))?;
        let category = category.parse()?;
        let index = index
            .trim()
            .parse()
            .map_err(|_| PresetError::InvalidFormat(s.to_string()))?;
        Ok(PresetRef { category, index })
    }
}

/// Returns the carrier at `index` in `category`.
pub fn preset(category: Category, index: usize) -> Option<&'static str> {
    category.list().get(index).copied()
}

/// Filters a category the way the picker's search box does: case-insensitive
/// substring match. Returns `(index, carrier)` pairs.
pub fn search(category: Category, query: &str) -> Vec<(usize, &'static str)> {
    let query = query.to_lowercase();
    category
        .list()
        .iter()
        .enumerate()
        .filter(|(_, c)| c.to_lowercase().contains(&query))
        .map(|(i, c)| (i, *c))
        .collect()
}
