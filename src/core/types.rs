// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of a translation the raw input was judged to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    English,
    Morse,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::English => f.write_str("english"),
            Direction::Morse => f.write_str("morse"),
        }
    }
}

/// One-way conversion output plus every input token that had no mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub output: String,
    /// Unsupported characters (encode) or unknown patterns (decode), in input order.
    pub invalid: Vec<String>,
}

impl Translation {
    pub fn is_clean(&self) -> bool {
        self.invalid.is_empty()
    }
}

/// Result of an auto-detected translation. Built fresh per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub direction: Direction,
    pub english: String,
    pub morse: String,
    /// The Morse side had no separators and was segmented.
    pub continuous: bool,
    /// Normalization altered the input.
    pub changed: bool,
    pub invalid: Vec<String>,
}

impl TranslationResult {
    pub fn empty() -> Self {
        Self {
            direction: Direction::English,
            english: String::new(),
            morse: String::new(),
            continuous: false,
            changed: false,
            invalid: Vec::new(),
        }
    }

    /// The side the user did not type.
    pub fn output(&self) -> &str {
        match self.direction {
            Direction::English => &self.morse,
            Direction::Morse => &self.english,
        }
    }
}
