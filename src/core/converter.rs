// File: src/core/converter.rs
use crate::config::{TranslatorConfig, UnknownPolicy};
use crate::core::normalizer::normalize;
use crate::core::table;
use crate::core::types::Translation;

const LETTER_GAP: &str = " ";
const WORD_GAP: &str = " / ";

/// Text to Morse and back, applying one unknown-token policy to both directions.
#[derive(Debug, Clone)]
pub struct MorseConverter {
    unknown: UnknownPolicy,
    placeholder: char,
}

impl MorseConverter {
    pub fn new(config: &TranslatorConfig) -> Self {
        Self {
            unknown: config.unknown,
            placeholder: config.placeholder,
        }
    }

    fn unknown_token(&self, token: &str, invalid: &mut Vec<String>, out: &mut Vec<String>) {
        invalid.push(token.to_string());
        if self.unknown == UnknownPolicy::Placeholder {
            out.push(self.placeholder.to_string());
        }
    }

    /// Encodes text line by line. Whitespace runs inside a line separate
    /// words; letters are joined by one space and words by ` / `.
    pub fn encode(&self, text: &str) -> Translation {
        let mut invalid = Vec::new();
        let lines: Vec<String> = text
            .split('\n')
            .map(|line| {
                let words: Vec<String> = line
                    .split_whitespace()
                    .filter_map(|word| {
                        let mut codes = Vec::new();
                        for c in word.chars() {
                            match table::encode_of(c) {
                                Some(pattern) => codes.push(pattern.to_string()),
                                None => {
                                    let mut buf = [0u8; 4];
                                    self.unknown_token(c.encode_utf8(&mut buf), &mut invalid, &mut codes)
                                }
                            }
                        }
                        (!codes.is_empty()).then(|| codes.join(LETTER_GAP))
                    })
                    .collect();
                words.join(WORD_GAP)
            })
            .collect();

        Translation {
            output: lines.join("\n"),
            invalid,
        }
    }

    /// Decodes segmented Morse. Input is normalized first, so unicode dots,
    /// dashes and `|` separators are accepted. Words split on `/` with any
    /// surrounding whitespace, letters on whitespace.
    pub fn decode(&self, morse: &str) -> Translation {
        let normalized = normalize(morse);
        let mut invalid = Vec::new();
        let lines: Vec<String> = normalized
            .split('\n')
            .map(|line| {
                let words: Vec<String> = line
                    .split('/')
                    .filter_map(|word| {
                        let mut letters = Vec::new();
                        for token in word.split_whitespace() {
                            match table::decode_of(token) {
                                Some(c) => letters.push(c.to_string()),
                                None => self.unknown_token(token, &mut invalid, &mut letters),
                            }
                        }
                        (!letters.is_empty()).then(|| letters.concat())
                    })
                    .collect();
                words.join(" ")
            })
            .collect();

        Translation {
            output: lines.join("\n"),
            invalid,
        }
    }
}

impl Default for MorseConverter {
    fn default() -> Self {
        Self::new(&TranslatorConfig::default())
    }
}

/// Encodes with the default policy: unsupported characters become `?`.
pub fn encode(text: &str) -> String {
    MorseConverter::default().encode(text).output
}

pub fn encode_report(text: &str) -> Translation {
    MorseConverter::default().encode(text)
}

/// Decodes with the default policy: unknown patterns become `?`.
pub fn decode(morse: &str) -> String {
    MorseConverter::default().decode(morse).output
}

pub fn decode_report(morse: &str) -> Translation {
    MorseConverter::default().decode(morse)
}
