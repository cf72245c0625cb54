// File: src/core/segmenter.rs
//! Greedy segmentation of unseparated dot/dash runs.
//!
//! At each cursor the longest known pattern starting there wins. This is a
//! heuristic: Morse is not prefix-free, so a run can have several valid
//! readings and only the longest-first one is produced. `...---...` reads
//! as `3B` (`...--` then `-...`), not `SOS`.

use crate::core::normalizer::{is_signal, normalize, sanitize};
use crate::core::table;
use crate::core::trie::PatternTrie;

pub const DEFAULT_PLACEHOLDER: char = '?';

/// True when the sanitized Morse string is one unbroken dot/dash run:
/// no spaces, newlines or slashes between symbols.
pub fn is_continuous(sanitized: &str) -> bool {
    let trimmed = sanitized.trim();
    !trimmed.is_empty() && trimmed.chars().all(is_signal)
}

/// Segments a continuous run with the default placeholder.
pub fn decode_continuous(morse: &str) -> String {
    decode_continuous_with(morse, DEFAULT_PLACEHOLDER)
}

/// Normalizes `morse`, drops everything but dots and dashes, then scans
/// left to right taking the longest matching pattern. A position where no
/// pattern matches yields `placeholder` and advances by one symbol, so the
/// scan always terminates.
pub fn decode_continuous_with(morse: &str, placeholder: char) -> String {
    let symbols: Vec<u8> = sanitize(&normalize(morse))
        .bytes()
        .filter(|&b| b == b'.' || b == b'-')
        .collect();
    segment(&symbols, PatternTrie::global(), placeholder)
}

/// The match window at each cursor is at most the longest table pattern,
/// so the scan costs input length times a small constant.
pub(crate) fn segment(symbols: &[u8], trie: &PatternTrie, placeholder: char) -> String {
    let window = table::max_pattern_len();
    let mut out = String::new();
    let mut cursor = 0;
    while cursor < symbols.len() {
        let end = (cursor + window).min(symbols.len());
        match trie.longest_match(&symbols[cursor..end]) {
            Some((c, len)) => {
                tracing::trace!(cursor, len, symbol = %c, "segment");
                out.push(c);
                cursor += len;
            }
            None => {
                out.push(placeholder);
                cursor += 1;
            }
        }
    }
    out
}
