// File: src/core/detector.rs
use crate::core::normalizer::{is_signal, normalize, sanitize, visible_len};
use crate::core::types::Direction;

/// Share of Morse-alphabet symbols above which noisy input still counts as Morse.
pub const DEFAULT_RATIO_THRESHOLD: f64 = 0.7;

/// Only dot/dash/slash/whitespace characters, with at least one dot or dash.
pub fn is_strict_morse(text: &str) -> bool {
    text.chars().any(is_signal)
        && text
            .chars()
            .all(|c| is_signal(c) || c == '/' || c.is_whitespace())
}

/// Classifies `text` with the default ratio threshold.
pub fn detect_direction(text: &str) -> Direction {
    detect_direction_with(text, DEFAULT_RATIO_THRESHOLD)
}

/// Layered heuristic: strict match, then sanitize-and-retry, then the
/// majority-ratio fallback.
///
/// The token check on the sanitized string only applies when sanitizing
/// removed noise alone. Once letters or digits were stripped the input is
/// judged by the ratio, so prose ending in a period stays text.
pub fn detect_direction_with(text: &str, ratio_threshold: f64) -> Direction {
    if text.trim().is_empty() {
        return Direction::English;
    }

    let normalized = normalize(text);
    if is_strict_morse(&normalized) {
        tracing::debug!("direction: strict morse");
        return Direction::Morse;
    }

    let sanitized = sanitize(&normalized);
    if !sanitized.chars().any(is_signal) {
        return Direction::English;
    }

    let stripped_text = normalized.chars().any(char::is_alphanumeric);
    if !stripped_text
        && sanitized
            .split_whitespace()
            .all(|token| token.chars().all(is_signal))
    {
        tracing::debug!("direction: morse after sanitizing noise");
        return Direction::Morse;
    }

    let ratio = visible_len(&sanitized) as f64 / visible_len(&normalized) as f64;
    tracing::debug!(ratio, ratio_threshold, "direction: ratio fallback");
    if ratio > ratio_threshold {
        Direction::Morse
    } else {
        Direction::English
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_english() {
        assert_eq!(detect_direction(""), Direction::English);
        assert_eq!(detect_direction("   \n "), Direction::English);
    }

    #[test]
    fn plain_words_are_english() {
        assert_eq!(detect_direction("HELLO"), Direction::English);
        assert_eq!(detect_direction("Hello, world."), Direction::English);
        assert_eq!(detect_direction("well-known"), Direction::English);
    }

    #[test]
    fn spaced_morse_is_morse() {
        assert_eq!(detect_direction(".... . .-.. .-.. ---"), Direction::Morse);
        assert_eq!(detect_direction("... --- ... / ... --- ..."), Direction::Morse);
    }

    #[test]
    fn unicode_variants_are_morse() {
        assert_eq!(detect_direction("••• ——— •••"), Direction::Morse);
        assert_eq!(detect_direction("…|—"), Direction::Morse);
    }

    #[test]
    fn noise_is_sanitized_away() {
        assert_eq!(detect_direction("... --- ...✓"), Direction::Morse);
        assert_eq!(detect_direction("(... ---)"), Direction::Morse);
    }

    #[test]
    fn mixed_letters_fall_to_ratio() {
        // 6 signal symbols out of 9 visible characters: 0.67 is not above 0.7
        assert_eq!(detect_direction("SOS .. .. --"), Direction::English);
        // one typo among 15 symbols stays Morse
        assert_eq!(detect_direction(".... . .-.x .-.. ---"), Direction::Morse);
    }

    #[test]
    fn threshold_is_tunable() {
        assert_eq!(detect_direction_with("SOS .. .. --", 0.5), Direction::Morse);
        assert_eq!(detect_direction_with(".... . .-.x .-.. ---", 0.95), Direction::English);
    }

    #[test]
    fn slash_only_is_english() {
        assert_eq!(detect_direction("/ /"), Direction::English);
    }

    #[test]
    fn strict_check() {
        assert!(is_strict_morse("... / ---"));
        assert!(!is_strict_morse(" / "));
        assert!(!is_strict_morse("...a"));
    }
}
