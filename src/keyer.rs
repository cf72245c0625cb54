// File: src/keyer.rs
use std::time::Duration;

const INITIAL_THRESHOLD_MS: f64 = 120.0;

/// Buffer for hand-keyed input. Press durations are classified against a
/// threshold that drifts toward the operator's own rhythm.
#[derive(Debug, Clone)]
pub struct Keyer {
    buffer: String,
    threshold_ms: f64,
}

impl Keyer {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            threshold_ms: INITIAL_THRESHOLD_MS,
        }
    }

    /// Classifies one key press, then folds it into the running threshold
    /// (a 1/10 exponential moving average).
    pub fn press(&mut self, held: Duration) -> char {
        let ms = held.as_secs_f64() * 1000.0;
        let symbol = if ms < self.threshold_ms { '.' } else { '-' };
        self.threshold_ms = (self.threshold_ms * 9.0 + ms) / 10.0;
        self.buffer.push(symbol);
        symbol
    }

    pub fn dit(&mut self) {
        self.buffer.push('.');
    }

    pub fn dah(&mut self) {
        self.buffer.push('-');
    }

    pub fn letter_space(&mut self) {
        self.buffer.push(' ');
    }

    pub fn word_space(&mut self) {
        self.buffer.push_str(" / ");
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn threshold_ms(&self) -> f64 {
        self.threshold_ms
    }

    /// Takes the trimmed buffer, or `None` if only whitespace was keyed.
    pub fn commit(&mut self) -> Option<String> {
        let keyed = self.buffer.trim().to_string();
        if keyed.is_empty() {
            return None;
        }
        self.buffer.clear();
        Some(keyed)
    }
}

impl Default for Keyer {
    fn default() -> Self {
        Self::new()
    }
}
