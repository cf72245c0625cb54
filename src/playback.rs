// File: src/playback.rs
//! Timing plan handed to an audio backend. No sound is produced here.

use crate::config::PlaybackConfig;
use serde::Serialize;
use std::time::Duration;

pub const MIN_FREQUENCY_HZ: f32 = 300.0;
pub const MAX_FREQUENCY_HZ: f32 = 1200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    Dot,
    Dash,
    Silence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Signal {
    pub kind: SignalKind,
    pub duration: Duration,
}

/// Length of one dot at `wpm` words per minute (PARIS timing).
pub fn unit(wpm: u32) -> Duration {
    Duration::from_micros(1_200_000 / u64::from(wpm.max(1)))
}

pub fn clamped_frequency(config: &PlaybackConfig) -> f32 {
    config.frequency_hz.clamp(MIN_FREQUENCY_HZ, MAX_FREQUENCY_HZ)
}

/// Expands canonical Morse (` / ` between words, one space between letters)
/// into tones and silences. A line break is a word gap. Every tone is followed by a one-unit gap; letter
/// and word gaps top that up to three and seven units.
pub fn schedule(morse: &str, config: &PlaybackConfig) -> Vec<Signal> {
    let u = unit(config.wpm);
    let mut signals = Vec::new();
    let trimmed = morse.trim();
    if trimmed.is_empty() {
        return signals;
    }

    let words: Vec<&str> = trimmed
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .flat_map(|line| line.split(" / "))
        .collect();
    for (wi, word) in words.iter().enumerate() {
        let letters: Vec<&str> = word.split(' ').collect();
        for (li, letter) in letters.iter().enumerate() {
            for symbol in letter.chars() {
                let (kind, length) = match symbol {
                    '.' => (SignalKind::Dot, u),
                    '-' => (SignalKind::Dash, u * 3),
                    _ => continue,
                };
                signals.push(Signal { kind, duration: length });
                signals.push(Signal { kind: SignalKind::Silence, duration: u });
            }
            if li + 1 < letters.len() {
                signals.push(Signal { kind: SignalKind::Silence, duration: u * 2 });
            }
        }
        if wi + 1 < words.len() {
            signals.push(Signal { kind: SignalKind::Silence, duration: u * 4 });
        }
    }
    signals
}

pub fn total_duration(signals: &[Signal]) -> Duration {
    signals.iter().map(|s| s.duration).sum()
}
