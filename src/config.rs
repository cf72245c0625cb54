// File: src/config.rs
//! Explicitly passed configuration. Nothing here is global; callers load a
//! [`Preferences`] value and hand the relevant section to each component.

use crate::core::detector::DEFAULT_RATIO_THRESHOLD;
use crate::error::{MorseError, Result};
use crate::persistence::write_atomically;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// What to emit for a character or pattern that has no mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownPolicy {
    /// Emit the placeholder and report the token.
    Placeholder,
    /// Omit the token from the output; it is still reported.
    Drop,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    pub ratio_threshold: f64,
    pub unknown: UnknownPolicy,
    pub placeholder: char,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            ratio_threshold: DEFAULT_RATIO_THRESHOLD,
            unknown: UnknownPolicy::Placeholder,
            placeholder: '?',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneStyle {
    Sine,
    Square,
    Triangle,
    Saw,
    Chime,
    Buzz,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    pub wpm: u32,
    pub frequency_hz: f32,
    pub tone: ToneStyle,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self { wpm: 15, frequency_hz: 600.0, tone: ToneStyle::Sine }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { capacity: 10 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub translator: TranslatorConfig,
    pub playback: PlaybackConfig,
    pub history: HistoryConfig,
}

impl Preferences {
    pub fn from_json(json: &str) -> Result<Self> {
        let prefs: Preferences = serde_json::from_str(json)?;
        prefs.validate()?;
        Ok(prefs)
    }

    /// Loads preferences, falling back to defaults when the file is missing.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let json = serde_json::to_vec_pretty(self)?;
        write_atomically(path, &json)
    }

    pub fn validate(&self) -> Result<()> {
        let t = &self.translator;
        if !(t.ratio_threshold > 0.0 && t.ratio_threshold <= 1.0) {
            return Err(invalid("translator.ratio_threshold", "must be in (0, 1]"));
        }
        if matches!(t.placeholder, '.' | '-' | '/') || t.placeholder.is_whitespace() {
            return Err(invalid(
                "translator.placeholder",
                "must not be a Morse symbol or whitespace",
            ));
        }
        if !(1..=60).contains(&self.playback.wpm) {
            return Err(invalid("playback.wpm", "must be between 1 and 60"));
        }
        if !self.playback.frequency_hz.is_finite() || self.playback.frequency_hz <= 0.0 {
            return Err(invalid("playback.frequency_hz", "must be positive"));
        }
        if self.history.capacity == 0 {
            return Err(invalid("history.capacity", "must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> MorseError {
    MorseError::InvalidConfig {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
