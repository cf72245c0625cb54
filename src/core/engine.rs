use crate::config::{Preferences, TranslatorConfig};
use crate::core::converter::MorseConverter;
use crate::core::detector::detect_direction_with;
use crate::core::normalizer::{normalize, sanitize};
use crate::core::segmenter::{is_continuous, segment};
use crate::core::trie::PatternTrie;
use crate::core::types::{Direction, Translation, TranslationResult};
use crate::error::Result;
use crate::history::{HistoryRecord, HistoryStore};
use crate::persistence::{load_history, save_history};
use std::path::{Path, PathBuf};

/// Detects the direction of `text` and produces both sides with the default
/// configuration.
pub fn translate_auto(text: &str) -> TranslationResult {
    translate_auto_with(text, &TranslatorConfig::default())
}

pub fn translate_auto_with(text: &str, config: &TranslatorConfig) -> TranslationResult {
    if text.trim().is_empty() {
        return TranslationResult::empty();
    }

    let converter = MorseConverter::new(config);
    let direction = detect_direction_with(text, config.ratio_threshold);
    let original = text.trim();

    match direction {
        Direction::Morse => {
            let morse = normalize(&sanitize(&normalize(text)));
            let continuous = is_continuous(&morse);
            let (english, invalid) = if continuous {
                let english = segment(morse.as_bytes(), PatternTrie::global(), config.placeholder);
                (english, Vec::new())
            } else {
                let decoded = converter.decode(&morse);
                (decoded.output, decoded.invalid)
            };
            tracing::debug!(continuous, invalid = invalid.len(), "decoded morse input");
            TranslationResult {
                direction,
                changed: morse != original,
                english,
                morse,
                continuous,
                invalid,
            }
        }
        Direction::English => {
            let english = normalize(text);
            let encoded = converter.encode(&english);
            tracing::debug!(invalid = encoded.invalid.len(), "encoded text input");
            TranslationResult {
                direction,
                changed: english != original,
                english,
                morse: encoded.output,
                continuous: false,
                invalid: encoded.invalid,
            }
        }
    }
}

/// The translator as a front end sees it: configuration, converter and the
/// committed-translation history.
pub struct MorseEngine {
    translator: TranslatorConfig,
    converter: MorseConverter,
    pub history: HistoryStore,
    history_path: Option<PathBuf>,
}

impl MorseEngine {
    pub fn new(prefs: &Preferences) -> Self {
        Self {
            translator: prefs.translator.clone(),
            converter: MorseConverter::new(&prefs.translator),
            history: HistoryStore::new(&prefs.history),
            history_path: None,
        }
    }

    /// Opens the history at `path`; an unreadable file starts a fresh history.
    pub fn from_file_or_new(path: &Path, prefs: &Preferences) -> Self {
        let mut engine = Self::new(prefs);
        match load_history(path, &prefs.history) {
            Ok(history) => engine.history = history,
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "starting with empty history"),
        }
        engine.history_path = Some(path.to_path_buf());
        engine
    }

    pub fn translate(&self, text: &str) -> TranslationResult {
        translate_auto_with(text, &self.translator)
    }

    pub fn encode(&self, text: &str) -> Translation {
        self.converter.encode(text)
    }

    pub fn decode(&self, morse: &str) -> Translation {
        self.converter.decode(morse)
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.translator
    }

    /// Records `input` and the side the user did not type.
    pub fn commit(&mut self, input: &str, result: &TranslationResult) -> Option<&HistoryRecord> {
        if input.trim().is_empty() {
            return None;
        }
        Some(self.history.add(input, result.output()))
    }

    pub fn save_history(&self) -> Result<()> {
        if let Some(path) = &self.history_path {
            save_history(&self.history, path)
        } else {
            Ok(()) // Don't error if no path is set
        }
    }
}

impl Default for MorseEngine {
    fn default() -> Self {
        Self::new(&Preferences::default())
    }
}
