// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod history;
pub mod keyer;
pub mod persistence;
pub mod playback;
pub mod c_api;
#[cfg(feature = "cli")]
pub mod trace_init;

pub use crate::core::converter::{decode, decode_report, encode, encode_report};
pub use crate::core::detector::detect_direction;
pub use crate::core::engine::{translate_auto, MorseEngine};
pub use crate::core::normalizer::normalize;
pub use crate::core::segmenter::decode_continuous;
pub use crate::core::types::{Direction, Translation, TranslationResult};
pub use crate::error::{MorseError, Result};
