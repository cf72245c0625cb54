// src/core/mod.rs

pub mod converter;
pub mod detector;
pub mod engine;
pub mod normalizer;
pub mod segmenter;
pub mod table;
pub mod trie;
pub mod types;
