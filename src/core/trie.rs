// --- File: src/core/trie.rs
use crate::core::table;
use std::collections::HashMap;
use std::sync::OnceLock;

#[derive(Clone, Debug)]
struct PatternNode {
    children: HashMap<u8, usize>,
    symbol: Option<char>,
}

impl PatternNode {
    fn new() -> Self {
        Self { children: HashMap::new(), symbol: None }
    }
}

/// A byte trie over Morse patterns. Walking it from a cursor finds every
/// pattern that starts there in one pass.
#[derive(Clone, Debug)]
pub struct PatternTrie {
    nodes: Vec<PatternNode>,
}

impl PatternTrie {
    pub fn new() -> Self {
        Self { nodes: vec![PatternNode::new()] }
    }

    /// The trie built from the fixed code table.
    pub fn global() -> &'static PatternTrie {
        static INSTANCE: OnceLock<PatternTrie> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let mut trie = PatternTrie::new();
            for (symbol, pattern) in table::entries() {
                trie.insert(pattern, symbol);
            }
            trie
        })
    }

    /// O(k) where k is the pattern length.
    pub fn insert(&mut self, pattern: &str, symbol: char) {
        let mut node_idx = 0;
        for &byte in pattern.as_bytes() {
            node_idx = if let Some(&id) = self.nodes[node_idx].children.get(&byte) {
                id
            } else {
                let new_node_id = self.nodes.len();
                self.nodes.push(PatternNode::new());
                self.nodes[node_idx].children.insert(byte, new_node_id);
                new_node_id
            };
        }
        self.nodes[node_idx].symbol = Some(symbol);
    }

    /// Longest pattern that is a prefix of `symbols`, with its length in bytes.
    /// The walk stops as soon as no pattern continues, so its cost is bounded
    /// by the longest pattern in the trie.
    pub fn longest_match(&self, symbols: &[u8]) -> Option<(char, usize)> {
        let mut node_idx = 0;
        let mut best = None;
        for (depth, byte) in symbols.iter().enumerate() {
            match self.nodes[node_idx].children.get(byte) {
                Some(&next_idx) => node_idx = next_idx,
                None => break,
            }
            if let Some(c) = self.nodes[node_idx].symbol {
                best = Some((c, depth + 1));
            }
        }
        best
    }
}

impl Default for PatternTrie {
    fn default() -> Self {
        Self::new()
    }
}
