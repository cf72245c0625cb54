// File: src/core/table.rs
use std::collections::HashMap;
use std::sync::OnceLock;

/// Every supported character and its Morse pattern, in lesson order.
/// Letters are stored uppercase; lookups fold ASCII case first.
const CODE_TABLE: &[(char, &str)] = &[
    ('A', ".-"), ('B', "-..."), ('C', "-.-."), ('D', "-.."), ('E', "."),
    ('F', "..-."), ('G', "--."), ('H', "...."), ('I', ".."), ('J', ".---"),
    ('K', "-.-"), ('L', ".-.."), ('M', "--"), ('N', "-."), ('O', "---"),
    ('P', ".--."), ('Q', "--.-"), ('R', ".-."), ('S', "..."), ('T', "-"),
    ('U', "..-"), ('V', "...-"), ('W', ".--"), ('X', "-..-"), ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"), ('1', ".----"), ('2', "..---"), ('3', "...--"), ('4', "....-"),
    ('5', "....."), ('6', "-...."), ('7', "--..."), ('8', "---.."), ('9', "----."),
    ('.', ".-.-.-"), (',', "--..--"), ('?', "..--.."), ('\'', ".----."),
    ('!', "-.-.--"), ('/', "-..-."), ('(', "-.--."), (')', "-.--.-"),
    ('&', ".-..."), (':', "---..."), (';', "-.-.-."), ('=', "-...-"),
    ('+', ".-.-."), ('-', "-....-"), ('_', "..--.-"), ('"', ".-..-."),
    ('$', "...-..-"), ('@', ".--.-."), ('¿', "..-.-"), ('¡', "--...-"),
];

struct Tables {
    forward: HashMap<char, &'static str>,
    reverse: HashMap<&'static str, char>,
    max_pattern_len: usize,
}

fn tables() -> &'static Tables {
    static INSTANCE: OnceLock<Tables> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let forward: HashMap<char, &'static str> = CODE_TABLE.iter().copied().collect();
        let reverse: HashMap<&'static str, char> =
            CODE_TABLE.iter().map(|&(c, p)| (p, c)).collect();
        let max_pattern_len = CODE_TABLE.iter().map(|(_, p)| p.len()).max().unwrap_or(0);
        Tables { forward, reverse, max_pattern_len }
    })
}

/// Pattern for a character, folding ASCII letters to uppercase.
pub fn encode_of(c: char) -> Option<&'static str> {
    tables().forward.get(&c.to_ascii_uppercase()).copied()
}

/// Character for an exact pattern.
pub fn decode_of(pattern: &str) -> Option<char> {
    tables().reverse.get(pattern).copied()
}

/// Length of the longest pattern in the table; bounds the segmenter window.
pub fn max_pattern_len() -> usize {
    tables().max_pattern_len
}

/// All (character, pattern) pairs in lesson order.
pub fn entries() -> impl Iterator<Item = (char, &'static str)> {
    CODE_TABLE.iter().copied()
}
