// File: src/core/normalizer.rs
//! Canonicalization of raw input into the `.` `-` `/` space newline alphabet.

/// Structural symbols kept by [`sanitize`].
fn is_structural(c: char) -> bool {
    matches!(c, '.' | '-' | '/' | ' ' | '\n')
}

pub fn is_signal(c: char) -> bool {
    c == '.' || c == '-'
}

/// Maps one unicode variant onto its canonical spelling, if it has one.
fn canonical_variant(c: char) -> Option<&'static str> {
    match c {
        // Bullets and middle dots
        '•' | '·' | '∙' | '◦' | '∘' | '⋅' | '．' => Some("."),
        // Hyphen, dash and minus variants
        '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2015}'
        | '\u{2212}' | '\u{FE58}' | '\u{FE63}' | '\u{FF0D}' => Some("-"),
        '…' => Some("..."),
        '|' | '／' => Some(" / "),
        _ => None,
    }
}

/// Canonicalizes `text`. Total and idempotent.
///
/// Each line has its whitespace runs collapsed to one space and is trimmed;
/// line structure is kept so multi-line input round-trips, but leading and
/// trailing blank lines are dropped.
pub fn normalize(text: &str) -> String {
    let mut mapped = String::with_capacity(text.len());
    for c in text.chars() {
        match canonical_variant(c) {
            Some(rep) => mapped.push_str(rep),
            None => mapped.push(c),
        }
    }

    let lines: Vec<String> = mapped
        .split('\n')
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect();
    lines.join("\n").trim_matches('\n').to_string()
}

/// Drops every character that is not a dot, dash, slash, space or newline.
pub fn sanitize(text: &str) -> String {
    text.chars().filter(|&c| is_structural(c)).collect()
}

/// Count of non-whitespace characters.
pub(crate) fn visible_len(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn maps_dot_variants() {
        assert_eq!(normalize("•·∙◦∘"), ".....");
    }

    #[test]
    fn maps_dash_variants() {
        assert_eq!(normalize("–—−－"), "----");
    }

    #[test]
    fn expands_ellipsis() {
        assert_eq!(normalize("…"), "...");
        assert_eq!(normalize("… —"), "... -");
    }

    #[test]
    fn bar_becomes_word_separator() {
        assert_eq!(normalize("...|---"), "... / ---");
        assert_eq!(normalize("... | ---"), "... / ---");
    }

    #[test]
    fn collapses_and_trims_whitespace() {
        assert_eq!(normalize("  hello \t  world  "), "hello world");
        assert_eq!(normalize("\n\na  b\r\nc\n\n"), "a b\nc");
    }

    #[test]
    fn keeps_inner_blank_lines() {
        assert_eq!(normalize("a\n\nb"), "a\n\nb");
    }

    #[test]
    fn empty_and_blank_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t "), "");
    }

    #[test]
    fn sanitize_keeps_structure_only() {
        assert_eq!(sanitize("SOS .. .. --"), " .. .. --");
        assert_eq!(sanitize("a.b-c/d\ne"), ".-/\n");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(s in "\\PC{0,40}") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn normalize_is_idempotent_on_morse_like(s in "[.\\-/ \n\t•—…|a-z]{0,40}") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }
    }
}
