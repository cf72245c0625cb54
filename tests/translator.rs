use morse_core::core::table;
use morse_core::{
    decode, decode_continuous, detect_direction, encode, normalize, translate_auto, Direction,
    TranslationResult,
};

#[test]
fn every_supported_character_decodes_to_its_uppercase() {
    for (c, _) in table::entries() {
        let lower: String = c.to_lowercase().collect();
        assert_eq!(decode(&encode(&lower)), c.to_string(), "character {c}");
    }
}

#[test]
fn sos_scenario() {
    let morse = encode("SOS");
    assert_eq!(morse, "... --- ...");
    assert_eq!(decode(&morse), "SOS");
}

#[test]
fn detector_examples() {
    assert_eq!(detect_direction("HELLO"), Direction::English);
    assert_eq!(detect_direction(".... . .-.. .-.. ---"), Direction::Morse);
    assert_eq!(detect_direction("SOS .. .. --"), Direction::English);
}

#[test]
fn period_code() {
    assert_eq!(decode(".-.-.-"), ".");
}

#[test]
fn segmenter_is_longest_match_first() {
    assert_eq!(decode_continuous("...---..."), "3B");
    assert_eq!(decode_continuous("...---..."), decode_continuous("...---..."));
}

#[test]
fn empty_input_everywhere() {
    assert_eq!(encode(""), "");
    assert_eq!(decode(""), "");
    assert_eq!(normalize(""), "");
    assert_eq!(decode_continuous(""), "");
    assert_eq!(detect_direction(""), Direction::English);
    assert_eq!(translate_auto(""), TranslationResult::empty());
}

#[test]
fn auto_translation_serializes_for_history() {
    let result = translate_auto("Hello World");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["direction"], "english");
    assert_eq!(json["morse"], ".... . .-.. .-.. --- / .-- --- .-. .-.. -..");
    assert_eq!(json["continuous"], false);
}
