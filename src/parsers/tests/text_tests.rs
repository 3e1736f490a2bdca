use crate::parsers::text::{clean_fragments, clean_text, is_substantial};

#[test]
fn test_clean_text_collapses_mixed_whitespace() {
    assert_eq!(clean_text("  Hello,\t\tworld \n\n again  "), "Hello, world again");
    assert_eq!(clean_text("a\u{00a0}\u{00a0}b"), "a b");
}

#[test]
fn test_clean_text_is_idempotent() {
    let samples = ["Already clean", "  messy \n text\t", "", "   "];
    for sample in samples {
        let once = clean_text(sample);
        assert_eq!(clean_text(&once), once, "cleaning {:?} twice changed it", sample);
    }
}

#[test]
fn test_clean_text_whitespace_only_is_empty() {
    assert_eq!(clean_text(" \n\t "), "");
}

#[test]
fn test_clean_fragments_concatenates_without_separator() {
    assert_eq!(clean_fragments(["Hello ", "wor", "ld\n"]), "Hello world");
}

#[test]
fn test_substantial_boundary_is_strict() {
    let fifty = "a".repeat(50);
    let fifty_one = "a".repeat(51);
    assert!(!is_substantial(&fifty, 50));
    assert!(is_substantial(&fifty_one, 50));
}

#[test]
fn test_substantial_counts_characters_not_bytes() {
    // 50 two-byte characters
    let text = "é".repeat(50);
    assert_eq!(text.len(), 100);
    assert!(!is_substantial(&text, 50));
}
