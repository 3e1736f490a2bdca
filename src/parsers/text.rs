/// Collapse every run of whitespace to a single space and trim both ends.
///
/// Idempotent: cleaning already-clean text returns it unchanged.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Clean the concatenated text nodes of an element
pub fn clean_fragments<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    clean_text(&fragments.into_iter().collect::<String>())
}

/// Length of cleaned text in characters, not bytes
fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Whether a cleaned paragraph is long enough to keep (strictly longer than `min_chars`)
pub fn is_substantial(text: &str, min_chars: usize) -> bool {
    char_len(text) > min_chars
}
