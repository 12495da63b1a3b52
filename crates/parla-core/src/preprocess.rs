use unicode_normalization::UnicodeNormalization;

/// Canonical form used for scoring: NFC, lower-case, trimmed.
///
/// NFC keeps decomposed input (`e` + combining acute) comparable with the
/// precomposed characters in the pattern tables.
pub fn normalize(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }

    text.nfc().collect::<String>().to_lowercase()
}

/// Space-separated words with a leading and trailing space, so that
/// `" word "` matches whole words at either end of the text.
pub fn padded_words(normalized: &str) -> String {
    let mut out = String::with_capacity(normalized.len() + 2);
    out.push(' ');
    for word in normalized
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
    {
        out.push_str(word);
        out.push(' ');
    }
    out
}
