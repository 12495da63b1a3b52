use crate::patterns::{LanguagePattern, PATTERNS};
use crate::preprocess;
use crate::types::AUTO;

const COMMON_WORD_WEIGHT: u32 = 3;
const SPECIFIC_WORD_WEIGHT: u32 = 5;
const SPECIAL_CHAR_WEIGHT: u32 = 2;
const SUFFIX_WEIGHT: u32 = 1;

/// Best-effort source language guess from lexical markers.
///
/// Pure function of the static pattern table and the input. The result is a
/// hint, never an authoritative answer.
#[derive(Debug, Clone, Copy)]
pub struct LanguageDetector {
    patterns: &'static [LanguagePattern],
    min_score: u32,
}

impl LanguageDetector {
    pub const fn new() -> Self {
        Self {
            patterns: PATTERNS,
            min_score: 1,
        }
    }

    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.patterns.iter().map(|p| p.code)
    }

    /// Score per language, in table order
    pub fn scores(&self, text: &str) -> Vec<(&'static str, u32)> {
        let normalized = preprocess::normalize(text);
        if normalized.is_empty() {
            return self.patterns.iter().map(|p| (p.code, 0)).collect();
        }
        let words = preprocess::padded_words(&normalized);

        self.patterns
            .iter()
            .map(|p| (p.code, score(p, &normalized, &words)))
            .collect()
    }

    /// Highest scoring language, `None` when nothing reaches the threshold.
    /// Ties go to the language listed first in the table.
    pub fn detect(&self, text: &str) -> Option<&'static str> {
        let mut best: Option<(&'static str, u32)> = None;
        for (code, score) in self.scores(text) {
            if score < self.min_score {
                continue;
            }
            if best.is_none_or(|(_, top)| score > top) {
                best = Some((code, score));
            }
        }
        best.map(|(code, _)| code)
    }

    /// Like [`detect`](Self::detect) but returns `"AUTO"` when undecided
    pub fn detect_label(&self, text: &str) -> &'static str {
        self.detect(text).unwrap_or(AUTO)
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}

fn contains_word(pattern: &LanguagePattern, normalized: &str, words: &str, word: &str) -> bool {
    if pattern.spaced {
        words.contains(&format!(" {word} "))
    } else {
        normalized.contains(word)
    }
}

fn score(pattern: &LanguagePattern, normalized: &str, words: &str) -> u32 {
    let count_words = |list: &[&str]| {
        list.iter()
            .filter(|w| contains_word(pattern, normalized, words, w))
            .count() as u32
    };

    let common = count_words(pattern.common_words);
    let specific = count_words(pattern.specific_words);
    let chars = pattern
        .special_chars
        .iter()
        .filter(|c| normalized.contains(**c))
        .count() as u32;
    let suffixes = pattern
        .suffixes
        .iter()
        .filter(|s| normalized.contains(**s))
        .count() as u32;

    common * COMMON_WORD_WEIGHT
        + specific * SPECIFIC_WORD_WEIGHT
        + chars * SPECIAL_CHAR_WEIGHT
        + suffixes * SUFFIX_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LanguageCatalog;

    #[test]
    fn spanish_greeting() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect_label("hola buenos días gracias"), "ES");
        assert_eq!(detector.detect_label("¡Hola! ¿Cómo estás, amigo?"), "ES");
    }

    #[test]
    fn no_markers_is_auto() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect_label("xyz 123"), AUTO);
        assert_eq!(detector.detect("xyz 123"), None);
    }

    #[test]
    fn blank_input_is_auto() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect_label(""), AUTO);
        assert_eq!(detector.detect_label("  \n\t "), AUTO);
    }

    #[test]
    fn common_languages() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect("Guten Tag, danke schön"), Some("DE"));
        assert_eq!(detector.detect("Bonjour, merci beaucoup mon ami"), Some("FR"));
        assert_eq!(detector.detect("привет как дела"), Some("RU"));
        assert_eq!(detector.detect("The house is very good"), Some("EN"));
        assert_eq!(detector.detect("Ciao, grazie mille"), Some("IT"));
        assert_eq!(detector.detect("Olá, obrigado pela ajuda"), Some("PT"));
    }

    #[test]
    fn unspaced_scripts() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect("こんにちは、元気ですか"), Some("JA"));
        assert_eq!(detector.detect("你好，这是我的书"), Some("ZH"));
    }

    #[test]
    fn common_words_match_whole_words_only() {
        let detector = LanguageDetector::new();
        // "el" inside "hello" must not count for Spanish
        let scores = detector.scores("hello");
        let es = scores.iter().find(|(c, _)| *c == "ES").unwrap().1;
        assert_eq!(es, 0);
    }

    #[test]
    fn decomposed_accents_are_recognized() {
        let detector = LanguageDetector::new();
        assert_eq!(detector.detect("adio\u{0301}s"), Some("ES"));
    }

    #[test]
    fn ties_go_to_table_order() {
        // "casa" scores 5 for ES, IT and PT alike; ES is listed first.
        let detector = LanguageDetector::new();
        let scores = detector.scores("casa");
        let score_of = |code| scores.iter().find(|(c, _)| *c == code).unwrap().1;
        assert_eq!(score_of("ES"), score_of("IT"));
        assert_eq!(score_of("ES"), score_of("PT"));
        assert_eq!(detector.detect("casa"), Some("ES"));
    }

    #[test]
    fn detector_codes_match_catalog() {
        let catalog = LanguageCatalog::new();
        let detector = LanguageDetector::new();

        let mut detected: Vec<_> = detector.codes().collect();
        let mut listed: Vec<_> = catalog.codes().collect();
        detected.sort_unstable();
        listed.sort_unstable();
        assert_eq!(detected, listed);
    }
}
