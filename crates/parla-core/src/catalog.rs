use crate::types::SupportedLanguage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
}

const FALLBACK_FLAG: &str = "🌐";

static LANGUAGES: [LanguageInfo; 9] = [
    LanguageInfo { code: "EN", name: "English", flag: "🇺🇸" },
    LanguageInfo { code: "ES", name: "Spanish", flag: "🇪🇸" },
    LanguageInfo { code: "FR", name: "French", flag: "🇫🇷" },
    LanguageInfo { code: "DE", name: "German", flag: "🇩🇪" },
    LanguageInfo { code: "IT", name: "Italian", flag: "🇮🇹" },
    LanguageInfo { code: "PT", name: "Portuguese", flag: "🇵🇹" },
    LanguageInfo { code: "RU", name: "Russian", flag: "🇷🇺" },
    LanguageInfo { code: "JA", name: "Japanese", flag: "🇯🇵" },
    LanguageInfo { code: "ZH", name: "Chinese", flag: "🇨🇳" },
];

/// Static table of the languages the app validates targets against.
#[derive(Debug, Clone, Copy)]
pub struct LanguageCatalog {
    entries: &'static [LanguageInfo],
}

impl LanguageCatalog {
    pub const fn new() -> Self {
        Self {
            entries: &LANGUAGES,
        }
    }

    pub fn entries(&self) -> &'static [LanguageInfo] {
        self.entries
    }

    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|l| l.code)
    }

    /// Exact (case-insensitive) membership, used for validation
    pub fn contains(&self, code: &str) -> bool {
        let code = code.trim();
        self.entries
            .iter()
            .any(|l| l.code.eq_ignore_ascii_case(code))
    }

    /// Display lookup. Regional variants resolve to their base language.
    pub fn get(&self, code: &str) -> Option<&'static LanguageInfo> {
        let code = code.trim();
        let base = code.split('-').next().unwrap_or(code);
        self.entries
            .iter()
            .find(|l| l.code.eq_ignore_ascii_case(code))
            .or_else(|| self.entries.iter().find(|l| l.code.eq_ignore_ascii_case(base)))
    }

    pub fn name(&self, code: &str) -> String {
        self.get(code)
            .map(|l| l.name.to_string())
            .unwrap_or_else(|| code.to_string())
    }

    pub fn flag(&self, code: &str) -> &'static str {
        self.get(code).map(|l| l.flag).unwrap_or(FALLBACK_FLAG)
    }

    /// Used when the provider's live list cannot be fetched
    pub fn default_supported(&self) -> Vec<SupportedLanguage> {
        self.entries
            .iter()
            .map(|l| SupportedLanguage {
                language: l.code.to_string(),
                name: l.name.to_string(),
                supports_formality: false,
            })
            .collect()
    }
}

impl Default for LanguageCatalog {
    fn default() -> Self {
        Self::new()
    }
}
