pub mod catalog;
pub mod detect;
pub mod patterns;
pub mod preprocess;
pub mod types;

pub use catalog::{LanguageCatalog, LanguageInfo};
pub use detect::LanguageDetector;
pub use types::{
    AUTO, LanguageCode, ProgressEvent, ProgressStage, SupportedLanguage, TranslationEvent,
    TranslationRequest, TranslationResult,
};
