use kanal::AsyncReceiver;
use parla_core::{AUTO, LanguageCatalog, ProgressEvent, TranslationEvent, TranslationResult};

/// Print progress lines to stderr until the call's completion arrives
pub async fn progress_printer(events: AsyncReceiver<TranslationEvent>) {
    while let Ok(event) = events.recv().await {
        match event {
            TranslationEvent::Progress(progress) => eprintln!("{}", progress_line(&progress)),
            TranslationEvent::Completed(_) => break,
        }
    }
}

pub fn progress_line(progress: &ProgressEvent) -> String {
    format!("[{:>3}%] {}", progress.percent, progress.message)
}

/// Human readable detected-language label, e.g. `🇪🇸 Spanish`
pub fn language_label(catalog: &LanguageCatalog, code: &str) -> String {
    if code.is_empty() || code.eq_ignore_ascii_case(AUTO) {
        return "🌐 Auto-detected".to_string();
    }
    format!("{} {}", catalog.flag(code), catalog.name(code))
}

pub fn result_block(
    catalog: &LanguageCatalog,
    original: Option<&str>,
    result: &TranslationResult,
) -> String {
    let mut out = String::new();
    if let Some(original) = original {
        out.push_str(&format!("> {original}\n"));
    }
    if result.success {
        out.push_str(&format!(
            "{}\n  ({})",
            result.translated_text,
            language_label(catalog, &result.detected_language)
        ));
    } else {
        out.push_str(&format!(
            "Error: {}",
            result.error_message.as_deref().unwrap_or("unknown error")
        ));
    }
    out
}
