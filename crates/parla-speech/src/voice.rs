/// Voice locale for a provider language code. Unknown codes get `en-US`.
pub fn voice_for(language_code: &str) -> &'static str {
    match language_code.trim().to_uppercase().as_str() {
        "EN" | "EN-US" => "en-US",
        "EN-GB" => "en-GB",
        "ES" => "es-ES",
        "FR" => "fr-FR",
        "DE" => "de-DE",
        "IT" => "it-IT",
        "PT" | "PT-PT" => "pt-PT",
        "PT-BR" => "pt-BR",
        "RU" => "ru-RU",
        "JA" => "ja-JP",
        "ZH" => "zh-CN",
        _ => "en-US",
    }
}
