use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use parla_config::Config;
use parla_core::{LanguageCatalog, LanguageDetector};
use parla_orchestrator::{EventSink, OrchestratorSettings, TranslationOrchestrator};
use parla_speech::{CommandSpeaker, SpeechError, Speaker};
use parla_translator::{DeepLTranslator, TranslateError, Translator};
use tokio::signal;
use tokio_util::sync::CancellationToken;

mod cli;
mod logging;
mod render;

use self::cli::{Cli, Command};

/// Conventional exit status after SIGINT
const EXIT_CANCELLED: u8 = 130;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = dotenvy::dotenv() {
        // A missing .env is the normal case
        if !e.not_found() {
            eprintln!("Ignoring unreadable .env: {e}");
        }
    }

    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e:#}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(&config.logging);

    let cancel = CancellationToken::new();
    let ctrl_c = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if signal::ctrl_c().await.is_ok() {
                tracing::info!("Interrupt received, cancelling");
                cancel.cancel();
            }
        })
    };

    let result = run(cli.command, config, cancel).await;
    ctrl_c.abort();

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    match &cli.config {
        Some(path) => Config::from_file(path).context("Failed to load config"),
        None => Ok(Config::new()),
    }
}

async fn run(
    command: Command,
    config: Config,
    cancel: CancellationToken,
) -> anyhow::Result<ExitCode> {
    match command {
        Command::Detect { text } => {
            let detector = LanguageDetector::new();
            let catalog = LanguageCatalog::new();
            let code = detector.detect_label(&text);
            println!("{code} ({})", render::language_label(&catalog, code));
            Ok(ExitCode::SUCCESS)
        }
        Command::Languages { live } => {
            let catalog = LanguageCatalog::new();
            let languages = if live {
                build_orchestrator(&config)?
                    .supported_languages(&cancel)
                    .await
            } else {
                catalog.default_supported()
            };
            for language in languages {
                println!(
                    "{:<6} {} {}",
                    language.language,
                    catalog.flag(&language.language),
                    language.name
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Translate {
            to,
            from,
            speak,
            strict_length,
            texts,
        } => {
            let limit = config.translator.max_text_length;
            for text in &texts {
                let chars = text.chars().count();
                if chars > limit {
                    if strict_length {
                        anyhow::bail!("Text has {chars} characters, the limit is {limit}");
                    }
                    eprintln!(
                        "Warning: text has {chars} characters, more than the recommended {limit}"
                    );
                }
            }

            let orchestrator = build_orchestrator(&config)?;
            let speaker = speak.then(|| CommandSpeaker::new(&config.speech));

            let source = from.as_deref();
            let speaker = speaker.as_ref();
            if let [text] = texts.as_slice() {
                translate_one(&orchestrator, text, &to, source, speaker, &cancel).await
            } else {
                translate_batch(&orchestrator, &texts, &to, source, speaker, &cancel).await
            }
        }
    }
}

fn build_orchestrator(config: &Config) -> anyhow::Result<TranslationOrchestrator> {
    let translator_config = &config.translator;
    if translator_config.uses_fallback_key() {
        tracing::warn!("DEEPL_API_KEY is not set, using the placeholder key");
    } else if !translator_config.has_plausible_api_key() {
        tracing::warn!("DEEPL_API_KEY does not look like a DeepL key");
    }

    let translator =
        DeepLTranslator::from_config(translator_config).context("Failed to build HTTP client")?;
    tracing::info!(
        provider = %translator.metadata().name,
        url = %translator_config.api_url,
        "Translator ready"
    );

    Ok(TranslationOrchestrator::new(
        Arc::new(translator),
        OrchestratorSettings::from_config(translator_config),
    ))
}

async fn translate_one(
    orchestrator: &TranslationOrchestrator,
    text: &str,
    target: &str,
    source: Option<&str>,
    speaker: Option<&CommandSpeaker>,
    cancel: &CancellationToken,
) -> anyhow::Result<ExitCode> {
    let (events, handle) = orchestrator.spawn_translate(
        text.to_string(),
        target.to_string(),
        source.map(str::to_string),
        cancel,
    );
    let printer = tokio::spawn(render::progress_printer(events));

    let outcome = handle.await.context("Translation task panicked")?;
    // The printer stops at the completion event
    if let Err(e) = printer.await {
        tracing::debug!("Progress printer failed: {e}");
    }

    match outcome {
        Ok(result) => {
            println!("{}", render::result_block(orchestrator.catalog(), None, &result));
            if let Some(speaker) = speaker {
                speak(speaker, &result.translated_text, target, cancel).await;
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(TranslateError::Cancelled) => {
            eprintln!("Translation cancelled");
            Ok(ExitCode::from(EXIT_CANCELLED))
        }
        Err(e) => {
            let hint = if e.is_auth() {
                "\nCheck your DeepL API key and quota."
            } else if matches!(e, TranslateError::Network(_)) {
                "\nCheck your network connection."
            } else {
                ""
            };
            Err(anyhow::anyhow!("{e}{hint}"))
        }
    }
}

async fn translate_batch(
    orchestrator: &TranslationOrchestrator,
    texts: &[String],
    target: &str,
    source: Option<&str>,
    speaker: Option<&CommandSpeaker>,
    cancel: &CancellationToken,
) -> anyhow::Result<ExitCode> {
    let (sink, events) = EventSink::channel();
    let printer = tokio::spawn(async move {
        while let Ok(event) = events.recv().await {
            if let parla_core::TranslationEvent::Progress(progress) = event {
                eprintln!("{}", render::progress_line(&progress));
            }
        }
    });

    let items = orchestrator
        .translate_many(texts, target, source, cancel, &sink)
        .await;
    drop(sink);
    if let Err(e) = printer.await {
        tracing::debug!("Progress printer failed: {e}");
    }

    if cancel.is_cancelled() {
        eprintln!("Translation cancelled");
        return Ok(ExitCode::from(EXIT_CANCELLED));
    }

    let mut failures = 0;
    for item in &items {
        let result = item.to_result();
        println!(
            "{}\n",
            render::result_block(orchestrator.catalog(), Some(&item.original), &result)
        );
        if item.is_error() {
            failures += 1;
        } else if let Some(speaker) = speaker {
            speak(speaker, &result.translated_text, target, cancel).await;
        }
    }

    if failures > 0 {
        tracing::warn!(failures, total = items.len(), "Some texts failed to translate");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Speech failures are reported, never fatal
async fn speak(
    speaker: &CommandSpeaker,
    text: &str,
    language_code: &str,
    cancel: &CancellationToken,
) {
    match speaker.speak(text, language_code, cancel).await {
        Ok(()) => {}
        Err(SpeechError::Cancelled) => tracing::debug!("Speech stopped"),
        Err(e) => {
            tracing::error!("Speech failed: {e}");
            eprintln!("{e}");
        }
    }
}
