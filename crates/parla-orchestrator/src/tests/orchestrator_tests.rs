use std::time::Duration;

use kanal::AsyncReceiver;
use parla_core::{ProgressStage, TranslationEvent, TranslationResult};
use parla_translator::{AuthFailure, TranslateError};
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

use super::mock::{ScriptedTranslator, orchestrator, raw};
use crate::EventSink;

const FAST: Duration = Duration::from_millis(5);

fn drain(rx: &AsyncReceiver<TranslationEvent>) -> Vec<TranslationEvent> {
    let mut events = Vec::new();
    while let Ok(Some(event)) = rx.try_recv() {
        events.push(event);
    }
    events
}

fn completions(events: &[TranslationEvent]) -> Vec<&TranslationResult> {
    events
        .iter()
        .filter_map(|e| match e {
            TranslationEvent::Completed(result) => Some(result),
            _ => None,
        })
        .collect()
}

fn attempt_announcements(events: &[TranslationEvent]) -> Vec<u32> {
    events
        .iter()
        .filter_map(|e| match e {
            TranslationEvent::Progress(p) => match p.stage {
                ProgressStage::Attempt { attempt, .. } => Some(attempt),
                _ => None,
            },
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn explicit_source_equal_to_target_skips_the_network() {
    let (orchestrator, translator) = orchestrator(ScriptedTranslator::echo(None), FAST);
    let (sink, rx) = EventSink::channel();

    let result = orchestrator
        .translate("  Hello there  ", "EN", Some("en"), &CancellationToken::new(), &sink)
        .await
        .unwrap();

    assert!(result.success);
    assert_eq!(result.translated_text, "Hello there");
    assert_eq!(result.detected_language, "EN");
    assert_eq!(translator.calls(), 0);
    assert_eq!(translator.probes(), 0);

    let events = drain(&rx);
    assert!(matches!(
        &events[0],
        TranslationEvent::Progress(p) if p.percent == 100 && p.stage == ProgressStage::Finished
    ));
    assert_eq!(completions(&events), vec![&result]);
}

/// The short-circuit trusts the local heuristic: a confident guess equal to
/// the target skips the provider even without an explicit source.
#[tokio::test]
async fn heuristic_hint_equal_to_target_skips_the_network() {
    let (orchestrator, translator) = orchestrator(ScriptedTranslator::echo(Some("EN")), FAST);

    let result = orchestrator
        .translate(
            "hola buenos días gracias",
            "es",
            None,
            &CancellationToken::new(),
            &EventSink::silent(),
        )
        .await
        .unwrap();

    assert_eq!(result.translated_text, "hola buenos días gracias");
    assert_eq!(result.detected_language, "ES");
    assert_eq!(translator.calls(), 0);
}

#[tokio::test]
async fn heuristic_hint_is_not_sent_as_source() {
    let (orchestrator, translator) = orchestrator(ScriptedTranslator::echo(None), FAST);

    let result = orchestrator
        .translate(
            "hola buenos días gracias",
            "EN",
            None,
            &CancellationToken::new(),
            &EventSink::silent(),
        )
        .await
        .unwrap();

    let requests = translator.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].source(), None);
    assert_eq!(requests[0].target(), "EN");
    // Provider gave no detection, the hint fills in
    assert_eq!(result.detected_language, "ES");
}

#[tokio::test]
async fn provider_detection_wins_over_hint() {
    let (orchestrator, _) = orchestrator(ScriptedTranslator::echo(Some("PT")), FAST);

    let result = orchestrator
        .translate(
            "hola buenos días gracias",
            "EN",
            None,
            &CancellationToken::new(),
            &EventSink::silent(),
        )
        .await
        .unwrap();

    assert_eq!(result.detected_language, "PT");
}

#[tokio::test]
async fn unknown_source_without_detection_is_auto() {
    let (orchestrator, _) = orchestrator(ScriptedTranslator::echo(None), FAST);

    let result = orchestrator
        .translate("xyz 123", "DE", None, &CancellationToken::new(), &EventSink::silent())
        .await
        .unwrap();

    assert_eq!(result.translated_text, "XYZ 123");
    assert_eq!(result.detected_language, "AUTO");
}

#[tokio::test]
async fn explicit_source_is_sent_upper_cased() {
    let (orchestrator, translator) = orchestrator(ScriptedTranslator::echo(None), FAST);

    orchestrator
        .translate("Guten Tag", "fr", Some("de"), &CancellationToken::new(), &EventSink::silent())
        .await
        .unwrap();

    let requests = translator.requests();
    assert_eq!(requests[0].source(), Some("DE"));
    assert_eq!(requests[0].target(), "FR");
}

#[tokio::test]
async fn blank_text_fails_before_any_network_activity() {
    let (orchestrator, translator) = orchestrator(ScriptedTranslator::echo(None), FAST);
    let (sink, rx) = EventSink::channel();

    let err = orchestrator
        .translate("   ", "EN", None, &CancellationToken::new(), &sink)
        .await
        .unwrap_err();

    assert!(matches!(err, TranslateError::InvalidArgument { field: "text", .. }));
    assert_eq!(translator.calls(), 0);
    assert_eq!(translator.probes(), 0);

    let events = drain(&rx);
    let done = completions(&events);
    assert_eq!(done.len(), 1);
    assert!(!done[0].success);
    assert!(done[0].error_message.as_deref().is_some_and(|m| !m.is_empty()));
}

#[tokio::test]
async fn unknown_target_is_rejected() {
    let (orchestrator, translator) = orchestrator(ScriptedTranslator::echo(None), FAST);

    for target in ["", "  ", "KO", "EN-US"] {
        let err = orchestrator
            .translate("hello", target, None, &CancellationToken::new(), &EventSink::silent())
            .await
            .unwrap_err();
        assert!(
            matches!(err, TranslateError::InvalidArgument { field: "target", .. }),
            "{target:?} gave {err:?}"
        );
    }
    assert_eq!(translator.calls(), 0);
}

#[tokio::test]
async fn succeeds_on_third_attempt_after_retryable_failures() {
    let translator = ScriptedTranslator::new(|_, call| match call {
        1 => Err(TranslateError::Network("connection reset".into())),
        2 => Err(TranslateError::RateLimited),
        _ => Ok(raw("Hallo Welt", Some("EN"))),
    });
    let (orchestrator, translator) = orchestrator(translator, FAST);
    let (sink, rx) = EventSink::channel();

    let result = orchestrator
        .translate("hello world", "DE", None, &CancellationToken::new(), &sink)
        .await
        .unwrap();

    assert_eq!(result, TranslationResult::success("Hallo Welt", "EN"));
    assert_eq!(translator.calls(), 3);

    let events = drain(&rx);
    assert_eq!(attempt_announcements(&events), vec![1, 2, 3]);

    let progress: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            TranslationEvent::Progress(p) => Some(p),
            _ => None,
        })
        .collect();
    let last = progress.last().unwrap();
    assert_eq!(last.percent, 100);
    assert_eq!(last.stage, ProgressStage::Finished);
    assert_eq!(progress.iter().filter(|p| p.percent == 100).count(), 1);
    assert!(progress.windows(2).all(|w| w[0].percent <= w[1].percent));

    assert!(matches!(events.last(), Some(TranslationEvent::Completed(r)) if r.success));
    assert_eq!(completions(&events).len(), 1);
}

#[tokio::test]
async fn unauthorized_is_not_retried() {
    let translator =
        ScriptedTranslator::new(|_, _| Err(TranslateError::AuthOrQuota(AuthFailure::InvalidKey)));
    let (orchestrator, translator) = orchestrator(translator, FAST);
    let (sink, rx) = EventSink::channel();

    let err = orchestrator
        .translate("hello", "DE", None, &CancellationToken::new(), &sink)
        .await
        .unwrap_err();

    assert_eq!(err, TranslateError::AuthOrQuota(AuthFailure::InvalidKey));
    assert_eq!(translator.calls(), 1);

    let events = drain(&rx);
    let done = completions(&events);
    assert_eq!(done.len(), 1);
    assert_eq!(
        done[0].error_message.as_deref(),
        Some("Invalid API key or authentication failed")
    );
}

#[tokio::test]
async fn invalid_request_is_not_retried() {
    let translator =
        ScriptedTranslator::new(|_, _| Err(TranslateError::InvalidRequest("bad target".into())));
    let (orchestrator, translator) = orchestrator(translator, FAST);

    let err = orchestrator
        .translate("hello", "DE", None, &CancellationToken::new(), &EventSink::silent())
        .await
        .unwrap_err();

    assert!(matches!(err, TranslateError::InvalidRequest(_)));
    assert_eq!(translator.calls(), 1);
}

#[tokio::test]
async fn exhausted_retries_surface_the_last_error() {
    let translator = ScriptedTranslator::new(|_, call| {
        Err(TranslateError::Api {
            status: 503,
            body: format!("attempt {call}"),
        })
    });
    let (orchestrator, translator) = orchestrator(translator, FAST);
    let (sink, rx) = EventSink::channel();

    let err = orchestrator
        .translate("hello", "DE", None, &CancellationToken::new(), &sink)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        TranslateError::Api {
            status: 503,
            body: "attempt 3".into()
        }
    );
    assert_eq!(translator.calls(), 3);

    let events = drain(&rx);
    assert_eq!(attempt_announcements(&events), vec![1, 2, 3]);
    assert!(events.iter().all(|e| match e {
        TranslationEvent::Progress(p) => p.percent < 100,
        TranslationEvent::Completed(r) => !r.success,
    }));
}

#[tokio::test]
async fn cancel_during_backoff_returns_cancelled_promptly() {
    let translator = ScriptedTranslator::new(|_, _| Err(TranslateError::Network("down".into())));
    let (orchestrator, translator) = orchestrator(translator, Duration::from_secs(10));
    let cancel = CancellationToken::new();

    let (rx, handle) =
        orchestrator.spawn_translate("hello".into(), "DE".into(), None, &cancel);

    while translator.calls() < 1 {
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    cancel.cancel();

    let result = timeout(Duration::from_secs(2), handle)
        .await
        .expect("cancellation should end the backoff early")
        .unwrap();

    assert_eq!(result, Err(TranslateError::Cancelled));
    assert_eq!(translator.calls(), 1);

    let events = drain(&rx);
    let done = completions(&events);
    assert_eq!(done.len(), 1);
    assert_eq!(
        done[0].error_message.as_deref(),
        Some("Operation cancelled by the user")
    );
}

#[tokio::test]
async fn cancel_during_request_returns_cancelled() {
    let translator = ScriptedTranslator::echo(None).with_latency(Duration::from_secs(10));
    let (orchestrator, translator) = orchestrator(translator, FAST);
    let cancel = CancellationToken::new();

    let (_rx, handle) = orchestrator.spawn_translate("hello".into(), "DE".into(), None, &cancel);

    while translator.calls() < 1 {
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    cancel.cancel();

    let result = timeout(Duration::from_secs(2), handle).await.unwrap().unwrap();
    assert!(result.unwrap_err().is_cancelled());
}

#[tokio::test]
async fn new_call_cancels_the_previous_one() {
    let translator = ScriptedTranslator::echo(None).with_latency(Duration::from_millis(300));
    let (orchestrator, translator) = orchestrator(translator, FAST);
    let cancel = CancellationToken::new();

    let (_rx, first) = orchestrator.spawn_translate("first".into(), "DE".into(), None, &cancel);
    while translator.calls() < 1 {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let second = orchestrator
        .translate("second", "DE", None, &cancel, &EventSink::silent())
        .await
        .unwrap();

    let first = timeout(Duration::from_secs(2), first).await.unwrap().unwrap();
    assert_eq!(first, Err(TranslateError::Cancelled));
    assert_eq!(second.translated_text, "SECOND");
    assert!(!cancel.is_cancelled(), "caller token must stay untouched");
}

#[tokio::test]
async fn probe_failure_does_not_block_translation() {
    let translator = ScriptedTranslator::echo(Some("EN"))
        .with_probe_error(TranslateError::Network("dns failure".into()));
    let (orchestrator, translator) = orchestrator(translator, FAST);

    let result = orchestrator
        .translate("hello", "DE", None, &CancellationToken::new(), &EventSink::silent())
        .await
        .unwrap();

    assert_eq!(result.translated_text, "HELLO");
    assert_eq!(translator.probes(), 1);
    assert_eq!(translator.calls(), 1);
}

#[tokio::test]
async fn event_stream_ends_with_single_completion() {
    let (orchestrator, _) = orchestrator(ScriptedTranslator::echo(Some("EN")), FAST);

    let (rx, handle) = orchestrator.spawn_translate(
        "good morning".into(),
        "ES".into(),
        None,
        &CancellationToken::new(),
    );
    let result = handle.await.unwrap().unwrap();

    let mut events = Vec::new();
    while let Ok(event) = timeout(Duration::from_secs(1), rx.recv()).await {
        match event {
            Ok(event) => events.push(event),
            Err(_) => break,
        }
    }

    assert!(events.len() >= 2);
    assert_eq!(events.last(), Some(&TranslationEvent::Completed(result)));
    assert_eq!(completions(&events).len(), 1);
}

#[tokio::test]
async fn supported_languages_fall_back_to_catalog() {
    let (orchestrator, _) = orchestrator(ScriptedTranslator::echo(None), FAST);

    let languages = orchestrator
        .supported_languages(&CancellationToken::new())
        .await;

    let codes: Vec<_> = languages.iter().map(|l| l.language.as_str()).collect();
    assert_eq!(codes, ["EN", "ES", "FR", "DE", "IT", "PT", "RU", "JA", "ZH"]);
}
