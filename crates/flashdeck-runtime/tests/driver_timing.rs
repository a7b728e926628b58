//! Timing behavior of the session driver under a paused tokio clock.

use std::sync::Arc;
use std::time::Duration;

use flashdeck_core::testing::{RecordingSpeech, RecordingStore, SpeechCall};
use flashdeck_core::{
    DeckStore, Face, Level, SessionCommand, SessionEngine, SessionError, SessionEvent,
    SessionPorts, StopReason, StudyConfig, VocabCard,
};
use flashdeck_runtime::{RuntimeError, StudySession, StudySessionHandle};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::time::{Instant, sleep};

struct Harness {
    handle: StudySessionHandle,
    events: UnboundedReceiver<SessionEvent>,
    speech: Arc<RecordingSpeech>,
}

fn deck() -> DeckStore {
    DeckStore::from_cards(vec![
        VocabCard::new("사과", "apple", Level::Beginner),
        VocabCard::new("물", "water", Level::Beginner),
        VocabCard::new("책", "book", Level::Beginner),
    ])
}

fn start(deck: DeckStore, config: StudyConfig) -> Harness {
    let speech = Arc::new(RecordingSpeech::new());
    let ports = SessionPorts::new(Arc::new(RecordingStore::new()), speech.clone());
    let engine = SessionEngine::new(deck, ports, config);
    let (handle, events) = StudySession::spawn(engine);
    Harness {
        handle,
        events,
        speech,
    }
}

fn drain(events: &mut UnboundedReceiver<SessionEvent>) -> Vec<SessionEvent> {
    let mut out = Vec::new();
    while let Ok(event) = events.try_recv() {
        out.push(event);
    }
    out
}

#[tokio::test(start_paused = true)]
async fn test_autoplay_follows_configured_durations() {
    let config = StudyConfig {
        front_display_ms: 2000,
        back_display_ms: 1000,
        ..StudyConfig::default()
    };
    let mut h = start(deck(), config);
    let started = Instant::now();

    let snap = h
        .handle
        .dispatch(SessionCommand::ToggleAutoplay)
        .await
        .unwrap();
    assert!(snap.is_auto_playing);
    assert_eq!(
        h.events.recv().await,
        Some(SessionEvent::AutoplayStarted {
            level: Level::Beginner,
            index: 0
        })
    );

    assert_eq!(
        h.events.recv().await,
        Some(SessionEvent::Flipped { face: Face::Back })
    );
    assert_eq!(started.elapsed(), Duration::from_millis(2000));

    assert_eq!(
        h.events.recv().await,
        Some(SessionEvent::PositionChanged {
            level: Level::Beginner,
            index: 1
        })
    );
    assert_eq!(started.elapsed(), Duration::from_millis(3000));

    assert_eq!(
        h.speech.spoken(),
        vec![
            ("사과".to_string(), "ko-KR".to_string()),
            ("apple".to_string(), "en-US".to_string()),
            ("물".to_string(), "ko-KR".to_string()),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_autoplay_wraps_after_last_card() {
    let h = start(deck(), StudyConfig::default());
    h.handle
        .dispatch(SessionCommand::ToggleAutoplay)
        .await
        .unwrap();

    // Three full cycles of 3s front + 3s back, plus a little slack.
    sleep(Duration::from_millis(18_100)).await;

    let snap = h.handle.snapshot().await.unwrap();
    assert_eq!(snap.index, 0);
    assert_eq!(snap.face, Face::Front);
    assert!(snap.is_auto_playing);
}

#[tokio::test(start_paused = true)]
async fn test_manual_navigation_cancels_pending_flip() {
    let mut h = start(deck(), StudyConfig::default());
    h.handle
        .dispatch(SessionCommand::ToggleAutoplay)
        .await
        .unwrap();

    sleep(Duration::from_millis(1000)).await;
    let snap = h.handle.dispatch(SessionCommand::Next).await.unwrap();
    assert_eq!(snap.index, 1);
    assert!(!snap.is_auto_playing);
    drain(&mut h.events);

    sleep(Duration::from_secs(30)).await;

    assert!(matches!(h.events.try_recv(), Err(TryRecvError::Empty)));
    let snap = h.handle.snapshot().await.unwrap();
    assert_eq!(snap.index, 1);
    assert_eq!(snap.face, Face::Front);
}

#[tokio::test(start_paused = true)]
async fn test_restarting_autoplay_rearms_from_scratch() {
    let mut h = start(deck(), StudyConfig::default());
    h.handle
        .dispatch(SessionCommand::ToggleAutoplay)
        .await
        .unwrap();
    sleep(Duration::from_millis(2500)).await;
    h.handle
        .dispatch(SessionCommand::ToggleAutoplay)
        .await
        .unwrap();
    h.handle
        .dispatch(SessionCommand::ToggleAutoplay)
        .await
        .unwrap();
    drain(&mut h.events);
    let restarted = Instant::now();

    assert_eq!(
        h.events.recv().await,
        Some(SessionEvent::Flipped { face: Face::Back })
    );
    assert_eq!(restarted.elapsed(), Duration::from_millis(3000));
}

#[tokio::test(start_paused = true)]
async fn test_empty_deck_rejects_autoplay() {
    let h = start(DeckStore::new(), StudyConfig::default());

    let result = h.handle.dispatch(SessionCommand::ToggleAutoplay).await;
    assert_eq!(result, Err(RuntimeError::Session(SessionError::EmptyDeck)));
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_disposes_engine() {
    let mut h = start(deck(), StudyConfig::default());
    h.handle
        .dispatch(SessionCommand::ToggleAutoplay)
        .await
        .unwrap();

    h.handle.shutdown().await;

    assert!(h.handle.is_closed());
    assert_eq!(
        h.handle.dispatch(SessionCommand::Next).await,
        Err(RuntimeError::Closed)
    );
    assert_eq!(h.speech.calls().last(), Some(&SpeechCall::CancelAll));

    let events = drain(&mut h.events);
    assert_eq!(
        events.last(),
        Some(&SessionEvent::AutoplayStopped {
            reason: StopReason::Teardown
        })
    );
}

#[tokio::test(start_paused = true)]
async fn test_dropping_handle_ends_event_stream() {
    let Harness {
        handle, mut events, ..
    } = start(deck(), StudyConfig::default());
    handle.dispatch(SessionCommand::Next).await.unwrap();
    drop(handle);

    let mut seen = Vec::new();
    while let Some(event) = events.recv().await {
        seen.push(event);
    }
    assert_eq!(
        seen,
        vec![SessionEvent::PositionChanged {
            level: Level::Beginner,
            index: 1
        }]
    );
}

#[tokio::test(start_paused = true)]
async fn test_command_events_arrive_before_reply() {
    let mut h = start(deck(), StudyConfig::default());

    h.handle.dispatch(SessionCommand::Seek(2)).await.unwrap();

    assert_eq!(
        h.events.try_recv(),
        Ok(SessionEvent::PositionChanged {
            level: Level::Beginner,
            index: 2
        })
    );
}
