//! Session engine - composition root of the study widget.
//!
//! The engine is a synchronous reducer: every input (tap, swipe, slider,
//! button, elapsed timer) is a [`SessionCommand`] handled to completion by
//! [`SessionEngine::dispatch`]. Side effects are explicit post-conditions
//! of specific commands:
//!
//! - a committed `(level, index)` change is written through the
//!   [`SessionStore`] before `dispatch` returns
//! - every path into `Stopped` cancels the pending timer and all speech
//! - every speech request is preceded by `cancel_all`
//!
//! Time never passes inside the engine. The driver asks
//! [`SessionEngine::pending_timer`] what to arm and reports it back as
//! [`SessionCommand::TimerElapsed`].

use std::sync::Arc;

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::autoplay::{AutoplayScheduler, AutoplayStep, ScheduledTimer, TimerTicket};
use super::error::SessionError;
use super::flip::{Face, FlipController};
use super::gesture::{GestureDetector, SwipeCommand};
use super::navigation::NavigationController;
use super::record::PersistedRecord;
use super::state::{SessionSnapshot, SessionState};
use crate::domain::{DeckStore, Level, VocabCard};
use crate::events::{SessionEvent, StopReason};
use crate::ports::{SessionStore, SpeechPort};
use crate::settings::StudyConfig;

/// Inputs the engine understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionCommand {
    Next,
    Previous,
    /// Slider jump; clamped to the deck.
    Seek(usize),
    SelectLevel(Level),
    Shuffle,
    /// Tap on the active card.
    Flip,
    /// Speak the visible face again.
    Replay,
    ToggleAutoplay,
    StopAutoplay,
    PointerDown(f32),
    PointerMove(f32),
    PointerUp,
    PointerCancel,
    TimerElapsed(TimerTicket),
}

/// Container for the engine's injected ports.
#[derive(Clone)]
pub struct SessionPorts {
    /// Durable home of the session record.
    pub store: Arc<dyn SessionStore>,
    /// Text-to-speech output.
    pub speech: Arc<dyn SpeechPort>,
}

impl SessionPorts {
    pub fn new(store: Arc<dyn SessionStore>, speech: Arc<dyn SpeechPort>) -> Self {
        Self { store, speech }
    }
}

/// The flashcard study-session engine.
pub struct SessionEngine {
    deck: DeckStore,
    config: StudyConfig,
    nav: NavigationController,
    flip: FlipController,
    gesture: GestureDetector,
    autoplay: AutoplayScheduler,
    record: PersistedRecord,
    ports: SessionPorts,
    rng: StdRng,
    events: Vec<SessionEvent>,
    disposed: bool,
}

impl SessionEngine {
    /// Mount a session over `deck`, hydrating from the store.
    pub fn new(deck: DeckStore, ports: SessionPorts, config: StudyConfig) -> Self {
        Self::with_rng(deck, ports, config, StdRng::from_os_rng())
    }

    /// Like [`SessionEngine::new`] with an explicit random source, for
    /// reproducible shuffles.
    pub fn with_rng(deck: DeckStore, ports: SessionPorts, config: StudyConfig, rng: StdRng) -> Self {
        let record = Self::load_record(ports.store.as_ref()).unwrap_or_default();
        let level = record.level.unwrap_or(config.default_level);
        let stored_index = record.position(level).unwrap_or(0);
        let nav = NavigationController::new(level, stored_index, deck.len(level));

        if !ports.speech.is_available() {
            tracing::debug!("Speech capability absent; study session will be silent");
        }
        tracing::debug!(
            %level,
            index = nav.index(),
            stored_index,
            total = deck.len(level),
            "Study session hydrated"
        );

        Self {
            gesture: GestureDetector::new(config.swipe_threshold),
            autoplay: AutoplayScheduler::new(config.front_display(), config.back_display()),
            deck,
            config,
            nav,
            flip: FlipController::new(),
            record,
            ports,
            rng,
            events: Vec::new(),
            disposed: false,
        }
    }

    /// Read the stored record, collapsing absence, I/O failure, and
    /// corruption into `None`.
    pub fn load_record(store: &dyn SessionStore) -> Option<PersistedRecord> {
        match store.load() {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unreadable session record; using defaults");
                None
            }
        }
    }

    // ── Queries ────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        SessionState {
            selected_level: self.nav.level(),
            current_index: self.nav.index(),
            is_front_side: self.flip.is_front(),
            is_auto_playing: self.autoplay.is_playing(),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let total = self.total();
        let card = self.current_card();
        let is_empty = total == 0;
        SessionSnapshot {
            level: self.nav.level(),
            index: self.nav.index(),
            total,
            face: self.flip.face(),
            front_text: card.map(|c| c.front_text().to_string()),
            alt_front_text: card.and_then(|c| c.alt_front_text().map(str::to_string)),
            back_text: card.map(|c| c.back_text().to_string()),
            romanization: card.and_then(|c| c.romanization().map(str::to_string)),
            is_auto_playing: self.autoplay.is_playing(),
            is_empty,
            can_go_next: self.nav.can_go_next(total),
            can_go_previous: !is_empty && self.nav.can_go_previous(),
            can_autoplay: !is_empty,
            counts: self.deck.counts(),
        }
    }

    pub fn current_card(&self) -> Option<&VocabCard> {
        self.deck.card(self.nav.level(), self.nav.index())
    }

    pub const fn deck(&self) -> &DeckStore {
        &self.deck
    }

    pub const fn config(&self) -> &StudyConfig {
        &self.config
    }

    /// The record as last committed (or hydrated).
    pub const fn record(&self) -> &PersistedRecord {
        &self.record
    }

    /// The autoplay timer the driver should have armed, if any.
    pub const fn pending_timer(&self) -> Option<ScheduledTimer> {
        self.autoplay.pending()
    }

    pub const fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Drain queued events in commit order.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Commands ───────────────────────────────────────────────────

    /// Apply one command to completion and return the resulting snapshot.
    pub fn dispatch(&mut self, command: SessionCommand) -> Result<SessionSnapshot, SessionError> {
        if self.disposed {
            return Err(SessionError::Disposed);
        }

        match command {
            SessionCommand::Next => self.navigate(SwipeCommand::Next),
            SessionCommand::Previous => self.navigate(SwipeCommand::Previous),
            SessionCommand::Seek(target) => self.seek(target),
            SessionCommand::SelectLevel(level) => self.select_level(level),
            SessionCommand::Shuffle => self.shuffle(),
            SessionCommand::Flip => self.flip(),
            SessionCommand::Replay => self.speak_face(self.flip.face()),
            SessionCommand::ToggleAutoplay => self.toggle_autoplay()?,
            SessionCommand::StopAutoplay => {
                if self.stop_autoplay(StopReason::User) {
                    self.silence();
                }
            }
            SessionCommand::PointerDown(x) => self.gesture.on_start(x),
            SessionCommand::PointerMove(x) => self.gesture.on_move(x),
            SessionCommand::PointerUp => {
                if let Some(swipe) = self.gesture.on_end() {
                    self.navigate(swipe);
                }
            }
            SessionCommand::PointerCancel => self.gesture.cancel(),
            SessionCommand::TimerElapsed(ticket) => self.on_timer(ticket),
        }

        Ok(self.snapshot())
    }

    /// Tear down: stop autoplay, cancel speech, refuse further commands.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.interrupt(StopReason::Teardown);
        self.gesture.cancel();
        self.disposed = true;
        tracing::debug!("Study session disposed");
    }

    fn navigate(&mut self, direction: SwipeCommand) {
        self.interrupt(StopReason::Navigation);
        let moved = match direction {
            SwipeCommand::Next => self.nav.next(self.total()),
            SwipeCommand::Previous => self.nav.previous(),
        };
        if moved {
            self.flip.reset_to_front();
            self.commit();
        }
    }

    fn seek(&mut self, target: usize) {
        self.interrupt(StopReason::Navigation);
        if self.nav.set_index(target, self.total()) {
            self.flip.reset_to_front();
            self.commit();
        }
    }

    fn select_level(&mut self, level: Level) {
        self.interrupt(StopReason::LevelChange);
        let index = if self.config.resume_level_positions {
            self.record.position(level).unwrap_or(0)
        } else {
            0
        };
        self.nav.select_level(level, index, self.deck.len(level));
        self.flip.reset_to_front();
        self.gesture.cancel();
        self.commit();
    }

    fn shuffle(&mut self) {
        self.interrupt(StopReason::Shuffle);
        let level = self.nav.level();
        if self.deck.is_empty(level) {
            return;
        }
        self.deck.shuffle(level, &mut self.rng);
        self.events.push(SessionEvent::Shuffled { level });
        self.nav.set_index(0, self.total());
        self.flip.reset_to_front();
        self.commit();
    }

    fn flip(&mut self) {
        if self.current_card().is_none() {
            return;
        }
        let face = self.flip.flip();
        self.events.push(SessionEvent::Flipped { face });
        if self.config.speak_on_flip {
            self.speak_face(face);
        }
    }

    fn toggle_autoplay(&mut self) -> Result<(), SessionError> {
        if self.stop_autoplay(StopReason::User) {
            self.silence();
            return Ok(());
        }
        if self.current_card().is_none() {
            return Err(SessionError::EmptyDeck);
        }

        self.autoplay.start();
        self.events.push(SessionEvent::AutoplayStarted {
            level: self.nav.level(),
            index: self.nav.index(),
        });
        self.show_front_and_speak();
        Ok(())
    }

    fn on_timer(&mut self, ticket: TimerTicket) {
        let Some(step) = self.autoplay.fire(ticket) else {
            return;
        };

        match step {
            AutoplayStep::FlipToBack => {
                self.flip.show_back();
                self.events.push(SessionEvent::Flipped { face: Face::Back });
                self.speak_face(Face::Back);
            }
            AutoplayStep::Advance => {
                self.nav.advance_wrapping(self.total());
                self.commit();
                self.show_front_and_speak();
            }
        }
    }

    // ── Effects ────────────────────────────────────────────────────

    fn show_front_and_speak(&mut self) {
        self.flip.reset_to_front();
        self.speak_face(Face::Front);
    }

    /// Stop autoplay and cancel speech before a user command takes effect.
    fn interrupt(&mut self, reason: StopReason) {
        self.stop_autoplay(reason);
        self.silence();
    }

    fn stop_autoplay(&mut self, reason: StopReason) -> bool {
        let stopped = self.autoplay.stop();
        if stopped {
            tracing::debug!(?reason, "Autoplay stopped");
            self.events.push(SessionEvent::AutoplayStopped { reason });
        }
        stopped
    }

    fn silence(&self) {
        if self.ports.speech.is_available() {
            self.ports.speech.cancel_all();
        }
    }

    fn speak_face(&self, face: Face) {
        if !self.ports.speech.is_available() {
            return;
        }
        let Some(card) = self.current_card() else {
            return;
        };
        let (text, language) = match face {
            Face::Front => (card.front_text(), self.config.front_language.as_str()),
            Face::Back => (card.back_text(), self.config.back_language.as_str()),
        };
        self.ports.speech.cancel_all();
        self.ports.speech.speak(text, language);
    }

    /// Write the current `(level, index)` through the store.
    fn commit(&mut self) {
        let (level, index) = (self.nav.level(), self.nav.index());
        self.record.commit(level, index, Utc::now());
        self.events.push(SessionEvent::PositionChanged { level, index });
        if let Err(e) = self.ports.store.save(&self.record) {
            tracing::warn!(error = %e, %level, index, "Failed to persist session position");
        }
    }

    fn total(&self) -> usize {
        self.deck.len(self.nav.level())
    }
}

impl Drop for SessionEngine {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl std::fmt::Debug for SessionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionEngine")
            .field("state", &self.state())
            .field("config", &self.config)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}
