//! Async driver for a [`SessionEngine`].
//!
//! A single task owns the engine. Commands arrive over a channel and are
//! applied one at a time; the autoplay timer the engine asks for is turned
//! into a real `sleep_until` and reported back as
//! [`SessionCommand::TimerElapsed`].
//!
//! # Design Rules
//!
//! - Shutdown is checked first, then commands, then the timer
//! - The timer is re-armed only when the engine's pending ticket changes
//! - A command's events are forwarded before its reply is sent
//! - Exiting the loop disposes the engine, which cancels timers and speech

use flashdeck_core::{
    SessionCommand, SessionEngine, SessionError, SessionEvent, SessionSnapshot, TimerTicket,
};
use tokio::sync::{mpsc, oneshot};
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::RuntimeError;

/// Capacity of the command channel.
const COMMAND_BUFFER: usize = 32;

enum Request {
    Dispatch {
        command: SessionCommand,
        reply: oneshot::Sender<Result<SessionSnapshot, SessionError>>,
    },
    Snapshot {
        reply: oneshot::Sender<SessionSnapshot>,
    },
}

/// Cloneable handle to a running study session.
///
/// Dropping every handle stops the session.
#[derive(Clone)]
pub struct StudySessionHandle {
    requests: mpsc::Sender<Request>,
    shutdown: CancellationToken,
}

impl StudySessionHandle {
    /// Apply a command and wait for the resulting snapshot.
    pub async fn dispatch(&self, command: SessionCommand) -> Result<SessionSnapshot, RuntimeError> {
        let (reply, response) = oneshot::channel();
        self.requests
            .send(Request::Dispatch { command, reply })
            .await
            .map_err(|_| RuntimeError::Closed)?;
        let result = response.await.map_err(|_| RuntimeError::Closed)?;
        result.map_err(RuntimeError::from)
    }

    /// Current snapshot without changing anything.
    pub async fn snapshot(&self) -> Result<SessionSnapshot, RuntimeError> {
        let (reply, response) = oneshot::channel();
        self.requests
            .send(Request::Snapshot { reply })
            .await
            .map_err(|_| RuntimeError::Closed)?;
        response.await.map_err(|_| RuntimeError::Closed)
    }

    /// Stop the session and wait until the engine has been disposed.
    pub async fn shutdown(&self) {
        self.shutdown.cancel();
        self.requests.closed().await;
    }

    pub fn is_closed(&self) -> bool {
        self.requests.is_closed()
    }
}

impl std::fmt::Debug for StudySessionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StudySessionHandle")
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// Spawns the task that drives a [`SessionEngine`].
pub struct StudySession;

impl StudySession {
    /// Move `engine` into a new task on the current runtime.
    ///
    /// Events the engine queues are forwarded on the returned receiver in
    /// commit order. Must be called from within a tokio runtime.
    pub fn spawn(
        engine: SessionEngine,
    ) -> (StudySessionHandle, mpsc::UnboundedReceiver<SessionEvent>) {
        let (requests, inbox) = mpsc::channel(COMMAND_BUFFER);
        let (events, subscriber) = mpsc::unbounded_channel();
        let shutdown = CancellationToken::new();

        let driver = Driver {
            engine,
            inbox,
            events,
            shutdown: shutdown.clone(),
            armed: None,
        };
        tokio::spawn(driver.run());

        (StudySessionHandle { requests, shutdown }, subscriber)
    }
}

struct Driver {
    engine: SessionEngine,
    inbox: mpsc::Receiver<Request>,
    events: mpsc::UnboundedSender<SessionEvent>,
    shutdown: CancellationToken,
    armed: Option<(TimerTicket, Instant)>,
}

impl Driver {
    async fn run(mut self) {
        debug!("Study session driver started");

        loop {
            self.rearm();
            self.forward_events();
            let deadline = self.armed.map(|(_, at)| at);

            tokio::select! {
                biased;

                () = self.shutdown.cancelled() => break,

                request = self.inbox.recv() => match request {
                    Some(request) => self.handle(request),
                    None => break,
                },

                () = sleep_until_deadline(deadline) => {
                    if let Some((ticket, _)) = self.armed.take() {
                        // Stale or superseded tickets are ignored by the engine.
                        let _ = self.engine.dispatch(SessionCommand::TimerElapsed(ticket));
                    }
                }
            }
        }

        self.engine.dispose();
        self.forward_events();
        self.inbox.close();
        debug!("Study session driver stopped");
    }

    fn handle(&mut self, request: Request) {
        match request {
            Request::Dispatch { command, reply } => {
                let result = self.engine.dispatch(command);
                // Events reach subscribers before the caller sees the reply.
                self.forward_events();
                let _ = reply.send(result);
            }
            Request::Snapshot { reply } => {
                let _ = reply.send(self.engine.snapshot());
            }
        }
    }

    /// Sync the armed deadline with the engine's pending ticket.
    fn rearm(&mut self) {
        match (self.engine.pending_timer(), self.armed) {
            (Some(pending), Some((ticket, _))) if pending.ticket == ticket => {}
            (Some(pending), _) => {
                debug!(
                    step = ?pending.ticket.step(),
                    delay_ms = pending.delay.as_millis(),
                    "Autoplay timer armed"
                );
                self.armed = Some((pending.ticket, Instant::now() + pending.delay));
            }
            (None, _) => self.armed = None,
        }
    }

    fn forward_events(&mut self) {
        for event in self.engine.take_events() {
            // A dropped subscriber is not an error; the session keeps running.
            let _ = self.events.send(event);
        }
    }
}

async fn sleep_until_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(at) => sleep_until(at).await,
        None => std::future::pending().await,
    }
}
