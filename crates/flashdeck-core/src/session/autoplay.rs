//! Autoplay state machine.
//!
//! ```text
//!   Stopped ──start──▶ Playing ──stop──▶ Stopped
//!                        │  ▲
//!          T1: FlipToBack│  │T2: Advance
//!                        ▼  │
//!                     (re-armed)
//! ```
//!
//! The scheduler does not sleep. It hands out at most one
//! [`ScheduledTimer`] at a time and the driver (a real timer, or a test)
//! reports it back through [`AutoplayScheduler::fire`] once the delay has
//! elapsed. Every `start` mints a new [`PlaybackToken`] and every arm a new
//! sequence number, so a ticket from a stopped or superseded session can
//! never be accepted.

use std::time::Duration;

/// Identifies one continuous `Playing` session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaybackToken(u64);

/// The transition a pending timer will perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AutoplayStep {
    /// Front has been up for T1: show the back.
    FlipToBack,
    /// Back has been up for T2: move to the next card (wrapping).
    Advance,
}

/// Proof that a specific timer was armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerTicket {
    token: PlaybackToken,
    seq: u64,
    step: AutoplayStep,
}

impl TimerTicket {
    pub const fn step(&self) -> AutoplayStep {
        self.step
    }
}

/// A timer the driver should arm: fire `ticket` after `delay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTimer {
    pub ticket: TimerTicket,
    pub delay: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Stopped,
    Playing {
        token: PlaybackToken,
        pending: ScheduledTimer,
    },
}

/// Drives the front → back → advance loop.
#[derive(Debug, Clone)]
pub struct AutoplayScheduler {
    phase: Phase,
    front_display: Duration,
    back_display: Duration,
    next_token: u64,
    next_seq: u64,
}

impl AutoplayScheduler {
    pub const fn new(front_display: Duration, back_display: Duration) -> Self {
        Self {
            phase: Phase::Stopped,
            front_display,
            back_display,
            next_token: 0,
            next_seq: 0,
        }
    }

    pub const fn is_playing(&self) -> bool {
        matches!(self.phase, Phase::Playing { .. })
    }

    /// The timer currently armed, if playing.
    pub const fn pending(&self) -> Option<ScheduledTimer> {
        match self.phase {
            Phase::Stopped => None,
            Phase::Playing { pending, .. } => Some(pending),
        }
    }

    /// Enter `Playing` with the front showing and arm the T1 flip.
    ///
    /// Starting while already playing replaces the session; the old
    /// session's tickets become stale.
    pub fn start(&mut self) -> ScheduledTimer {
        let token = PlaybackToken(self.next_token);
        self.next_token += 1;
        let pending = self.arm(token, AutoplayStep::FlipToBack);
        self.phase = Phase::Playing { token, pending };
        tracing::debug!(token = token.0, "Autoplay started");
        pending
    }

    /// Return to `Stopped`. Returns whether a session was actually playing.
    pub fn stop(&mut self) -> bool {
        match std::mem::replace(&mut self.phase, Phase::Stopped) {
            Phase::Stopped => false,
            Phase::Playing { token, .. } => {
                tracing::debug!(token = token.0, "Autoplay stopped");
                true
            }
        }
    }

    /// Accept an elapsed timer.
    ///
    /// Returns the step to perform and arms the following one, or `None`
    /// when the ticket is not the one currently pending.
    pub fn fire(&mut self, ticket: TimerTicket) -> Option<AutoplayStep> {
        let Phase::Playing { token, pending } = self.phase else {
            tracing::debug!(step = ?ticket.step, "Ignoring timer while stopped");
            return None;
        };
        if pending.ticket != ticket {
            tracing::debug!(step = ?ticket.step, "Ignoring stale autoplay timer");
            return None;
        }

        let following = match ticket.step {
            AutoplayStep::FlipToBack => AutoplayStep::Advance,
            AutoplayStep::Advance => AutoplayStep::FlipToBack,
        };
        let pending = self.arm(token, following);
        self.phase = Phase::Playing { token, pending };
        Some(ticket.step)
    }

    fn arm(&mut self, token: PlaybackToken, step: AutoplayStep) -> ScheduledTimer {
        let seq = self.next_seq;
        self.next_seq += 1;
        let delay = match step {
            AutoplayStep::FlipToBack => self.front_display,
            AutoplayStep::Advance => self.back_display,
        };
        ScheduledTimer {
            ticket: TimerTicket { token, seq, step },
            delay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T1: Duration = Duration::from_millis(1000);
    const T2: Duration = Duration::from_millis(1500);

    #[test]
    fn starts_stopped() {
        let scheduler = AutoplayScheduler::new(T1, T2);
        assert!(!scheduler.is_playing());
        assert!(scheduler.pending().is_none());
    }

    #[test]
    fn alternates_flip_and_advance() {
        let mut scheduler = AutoplayScheduler::new(T1, T2);
        let first = scheduler.start();
        assert_eq!(first.ticket.step(), AutoplayStep::FlipToBack);
        assert_eq!(first.delay, T1);

        assert_eq!(scheduler.fire(first.ticket), Some(AutoplayStep::FlipToBack));
        let second = scheduler.pending().unwrap();
        assert_eq!(second.ticket.step(), AutoplayStep::Advance);
        assert_eq!(second.delay, T2);

        assert_eq!(scheduler.fire(second.ticket), Some(AutoplayStep::Advance));
        let third = scheduler.pending().unwrap();
        assert_eq!(third.ticket.step(), AutoplayStep::FlipToBack);
    }

    #[test]
    fn a_ticket_is_accepted_once() {
        let mut scheduler = AutoplayScheduler::new(T1, T2);
        let timer = scheduler.start();
        assert!(scheduler.fire(timer.ticket).is_some());
        assert!(scheduler.fire(timer.ticket).is_none());
    }

    #[test]
    fn stop_invalidates_pending_ticket() {
        let mut scheduler = AutoplayScheduler::new(T1, T2);
        let timer = scheduler.start();
        assert!(scheduler.stop());
        assert!(!scheduler.stop());
        assert!(scheduler.fire(timer.ticket).is_none());
        assert!(scheduler.pending().is_none());
    }

    #[test]
    fn restarted_session_rejects_old_tickets() {
        let mut scheduler = AutoplayScheduler::new(T1, T2);
        let old = scheduler.start();
        scheduler.stop();
        let new = scheduler.start();
        assert_ne!(old.ticket, new.ticket);
        assert!(scheduler.fire(old.ticket).is_none());
        assert!(scheduler.is_playing());
        assert_eq!(scheduler.fire(new.ticket), Some(AutoplayStep::FlipToBack));
    }
}
