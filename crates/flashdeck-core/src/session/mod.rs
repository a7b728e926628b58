//! The study session: controllers, autoplay, and the engine that wires them.
//!
//! # Structure
//!
//! - `navigation` - Level/index ownership and clamping
//! - `flip` - Active card face
//! - `gesture` - Swipe recognition
//! - `autoplay` - Timed front → back → advance state machine
//! - `record` - The persisted session record
//! - `state` - Session state and snapshot DTO
//! - `engine` - The reducer-style composition root

mod autoplay;
mod engine;
mod error;
mod flip;
mod gesture;
mod navigation;
mod record;
mod state;

pub use autoplay::{AutoplayScheduler, AutoplayStep, PlaybackToken, ScheduledTimer, TimerTicket};
pub use engine::{SessionCommand, SessionEngine, SessionPorts};
pub use error::SessionError;
pub use flip::{Face, FlipController};
pub use gesture::{GestureDetector, SwipeCommand};
pub use navigation::{NavigationController, clamp};
pub use record::PersistedRecord;
pub use state::{SessionSnapshot, SessionState};
