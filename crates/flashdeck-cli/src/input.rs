//! Interactive study prompt parsing.
//!
//! One line is one action. Card positions typed by the user are 1-based to
//! match the `3 / 20` progress label.

use flashdeck_core::{Level, SessionCommand, UnknownLevel};
use thiserror::Error;

/// What a prompt line asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum PromptAction {
    /// Engine commands to apply in order.
    Commands(Vec<SessionCommand>),
    /// Redraw the current card.
    Show,
    Help,
    Quit,
}

/// Rejected prompt input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Unknown command {0:?} (type ? for help)")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error("Not a number: {0:?}")]
    InvalidNumber(String),

    #[error(transparent)]
    Level(#[from] UnknownLevel),
}

pub const HELP: &str = "\
  n / next        next card
  p / prev        previous card
  f / flip        flip the card
  r / replay      speak the visible face again
  a / auto        start or stop autoplay
  stop            stop autoplay
  s / shuffle     shuffle this level
  g N             go to card N
  l LEVEL         switch level (name or 1-5)
  swipe DX        swipe by DX (positive = left = next)
  <enter>         show the current card
  q / quit        leave";

/// Parse one prompt line.
pub fn parse_line(line: &str) -> Result<PromptAction, InputError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(PromptAction::Show);
    };
    let rest = words.collect::<Vec<_>>().join(" ");
    let arg = (!rest.is_empty()).then_some(rest.as_str());

    let single = |command: SessionCommand| -> Result<PromptAction, InputError> {
        Ok(PromptAction::Commands(vec![command]))
    };

    match head.to_ascii_lowercase().as_str() {
        "n" | "next" => single(SessionCommand::Next),
        "p" | "prev" | "previous" => single(SessionCommand::Previous),
        "f" | "flip" => single(SessionCommand::Flip),
        "r" | "replay" => single(SessionCommand::Replay),
        "a" | "auto" | "autoplay" => single(SessionCommand::ToggleAutoplay),
        "stop" => single(SessionCommand::StopAutoplay),
        "s" | "shuffle" => single(SessionCommand::Shuffle),
        "g" | "go" => {
            let raw = arg.ok_or(InputError::MissingArgument("g"))?;
            let position: usize = raw
                .parse()
                .map_err(|_| InputError::InvalidNumber(raw.to_string()))?;
            single(SessionCommand::Seek(position.saturating_sub(1)))
        }
        "l" | "level" => {
            let level: Level = arg.ok_or(InputError::MissingArgument("l"))?.parse()?;
            single(SessionCommand::SelectLevel(level))
        }
        "swipe" => {
            let raw = arg.ok_or(InputError::MissingArgument("swipe"))?;
            let dx: f32 = raw
                .parse()
                .ok()
                .filter(|dx: &f32| dx.is_finite())
                .ok_or_else(|| InputError::InvalidNumber(raw.to_string()))?;
            Ok(PromptAction::Commands(swipe_commands(dx)))
        }
        "?" | "h" | "help" => Ok(PromptAction::Help),
        "q" | "quit" | "exit" => Ok(PromptAction::Quit),
        other => Err(InputError::Unknown(other.to_string())),
    }
}

/// Pointer sequence for a horizontal swipe covering `dx` (start minus end).
pub fn swipe_commands(dx: f32) -> Vec<SessionCommand> {
    vec![
        SessionCommand::PointerDown(dx),
        SessionCommand::PointerMove(0.0),
        SessionCommand::PointerUp,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commands(line: &str) -> Vec<SessionCommand> {
        match parse_line(line).unwrap() {
            PromptAction::Commands(commands) => commands,
            other => panic!("expected commands for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_single_letter_commands() {
        assert_eq!(commands("n"), vec![SessionCommand::Next]);
        assert_eq!(commands("P"), vec![SessionCommand::Previous]);
        assert_eq!(commands(" flip "), vec![SessionCommand::Flip]);
        assert_eq!(commands("a"), vec![SessionCommand::ToggleAutoplay]);
    }

    #[test]
    fn test_goto_is_one_based() {
        assert_eq!(commands("g 3"), vec![SessionCommand::Seek(2)]);
        assert_eq!(commands("g 0"), vec![SessionCommand::Seek(0)]);
    }

    #[test]
    fn test_level_accepts_multiword_names() {
        assert_eq!(
            commands("l upper intermediate"),
            vec![SessionCommand::SelectLevel(Level::UpperIntermediate)]
        );
        assert_eq!(
            commands("l 2"),
            vec![SessionCommand::SelectLevel(Level::Elementary)]
        );
    }

    #[test]
    fn test_swipe_expands_to_pointer_sequence() {
        assert_eq!(
            commands("swipe -80"),
            vec![
                SessionCommand::PointerDown(-80.0),
                SessionCommand::PointerMove(0.0),
                SessionCommand::PointerUp,
            ]
        );
    }

    #[test]
    fn test_blank_line_shows_card() {
        assert_eq!(parse_line("   "), Ok(PromptAction::Show));
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse_line("g"), Err(InputError::MissingArgument("g")));
        assert_eq!(
            parse_line("g three"),
            Err(InputError::InvalidNumber("three".into()))
        );
        assert_eq!(
            parse_line("swipe NaN"),
            Err(InputError::InvalidNumber("NaN".into()))
        );
        assert!(matches!(parse_line("l expert"), Err(InputError::Level(_))));
        assert!(matches!(parse_line("jump"), Err(InputError::Unknown(_))));
    }
}
