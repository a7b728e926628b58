//! Study command handler: the interactive prompt.
//!
//! Typed commands are applied through the session handle and the
//! resulting card is printed. Autoplay runs on the session's own timer, so
//! events arriving between keystrokes redraw the card as it changes.

use std::io::Write;
use std::path::Path;

use flashdeck_core::{SessionCommand, SessionEvent};
use flashdeck_runtime::{RuntimeError, StudySession, StudySessionHandle};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::bootstrap::{CliContext, load_deck};
use crate::error::CliError;
use crate::input::{HELP, PromptAction, parse_line};
use crate::presentation::{render_card, render_notice};

/// Execute the study command.
pub async fn execute(ctx: &CliContext, cards: &Path, seed: Option<u64>) -> Result<(), CliError> {
    let (deck, report) = load_deck(cards).await?;
    let engine = ctx.engine(deck, seed);
    let (handle, mut events) = StudySession::spawn(engine);

    let mut stdout = std::io::stdout();
    writeln!(
        stdout,
        "{} cards loaded ({} skipped). Type ? for help.",
        report.accepted, report.dropped
    )?;

    let stdin = BufReader::new(tokio::io::stdin());
    let result = run_prompt(&handle, &mut events, stdin, &mut stdout).await;
    handle.shutdown().await;
    result
}

/// Drive a session from line input until `q` or end of input.
pub async fn run_prompt<R, W>(
    handle: &StudySessionHandle,
    events: &mut UnboundedReceiver<SessionEvent>,
    input: R,
    out: &mut W,
) -> Result<(), CliError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    writeln!(out, "{}", render_card(&handle.snapshot().await?))?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_line(&line) {
                    Ok(PromptAction::Quit) => break,
                    Ok(PromptAction::Help) => writeln!(out, "{HELP}")?,
                    Ok(PromptAction::Show) => {
                        writeln!(out, "{}", render_card(&handle.snapshot().await?))?;
                    }
                    Ok(PromptAction::Commands(commands)) => {
                        apply(handle, events, &commands, out).await?;
                    }
                    Err(e) => writeln!(out, "{e}")?,
                }
            }
            Some(event) = events.recv() => show_event(handle, &event, out).await?,
        }
    }

    out.flush()?;
    Ok(())
}

async fn apply<W: Write>(
    handle: &StudySessionHandle,
    events: &mut UnboundedReceiver<SessionEvent>,
    commands: &[SessionCommand],
    out: &mut W,
) -> Result<(), CliError> {
    let mut last = None;
    for &command in commands {
        match handle.dispatch(command).await {
            Ok(snapshot) => last = Some(snapshot),
            Err(RuntimeError::Session(e)) => writeln!(out, "{e}")?,
            Err(e) => return Err(e.into()),
        }
    }

    // Events from these commands are already queued; the card redraw below
    // covers position and face changes.
    while let Ok(event) = events.try_recv() {
        if let Some(notice) = render_notice(&event) {
            writeln!(out, "{notice}")?;
        }
    }
    if let Some(snapshot) = last {
        writeln!(out, "{}", render_card(&snapshot))?;
    }
    Ok(())
}

async fn show_event<W: Write>(
    handle: &StudySessionHandle,
    event: &SessionEvent,
    out: &mut W,
) -> Result<(), CliError> {
    if let Some(notice) = render_notice(event) {
        writeln!(out, "{notice}")?;
        return Ok(());
    }
    writeln!(out, "{}", render_card(&handle.snapshot().await?))?;
    Ok(())
}
