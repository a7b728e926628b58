//! Terminal rendering of snapshots, events, and deck statistics.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use flashdeck_core::{Face, IngestReport, Level, SessionEvent, SessionSnapshot, StopReason};

/// One-line card view: `[beginner 3 / 20] FRONT  사과 (sagwa)  ▶`.
pub fn render_card(snapshot: &SessionSnapshot) -> String {
    let header = format!("[{} {}]", snapshot.level, snapshot.progress_label());
    if snapshot.is_empty {
        return format!("{header} No cards at this level. Try `l <level>`.");
    }

    let mut line = header;
    match snapshot.face {
        Face::Front => {
            let _ = write!(line, " FRONT  {}", snapshot.front_text.as_deref().unwrap_or(""));
            if let Some(alt) = &snapshot.alt_front_text {
                let _ = write!(line, " / {alt}");
            }
            if let Some(romanization) = &snapshot.romanization {
                let _ = write!(line, " ({romanization})");
            }
        }
        Face::Back => {
            let _ = write!(line, " BACK   {}", snapshot.back_text.as_deref().unwrap_or(""));
        }
    }
    if snapshot.is_auto_playing {
        line.push_str("  ▶");
    }
    line
}

/// Short notice for events worth announcing on their own.
///
/// Position and flip changes are shown by redrawing the card instead.
pub fn render_notice(event: &SessionEvent) -> Option<String> {
    match event {
        SessionEvent::AutoplayStarted { .. } => Some("Autoplay on".to_string()),
        SessionEvent::AutoplayStopped { reason } => Some(match reason {
            StopReason::User => "Autoplay off".to_string(),
            other => format!("Autoplay stopped ({})", stop_reason_label(*other)),
        }),
        SessionEvent::Shuffled { level } => Some(format!("Shuffled {level}")),
        SessionEvent::PositionChanged { .. } | SessionEvent::Flipped { .. } => None,
    }
}

const fn stop_reason_label(reason: StopReason) -> &'static str {
    match reason {
        StopReason::User => "user",
        StopReason::Navigation => "navigation",
        StopReason::LevelChange => "level change",
        StopReason::Shuffle => "shuffle",
        StopReason::Teardown => "session closed",
    }
}

/// Per-level card counts plus ingestion totals.
pub fn render_stats(counts: &BTreeMap<Level, usize>, report: IngestReport) -> String {
    let mut out = String::new();
    for level in Level::ALL {
        let count = counts.get(&level).copied().unwrap_or(0);
        let _ = writeln!(out, "{:<20} {count:>5}", level.as_str());
    }
    let _ = writeln!(out, "{:<20} {:>5}", "total", report.accepted);
    if report.dropped > 0 {
        let _ = writeln!(out, "{:<20} {:>5}", "dropped (invalid)", report.dropped);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> SessionSnapshot {
        SessionSnapshot {
            level: Level::Beginner,
            index: 0,
            total: 2,
            face: Face::Front,
            front_text: Some("사과".into()),
            alt_front_text: None,
            back_text: Some("apple".into()),
            romanization: Some("sagwa".into()),
            is_auto_playing: false,
            is_empty: false,
            can_go_next: true,
            can_go_previous: false,
            can_autoplay: true,
            counts: BTreeMap::new(),
        }
    }

    #[test]
    fn test_render_front() {
        assert_eq!(render_card(&snapshot()), "[beginner 1 / 2] FRONT  사과 (sagwa)");
    }

    #[test]
    fn test_render_back_while_playing() {
        let snap = SessionSnapshot {
            face: Face::Back,
            is_auto_playing: true,
            ..snapshot()
        };
        assert_eq!(render_card(&snap), "[beginner 1 / 2] BACK   apple  ▶");
    }

    #[test]
    fn test_render_empty() {
        let snap = SessionSnapshot {
            total: 0,
            is_empty: true,
            front_text: None,
            back_text: None,
            ..snapshot()
        };
        assert!(render_card(&snap).starts_with("[beginner 0 / 0] No cards"));
    }

    #[test]
    fn test_notices() {
        assert_eq!(
            render_notice(&SessionEvent::AutoplayStopped {
                reason: StopReason::Navigation
            })
            .as_deref(),
            Some("Autoplay stopped (navigation)")
        );
        assert_eq!(
            render_notice(&SessionEvent::Flipped { face: Face::Back }),
            None
        );
    }

    #[test]
    fn test_stats_lists_every_level() {
        let counts = BTreeMap::from([(Level::Beginner, 3), (Level::Advanced, 1)]);
        let report = IngestReport {
            accepted: 4,
            dropped: 2,
        };

        let out = render_stats(&counts, report);
        assert_eq!(out.lines().count(), 7);
        assert!(out.contains("upper_intermediate"));
        assert!(out.lines().any(|l| l.starts_with("dropped") && l.ends_with('2')));
    }
}
