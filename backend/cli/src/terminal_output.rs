//! Terminal output: ANSI styling, status notes, and in-place playback
//! rendering for the one-shot commands.

use std::io::{self, Write};

use labconsole_core::{Outcome, TranscriptEntry};
use labconsole_scheduler::PlaybackFrame;

// ---------------------------------------------------------------------------
// ANSI helpers
// ---------------------------------------------------------------------------

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Erase the current line and return the cursor to column 0.
const CLEAR_LINE: &str = "\r\x1b[2K";

/// Check if the terminal supports color output.
pub fn supports_color() -> bool {
    std::env::var("NO_COLOR").is_err()
        && (std::env::var("COLORTERM").is_ok()
            || std::env::var("TERM").map(|t| t != "dumb").unwrap_or(false))
}

fn paint(color: &str, text: &str) -> String {
    if supports_color() {
        format!("{color}{text}{RESET}")
    } else {
        text.to_string()
    }
}

pub fn note_info(msg: &str) {
    println!("{} {msg}", paint(CYAN, "ℹ"));
}

pub fn note_warn(msg: &str) {
    eprintln!("{} {msg}", paint(YELLOW, "⚠"));
}

pub fn note_error(msg: &str) {
    eprintln!("{} {msg}", paint(RED, "✗"));
}

/// Transcript entry in its display form, colored by kind.
pub fn styled_entry(entry: &TranscriptEntry) -> String {
    let line = entry.to_string();
    match entry.outcome() {
        Some(Outcome::Success) => paint(GREEN, &line),
        Some(Outcome::Failure) => paint(RED, &line),
        None if entry.is_issued() => paint(BOLD, &line),
        None => paint(DIM, &line),
    }
}

// ---------------------------------------------------------------------------
// Playback rendering
// ---------------------------------------------------------------------------

/// Renders successive playback frames to a line-oriented terminal,
/// rewriting the line currently being typed.
pub struct FrameWriter<W: Write> {
    out: W,
    prefix: String,
    shown: usize,
}

impl<W: Write> FrameWriter<W> {
    pub fn new(out: W, prefix: impl Into<String>) -> Self {
        Self { out, prefix: prefix.into(), shown: 0 }
    }

    /// Draw `frame`. Lines already finished are never touched again; lines
    /// skipped between two frames are printed in full.
    pub fn render(&mut self, frame: &PlaybackFrame) -> io::Result<()> {
        let total = frame.lines.len();
        if total == 0 {
            return Ok(());
        }
        let start = self.shown.saturating_sub(1).min(total - 1);
        for (i, line) in frame.lines.iter().enumerate().skip(start) {
            write!(self.out, "{CLEAR_LINE}{}{line}", self.prefix)?;
            if i + 1 < total {
                writeln!(self.out)?;
            }
        }
        self.shown = total;
        self.out.flush()
    }

    /// Terminate the last line and hand the writer back.
    pub fn finish(mut self) -> io::Result<W> {
        if self.shown > 0 {
            writeln!(self.out)?;
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labconsole_core::Transcript;
    use labconsole_scheduler::SessionId;

    fn frame(lines: &[&str]) -> PlaybackFrame {
        PlaybackFrame {
            session: SessionId(1),
            lines: lines.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_rewrites_current_line_only() {
        let mut w = FrameWriter::new(Vec::new(), "$ ");
        w.render(&frame(&["a"])).unwrap();
        w.render(&frame(&["ab"])).unwrap();
        w.render(&frame(&["ab", "c"])).unwrap();
        let out = String::from_utf8(w.finish().unwrap()).unwrap();

        assert_eq!(
            out,
            "\r\x1b[2K$ a\r\x1b[2K$ ab\r\x1b[2K$ ab\n\r\x1b[2K$ c\n"
        );
    }

    #[test]
    fn test_coalesced_frames_print_skipped_lines() {
        let mut w = FrameWriter::new(Vec::new(), "");
        w.render(&frame(&["one", "two", "th"])).unwrap();
        let out = String::from_utf8(w.finish().unwrap()).unwrap();
        assert_eq!(out, "\r\x1b[2Kone\n\r\x1b[2Ktwo\n\r\x1b[2Kth\n");
    }

    #[test]
    fn test_empty_frames_print_nothing() {
        let mut w = FrameWriter::new(Vec::new(), "$ ");
        w.render(&frame(&[])).unwrap();
        assert!(w.finish().unwrap().is_empty());
    }

    #[test]
    fn test_styled_entry_keeps_text() {
        let mut t = Transcript::seeded("hint");
        t.record("x", Outcome::Failure, "nope");
        for entry in t.entries() {
            let plain = entry.to_string();
            assert!(styled_entry(entry).contains(&plain));
        }
    }
}
