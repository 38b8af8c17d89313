//! TUI Rendering
//!
//! Hero terminal across the top, chat and contact console side by side below.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::{AppState, Focus, Speaker};

pub fn draw_ui(f: &mut Frame, state: &AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(state.hero.lines.len().max(1) as u16 + 2),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(f.size());

    draw_hero(f, rows[0], state);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    draw_chat(f, columns[0], state);
    draw_console(f, columns[1], state);

    let help = Paragraph::new("Tab focus · Enter send · Ctrl-R replay · Esc quit")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, rows[2]);
}

fn draw_hero(f: &mut Frame, area: Rect, state: &AppState) {
    let lines: Vec<Line> = state
        .hero
        .lines
        .iter()
        .map(|l| {
            Line::from(vec![
                Span::styled("$ ", Style::default().fg(Color::Green)),
                Span::raw(l.as_str()),
            ])
        })
        .collect();
    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().title("lab.console").borders(Borders::ALL));
    f.render_widget(widget, area);
}

fn draw_chat(f: &mut Frame, area: Rect, state: &AppState) {
    let parts = split_input(area);
    let log: Vec<Line> = state
        .chat
        .iter()
        .map(|m| {
            let color = match m.speaker {
                Speaker::Bot => Color::Cyan,
                Speaker::User => Color::White,
            };
            Line::styled(format!("• {}", m.text), Style::default().fg(color))
        })
        .collect();
    f.render_widget(
        Paragraph::new(tail(log, parts[0]))
            .wrap(Wrap { trim: false })
            .block(Block::default().title("AI Sandbox").borders(Borders::ALL)),
        parts[0],
    );
    draw_input(f, parts[1], &state.chat_input, "Ask the lab assistant...", state.focus == Focus::Chat);
}

fn draw_console(f: &mut Frame, area: Rect, state: &AppState) {
    let parts = split_input(area);
    let log: Vec<Line> = state.console.transcript().lines().map(Line::from).collect();
    f.render_widget(
        Paragraph::new(tail(log, parts[0]))
            .wrap(Wrap { trim: false })
            .block(Block::default().title("Contact Console").borders(Borders::ALL)),
        parts[0],
    );
    draw_input(f, parts[1], &state.console_input, "send_message(...)", state.focus == Focus::Console);
}

fn draw_input(f: &mut Frame, area: Rect, value: &str, title: &str, focused: bool) {
    let style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    f.render_widget(
        Paragraph::new(value).style(style).block(Block::default().title(title).borders(Borders::ALL)),
        area,
    );
    if focused {
        let x = area.x + 1 + value.chars().count() as u16;
        f.set_cursor(x.min(area.right().saturating_sub(2)), area.y + 1);
    }
}

fn split_input(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(area)
}

/// Keep the newest lines that fit inside a bordered `area`.
fn tail(mut lines: Vec<Line<'_>>, area: Rect) -> Vec<Line<'_>> {
    let visible = area.height.saturating_sub(2) as usize;
    if lines.len() > visible {
        lines.drain(..lines.len() - visible);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use labconsole_commands::{CommandConsole, CommandHandler, SendMessage};
    use labconsole_scheduler::PlaybackFrame;
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Arc;

    struct Noop;

    impl CommandHandler for Noop {
        fn name(&self) -> &str {
            "noop"
        }

        fn handle(&self, _cmd: &SendMessage) -> Result<()> {
            Ok(())
        }
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_draws_all_panes() {
        let mut app = AppState::new(
            CommandConsole::new(Arc::new(Noop)),
            labconsole_responder::lab_assistant(),
            "hello there",
        );
        app.hero = PlaybackFrame { session: Default::default(), lines: vec!["> booting".into()] };

        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| draw_ui(f, &app)).unwrap();
        let text = screen_text(&terminal);

        assert!(text.contains("$ > booting"));
        assert!(text.contains("• hello there"));
        assert!(text.contains("> Type send_message"));
        assert!(text.contains("Contact Console"));
    }
}
