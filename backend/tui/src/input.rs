//! Keyboard Input Handler
//!
//! Maps key presses onto `AppState` edits. Work that needs the runtime
//! (playback, reply timers, logging) is returned as an [`Action`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use labconsole_commands::CommandMatch;

use crate::app::{AppState, Focus, PendingReply};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    ReplayHero,
    Ask(PendingReply),
    Submitted { input: String, matched: CommandMatch },
}

pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => {
            state.should_quit = true;
            Action::Quit
        }
        KeyCode::Esc => {
            state.should_quit = true;
            Action::Quit
        }
        KeyCode::Char('r') if ctrl => Action::ReplayHero,
        KeyCode::Tab => {
            state.focus = state.focus.next();
            Action::None
        }
        KeyCode::Enter => match state.focus {
            Focus::Chat => state.submit_chat().map_or(Action::None, Action::Ask),
            Focus::Console => state
                .submit_console()
                .map_or(Action::None, |(input, matched)| Action::Submitted { input, matched }),
        },
        KeyCode::Backspace => {
            state.focused_input().pop();
            Action::None
        }
        KeyCode::Char(c) if !ctrl => {
            state.focused_input().push(c);
            Action::None
        }
        _ => Action::None,
    }
}
