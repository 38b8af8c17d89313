//! TUI App State
//!
//! Owns the three panes: hero terminal, assistant chat, contact console.

use labconsole_commands::{CommandConsole, CommandMatch};
use labconsole_responder::ResponseSelector;
use labconsole_scheduler::PlaybackFrame;

/// Which input receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Chat,
    Console,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Chat => Focus::Console,
            Focus::Console => Focus::Chat,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    Bot,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLine {
    pub speaker: Speaker,
    pub text: String,
}

/// An assistant answer selected at submit time, shown after the reply delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub question: String,
    pub response: String,
    pub rule: Option<usize>,
}

pub struct AppState {
    pub hero: PlaybackFrame,
    pub chat: Vec<ChatLine>,
    pub chat_input: String,
    pub console_input: String,
    pub focus: Focus,
    pub console: CommandConsole,
    pub selector: ResponseSelector,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(console: CommandConsole, selector: ResponseSelector, greeting: &str) -> Self {
        Self {
            hero: PlaybackFrame::default(),
            chat: vec![ChatLine { speaker: Speaker::Bot, text: greeting.to_string() }],
            chat_input: String::new(),
            console_input: String::new(),
            focus: Focus::Chat,
            console,
            selector,
            should_quit: false,
        }
    }

    pub fn focused_input(&mut self) -> &mut String {
        match self.focus {
            Focus::Chat => &mut self.chat_input,
            Focus::Console => &mut self.console_input,
        }
    }

    /// Frames from a replaced session are ignored.
    pub fn apply_frame(&mut self, frame: PlaybackFrame) {
        if frame.session >= self.hero.session {
            self.hero = frame;
        }
    }

    /// Post the chat input. Blank input is left in place and ignored.
    pub fn submit_chat(&mut self) -> Option<PendingReply> {
        if self.chat_input.trim().is_empty() {
            return None;
        }
        let question = std::mem::take(&mut self.chat_input);
        let selection = self.selector.select(&question);
        let reply = PendingReply {
            question: question.clone(),
            response: selection.response.to_string(),
            rule: selection.rule,
        };
        self.chat.push(ChatLine { speaker: Speaker::User, text: question });
        Some(reply)
    }

    pub fn receive_reply(&mut self, text: String) {
        self.chat.push(ChatLine { speaker: Speaker::Bot, text });
    }

    /// Run the console input. The field is cleared even for blank input.
    pub fn submit_console(&mut self) -> Option<(String, CommandMatch)> {
        let input = std::mem::take(&mut self.console_input);
        let matched = self.console.submit(&input)?;
        Some((input, matched))
    }
}
