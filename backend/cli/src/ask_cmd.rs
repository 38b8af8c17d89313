//! `labconsole ask` — one question to the lab assistant.

use labconsole_logging::{ConsoleEvent, EventLogger};
use labconsole_responder::ResponseSelector;

pub fn run(selector: &ResponseSelector, question: &str, log: &EventLogger) {
    let selection = selector.select(question);
    log.log(ConsoleEvent::AssistantReply {
        question: question.to_string(),
        rule: selection.rule,
    });
    println!("{}", selection.response);
}
