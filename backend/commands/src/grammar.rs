/// `send_message` grammar — a small hand-written scanner.
///
/// ```text
/// ws* send_message "(" ws* QUOTED ws* "," ws* QUOTED ws* ")" ws*
/// ```
///
/// `QUOTED` is `"` followed by any characters except `"`, then `"`. There are
/// no escape sequences. The recipient must be non-empty; the body may be empty
/// and may span lines.
use crate::types::{CommandMatch, GrammarMismatch, SendMessage};

/// The only recognized command name.
pub const COMMAND_NAME: &str = "send_message";

/// Example invocation for `address`, used in the console's hint and diagnostic.
pub fn usage(address: &str, message: &str) -> String {
    format!("{COMMAND_NAME}(\"{address}\", \"{message}\")")
}

/// Match a line of input against the grammar.
pub fn parse(input: &str) -> CommandMatch {
    match parse_send_message(input) {
        Ok(cmd) => CommandMatch::Recognized(cmd),
        Err(reason) => CommandMatch::Unrecognized(reason),
    }
}

/// Parse `input`, returning the precise reason on failure.
pub fn parse_send_message(input: &str) -> Result<SendMessage, GrammarMismatch> {
    let mut sc = Scanner::new(input);

    sc.skip_ws();
    if sc.at_end() {
        return Err(GrammarMismatch::Empty);
    }

    let name = sc.take_while(|c| !c.is_whitespace() && c != '(');
    if name != COMMAND_NAME {
        return Err(GrammarMismatch::UnknownCommand(name.to_string()));
    }
    if !sc.eat('(') {
        return Err(GrammarMismatch::ExpectedOpenParen(sc.pos));
    }

    sc.skip_ws();
    let email = sc.quoted()?;
    if email.is_empty() {
        return Err(GrammarMismatch::EmptyRecipient);
    }

    sc.skip_ws();
    match sc.peek() {
        Some(',') => sc.bump(),
        Some(')') => return Err(GrammarMismatch::MissingArgument),
        _ => return Err(GrammarMismatch::ExpectedComma(sc.pos)),
    }

    sc.skip_ws();
    let body = sc.quoted()?;

    sc.skip_ws();
    match sc.peek() {
        Some(')') => sc.bump(),
        Some(',') => return Err(GrammarMismatch::TooManyArguments),
        _ => return Err(GrammarMismatch::ExpectedCloseParen(sc.pos)),
    }

    sc.skip_ws();
    if !sc.at_end() {
        return Err(GrammarMismatch::TrailingInput(sc.pos));
    }

    Ok(SendMessage {
        email: email.to_string(),
        body: body.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Scanner
// ---------------------------------------------------------------------------

struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let len = rest.find(|c: char| !pred(c)).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    fn skip_ws(&mut self) {
        self.take_while(char::is_whitespace);
    }

    /// Read a double-quoted argument and return its contents.
    fn quoted(&mut self) -> Result<&'a str, GrammarMismatch> {
        let open = self.pos;
        if !self.eat('"') {
            return Err(GrammarMismatch::ExpectedQuote(open));
        }
        let rest = self.rest();
        let Some(len) = rest.find('"') else {
            return Err(GrammarMismatch::UnterminatedString(open));
        };
        self.pos += len + 1;
        Ok(&rest[..len])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(input: &str) -> SendMessage {
        parse_send_message(input).unwrap()
    }

    fn err(input: &str) -> GrammarMismatch {
        parse_send_message(input).unwrap_err()
    }

    #[test]
    fn accepts_canonical_form() {
        let cmd = ok(r#"send_message("a@b.com", "hi")"#);
        assert_eq!(cmd.email, "a@b.com");
        assert_eq!(cmd.body, "hi");
    }

    #[test]
    fn accepts_surrounding_whitespace() {
        let cmd = ok("  send_message(  \"a@b.com\"  ,\t\"hi there\"  )  ");
        assert_eq!(cmd.email, "a@b.com");
        assert_eq!(cmd.body, "hi there");
    }

    #[test]
    fn keeps_arguments_verbatim() {
        let cmd = ok(r#"send_message("not an email", "hi, (you) ✓")"#);
        assert_eq!(cmd.email, "not an email");
        assert_eq!(cmd.body, "hi, (you) ✓");
    }

    #[test]
    fn body_may_be_empty_or_multiline() {
        assert_eq!(ok(r#"send_message("a@b.com", "")"#).body, "");
        assert_eq!(ok("send_message(\"a@b.com\", \"one\ntwo\")").body, "one\ntwo");
    }

    #[test]
    fn rejects_missing_quotes() {
        assert_eq!(err("send_message(a@b.com, hi)"), GrammarMismatch::ExpectedQuote(13));
    }

    #[test]
    fn rejects_other_command_names() {
        assert_eq!(
            err(r#"send_mail("a@b.com", "hi")"#),
            GrammarMismatch::UnknownCommand("send_mail".into())
        );
        assert_eq!(err("help"), GrammarMismatch::UnknownCommand("help".into()));
        assert_eq!(
            err(r#"SEND_MESSAGE("a@b.com", "hi")"#),
            GrammarMismatch::UnknownCommand("SEND_MESSAGE".into())
        );
    }

    #[test]
    fn rejects_space_before_paren() {
        assert_eq!(
            err(r#"send_message ("a@b.com", "hi")"#),
            GrammarMismatch::ExpectedOpenParen(12)
        );
    }

    #[test]
    fn rejects_wrong_argument_count() {
        assert_eq!(err(r#"send_message("a@b.com")"#), GrammarMismatch::MissingArgument);
        assert_eq!(
            err(r#"send_message("a@b.com", "hi", "extra")"#),
            GrammarMismatch::TooManyArguments
        );
        assert_eq!(err("send_message()"), GrammarMismatch::ExpectedQuote(13));
    }

    #[test]
    fn rejects_unbalanced_quotes() {
        assert_eq!(
            err(r#"send_message("a@b.com", "hi)"#),
            GrammarMismatch::UnterminatedString(24)
        );
        assert_eq!(
            err(r#"send_message("a@b.com, "hi")"#),
            GrammarMismatch::ExpectedComma(24)
        );
    }

    #[test]
    fn rejects_embedded_quote_in_body() {
        assert!(matches!(
            err(r#"send_message("a@b.com", "say "hi"")"#),
            GrammarMismatch::ExpectedCloseParen(_)
        ));
    }

    #[test]
    fn rejects_empty_recipient() {
        assert_eq!(err(r#"send_message("", "hi")"#), GrammarMismatch::EmptyRecipient);
    }

    #[test]
    fn rejects_trailing_input() {
        assert_eq!(
            err(r#"send_message("a@b.com", "hi"); rm"#),
            GrammarMismatch::TrailingInput(29)
        );
    }

    #[test]
    fn rejects_missing_close_paren() {
        assert_eq!(
            err(r#"send_message("a@b.com", "hi""#),
            GrammarMismatch::ExpectedCloseParen(28)
        );
    }

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(err("   "), GrammarMismatch::Empty);
        assert!(!parse("").is_recognized());
    }

    #[test]
    fn usage_names_the_command() {
        assert_eq!(usage("x@y.z", "message"), r#"send_message("x@y.z", "message")"#);
    }
}
