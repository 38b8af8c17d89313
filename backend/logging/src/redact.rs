//! Log Redaction
//!
//! Contact submissions carry email addresses; they are masked before they
//! reach any log sink.

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([A-Za-z0-9._%+\-])[A-Za-z0-9._%+\-]*@([A-Za-z0-9\-]+\.)+[A-Za-z]{2,}")
        .expect("valid email regex")
});

/// Mask every email address in free text.
pub fn redact_sensitive_data(input: &str) -> String {
    EMAIL_RE.replace_all(input, "${1}***@[REDACTED]").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redacts_addresses_in_text() {
        let raw = r#"send_message("hello@albari.dev", "ping a.b+c@mail.example.org")"#;
        let clean = redact_sensitive_data(raw);
        assert!(!clean.contains("hello@albari.dev"));
        assert!(!clean.contains("mail.example.org"));
        assert!(clean.contains("h***@[REDACTED]"));
        assert!(clean.contains("a***@[REDACTED]"));
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(redact_sensitive_data("tell me about flutter"), "tell me about flutter");
    }
}
