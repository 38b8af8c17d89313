use serde::{Deserialize, Serialize};

/// Subject line used for every contact-console mail.
pub const DEFAULT_SUBJECT: &str = "Portfolio Contact";

/// A mail payload built by the contact console and handed to the environment
/// for dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailIntent {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl MailIntent {
    pub fn new(to: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: DEFAULT_SUBJECT.to_string(),
            body: body.into(),
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Render as a `mailto:` URI with every component percent-encoded.
    pub fn mailto_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            urlencoding::encode(&self.to),
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_fixed_subject_by_default() {
        let intent = MailIntent::new("a@b.com", "hi");
        assert_eq!(intent.subject, "Portfolio Contact");
    }

    #[test]
    fn mailto_encodes_all_parts() {
        let intent = MailIntent::new("a+b@c.com", "Let's talk & plan");
        assert_eq!(
            intent.mailto_uri(),
            "mailto:a%2Bb%40c.com?subject=Portfolio%20Contact&body=Let%27s%20talk%20%26%20plan"
        );
    }

    #[test]
    fn mailto_keeps_newlines_encoded() {
        let intent = MailIntent::new("x@y.z", "line one\nline two");
        assert!(intent.mailto_uri().ends_with("body=line%20one%0Aline%20two"));
    }
}
