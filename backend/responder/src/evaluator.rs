//! Response selection: first matching rule wins, otherwise the fallback.

use crate::types::ResponseRule;

/// Which rule produced a response. `rule` is `None` for the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a> {
    pub rule: Option<usize>,
    pub response: &'a str,
}

/// Ordered rule list plus a fallback. Immutable once built.
#[derive(Debug, Clone)]
pub struct ResponseSelector {
    rules: Vec<ResponseRule>,
    fallback: String,
}

impl ResponseSelector {
    pub fn new(rules: Vec<ResponseRule>, fallback: impl Into<String>) -> Self {
        Self { rules, fallback: fallback.into() }
    }

    pub fn rules(&self) -> &[ResponseRule] {
        &self.rules
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Evaluate rules top to bottom against the lowercased input.
    pub fn select(&self, input: &str) -> Selection<'_> {
        let text = input.to_lowercase();
        self.rules
            .iter()
            .position(|rule| rule.matcher.matches(&text))
            .map(|idx| Selection {
                rule: Some(idx),
                response: &self.rules[idx].response,
            })
            .unwrap_or(Selection {
                rule: None,
                response: &self.fallback,
            })
    }

    pub fn respond(&self, input: &str) -> &str {
        self.select(input).response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Matcher;

    fn selector() -> ResponseSelector {
        ResponseSelector::new(
            vec![
                ResponseRule::keyword("flutter", "R1"),
                ResponseRule::keyword("ai", "R2"),
            ],
            "D",
        )
    }

    #[test]
    fn first_match_wins() {
        let s = selector();
        assert_eq!(s.respond("flutter ai"), "R1");
        assert_eq!(s.respond("ai and flutter"), "R1");
        assert_eq!(s.respond("tell me about ai"), "R2");
    }

    #[test]
    fn falls_back_when_nothing_matches() {
        let s = selector();
        assert_eq!(s.respond("nothing relevant"), "D");
        assert_eq!(s.respond(""), "D");
        assert_eq!(s.select("nothing relevant").rule, None);
    }

    #[test]
    fn matching_ignores_case() {
        let s = selector();
        assert_eq!(s.respond("FLUTTER"), s.respond("flutter"));
        assert_eq!(s.respond("Ai"), "R2");

        let upper = ResponseSelector::new(vec![ResponseRule::keyword("Flutter", "R1")], "D");
        assert_eq!(upper.respond("flutter"), "R1");
    }

    #[test]
    fn matching_is_substring_based() {
        // "said" contains "ai"
        assert_eq!(selector().respond("she said so"), "R2");
    }

    #[test]
    fn select_reports_rule_index() {
        let s = selector();
        assert_eq!(s.select("ai").rule, Some(1));
        assert_eq!(s.select("flutter").rule, Some(0));
    }

    #[test]
    fn any_of_and_all_of() {
        let s = ResponseSelector::new(
            vec![
                ResponseRule::new(Matcher::all_of(["flutter", "sensor"]), "both"),
                ResponseRule::new(Matcher::any_of(["arduino", "hardware"]), "hw"),
                ResponseRule::new(Matcher::any_of(Vec::<String>::new()), "never"),
            ],
            "D",
        );
        assert_eq!(s.respond("flutter talking to a sensor"), "both");
        assert_eq!(s.respond("flutter only"), "D");
        assert_eq!(s.respond("HARDWARE"), "hw");
    }

    #[test]
    fn repeated_calls_are_stable() {
        let s = selector();
        let first: Vec<&str> = ["x", "flutter", "ai"].iter().map(|i| s.respond(i)).collect();
        let second: Vec<&str> = ["x", "flutter", "ai"].iter().map(|i| s.respond(i)).collect();
        assert_eq!(first, second);
    }
}
