//! Response rule types.

// ---------------------------------------------------------------------------
// Matcher
// ---------------------------------------------------------------------------

/// Keyword predicate evaluated against lowercased input. Keywords are
/// lowercased on construction, so matching is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// Input contains the keyword.
    Contains(String),
    /// Input contains at least one keyword. Never matches when empty.
    AnyOf(Vec<String>),
    /// Input contains every keyword. Always matches when empty.
    AllOf(Vec<String>),
}

impl Matcher {
    pub fn contains(keyword: impl AsRef<str>) -> Self {
        Self::Contains(keyword.as_ref().to_lowercase())
    }

    pub fn any_of<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::AnyOf(keywords.into_iter().map(|k| k.as_ref().to_lowercase()).collect())
    }

    pub fn all_of<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::AllOf(keywords.into_iter().map(|k| k.as_ref().to_lowercase()).collect())
    }

    /// `text` must already be lowercased.
    pub(crate) fn matches(&self, text: &str) -> bool {
        match self {
            Self::Contains(k) => text.contains(k.as_str()),
            Self::AnyOf(ks) => ks.iter().any(|k| text.contains(k.as_str())),
            Self::AllOf(ks) => ks.iter().all(|k| text.contains(k.as_str())),
        }
    }
}

// ---------------------------------------------------------------------------
// Rule
// ---------------------------------------------------------------------------

/// A predicate paired with the canned response it selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseRule {
    pub matcher: Matcher,
    pub response: String,
}

impl ResponseRule {
    pub fn new(matcher: Matcher, response: impl Into<String>) -> Self {
        Self { matcher, response: response.into() }
    }

    /// Shorthand for a single-keyword rule.
    pub fn keyword(keyword: impl AsRef<str>, response: impl Into<String>) -> Self {
        Self::new(Matcher::contains(keyword), response)
    }
}
