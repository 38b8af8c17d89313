//! Rule-based response selector.
//!
//! Matches free-form input against an ordered list of keyword rules and
//! returns the first match's canned response, or a fallback. Selection is a
//! pure function of the input and the rule list.

pub mod builtin;
pub mod evaluator;
pub mod types;

pub use builtin::{lab_assistant, lab_assistant_rules, FALLBACK, GREETING};
pub use evaluator::{ResponseSelector, Selection};
pub use types::{Matcher, ResponseRule};
