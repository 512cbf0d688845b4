// src/testing/matcher.rs
// Text matchers for queries

use regex::Regex;
use std::fmt;

pub use crate::ui::aria::normalize_whitespace as normalize;

/// How a query compares candidate text
///
/// Plain strings convert to a case-insensitive substring match, the usual
/// choice for smoke tests (`"add task"` finds "Add Task"). Use
/// [`TextMatch::exact`] for full-string equality.
#[derive(Debug, Clone)]
pub enum TextMatch {
    /// Whole normalized text equals the string
    Exact(String),
    /// Normalized text contains the string, ignoring case
    Contains(String),
    /// Regex search against the normalized text
    Pattern(Regex),
}

impl TextMatch {
    pub fn exact(text: impl Into<String>) -> Self {
        TextMatch::Exact(normalize(&text.into()))
    }

    pub fn ignore_case(text: impl Into<String>) -> Self {
        TextMatch::Contains(normalize(&text.into()).to_lowercase())
    }

    pub fn regex(pattern: Regex) -> Self {
        TextMatch::Pattern(pattern)
    }

    /// Test already-normalized text
    pub fn matches(&self, text: &str) -> bool {
        match self {
            TextMatch::Exact(expected) => text == expected,
            TextMatch::Contains(needle) => text.to_lowercase().contains(needle.as_str()),
            TextMatch::Pattern(pattern) => pattern.is_match(text),
        }
    }

    /// Normalize `raw`, then test it
    pub fn matches_raw(&self, raw: &str) -> bool {
        self.matches(&normalize(raw))
    }
}

impl fmt::Display for TextMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextMatch::Exact(expected) => write!(f, "\"{}\"", expected),
            TextMatch::Contains(needle) => write!(f, "/{}/i", needle),
            TextMatch::Pattern(pattern) => write!(f, "/{}/", pattern.as_str()),
        }
    }
}

impl From<&str> for TextMatch {
    fn from(text: &str) -> Self {
        TextMatch::ignore_case(text)
    }
}

impl From<String> for TextMatch {
    fn from(text: String) -> Self {
        TextMatch::ignore_case(text)
    }
}

impl From<Regex> for TextMatch {
    fn from(pattern: Regex) -> Self {
        TextMatch::Pattern(pattern)
    }
}

impl From<&Regex> for TextMatch {
    fn from(pattern: &Regex) -> Self {
        TextMatch::Pattern(pattern.clone())
    }
}
