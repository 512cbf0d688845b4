// src/testing/failure.rs
// The error every failed query or assertion produces

use thiserror::Error;

/// Longest document dump attached to a failure message
pub const DEBUG_PRINT_LIMIT: usize = 7000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    NotFound,
    Multiple(usize),
}

/// A query found zero or more than one matching element
#[derive(Error, Debug, Clone)]
#[error("{headline}\n\n{dom}", headline = headline(.reason, .query))]
pub struct AssertionFailure {
    pub reason: FailureReason,
    /// Query description, e.g. `with the text: /task manager/i`
    pub query: String,
    /// Pretty-printed document at the time of the query
    pub dom: String,
}

impl AssertionFailure {
    pub fn not_found(query: impl Into<String>, dom: String) -> Self {
        Self {
            reason: FailureReason::NotFound,
            query: query.into(),
            dom: truncate_dom(dom),
        }
    }

    pub fn multiple(count: usize, query: impl Into<String>, dom: String) -> Self {
        Self {
            reason: FailureReason::Multiple(count),
            query: query.into(),
            dom: truncate_dom(dom),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.reason == FailureReason::NotFound
    }
}

fn headline(reason: &FailureReason, query: &str) -> String {
    match reason {
        FailureReason::NotFound => format!("Unable to find an element {}", query),
        FailureReason::Multiple(count) => {
            format!("Found multiple elements ({}) {}", count, query)
        }
    }
}

fn truncate_dom(mut dom: String) -> String {
    if dom.len() > DEBUG_PRINT_LIMIT {
        let mut cut = DEBUG_PRINT_LIMIT;
        while !dom.is_char_boundary(cut) {
            cut -= 1;
        }
        dom.truncate(cut);
        dom.push_str("...");
    }
    dom
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = AssertionFailure::not_found("with the text: /x/i", "<body>\n</body>\n".to_string());
        let message = err.to_string();
        assert!(message.starts_with("Unable to find an element with the text: /x/i"));
        assert!(message.contains("<body>"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_multiple_message() {
        let err = AssertionFailure::multiple(3, "with the role \"button\"", String::new());
        assert!(err.to_string().contains("Found multiple elements (3)"));
        assert_eq!(err.reason, FailureReason::Multiple(3));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_long_dumps_are_truncated() {
        let dom = "é".repeat(DEBUG_PRINT_LIMIT);
        let err = AssertionFailure::not_found("q", dom);
        assert!(err.dom.len() <= DEBUG_PRINT_LIMIT + 3);
        assert!(err.dom.ends_with("..."));
    }
}
