//! Wildcard-or-exact field patterns.
//!
//! Event templates describe the audit rows they handle with one `Pattern` per
//! match field. `Any` replaces the `"*"` sentinel string so a literal `"*"`
//! coming from data can never be mistaken for a wildcard.

use std::fmt;

/// A match pattern for one audit record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern<T> {
    /// Matches every value.
    Any,
    /// Matches only this value.
    Exact(T),
}

impl<T: PartialEq> Pattern<T> {
    /// Check whether `value` satisfies this pattern.
    #[must_use]
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(expected) => expected == value,
        }
    }

    /// Check whether some value satisfies both patterns.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Any, _) | (_, Self::Any) => true,
            (Self::Exact(a), Self::Exact(b)) => a == b,
        }
    }
}

impl<T> Pattern<T> {
    /// `true` for `Exact` patterns.
    #[must_use]
    pub const fn is_concrete(&self) -> bool {
        matches!(self, Self::Exact(_))
    }

    /// The concrete value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Any => None,
            Self::Exact(value) => Some(value),
        }
    }
}

impl Pattern<&'static str> {
    /// Match a string pattern against a borrowed field value.
    #[must_use]
    pub fn matches_str(&self, value: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(expected) => *expected == value,
        }
    }
}

impl Pattern<String> {
    /// Parse a textual filter, treating `"*"` as the wildcard.
    ///
    /// Only meant for user-facing boundaries such as CLI filters.
    #[must_use]
    pub fn parse_filter(text: &str) -> Self {
        if text == "*" {
            Self::Any
        } else {
            Self::Exact(text.to_string())
        }
    }
}

impl<T: fmt::Display> fmt::Display for Pattern<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("*"),
            Self::Exact(value) => value.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_matches_everything() {
        let pattern: Pattern<&str> = Pattern::Any;
        assert!(pattern.matches(&"createMTOShipment"));
        assert!(pattern.matches(&""));
        assert!(pattern.matches_str("*"));
    }

    #[test]
    fn exact_matches_only_equal_values() {
        let pattern = Pattern::Exact("moves");
        assert!(pattern.matches_str("moves"));
        assert!(!pattern.matches_str("orders"));
        assert!(!pattern.matches_str("*"));
    }

    #[test]
    fn overlap_rules() {
        let any: Pattern<&str> = Pattern::Any;
        let moves = Pattern::Exact("moves");
        let orders = Pattern::Exact("orders");
        assert!(any.overlaps(&moves));
        assert!(moves.overlaps(&any));
        assert!(moves.overlaps(&moves));
        assert!(!moves.overlaps(&orders));
    }

    #[test]
    fn concreteness() {
        assert!(Pattern::Exact(1).is_concrete());
        assert!(!Pattern::<i32>::Any.is_concrete());
        assert_eq!(Pattern::Exact(7).value(), Some(&7));
    }

    #[test]
    fn filter_parsing_and_display() {
        assert_eq!(Pattern::parse_filter("*"), Pattern::Any);
        assert_eq!(
            Pattern::parse_filter("orders"),
            Pattern::Exact("orders".to_string())
        );
        assert_eq!(Pattern::<String>::Any.to_string(), "*");
        assert_eq!(Pattern::Exact("moves").to_string(), "moves");
    }
}
