//! Expense categories
//!
//! The shell offers six standard labels. Any other non-blank label is kept
//! as a custom category unless strict categories are enabled.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label attached to an expense
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Shopping,
    Utilities,
    Other,
    /// Free-form label typed by the user
    Custom(String),
}

impl Category {
    /// The standard labels, in the order the shell offers them
    pub const STANDARD: [Category; 6] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Shopping,
        Category::Utilities,
        Category::Other,
    ];

    /// Parse a category label, returning `None` for blank input
    ///
    /// Standard labels match case-insensitively; anything else becomes
    /// [`Category::Custom`] with surrounding whitespace removed.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.is_empty() {
            return None;
        }

        let standard = Self::STANDARD
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(label))
            .cloned();

        Some(standard.unwrap_or_else(|| Self::Custom(label.to_string())))
    }

    /// The display label
    pub fn as_str(&self) -> &str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Utilities => "Utilities",
            Self::Other => "Other",
            Self::Custom(label) => label,
        }
    }

    /// Whether this is one of the six standard labels
    pub fn is_standard(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self::parse(&label).unwrap_or(Self::Custom(label))
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Custom(label) => label,
            standard => standard.as_str().to_string(),
        }
    }
}

/// How strictly the budget core checks category labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryPolicy {
    /// Any non-blank label is accepted
    #[default]
    Permissive,
    /// Only the standard labels are accepted
    Strict,
}

impl CategoryPolicy {
    pub fn from_strict_flag(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Permissive
        }
    }

    pub fn allows(&self, category: &Category) -> bool {
        match self {
            Self::Permissive => true,
            Self::Strict => category.is_standard(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_standard_case_insensitive() {
        assert_eq!(Category::parse("Food"), Some(Category::Food));
        assert_eq!(Category::parse("  utilities "), Some(Category::Utilities));
        assert_eq!(Category::parse("SHOPPING"), Some(Category::Shopping));
    }

    #[test]
    fn test_standard_labels_are_stored_canonically() {
        assert_eq!(Category::parse("food").unwrap().to_string(), "Food");
        assert_eq!(Category::parse("tRaNsPoRt").unwrap().as_str(), "Transport");
        // Custom labels keep their spelling
        assert_eq!(Category::parse("pets").unwrap().to_string(), "pets");
    }

    #[test]
    fn test_parse_custom_and_blank() {
        assert_eq!(
            Category::parse(" Pets "),
            Some(Category::Custom("Pets".into()))
        );
        assert_eq!(Category::parse(""), None);
        assert_eq!(Category::parse("   "), None);
    }

    #[test]
    fn test_policy() {
        let pets = Category::Custom("Pets".into());
        assert!(CategoryPolicy::Permissive.allows(&pets));
        assert!(!CategoryPolicy::Strict.allows(&pets));
        assert!(CategoryPolicy::Strict.allows(&Category::Other));
        assert_eq!(CategoryPolicy::from_strict_flag(true), CategoryPolicy::Strict);
    }

    #[test]
    fn test_serde_as_label() {
        let json = serde_json::to_string(&Category::Transport).unwrap();
        assert_eq!(json, "\"Transport\"");

        let custom: Category = serde_json::from_str("\"Gym\"").unwrap();
        assert_eq!(custom, Category::Custom("Gym".into()));
    }
}
