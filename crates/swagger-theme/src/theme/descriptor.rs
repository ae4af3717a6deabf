//! Theme metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The grouping a theme is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    System,
    Light,
    Dark,
    Colored,
    Modern,
    Subtle,
    Classic,
    Minimal,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 8] = [
        Category::System,
        Category::Light,
        Category::Dark,
        Category::Colored,
        Category::Modern,
        Category::Subtle,
        Category::Classic,
        Category::Minimal,
    ];

    /// The lowercase name used in attributes and event payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::System => "system",
            Category::Light => "light",
            Category::Dark => "dark",
            Category::Colored => "colored",
            Category::Modern => "modern",
            Category::Subtle => "subtle",
            Category::Classic => "classic",
            Category::Minimal => "minimal",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme category '{0}'")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Display metadata for a single theme.
///
/// Descriptors are immutable once a registry is built.
///
/// # Example
///
/// ```rust
/// use swagger_theme::{Category, ThemeDescriptor};
///
/// let dracula = ThemeDescriptor::new("Dracula", "🧛", Category::Dark);
/// assert_eq!(dracula.label(), "🧛 Dracula");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDescriptor {
    pub name: String,
    pub emoji: String,
    pub category: Category,
}

impl ThemeDescriptor {
    /// Creates a descriptor.
    pub fn new(name: impl Into<String>, emoji: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            emoji: emoji.into(),
            category,
        }
    }

    /// Emoji followed by the display name, as shown in a selector option.
    pub fn label(&self) -> String {
        format!("{} {}", self.emoji, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_category_parse_is_case_insensitive() {
        assert_eq!(" Dark ".parse::<Category>(), Ok(Category::Dark));
    }

    #[test]
    fn test_category_parse_unknown() {
        let err = "neon".parse::<Category>().unwrap_err();
        assert!(err.to_string().contains("neon"));
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Colored).unwrap();
        assert_eq!(json, "\"colored\"");
    }

    #[test]
    fn test_descriptor_label() {
        let d = ThemeDescriptor::new("Nord Dark", "🏔️", Category::Dark);
        assert_eq!(d.label(), "🏔️ Nord Dark");
    }
}
