//! Gallery Models
//!
//! Catalog entries, categories and the transient filter state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category tag of a catalog item. `All` is the wildcard used by filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    All,
    Classic,
    Meme,
    Work,
    Sleepy,
    Hunting,
}

impl Category {
    /// Display order of the category pills
    pub const ALL: [Category; 6] = [
        Category::All,
        Category::Classic,
        Category::Meme,
        Category::Work,
        Category::Sleepy,
        Category::Hunting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Classic => "classic",
            Category::Meme => "meme",
            Category::Work => "work",
            Category::Sleepy => "sleepy",
            Category::Hunting => "hunting",
        }
    }

    /// Capitalized label for pills
    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Classic => "Classic",
            Category::Meme => "Meme",
            Category::Work => "Work",
            Category::Sleepy => "Sleepy",
            Category::Hunting => "Hunting",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Category::All => "🌟",
            Category::Classic => "📼",
            Category::Meme => "🎭",
            Category::Work => "💻",
            Category::Sleepy => "😴",
            Category::Hunting => "🎯",
        }
    }

    /// Whether an item tagged `category` passes this filter
    pub fn matches(&self, category: Category) -> bool {
        *self == Category::All || *self == category
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A single animation in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub url: String,
    pub title: String,
    pub category: Category,
}

impl Item {
    pub fn new(id: u32, url: &str, title: &str, category: Category) -> Self {
        Self {
            id,
            url: url.to_string(),
            title: title.to_string(),
            category,
        }
    }

    /// Zero-padded id shown under the card title, e.g. `#007`
    pub fn display_id(&self) -> String {
        format!("#{:03}", self.id)
    }
}

/// Transient view parameters, reset on reload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterState {
    pub selected_category: Category,
    pub show_favorites_only: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            selected_category: Category::All,
            show_favorites_only: false,
        }
    }
}
