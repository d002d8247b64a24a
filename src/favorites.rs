//! Favorites Codec
//!
//! Parsing and serializing the persisted favorites list.
//! The persisted form is a JSON array of item ids, e.g. `[1,4,9]`.

use std::collections::BTreeSet;
use std::fmt;

/// Set of favorited item ids. Ordered so the persisted list is stable.
pub type FavoriteSet = BTreeSet<u32>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoritesError {
    Malformed(String),
}

impl fmt::Display for FavoritesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FavoritesError::Malformed(msg) => write!(f, "Malformed favorites: {}", msg),
        }
    }
}

impl std::error::Error for FavoritesError {}

/// Parse a persisted favorites value.
///
/// Only a JSON array of non-negative integers is accepted. Duplicate ids
/// collapse into one entry.
pub fn parse_favorites(raw: &str) -> Result<FavoriteSet, FavoritesError> {
    let ids: Vec<u32> =
        serde_json::from_str(raw).map_err(|e| FavoritesError::Malformed(e.to_string()))?;
    Ok(ids.into_iter().collect())
}

/// Serialize favorites as a JSON array in ascending id order
pub fn serialize_favorites(favorites: &FavoriteSet) -> String {
    let ids: Vec<u32> = favorites.iter().copied().collect();
    // Vec<u32> always serializes
    serde_json::to_string(&ids).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_list() {
        let favorites = parse_favorites("[3, 1, 12]").unwrap();
        assert_eq!(favorites.into_iter().collect::<Vec<_>>(), vec![1, 3, 12]);
    }

    #[test]
    fn test_parse_empty_list() {
        assert!(parse_favorites("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_collapses_duplicates() {
        assert_eq!(parse_favorites("[2,2,2]").unwrap().len(), 1);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for raw in ["", "not json", "{\"a\":1}", "null", "[1, \"two\"]", "[-1]", "[1.5]", "7"] {
            assert!(
                matches!(parse_favorites(raw), Err(FavoritesError::Malformed(_))),
                "accepted {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_serialize_is_sorted_json() {
        let favorites: FavoriteSet = [9, 2, 5].into_iter().collect();
        assert_eq!(serialize_favorites(&favorites), "[2,5,9]");
        assert_eq!(serialize_favorites(&FavoriteSet::new()), "[]");
    }

    #[test]
    fn test_serialized_value_parses_back() {
        let favorites: FavoriteSet = [1, 7, 11].into_iter().collect();
        let raw = serialize_favorites(&favorites);
        assert_eq!(parse_favorites(&raw).unwrap(), favorites);
    }
}
