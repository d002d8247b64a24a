//! Static Catalog
//!
//! The fixed list of cat animations shown by the gallery.

use crate::models::{Category, Item};

/// (id, url, title, category)
const CAT_GIFS: &[(u32, &str, &str, Category)] = &[
    (1, "https://media.giphy.com/media/JIX9t2j0ZTN9S/giphy.gif", "Keyboard Cat", Category::Classic),
    (2, "https://media.giphy.com/media/mlvseq9yvZhba/giphy.gif", "Nyan Cat Energy", Category::Meme),
    (3, "https://media.giphy.com/media/VbnUQpnihPSIgIXuZv/giphy.gif", "Cat Computing", Category::Work),
    (4, "https://media.giphy.com/media/ICOgUNjpvO0PC/giphy.gif", "Laser Focus", Category::Hunting),
    (5, "https://media.giphy.com/media/3oriO0OEd9QIDdllqo/giphy.gif", "Sleepy Boi", Category::Sleepy),
    (6, "https://media.giphy.com/media/BzyTuYCmvSORqs1ABM/giphy.gif", "Dance Mode", Category::Meme),
    (7, "https://media.giphy.com/media/nR4L10XlJcSeQ/giphy.gif", "Box Life", Category::Classic),
    (8, "https://media.giphy.com/media/o0vwzuFwCGAFO/giphy.gif", "Surprise!", Category::Hunting),
    (9, "https://media.giphy.com/media/GeimqsH0TLDt4tScGw/giphy.gif", "Big Stretch", Category::Sleepy),
    (10, "https://media.giphy.com/media/vFKqnCdLPNOKc/giphy.gif", "Working Hard", Category::Work),
    (11, "https://media.giphy.com/media/xT0BKk9aPtLzKJiUi4/giphy.gif", "Mind Blown", Category::Meme),
    (12, "https://media.giphy.com/media/l4pTfx2qLszoacZRS/giphy.gif", "Paw Power", Category::Classic),
];

/// Build the catalog in display order
pub fn cat_gifs() -> Vec<Item> {
    CAT_GIFS
        .iter()
        .map(|(id, url, title, category)| Item::new(*id, url, title, *category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_unique() {
        let items = cat_gifs();
        let ids: HashSet<u32> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids.len(), items.len());
        assert_eq!(items.len(), 12);
    }

    #[test]
    fn test_catalog_never_uses_wildcard() {
        assert!(cat_gifs().iter().all(|i| i.category != Category::All));
    }

    #[test]
    fn test_every_category_has_items() {
        let items = cat_gifs();
        for category in Category::ALL.iter().skip(1) {
            assert!(items.iter().any(|i| i.category == *category), "no items for {}", category);
        }
    }
}
