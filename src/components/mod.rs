//! UI Components
//!
//! Presentation components for the gallery.

mod gif_card;
mod category_pill;
mod star_decoration;
mod favorites_toggle;
mod empty_state;

pub use gif_card::{GifCard, CARD_DELAY_STEP};
pub use category_pill::{CategoryPill, PILL_DELAY_STEP};
pub use star_decoration::{StarDecoration, STARS};
pub use favorites_toggle::FavoritesToggle;
pub use empty_state::EmptyState;
