//! Gallery Configuration

use log::LevelFilter;

/// localStorage key holding the favorites list
pub const FAVORITES_KEY: &str = "catgif-favorites";

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    /// Storage key the controller reads and writes favorites under
    pub favorites_key: String,
    /// Console log threshold
    pub log_level: LevelFilter,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            favorites_key: FAVORITES_KEY.to_string(),
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}
