//! Keyboard classification, WCAG contrast checks and live-region announcements.

pub mod announcer;
pub mod contrast;
pub mod keys;

pub use announcer::{
    ANNOUNCEMENT_CLEAR_DELAY, Announcement, LiveAnnouncer, Politeness, announce, clear_after,
};
pub use contrast::{WcagLevel, contrast_ratio, meets_contrast_ratio};
pub use keys::{Key, is_activation_key, is_navigation_key};

pub use crate::id::generate_id;
