//! Hooks binding core state machines to timers and browser events.

mod animation;
mod scroll;
mod visibility;

pub use animation::{use_carousel, use_count_up, use_delayed_flag};
pub use scroll::use_scrolled;
pub use visibility::{reveal_class, use_visibility, Visibility};
