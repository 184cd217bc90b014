//! Reusable presentation components.

mod button;
mod glyph;
mod typewriter;

pub use button::*;
pub use glyph::*;
pub use typewriter::*;
