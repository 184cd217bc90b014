//! Site theme: global stylesheet and shared colors.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
