//! Color constants for inline SVG, where CSS custom properties do not reach.

/// Unfilled donut ring.
pub const CHART_TRACK: &str = "#e0f2fe";
