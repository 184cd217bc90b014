//! Geometry for the stats bar chart and the about-page donut chart.

use std::f64::consts::PI;

/// Top of the bar chart's hour axis.
pub const BAR_AXIS_MAX: i64 = 120;

/// Y-axis labels, top to bottom.
pub const BAR_AXIS_LABELS: [i64; 7] = [120, 100, 80, 60, 40, 20, 0];

/// Bar height as a percentage of the chart area.
pub fn bar_height_percent(value: i64) -> f64 {
    (value.clamp(0, BAR_AXIS_MAX) as f64 / BAR_AXIS_MAX as f64) * 100.0
}

/// Vertical position (percent from top) of the grid line for label `index`.
pub fn grid_line_offset(index: usize) -> f64 {
    (index as f64 / (BAR_AXIS_LABELS.len() - 1) as f64) * 100.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutSegment {
    pub percent: f64,
    pub color: &'static str,
    pub label: &'static str,
}

/// Stroke parameters for one drawn segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutArc {
    pub dash_length: f64,
    pub dash_offset: f64,
    pub circumference: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutGeometry {
    pub radius: f64,
    pub stroke_width: f64,
}

impl DonutGeometry {
    pub const DEFAULT: DonutGeometry = DonutGeometry {
        radius: 80.0,
        stroke_width: 24.0,
    };

    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// Arcs for `segments` at `progress` percent (0 to 100) of the draw-in.
    pub fn arcs(&self, segments: &[DonutSegment], progress: f64) -> Vec<DonutArc> {
        let circumference = self.circumference();
        let progress = progress.clamp(0.0, 100.0) / 100.0;
        let mut cumulative = 0.0;
        segments
            .iter()
            .map(|segment| {
                let arc = DonutArc {
                    dash_length: segment.percent / 100.0 * circumference * progress,
                    dash_offset: -(cumulative / 100.0 * circumference),
                    circumference,
                };
                cumulative += segment.percent;
                arc
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEGMENTS: [DonutSegment; 2] = [
        DonutSegment {
            percent: 25.0,
            color: "#000",
            label: "a",
        },
        DonutSegment {
            percent: 75.0,
            color: "#fff",
            label: "b",
        },
    ];

    #[test]
    fn bar_heights() {
        assert_eq!(bar_height_percent(120), 100.0);
        assert_eq!(bar_height_percent(6), 5.0);
        assert_eq!(bar_height_percent(0), 0.0);
        assert_eq!(bar_height_percent(500), 100.0);
    }

    #[test]
    fn grid_lines_span_the_chart() {
        assert_eq!(grid_line_offset(0), 0.0);
        assert_eq!(grid_line_offset(6), 100.0);
    }

    #[test]
    fn donut_arcs_are_hidden_before_progress() {
        let arcs = DonutGeometry::DEFAULT.arcs(&SEGMENTS, 0.0);
        assert!(arcs.iter().all(|arc| arc.dash_length == 0.0));
    }

    #[test]
    fn donut_arcs_cover_the_ring_when_complete() {
        let geometry = DonutGeometry::DEFAULT;
        let arcs = geometry.arcs(&SEGMENTS, 100.0);
        let total: f64 = arcs.iter().map(|arc| arc.dash_length).sum();
        assert!((total - geometry.circumference()).abs() < 1e-9);
        assert_eq!(arcs[0].dash_offset, 0.0);
        assert!((arcs[1].dash_offset + geometry.circumference() / 4.0).abs() < 1e-9);
    }
}
