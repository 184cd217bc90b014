//! Content-status donut chart for the about page.

use dioxus::prelude::*;
use medhavy_core::chart::{DonutGeometry, DonutSegment};
use medhavy_core::content::DONUT_DELAY;
use medhavy_ui::use_delayed_flag;

use crate::theme::colors::CHART_TRACK;

const VIEW_SIZE: f64 = 220.0;

/// Content-status donut. Segments draw in shortly after `visible` flips;
/// the stroke transition in CSS does the animating.
#[component]
pub fn DonutChart(segments: Vec<DonutSegment>, visible: Signal<bool>) -> Element {
    let drawn = use_delayed_flag(visible, DONUT_DELAY);

    let geometry = DonutGeometry::DEFAULT;
    let progress = if drawn() { 100.0 } else { 0.0 };
    let arcs = geometry.arcs(&segments, progress);
    let size = VIEW_SIZE;
    let center = VIEW_SIZE / 2.0;

    rsx! {
        div { class: "donut",
            svg {
                width: "{size}",
                height: "{size}",
                view_box: "0 0 {size} {size}",
                class: "donut-ring",
                circle {
                    cx: "{center}",
                    cy: "{center}",
                    r: "{geometry.radius}",
                    fill: "transparent",
                    stroke: CHART_TRACK,
                    stroke_width: "{geometry.stroke_width}",
                }
                for (index, (segment, arc)) in segments.iter().zip(arcs).enumerate() {
                    circle {
                        key: "{segment.label}",
                        cx: "{center}",
                        cy: "{center}",
                        r: "{geometry.radius}",
                        fill: "transparent",
                        stroke: "{segment.color}",
                        stroke_width: "{geometry.stroke_width}",
                        stroke_dasharray: "{arc.dash_length} {arc.circumference}",
                        stroke_dashoffset: "{arc.dash_offset}",
                        class: "donut-arc",
                        style: "transition-delay: {index * 200}ms",
                    }
                }
            }

            div { class: "donut-legend",
                for segment in segments.iter() {
                    div { key: "{segment.label}", class: "legend-item",
                        div { class: "legend-swatch", style: "background-color: {segment.color}" }
                        span { "{segment.label}" }
                    }
                }
            }
            p { class: "chart-caption", "Growth in Accessible Intelligent Content (Projected 2025)" }
        }
    }
}
