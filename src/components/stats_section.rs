//! "Weeks to Hours": prep-time bar chart and stat cards.
//!
//! All three numbers count up together the first time the section is
//! scrolled into view.

use dioxus::prelude::*;
use medhavy_core::chart::{bar_height_percent, grid_line_offset, BAR_AXIS_LABELS};
use medhavy_core::content::{
    StatFigure, ASSISTED_HOURS, STAT_CARDS, TIME_REDUCTION_PERCENT, TRADITIONAL_HOURS,
};
use medhavy_core::visibility::DEFAULT_THRESHOLD;
use medhavy_core::Icon;
use medhavy_ui::{use_count_up, use_visibility, Glyph};

#[component]
pub fn StatsSection() -> Element {
    let reveal = use_visibility(DEFAULT_THRESHOLD);
    let counts = use_count_up(
        vec![TRADITIONAL_HOURS, ASSISTED_HOURS, TIME_REDUCTION_PERCENT],
        reveal.visible,
    );

    let values = counts();
    let value = |index: usize| values.get(index).copied().unwrap_or(0);
    let (traditional, assisted, reduction) = (value(0), value(1), value(2));

    rsx! {
        section { class: "stats-section",
            div { class: "stats-backdrop" }
            div { id: "{reveal.id}", class: "container stats-inner {reveal.class()}",
                div { class: "section-heading",
                    h2 { "Weeks to Hours" }
                    p {
                        "The \u{201C}Co-instructor\u{201D} model means AI proposes, and you dispose. "
                        "See the dramatic efficiency gains in course preparation."
                    }
                }

                div { class: "stats-grid",
                    div { class: "card chart-card",
                        h3 { "Course Creation Time Investment" }
                        div { class: "bar-chart",
                            div { class: "y-axis",
                                for label in BAR_AXIS_LABELS {
                                    span { key: "{label}", "{label}" }
                                }
                            }
                            div { class: "chart-area",
                                div { class: "plot",
                                    for index in 0..BAR_AXIS_LABELS.len() {
                                        div {
                                            key: "{index}",
                                            class: "grid-line",
                                            style: "top: {grid_line_offset(index)}%",
                                        }
                                    }
                                    div { class: "bars",
                                        Bar { value: traditional, class: "bar-traditional" }
                                        Bar { value: assisted, class: "bar-assisted" }
                                    }
                                }
                                div { class: "x-axis",
                                    span { "Traditional Prep" }
                                    span { class: "text-primary", "B Wells Prep" }
                                }
                            }
                        }
                        div { class: "axis-caption",
                            Glyph { icon: Icon::Clock }
                            span { "Hours" }
                        }
                        p { class: "footnote",
                            "*Based on average faculty reporting for 3-credit course creation."
                        }
                    }

                    div { class: "stat-cards",
                        for card in STAT_CARDS {
                            div {
                                key: "{card.heading}",
                                class: "card stat-card",
                                style: "transition-delay: {card.delay_ms}ms",
                                div { class: "stat-accent" }
                                div {
                                    div { class: "stat-figure",
                                        {match card.figure {
                                            StatFigure::ReductionPercent => rsx! {
                                                span { class: "figure", "{reduction}" }
                                                span { class: "figure-unit", "%" }
                                            },
                                            StatFigure::Fixed(text) => rsx! {
                                                span { class: "figure", "{text}" }
                                            },
                                        }}
                                    }
                                    div { class: "stat-heading",
                                        Glyph { icon: card.icon }
                                        h4 { "{card.heading}" }
                                    }
                                    p { "{card.body}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Bar(value: i64, class: String) -> Element {
    rsx! {
        div { class: "bar-slot",
            div { class: "bar {class}", style: "height: {bar_height_percent(value)}%",
                div { class: "bar-label", "{value}h" }
            }
        }
    }
}
