use dioxus::prelude::*;

use super::geometry::{nice_max, ticks, Frame};
use crate::core::format::{format_count, format_number};

const WIDTH: f64 = 640.0;

#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
}

impl BarDatum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Vertical bars; the bar whose label equals `highlight` is accented.
#[component]
pub fn BarChart(
    bars: Vec<BarDatum>,
    #[props(!optional)] highlight: Option<String>,
    #[props(default = 220)] height: u32,
) -> Element {
    if bars.is_empty() {
        return rsx! {
            div { class: "chart chart--empty", "Nothing to chart" }
        };
    }

    let mut frame = Frame::new(WIDTH, f64::from(height));
    frame.pad_bottom = 40.0;
    let max = nice_max(bars.iter().map(|b| b.value).fold(0.0, f64::max));
    let count = bars.len();

    rsx! {
        div { class: "chart",
            svg {
                class: "chart__svg",
                view_box: "0 0 {WIDTH} {height}",
                preserve_aspect_ratio: "none",
                role: "img",

                for tick in ticks(max, 4) {
                    {
                        let y = frame.y_at(tick, max);
                        rsx! {
                            line {
                                class: "chart__grid",
                                x1: "{frame.left():.1}",
                                y1: "{y:.1}",
                                x2: "{frame.right():.1}",
                                y2: "{y:.1}",
                            }
                            text {
                                class: "chart__axis-label",
                                x: "{frame.left() - 6.0:.1}",
                                y: "{y:.1}",
                                text_anchor: "end",
                                dominant_baseline: "middle",
                                "{format_count(tick.round() as u64)}"
                            }
                        }
                    }
                }

                for (idx, bar) in bars.iter().enumerate() {
                    {
                        let (x, w) = frame.band(idx, count);
                        let y = frame.y_at(bar.value, max);
                        let h = (frame.bottom() - y).max(0.0);
                        let selected = highlight.as_deref() == Some(bar.label.as_str());
                        let class = if selected { "chart__bar chart__bar--active" } else { "chart__bar" };
                        rsx! {
                            rect {
                                key: "{bar.label}",
                                class: "{class}",
                                x: "{x:.1}",
                                y: "{y:.1}",
                                width: "{w:.1}",
                                height: "{h:.1}",
                                rx: "3",
                                title { "{bar.label}: {format_count(bar.value.round() as u64)}" }
                            }
                            text {
                                class: "chart__axis-label",
                                x: "{x + w / 2.0:.1}",
                                y: "{frame.bottom() + 16.0:.1}",
                                text_anchor: "middle",
                                "{bar.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Horizontal bars as percentages of `max` (default 100).
#[component]
pub fn HorizontalBarChart(
    bars: Vec<BarDatum>,
    #[props(default = 100.0)] max: f64,
    #[props(default = "%".to_string())] suffix: String,
) -> Element {
    rsx! {
        ul { class: "hbar-chart",
            for bar in bars.iter() {
                {
                    let pct = if max > 0.0 { (bar.value / max * 100.0).clamp(0.0, 100.0) } else { 0.0 };
                    rsx! {
                        li { key: "{bar.label}", class: "hbar-chart__row",
                            span { class: "hbar-chart__label", "{bar.label}" }
                            div { class: "hbar-chart__track",
                                div { class: "hbar-chart__fill", style: "width: {pct:.1}%;" }
                            }
                            span { class: "hbar-chart__value", "{format_number(bar.value, 1)}{suffix}" }
                        }
                    }
                }
            }
        }
    }
}
