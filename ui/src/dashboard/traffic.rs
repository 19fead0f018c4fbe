use dioxus::prelude::*;

use crate::charts::{BrushWindow, ChartSeries, LineChart};
use crate::data::TimeSeriesPoint;

/// Visitors and conversions over time, with a start/end brush.
#[component]
pub fn TrafficPanel(points: Vec<TimeSeriesPoint>) -> Element {
    let mut brush_start = use_signal(|| None::<usize>);
    let mut brush_end = use_signal(|| None::<usize>);

    let len = points.len();
    let window = BrushWindow::resolve(brush_start(), brush_end(), len);
    let visible = window.map(|w| w.slice(&points)).unwrap_or(&[]);

    let labels: Vec<String> = visible.iter().map(|p| p.date.clone()).collect();
    let series = vec![
        ChartSeries {
            name: "Visitors".into(),
            color: "var(--chart-primary)".into(),
            values: visible.iter().map(|p| p.visitors as f64).collect(),
        },
        ChartSeries {
            name: "Conversions".into(),
            color: "var(--chart-secondary)".into(),
            values: visible.iter().map(|p| p.conversions as f64).collect(),
        },
    ];

    let last = len.saturating_sub(1);
    let (start_idx, end_idx) = window.map(|w| (w.start, w.end)).unwrap_or((0, 0));
    let range_label = match (visible.first(), visible.last()) {
        (Some(first), Some(last)) => format!("{} → {}", first.date, last.date),
        _ => String::new(),
    };
    let is_zoomed = window.is_some_and(|w| !w.is_full(len));

    rsx! {
        section { class: "panel traffic-panel",
            div { class: "panel__header",
                h2 { "Traffic" }
                span { class: "panel__meta", "{range_label}" }
            }

            LineChart { labels, series }

            if len > 1 {
                div { class: "brush",
                    label { class: "brush__field",
                        span { "From" }
                        input {
                            r#type: "range",
                            min: "0",
                            max: "{last}",
                            value: "{start_idx}",
                            oninput: move |evt: FormEvent| {
                                if let Ok(v) = evt.value().parse::<usize>() {
                                    brush_start.set(Some(v));
                                }
                            },
                        }
                    }
                    label { class: "brush__field",
                        span { "To" }
                        input {
                            r#type: "range",
                            min: "0",
                            max: "{last}",
                            value: "{end_idx}",
                            oninput: move |evt: FormEvent| {
                                if let Ok(v) = evt.value().parse::<usize>() {
                                    brush_end.set(Some(v));
                                }
                            },
                        }
                    }
                    if is_zoomed {
                        button {
                            r#type: "button",
                            class: "button button--ghost",
                            onclick: move |_| {
                                brush_start.set(None);
                                brush_end.set(None);
                            },
                            "Reset zoom"
                        }
                    }
                }
            }
        }
    }
}
