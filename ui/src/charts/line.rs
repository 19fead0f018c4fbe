use dioxus::prelude::*;

use super::geometry::{label_stride, line_path, nice_max, ticks, Frame};
use crate::core::format::format_count;

const WIDTH: f64 = 640.0;
const MAX_X_LABELS: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    /// Any CSS colour, usually a theme variable.
    pub color: String,
    pub values: Vec<f64>,
}

/// Multi-series line chart over shared x labels.
#[component]
pub fn LineChart(
    labels: Vec<String>,
    series: Vec<ChartSeries>,
    #[props(default = 260)] height: u32,
) -> Element {
    if labels.is_empty() {
        return rsx! {
            div { class: "chart chart--empty", "No data for this range" }
        };
    }

    let frame = Frame::new(WIDTH, f64::from(height));
    let raw_max = series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(0.0_f64, f64::max);
    let max = nice_max(raw_max);
    let count = labels.len();
    let stride = label_stride(count, MAX_X_LABELS);

    let paths: Vec<(String, String, String)> = series
        .iter()
        .map(|s| {
            (
                s.name.clone(),
                s.color.clone(),
                line_path(&frame, &s.values, max),
            )
        })
        .collect();

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

                for (idx, label) in labels.iter().enumerate().filter(|(idx, _)| idx % stride == 0) {
                    text {
                        key: "{idx}",
                        class: "chart__axis-label",
                        x: "{frame.x_at(idx, count):.1}",
                        y: "{frame.bottom() + 18.0:.1}",
                        text_anchor: "middle",
                        "{short_date(label)}"
                    }
                }

                for (name, color, d) in paths.iter() {
                    path {
                        key: "{name}",
                        class: "chart__line",
                        d: "{d}",
                        stroke: "{color}",
                    }
                }

                if count == 1 {
                    for s in series.iter() {
                        if let Some(value) = s.values.first() {
                            circle {
                                key: "{s.name}",
                                cx: "{frame.x_at(0, 1):.1}",
                                cy: "{frame.y_at(*value, max):.1}",
                                r: "4",
                                fill: "{s.color}",
                            }
                        }
                    }
                }
            }

            ul { class: "chart__legend",
                for s in series.iter() {
                    li { key: "{s.name}",
                        span { class: "chart__swatch", style: "background: {s.color};" }
                        "{s.name}"
                    }
                }
            }
        }
    }
}

/// `2025-03-14` → `03-14`; other labels pass through.
fn short_date(label: &str) -> &str {
    let bytes = label.as_bytes();
    if label.len() == 10 && bytes[4] == b'-' && bytes[7] == b'-' {
        &label[5..]
    } else {
        label
    }
}

#[cfg(test)]
mod tests {
    use super::short_date;

    #[test]
    fn iso_dates_are_shortened() {
        assert_eq!(short_date("2025-03-14"), "03-14");
        assert_eq!(short_date("Week 1"), "Week 1");
        assert_eq!(short_date("ümlaut-day"), "ümlaut-day");
    }
}
