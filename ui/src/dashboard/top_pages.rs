use dioxus::prelude::*;

use crate::charts::{BarChart, BarDatum};
use crate::core::format::{format_count, format_percent};
use crate::data::TopPage;

/// Top pages table; clicking a row highlights it in the drilldown chart.
#[component]
pub fn TopPagesPanel(pages: Vec<TopPage>) -> Element {
    let mut selected = use_signal(|| None::<String>);

    let bars: Vec<BarDatum> = pages
        .iter()
        .map(|p| BarDatum::new(p.path.clone(), p.views as f64))
        .collect();
    let current = selected();
    let detail = current
        .as_ref()
        .and_then(|path| pages.iter().find(|p| &p.path == path))
        .cloned();

    rsx! {
        section { class: "panel top-pages",
            div { class: "panel__header",
                h2 { "Top pages" }
                span { class: "panel__meta", "Click a row to drill down" }
            }

            if pages.is_empty() {
                p { class: "panel__placeholder", "No page data." }
            } else {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Page" }
                            th { class: "num", "Views" }
                            th { class: "num", "Conversions" }
                            th { class: "num", "CR%" }
                        }
                    }
                    tbody {
                        for page in pages.iter() {
                            {
                                let path = page.path.clone();
                                let row_class = if current.as_deref() == Some(page.path.as_str()) {
                                    "data-table__row data-table__row--active"
                                } else {
                                    "data-table__row"
                                };
                                rsx! {
                                    tr {
                                        key: "{page.path}",
                                        class: "{row_class}",
                                        onclick: move |_| {
                                            let next = if selected.peek().as_deref() == Some(path.as_str()) {
                                                None
                                            } else {
                                                Some(path.clone())
                                            };
                                            selected.set(next);
                                        },
                                        td { "{page.path}" }
                                        td { class: "num", "{format_count(page.views)}" }
                                        td { class: "num", "{format_count(page.conversions)}" }
                                        td { class: "num", "{format_percent(page.conversion_rate(), 1)}" }
                                    }
                                }
                            }
                        }
                    }
                }

                BarChart { bars, highlight: current.clone() }

                if let Some(page) = detail {
                    p { class: "top-pages__detail",
                        strong { "{page.path}" }
                        " · {format_count(page.views)} views · {format_count(page.conversions)} conversions"
                    }
                }
            }
        }
    }
}
