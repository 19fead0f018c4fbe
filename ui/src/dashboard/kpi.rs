use dioxus::prelude::*;

use crate::core::format::{format_count, format_percent, format_seconds};
use crate::data::DashboardData;

/// Four KPI cards; `None` renders loading placeholders.
#[component]
pub fn KpiGrid(#[props(!optional)] data: Option<DashboardData>) -> Element {
    let cards: Vec<(&'static str, Option<String>, Option<String>)> = match &data {
        Some(data) => {
            let kpis = &data.kpis;
            vec![
                ("Total visitors", Some(format_count(kpis.total_visitors)), None),
                ("Bounce rate", Some(format_percent(kpis.bounce_rate, 1)), None),
                (
                    "Avg. session",
                    Some(format_seconds(kpis.avg_session_duration)),
                    None,
                ),
                (
                    "Conversions",
                    Some(format_count(kpis.conversions)),
                    Some(format!("{} CR", format_percent(data.conversion_rate(), 2))),
                ),
            ]
        }
        None => ["Total visitors", "Bounce rate", "Avg. session", "Conversions"]
            .into_iter()
            .map(|label| (label, None, None))
            .collect(),
    };

    rsx! {
        div { class: "kpi-grid",
            for (label, value, meta) in cards {
                div { key: "{label}", class: "kpi-card",
                    span { class: "kpi-card__label", "{label}" }
                    match value {
                        Some(value) => rsx! { strong { class: "kpi-card__value", "{value}" } },
                        None => rsx! { span { class: "kpi-card__value kpi-card__value--loading", aria_busy: "true" } },
                    }
                    if let Some(meta) = meta {
                        span { class: "kpi-card__meta", "{meta}" }
                    }
                }
            }
        }
    }
}
