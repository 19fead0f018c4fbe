use dioxus::prelude::*;

use crate::charts::{BarDatum, HorizontalBarChart};
use crate::core::format::{format_count, format_percent};
use crate::data::funnel::{analyze, overall_conversion, sample_funnel};

#[component]
pub fn Funnels() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let stages = sample_funnel();
    let steps = analyze(&stages);
    let overall = overall_conversion(&stages);
    let bars: Vec<BarDatum> = steps
        .iter()
        .map(|s| BarDatum::new(s.stage.clone(), s.rate_of_top))
        .collect();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-funnels",
            div { class: "page__header",
                div {
                    h1 { {crate::t!("page-funnels-title")} }
                    p { {crate::t!("page-funnels-intro")} }
                }
                div { class: "page__badges",
                    span { class: "badge", "Overall conversion {format_percent(overall, 1)}" }
                }
            }

            section { class: "panel",
                div { class: "panel__header",
                    h2 { "Share of first stage" }
                }
                HorizontalBarChart { bars }
            }

            section { class: "panel",
                div { class: "panel__header",
                    h2 { "Stage breakdown" }
                }
                ol { class: "funnel-steps",
                    for step in steps.iter() {
                        li { key: "{step.stage}", class: "funnel-steps__item",
                            div { class: "funnel-steps__name",
                                strong { "{step.stage}" }
                                span { class: "funnel-steps__users", "{format_count(step.users)} users" }
                            }
                            div { class: "funnel-steps__stats",
                                span { "{format_percent(step.rate_of_top, 1)} of top" }
                                if step.drop_off > 0 {
                                    span { "{format_percent(step.step_conversion, 1)} from previous" }
                                    span { class: "funnel-steps__drop", "−{format_count(step.drop_off)} dropped" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
