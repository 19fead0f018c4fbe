use dioxus::prelude::*;

use crate::core::format::format_number;
use crate::data::cohort::{average_retention, sample_cohorts, Intensity, PERIODS};

#[component]
pub fn Cohorts() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let cohorts = sample_cohorts();
    let averages = average_retention(&cohorts);

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-cohorts",
            div { class: "page__header",
                div {
                    h1 { {crate::t!("page-cohorts-title")} }
                    p { {crate::t!("page-cohorts-intro")} }
                }
            }

            section { class: "panel",
                table { class: "data-table cohort-table",
                    thead {
                        tr {
                            th { "Cohort" }
                            for period in PERIODS {
                                th { key: "{period}", class: "num", "{period}" }
                            }
                        }
                    }
                    tbody {
                        for cohort in cohorts.iter() {
                            tr { key: "{cohort.label}",
                                th { scope: "row", "{cohort.label}" }
                                for (idx, value) in cohort.values.iter().enumerate() {
                                    td {
                                        key: "{idx}",
                                        class: "num cohort-cell {Intensity::for_value(*value).css_class()}",
                                        "{value}%"
                                    }
                                }
                            }
                        }
                    }
                    tfoot {
                        tr {
                            th { scope: "row", "Average" }
                            for (idx, value) in averages.iter().enumerate() {
                                td { key: "{idx}", class: "num", "{format_number(*value, 1)}%" }
                            }
                        }
                    }
                }
                div { class: "cohort-legend",
                    span { "Retention" }
                    for (label, value) in [("<20%", 0u8), ("20%", 20), ("35%", 35), ("50%", 50), ("70%+", 70)] {
                        span {
                            key: "{label}",
                            class: "cohort-legend__item cohort-cell {Intensity::for_value(value).css_class()}",
                            "{label}"
                        }
                    }
                }
            }
        }
    }
}
