use dioxus::prelude::*;

use crate::data::users::{count_segments, sample_users, segment_users, SegmentFilter};

#[component]
pub fn Users() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let mut filter = use_signal(SegmentFilter::default);
    let users = use_hook(sample_users);
    let counts = count_segments(&users);
    let rows = segment_users(&users, filter());

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-users",
            div { class: "page__header",
                div {
                    h1 { {crate::t!("page-users-title")} }
                    p { {crate::t!("page-users-intro")} }
                }
                div { class: "page__badges",
                    span { class: "badge",
                        "{counts.power} power · {counts.churn_risk} churn risk"
                    }
                }
            }

            section { class: "panel",
                div { class: "panel__header",
                    label { class: "filter-bar__field",
                        span { class: "filter-bar__label", "Segment" }
                        select {
                            value: "{filter().as_str()}",
                            onchange: move |evt: FormEvent| {
                                if let Some(next) = SegmentFilter::parse(&evt.value()) {
                                    filter.set(next);
                                }
                            },
                            for choice in SegmentFilter::options() {
                                option { key: "{choice.as_str()}", value: "{choice.as_str()}", "{choice.label()}" }
                            }
                        }
                    }
                    span { class: "panel__meta", "{rows.len()} of {users.len()} users" }
                }

                if rows.is_empty() {
                    p { class: "panel__placeholder", "No users in this segment." }
                } else {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Email" }
                                th { class: "num", "Last seen" }
                                th { class: "num", "Sessions (30d)" }
                                th { "Segment" }
                            }
                        }
                        tbody {
                            for (user, segment) in rows.iter() {
                                tr { key: "{user.id}",
                                    td { "{user.name}" }
                                    td { "{user.email}" }
                                    td { class: "num", "{user.last_seen_days}d ago" }
                                    td { class: "num", "{user.sessions_last_30d}" }
                                    td {
                                        span { class: "segment-tag segment-tag--{segment.as_str()}", "{segment.label()}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
