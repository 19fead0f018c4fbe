use dioxus::prelude::*;

use crate::stores::use_dashboard;

/// Save the current filters under a name, and load or delete earlier snapshots.
#[component]
pub fn SavedReportsPanel() -> Element {
    let mut store = use_dashboard();
    let mut name = use_signal(String::new);
    let reports = store.saved_reports();

    let mut save = move || {
        if store.save_current_report(&name.peek()) {
            name.set(String::new());
        }
    };

    rsx! {
        section { class: "panel reports",
            div { class: "panel__header",
                h2 { "Saved reports" }
            }

            form {
                class: "reports__form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    save();
                },
                input {
                    r#type: "text",
                    placeholder: "Report name",
                    value: "{name}",
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    class: "button button--primary",
                    disabled: name().trim().is_empty(),
                    "Save"
                }
            }

            if reports.is_empty() {
                p { class: "panel__placeholder", "No saved reports yet." }
            } else {
                ul { class: "reports__list",
                    for report in reports {
                        {
                            let load_id = report.id.clone();
                            let delete_id = report.id.clone();
                            let f = report.filters;
                            rsx! {
                                li { key: "{report.id}", class: "reports__item",
                                    div {
                                        strong { "{report.name}" }
                                        span { class: "reports__meta",
                                            "{f.date_range.as_str()} · {f.source.as_str()} · {f.device.as_str()}"
                                        }
                                    }
                                    div { class: "reports__actions",
                                        button {
                                            r#type: "button",
                                            class: "button",
                                            onclick: move |_| store.load_report(&load_id),
                                            "Load"
                                        }
                                        button {
                                            r#type: "button",
                                            class: "button button--ghost",
                                            onclick: move |_| store.delete_report(&delete_id),
                                            "Delete"
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
}
