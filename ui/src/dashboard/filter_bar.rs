use dioxus::prelude::*;

use crate::data::{DateRangePreset, DeviceType, FiltersPatch, TrafficSource};
use crate::stores::use_dashboard;
use crate::t;

#[component]
pub fn FilterBar() -> Element {
    let mut store = use_dashboard();
    let filters = store.filters();

    rsx! {
        div { class: "filter-bar",
            label { class: "filter-bar__field",
                span { class: "filter-bar__label", {t!("filter-range")} }
                select {
                    value: "{filters.date_range.as_str()}",
                    onchange: move |evt: FormEvent| {
                        if let Some(date_range) = DateRangePreset::parse(&evt.value()) {
                            store.set_filters(FiltersPatch { date_range: Some(date_range), ..Default::default() });
                        }
                    },
                    for preset in DateRangePreset::ALL {
                        option { key: "{preset.as_str()}", value: "{preset.as_str()}", "{preset.label()}" }
                    }
                }
            }
            label { class: "filter-bar__field",
                span { class: "filter-bar__label", {t!("filter-source")} }
                select {
                    value: "{filters.source.as_str()}",
                    onchange: move |evt: FormEvent| {
                        if let Some(source) = TrafficSource::parse(&evt.value()) {
                            store.set_filters(FiltersPatch { source: Some(source), ..Default::default() });
                        }
                    },
                    for source in TrafficSource::ALL {
                        option { key: "{source.as_str()}", value: "{source.as_str()}", "{source.label()}" }
                    }
                }
            }
            label { class: "filter-bar__field",
                span { class: "filter-bar__label", {t!("filter-device")} }
                select {
                    value: "{filters.device.as_str()}",
                    onchange: move |evt: FormEvent| {
                        if let Some(device) = DeviceType::parse(&evt.value()) {
                            store.set_filters(FiltersPatch { device: Some(device), ..Default::default() });
                        }
                    },
                    for device in DeviceType::ALL {
                        option { key: "{device.as_str()}", value: "{device.as_str()}", "{device.label()}" }
                    }
                }
            }
        }
    }
}
