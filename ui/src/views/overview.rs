use dioxus::prelude::*;

use crate::core::{config::app_config, timing};
use crate::dashboard::{
    ExportPanel, FilterBar, KpiGrid, LiveUsersCard, SavedReportsPanel, TopPagesPanel,
    TrafficPanel,
};
use crate::data::mock::fetch_dashboard_data;
use crate::stores::{use_dashboard, use_data_source, DataSourceMode};

#[component]
pub fn Overview() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let dashboard = use_dashboard();
    let data_source = use_data_source();

    let mock = use_resource(move || {
        let filters = dashboard.filters();
        async move { fetch_dashboard_data(filters).await }
    });

    use_future(move || async move {
        let mut mock = mock;
        let interval = app_config().refetch_interval_ms;
        loop {
            timing::sleep_ms(interval).await;
            if data_source.mode() == DataSourceMode::Mock {
                tracing::debug!("refreshing mock dashboard data");
                mock.restart();
            }
        }
    });

    let mode = data_source.mode();
    let file_name = data_source.file_name();
    let data = match data_source.active_file_data() {
        Some(file_data) => Some(file_data),
        None => mock.read().clone(),
    };
    let refreshing = mode == DataSourceMode::Mock
        && data.is_some()
        && matches!(*mock.state().read(), UseResourceState::Pending);

    let points = data.as_ref().map(|d| d.time_series.clone()).unwrap_or_default();
    let pages = data.as_ref().map(|d| d.top_pages.clone()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-overview",
            div { class: "page__header",
                div {
                    h1 { {crate::t!("page-overview-title")} }
                    p { {crate::t!("page-overview-intro")} }
                }
                div { class: "page__badges",
                    if mode == DataSourceMode::File {
                        span { class: "badge badge--file",
                            "Data source: Excel file"
                            if let Some(name) = file_name {
                                " ({name})"
                            }
                        }
                    }
                    if refreshing {
                        span { class: "badge badge--refreshing", "Refreshing data…" }
                    }
                }
            }

            FilterBar {}

            div { class: "overview__top",
                KpiGrid { data: data.clone() }
                LiveUsersCard {}
            }

            if data.is_some() {
                TrafficPanel { points }
                TopPagesPanel { pages }
            } else {
                section { class: "panel",
                    p { class: "panel__placeholder", "Loading dashboard data…" }
                }
            }

            div { class: "overview__bottom",
                SavedReportsPanel {}
                ExportPanel { data }
            }
        }
    }
}
