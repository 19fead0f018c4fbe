//! Shared UI crate for InsightBoard: data generation, spreadsheet import,
//! client-side stores, charts and the dashboard views used by every platform.

use dioxus::prelude::*;

pub mod charts;
pub mod core;
pub mod dashboard;
pub mod data;
pub mod i18n;
pub mod stores;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

/// Application stylesheet (light and dark variables, layout, components).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// Same stylesheet as a string, for shells that inline it.
pub const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

/// Log which platform and configuration the UI starts with.
pub fn log_startup() {
    let config = core::config::app_config();
    tracing::info!(
        platform = core::platform::Platform::current().as_str(),
        refresh_ms = config.refetch_interval_ms,
        "InsightBoard starting"
    );
}
