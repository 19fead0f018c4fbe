//! Client-side state containers shared through Dioxus context.
//!
//! Each store pairs a plain state type (pure, unit tested) with a `Copy` handle
//! wrapping a `Signal`, installed once at the app root by [`use_store_providers`].

pub mod dashboard;
pub mod data_source;
pub mod theme;

pub use dashboard::{use_dashboard, DashboardState, DashboardStore};
pub use data_source::{use_data_source, DataSourceMode, DataSourceState, DataSourceStore};
pub use theme::{use_theme, Theme, ThemeStore};

use dioxus::prelude::*;

/// Install every store into context. Call once in the platform root component.
pub fn use_store_providers() {
    let theme_store = use_context_provider(ThemeStore::load);
    use_context_provider(DataSourceStore::new);
    use_context_provider(DashboardStore::load);

    use_effect(move || theme::apply_document_theme(theme_store.current()));
}
