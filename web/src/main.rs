use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::stores::use_store_providers;
use ui::views::{Cohorts, Funnels, Overview, Users};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Overview {},
    #[route("/funnels")]
    Funnels {},
    #[route("/cohorts")]
    Cohorts {},
    #[route("/users")]
    Users {},
}

fn nav_overview(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        active_class: "navbar__link--active",
        to: Route::Overview {},
        "{label}"
    })
}
fn nav_funnels(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        active_class: "navbar__link--active",
        to: Route::Funnels {},
        "{label}"
    })
}
fn nav_cohorts(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        active_class: "navbar__link--active",
        to: Route::Cohorts {},
        "{label}"
    })
}
fn nav_users(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        active_class: "navbar__link--active",
        to: Route::Users {},
        "{label}"
    })
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }
    ui::log_startup();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder {
            overview: nav_overview,
            funnels: nav_funnels,
            cohorts: nav_cohorts,
            users: nav_users,
        });
    }

    // Global language code; AppNavbar writes it on locale change.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    use_store_providers();

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Title { "InsightBoard" }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        main { class: "app-main",
            Outlet::<Route> {}
        }
    }
}
