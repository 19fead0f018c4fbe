use crate::data::import::import_workbook;
use crate::i18n::{self};
use crate::stores::{use_data_source, use_theme, DataSourceMode, Theme};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Workbook formats the importer understands.
const WORKBOOK_ACCEPT: &str = ".xlsx,.xlsm,.xlsb,.xls,.ods";

/// Platform-supplied link constructors.
///
/// `ui` does not know each platform's `Route` enum, so the web and desktop
/// crates register one closure per page. Each closure receives the localized
/// label and returns a `Link` containing it:
///
/// ```ignore
/// register_nav(NavBuilder {
///     overview: |label| rsx!( Link { class: "navbar__link", to: Route::Overview {}, "{label}" } ),
///     funnels: |label| rsx!( Link { class: "navbar__link", to: Route::Funnels {}, "{label}" } ),
///     cohorts: |label| rsx!( Link { class: "navbar__link", to: Route::Cohorts {}, "{label}" } ),
///     users: |label| rsx!( Link { class: "navbar__link", to: Route::Users {}, "{label}" } ),
/// });
/// ```
///
/// Without a registered builder the navbar renders its `children` instead.
pub struct NavBuilder {
    pub overview: fn(label: &str) -> Element,
    pub funnels: fn(label: &str) -> Element,
    pub cohorts: fn(label: &str) -> Element,
    pub users: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let mut theme = use_theme();
    let mut data_source = use_data_source();
    let mut import_error = use_signal(|| None::<String>);
    let mut importing = use_signal(|| false);

    #[cfg(debug_assertions)]
    {
        tracing::trace!(lang = %_lang_marker, "AppNavbar render");
    }

    let on_lang_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(%err, lang = %val, "language switch failed"),
        }
    };

    let on_upload = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        let Some(file_name) = engine.files().into_iter().next() else {
            return;
        };

        importing.set(true);
        import_error.set(None);
        let outcome = match engine.read_file(&file_name).await {
            Some(bytes) => import_workbook(&bytes).map_err(|err| err.to_string()),
            None => Err(format!("could not read {file_name}")),
        };
        match outcome {
            Ok(data) => data_source.set_file_data(data, Some(file_name)),
            Err(message) => {
                tracing::warn!(file = %file_name, error = %message, "workbook import failed");
                import_error.set(Some(message));
            }
        }
        importing.set(false);
    };

    let internal_nav: Option<Element> = NAV_BUILDER.get().map(|b| {
        let overview = (b.overview)(&t!("nav-overview"));
        let funnels = (b.funnels)(&t!("nav-funnels"));
        let cohorts = (b.cohorts)(&t!("nav-cohorts"));
        let users = (b.users)(&t!("nav-users"));

        rsx! {
            nav { class: "navbar__links",
                {overview}
                {funnels}
                {cohorts}
                {users}
            }
        }
    });

    let theme_label = match theme.current() {
        Theme::Light => t!("theme-dark"),
        Theme::Dark => t!("theme-light"),
    };
    let upload_label = if importing() {
        t!("nav-uploading")
    } else {
        t!("nav-upload")
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "InsightBoard" }
                    }
                    span { class: "navbar__brand-subtitle", {t!("tagline")} }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }

                div { class: "navbar__actions",
                    label { class: "button navbar__upload",
                        "{upload_label}"
                        input {
                            class: "visually-hidden",
                            r#type: "file",
                            accept: WORKBOOK_ACCEPT,
                            disabled: importing(),
                            onchange: on_upload,
                        }
                    }
                    if data_source.mode() == DataSourceMode::File {
                        button {
                            r#type: "button",
                            class: "button button--ghost",
                            onclick: move |_| {
                                import_error.set(None);
                                data_source.reset_to_mock();
                            },
                            {t!("nav-use-mock")}
                        }
                    }
                    button {
                        r#type: "button",
                        class: "button button--ghost navbar__theme",
                        onclick: move |_| theme.toggle(),
                        "{theme_label}"
                    }

                    if show_switcher {
                        div { class: "navbar__locale",
                            label {
                                class: "visually-hidden",
                                r#for: "locale-select",
                                {t!("nav-language-label")}
                            }
                            select {
                                id: "locale-select",
                                value: "{current_lang()}",
                                oninput: on_lang_change,
                                { langs().iter().map(|code| {
                                    let c = code.clone();
                                    rsx!{
                                        option { key: "{c}", value: "{c}", "{c}" }
                                    }
                                })}
                            }
                        }
                    }
                }
            }
            if let Some(err) = import_error() {
                p { class: "navbar__error", role: "alert", "⚠️ {err}" }
            }
        }
    }
}
