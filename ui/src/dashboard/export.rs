use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::core::platform;
use crate::data::{
    export::{build_csv, build_json, export_filename},
    DashboardData,
};

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working(&'static str),
    Done(String),
    Error(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    fn working_label(self) -> &'static str {
        match self {
            Self::Json => "Preparing JSON",
            Self::Csv => "Preparing CSV",
        }
    }
}

#[component]
pub fn ExportPanel(#[props(!optional)] data: Option<DashboardData>) -> Element {
    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working(label) => Some(("panel__meta".to_string(), format!("{label}…"))),
        ExportStatus::Done(message) => Some((
            "panel__meta panel__meta--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "panel__meta panel__meta--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let json_data = data.clone();
    let csv_data = data.clone();

    rsx! {
        section { class: "panel export-panel",
            div { class: "panel__header",
                h2 { "Export" }
            }

            match data {
                None => rsx! {
                    p { class: "panel__placeholder", "Exports unlock once data has loaded." }
                },
                Some(data) => rsx! {
                    p {
                        "Download the current view: {data.time_series.len()} days, {data.top_pages.len()} pages."
                    }
                    div { class: "export-panel__actions",
                        button {
                            r#type: "button",
                            class: "button button--primary",
                            disabled: busy(),
                            onclick: move |_| start_export(ExportFormat::Json, json_data.clone(), status, busy),
                            "Export JSON"
                        }
                        button {
                            r#type: "button",
                            class: "button",
                            disabled: busy(),
                            onclick: move |_| start_export(ExportFormat::Csv, csv_data.clone(), status, busy),
                            "Export CSV"
                        }
                    }
                },
            }

            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", "{message}" }
            }
        }
    }
}

fn start_export(
    format: ExportFormat,
    data: Option<DashboardData>,
    mut status: Signal<ExportStatus>,
    mut busy: Signal<bool>,
) {
    let Some(data) = data else {
        return;
    };
    if *busy.peek() {
        return;
    }
    busy.set(true);
    status.set(ExportStatus::Working(format.working_label()));

    #[cfg(target_arch = "wasm32")]
    {
        platform::spawn_future(async move {
            finish_export(perform_export(format, data).await, status, busy);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let outcome = futures::executor::block_on(perform_export(format, data));
        finish_export(outcome, status, busy);
    }
}

fn finish_export(
    outcome: Result<String, String>,
    mut status: Signal<ExportStatus>,
    mut busy: Signal<bool>,
) {
    match outcome {
        Ok(message) => {
            tracing::info!(%message, "export finished");
            status.set(ExportStatus::Done(message));
        }
        Err(err) => {
            tracing::warn!(%err, "export failed");
            status.set(ExportStatus::Error(err));
        }
    }
    busy.set(false);
}

async fn perform_export(format: ExportFormat, data: DashboardData) -> Result<String, String> {
    match format {
        ExportFormat::Json => perform_json_export(data).await,
        ExportFormat::Csv => perform_csv_export(data).await,
    }
}

async fn perform_json_export(data: DashboardData) -> Result<String, String> {
    let json = build_json(&data).map_err(|err| err.to_string())?;
    copy_to_clipboard(json.clone()).await?;
    let filename = export_filename("json");
    let delivery = download_bytes(&filename, "application/json", json.into_bytes()).await?;
    Ok(match delivery {
        Some(path) => format!("JSON copied and saved to {path}"),
        None => "JSON copied to clipboard and download started".to_string(),
    })
}

async fn perform_csv_export(data: DashboardData) -> Result<String, String> {
    let csv = build_csv(&data);
    let filename = export_filename("csv");
    let delivery = download_bytes(&filename, "text/csv", csv.into_bytes()).await?;
    Ok(match delivery {
        Some(path) => format!("CSV saved to {path}"),
        None => "CSV download started".to_string(),
    })
}

async fn copy_to_clipboard(payload: String) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or("window unavailable")?;
        let document = window.document().ok_or("document unavailable")?;
        let body = document.body().ok_or("missing body")?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| "Unable to create textarea")?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| "Textarea cast failed")?;
        textarea.set_value(&payload);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        let copied = document
            .dyn_ref::<web_sys::HtmlDocument>()
            .map(|doc| doc.exec_command("copy").unwrap_or(false))
            .unwrap_or(false);
        textarea.remove();
        if copied {
            Ok(())
        } else {
            Err("Clipboard copy blocked".into())
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard = Clipboard::new().map_err(|err| err.to_string())?;
        clipboard.set_text(payload).map_err(|err| err.to_string())
    }
}

/// Web: triggers a browser download and returns `None`.
/// Desktop: writes under `<data dir>/exports` and returns the path.
async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = mime;
        let dir = crate::core::storage::data_dir()
            .map_err(|err| err.to_string())?
            .join("exports");
        std::fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        std::fs::write(&path, &bytes).map_err(|err| err.to_string())?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}
