// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod capabilities;
pub mod compat;
mod components;
pub mod hooks;

use api::config::WidgetConfig;
use api::source::github::GitHubEmojis;
use api::source::CatalogSource;
use api::SymbolCatalog;
use app_state::AppState;
use app_state_mut::AppStateMut;
use capabilities::BrowserStorage;
use capabilities::DomClipboard;
use capabilities::WidgetContext;
use components::catalog_tree::CatalogTree;
use components::controls::Controls;
use components::pico::Card;
use components::pico::Container;

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let widget_css = r#"
    * { box-sizing: border-box; }

    /* --- CONTROLS --- */
    .emoji-toolbar {
        display: flex;
        gap: 1rem;
        align-items: center;
        flex-wrap: wrap;
    }
    .emoji-toolbar input[type="search"] {
        flex: 1;
        min-width: 12rem;
        margin-bottom: 0;
    }
    .emoji-toolbar [role="group"] {
        width: auto;
        margin-bottom: 0;
    }
    .emoji-toolbar button.active {
        font-weight: bold;
    }

    .loader {
        padding: 1rem 0;
        color: var(--pico-muted-color);
    }

    .emoji-status {
        margin: 0.5rem 0;
        font-size: 0.875em;
        color: var(--pico-muted-color);
    }

    /* --- OUTPUT --- */
    .emoji-button {
        padding: 0.25rem;
        margin: 0;
        line-height: 0;
        background: transparent;
        border: 1px solid transparent;
        cursor: pointer;
    }
    .emoji-button:hover {
        border-color: var(--pico-primary);
    }
    .emoji-icon {
        width: 2rem;
        height: 2rem;
    }

    .emoji-grid {
        display: flex;
        flex-wrap: wrap;
        gap: 0.25rem;
        padding: 0;
        margin: 0;
    }
    .emoji-grid li {
        list-style: none;
        margin: 0;
    }

    .emoji-list td {
        vertical-align: middle;
    }
    .emoji-list td:last-child {
        font-family: var(--pico-font-family-monospace);
    }
"#;

    let config = WidgetConfig::from_env();

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        style {
            "{widget_css}"
        }
        WidgetBody {
            app_state: AppState::new(config),
        }
    }
}

/// Fetches the catalog once, showing the loader until it arrives.
#[component]
fn WidgetBody(app_state: AppState) -> Element {
    let catalog_future = use_resource(move || {
        let endpoint = app_state.config.endpoint().to_string();
        async move {
            GitHubEmojis::new(endpoint)
                .fetch_catalog()
                .await
                .inspect_err(|e| dioxus_logger::tracing::error!("failed to load emoji catalog: {e}"))
        }
    });

    let body = match &*catalog_future.read() {
        Some(Ok(catalog)) => rsx! {
            LoadedWidget {
                catalog: catalog.clone(),
            }
        },
        Some(Err(e)) => rsx! {
            div {
                class: "emoji-controls",
                p {
                    class: "emoji-error",
                    "Could not load emojies: {e}"
                }
            }
        },
        None => rsx! {
            div {
                class: "emoji-controls",
                div {
                    class: "loader",
                    "aria-busy": "true",
                    "Loading emojies..."
                }
            }
        },
    };
    body
}

/// This component holds the widget logic and only runs when data is ready.
#[component]
fn LoadedWidget(catalog: SymbolCatalog) -> Element {
    let view = use_signal(move || -> WidgetContext {
        WidgetContext::from_catalog(catalog, BrowserStorage, DomClipboard)
    });
    use_context_provider(|| AppStateMut { view });

    let tree = view.read().tree().cloned();
    let status = view.read().status().map(str::to_string);

    rsx! {
        Container {
            Card {
                div {
                    class: "emoji-controls",
                    Controls {}
                }
                if let Some(status) = status {
                    p {
                        class: "emoji-status",
                        "{status}"
                    }
                }
                div {
                    class: "github-emojies",
                    if let Some(tree) = tree {
                        CatalogTree { tree }
                    }
                }
            }
        }
    }
}
