use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{router::Route, transport::ApiClient};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let client = use_hook(|| {
        ApiClient::from_env().inspect_err(|err| {
            tracing::error!("Failed to configure the API client: {}", err);
        })
    });

    let body = match client {
        Ok(client) => rsx!(ClientRoot { client }),
        Err(err) => rsx!(ConfigErrorPage { message: err.to_string() }),
    };

    rsx!(
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        {body}
    )
}

/// Shares the API client with every route
#[component]
fn ClientRoot(client: ApiClient) -> Element {
    use_context_provider(|| client.clone());

    rsx!(Router::<Route> {})
}

#[component]
fn ConfigErrorPage(message: String) -> Element {
    rsx!(
        div { class: "page flex items-center justify-center",
            div { class: "card",
                h2 { class: "card-title", "Configuration error" }
                p { class: "text-error", "{message}" }
            }
        }
    )
}
