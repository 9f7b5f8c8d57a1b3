use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{controller::LoginController, transport::ApiClient};

#[component]
pub fn LoginForm() -> Element {
    let client = use_context::<ApiClient>();
    let mut controller = use_signal(|| LoginController::new(&client.config));

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let attempt = match controller.write().begin() {
            Ok(attempt) => attempt,
            Err(err) => {
                tracing::debug!("Ignoring login submit: {}", err);
                return;
            }
        };

        let transport = client.transport.clone();
        spawn(async move {
            let outcome = attempt.send(&transport).await;

            let navigate = controller.write().resolve(outcome);

            if let Some(url) = navigate {
                tracing::info!(redirect_url = %url, "Login accepted, leaving the page");

                if let Err(err) = navigate_to(&url).await {
                    tracing::warn!(redirect_url = %url, "Failed to navigate after login: {}", err);

                    controller.write().navigation_failed();
                }
            }
        });
    };

    let state = controller.read();
    let username = state.form().value("username").to_string();
    let password = state.form().value("password").to_string();
    let label = state.button().label().to_string();
    let disabled = state.button().is_disabled();
    let error = state.error_message().to_string();
    drop(state);

    rsx!(
        div {
            class: "card w-full",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    "Connexion"
                }
                form {
                    id: "loginForm",
                    class: "flex flex-col gap-2",
                    onsubmit,
                    input {
                        class: "input",
                        r#type: "text",
                        name: "username",
                        placeholder: "Username",
                        autocomplete: "username",
                        required: true,
                        value: "{username}",
                        oninput: move |evt| controller.write().set_field("username", evt.value()),
                    }
                    input {
                        class: "input",
                        r#type: "password",
                        name: "password",
                        placeholder: "Password",
                        autocomplete: "current-password",
                        required: true,
                        value: "{password}",
                        oninput: move |evt| controller.write().set_field("password", evt.value()),
                    }
                    button {
                        id: "submitBtn",
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled,
                        "{label}"
                    }
                }
                p {
                    id: "error-message",
                    class: "text-error text-sm",
                    "{error}"
                }
            }
        }
    )
}

/// Full page navigation, the redirect targets are served outside of this app
async fn navigate_to(url: &str) -> Result<(), String> {
    let url = serde_json::to_string(url).map_err(|e| e.to_string())?;

    document::eval(&format!("window.location.href = {};", url))
        .await
        .map(|_| ())
        .map_err(|e| e.to_string())
}
