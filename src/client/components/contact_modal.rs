use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaEnvelope, FaXmark};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    controller::{ClickTarget, ContactModalController},
    transport::ApiClient,
};

#[component]
pub fn ContactModal() -> Element {
    let client = use_context::<ApiClient>();
    let mut controller = use_signal(|| {
        let mut controller = ContactModalController::new(&client.config);
        controller.subscribe(|event| tracing::debug!(?event, "Contact modal visibility changed"));

        controller
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let attempt = match controller.write().begin() {
            Ok(attempt) => attempt,
            Err(err) => {
                tracing::debug!("Ignoring contact submit: {}", err);
                return;
            }
        };

        let transport = client.transport.clone();
        spawn(async move {
            let outcome = attempt.send(&transport).await;

            controller.write().resolve(outcome);
        });
    };

    let state = controller.read();
    let display = state.display();
    let email = state.form().value("email").to_string();
    let motive = state.form().value("motive").to_string();
    let message = state.form().value("message").to_string();
    let label = state.button().label().to_string();
    let disabled = state.button().is_disabled();
    let (status, color) = state
        .status()
        .map(|feedback| (feedback.text.clone(), feedback.tone.color()))
        .unwrap_or_default();
    drop(state);

    rsx!(
        button {
            id: "openContactModal",
            class: "btn btn-outline flex gap-2",
            r#type: "button",
            onclick: move |_| controller.write().handle_click(ClickTarget::OpenTrigger),
            Icon {
                width: 16,
                height: 16,
                icon: FaEnvelope
            }
            p {
                "Contact the administrator"
            }
        }
        div {
            id: "contactModal",
            class: "modal-backdrop",
            style: "display: {display};",
            onclick: move |_| controller.write().handle_click(ClickTarget::Backdrop),
            div {
                class: "modal-content card",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    controller.write().handle_click(ClickTarget::Content);
                },
                span {
                    class: "close-modal",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        controller.write().handle_click(ClickTarget::CloseTrigger);
                    },
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaXmark
                    }
                }
                div {
                    class: "card-body",
                    h2 {
                        class: "card-title",
                        "Contact the administrator"
                    }
                    form {
                        id: "contactForm",
                        class: "flex flex-col gap-2",
                        onsubmit,
                        input {
                            class: "input",
                            r#type: "email",
                            name: "email",
                            placeholder: "Your e-mail",
                            required: true,
                            value: "{email}",
                            oninput: move |evt| controller.write().set_field("email", evt.value()),
                        }
                        input {
                            class: "input",
                            r#type: "text",
                            name: "motive",
                            placeholder: "Motive",
                            required: true,
                            value: "{motive}",
                            oninput: move |evt| controller.write().set_field("motive", evt.value()),
                        }
                        textarea {
                            class: "textarea",
                            name: "message",
                            placeholder: "Message",
                            rows: 5,
                            required: true,
                            value: "{message}",
                            oninput: move |evt| controller.write().set_field("message", evt.value()),
                        }
                        button {
                            id: "sendContactBtn",
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled,
                            "{label}"
                        }
                    }
                    p {
                        id: "contact-msg",
                        class: "text-sm",
                        style: "color: {color};",
                        "{status}"
                    }
                }
            }
        }
    )
}
