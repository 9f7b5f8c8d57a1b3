use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::components::{ContactModal, LoginForm, Page};

#[component]
pub fn Login() -> Element {
    rsx!(
        Title { "Connexion | Veille" }
        Meta {
            name: "description",
            content: "Sign in to the Veille technology watch portal."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4 w-full max-w-96",
                LoginForm { }
                ContactModal { }
            }
        }
    )
}
