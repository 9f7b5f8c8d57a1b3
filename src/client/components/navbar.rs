use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar",
            div {
                class: "navbar-start",
                Link { to: Route::Login {},
                    div { class: "flex items-center gap-2",
                        p { class: "text-xl",
                            "Veille"
                        }
                        p { class: "text-xs",
                            "v0.1.0.Alpha-1"
                        }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
