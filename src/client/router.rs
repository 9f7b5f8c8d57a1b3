use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{Login, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[redirect("/", || Route::Login {})]
    #[route("/login")]
    Login {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
