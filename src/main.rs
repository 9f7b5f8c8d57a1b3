#![allow(non_snake_case)]

use veille::client;

fn main() {
    #[cfg(not(feature = "server"))]
    {
        #[cfg(feature = "desktop")]
        dotenvy::dotenv().ok();

        dioxus::launch(client::App);
    }

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        dotenvy::dotenv().ok();

        tracing::info!("Starting server");

        Ok(dioxus::server::router(client::App))
    })
}
