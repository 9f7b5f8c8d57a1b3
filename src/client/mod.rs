pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod router;
pub mod routes;
pub mod transport;

pub use app::App;
