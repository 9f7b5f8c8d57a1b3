//! Data shared between the views, the controllers and the HTTP transports.

pub mod api;
pub mod form;
