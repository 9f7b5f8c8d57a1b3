pub mod login;
pub mod not_found;

pub use login::Login;
pub use not_found::NotFound;
