pub mod contact_modal;
pub mod login_form;
pub mod navbar;
pub mod page;

pub use contact_modal::ContactModal;
pub use login_form::LoginForm;
pub use navbar::Navbar;
pub use page::Page;
