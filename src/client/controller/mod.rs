//! Platform independent state behind the login page.
//!
//! Controllers own everything the views display (button labels, messages, modal
//! visibility, field values) and decide every state transition. Views only forward DOM
//! events to them and send the [`Attempt`](submission::Attempt)s they hand out.

pub mod contact;
pub mod listeners;
pub mod login;
pub mod modal;
pub mod submission;

pub use contact::ContactModalController;
pub use login::LoginController;
pub use modal::{ClickTarget, ModalController, ModalEvent};
