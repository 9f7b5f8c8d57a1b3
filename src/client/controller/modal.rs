use crate::client::controller::listeners::{ListenerId, Listeners};

/// Element of the contact modal markup that received a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    OpenTrigger,
    CloseTrigger,
    /// The overlay itself, outside of the dialog content.
    Backdrop,
    /// Anything inside the dialog content.
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    Opened,
    Closed,
}

/// Visibility of a modal dialog
#[derive(Debug, Default)]
pub struct ModalController {
    visible: bool,
    listeners: Listeners<ModalEvent>,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// CSS `display` value for the modal container
    pub fn display(&self) -> &'static str {
        if self.visible {
            "flex"
        } else {
            "none"
        }
    }

    pub fn handle_click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::OpenTrigger => self.open(),
            ClickTarget::CloseTrigger | ClickTarget::Backdrop => self.close(),
            ClickTarget::Content => (),
        }
    }

    pub fn open(&mut self) {
        if !self.visible {
            self.visible = true;
            self.listeners.emit(&ModalEvent::Opened);
        }
    }

    pub fn close(&mut self) {
        if self.visible {
            self.visible = false;
            self.listeners.emit(&ModalEvent::Closed);
        }
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&ModalEvent) + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }
}
