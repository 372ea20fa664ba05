//! Search modal trigger.
//!
//! The coordinator only ever calls [`SearchModalTrigger::show`]; hiding is
//! done by the modal itself (overlay click, Esc, or picking a category).

/// Visibility flag of the "choose a category first" overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchModalTrigger {
    visible: bool,
}

impl SearchModalTrigger {
    pub fn show(&mut self) {
        tracing::debug!("search modal shown");
        self.visible = true;
    }

    pub fn hide(&mut self) {
        tracing::debug!("search modal hidden");
        self.visible = false;
    }

    #[must_use]
    pub const fn is_visible(self) -> bool {
        self.visible
    }
}
