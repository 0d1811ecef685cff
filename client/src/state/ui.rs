//! Site chrome view state.
//!
//! DESIGN
//! ======
//! The layout owns this as a local signal; nothing else reads it.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Mobile navigation menu state, owned by the layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close the menu after a link is followed.
    pub fn close(&mut self) {
        self.open = false;
    }
}
