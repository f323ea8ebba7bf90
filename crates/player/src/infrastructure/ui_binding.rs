//! In-memory page chrome
//!
//! Records the command box visibility and game title pushed through
//! [`UiBindingPort`] so the Dioxus shell can read them back when rendering.

use std::cell::RefCell;

use crate::ports::outbound::UiBindingPort;

/// Values the shell renders around the map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChromeSnapshot {
    pub command_box_visible: bool,
    pub game_title: Option<String>,
}

#[derive(Debug, Default)]
pub struct ChromeState {
    inner: RefCell<ChromeSnapshot>,
}

impl ChromeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> ChromeSnapshot {
        self.inner.borrow().clone()
    }
}

impl UiBindingPort for ChromeState {
    fn set_command_box_visible(&self, visible: bool) {
        tracing::debug!(visible, "Command box visibility");
        self.inner.borrow_mut().command_box_visible = visible;
    }

    fn set_game_title(&self, title: &str) {
        tracing::info!(title, "Game title");
        self.inner.borrow_mut().game_title = Some(title.to_string());
    }
}
