//! UiBindingPort - page chrome driven by server-pushed settings
//!
//! Settings pushes have two visible side effects outside the map itself:
//! the command box is shown or hidden, and the page title changes when the
//! server names the game. The surrounding UI implements this trait; the map
//! session only decides *when* to call it.

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait UiBindingPort {
    /// Show or hide the command input box
    fn set_command_box_visible(&self, visible: bool);

    /// Replace the game title text. Never called with an empty title.
    fn set_game_title(&self, title: &str);
}
