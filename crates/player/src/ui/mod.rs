//! Dioxus shell around the map

use dioxus::prelude::*;

use crate::application::{map_viewport, LocalizedStrings, MapSession};
use crate::infrastructure::ChromeSnapshot;

pub mod map_view;

pub use map_view::{MapDialog, MapView};

/// Width of the element hosting the map dialog
pub const DEFAULT_CONTAINER_WIDTH: f64 = 800.0;
/// Main window height the dialog body is sized against
pub const DEFAULT_WINDOW_HEIGHT: f64 = 750.0;

/// Root component. Expects `MapSession`, `ChromeSnapshot` and
/// `LocalizedStrings` in context (see `crates/player/src/main.rs`).
pub fn app() -> Element {
    let session = use_context::<MapSession>();
    let chrome = use_context::<ChromeSnapshot>();
    let strings = use_context::<LocalizedStrings>();

    let mut map_open = use_signal(|| true);

    let scene = match map_viewport(DEFAULT_CONTAINER_WIDTH, DEFAULT_WINDOW_HEIGHT) {
        Ok(viewport) => session.scene(viewport),
        Err(e) => {
            tracing::error!(error = %e, "Invalid map viewport");
            return rsx! {};
        }
    };
    let title = strings.translate("MAP", "", None);
    let game_title = chrome.game_title.clone().unwrap_or_default();

    rsx! {
        div {
            style: "width: 100vw; height: 100vh; background: black; color: white; font-family: sans-serif;",

            header {
                style: "display: flex; gap: 8px; align-items: center; padding: 8px;",
                h1 { style: "margin: 0; font-size: 18px;", "{game_title}" }
                button {
                    class: "mudmap-map-button",
                    onclick: move |_| map_open.set(true),
                    "{title}"
                }
            }

            if map_open() {
                MapDialog {
                    scene,
                    title: title.clone(),
                    on_close: move |_| map_open.set(false),
                }
            }

            if chrome.command_box_visible {
                input {
                    class: "mudmap-command-box",
                    r#type: "text",
                    style: "display: block; width: 100%; margin-top: 8px;",
                }
            }
        }
    }
}
