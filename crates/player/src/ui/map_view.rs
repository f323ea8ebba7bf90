//! SVG rendering of a map [`Scene`]

use dioxus::prelude::*;
use mudmap_domain::{RoomMarker, Scene};

const PATH_COLOR: &str = "grey";
const CURRENT_ROOM_STROKE: &str = "white";
const ROOM_STROKE: &str = "grey";
const LABEL_COLOR: &str = "white";
const LABEL_FONT_SIZE: &str = "14px";

fn room_stroke(marker: &RoomMarker) -> &'static str {
    if marker.is_current {
        CURRENT_ROOM_STROKE
    } else {
        ROOM_STROKE
    }
}

/// Paths first, then room squares with their labels on top
#[component]
pub fn MapView(scene: Scene) -> Element {
    rsx! {
        svg {
            class: "mudmap-svg",
            width: "{scene.width}",
            height: "{scene.height}",
            view_box: "0 0 {scene.width} {scene.height}",

            for (index, segment) in scene.segments.iter().enumerate() {
                line {
                    key: "path-{index}",
                    x1: "{segment.x1}",
                    y1: "{segment.y1}",
                    x2: "{segment.x2}",
                    y2: "{segment.y2}",
                    stroke: PATH_COLOR,
                    stroke_width: "2",
                }
            }

            for marker in scene.markers.iter() {
                g {
                    key: "{marker.room_key}",
                    rect {
                        x: "{marker.left()}",
                        y: "{marker.top()}",
                        width: "{marker.size}",
                        height: "{marker.size}",
                        fill: "none",
                        stroke: room_stroke(marker),
                        stroke_width: "2",
                    }
                    text {
                        x: "{marker.x}",
                        y: "{marker.y}",
                        fill: LABEL_COLOR,
                        text_anchor: "middle",
                        dominant_baseline: "middle",
                        font_family: "sans-serif",
                        font_size: LABEL_FONT_SIZE,
                        "{marker.label}"
                    }
                }
            }
        }
    }
}

/// Map dialog with a localized title and a close button
#[component]
pub fn MapDialog(scene: Scene, title: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "mudmap-dialog",
            role: "dialog",
            style: "background: black; border: 1px solid grey; display: inline-block;",

            div {
                class: "mudmap-dialog-header",
                style: "display: flex; justify-content: space-between; align-items: center; color: white; padding: 4px 8px;",
                h3 { style: "margin: 0;", "{title}" }
                button {
                    class: "mudmap-dialog-close",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }

            MapView { scene }
        }
    }
}
