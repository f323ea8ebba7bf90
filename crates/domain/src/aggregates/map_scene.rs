//! Scene layout for the explored map
//!
//! The view is centered on the current room. When the current room has no
//! position the map cannot be placed, so only that room is drawn, at the
//! viewport center.

use crate::aggregates::MapStore;
use crate::common::room_label;
use crate::entities::Room;
use crate::value_objects::{LineSegment, MapStyle, RoomMarker, Scene, ScreenTransform, Viewport};

impl MapStore {
    /// Lay out the known map inside `viewport`. Never mutates the store.
    pub fn render_scene(&self, viewport: Viewport, style: &MapStyle) -> Scene {
        let mut scene = Scene::empty(viewport);

        let Some(current_key) = self.current_location() else {
            return scene;
        };
        let Some(current) = self.room(current_key.as_str()) else {
            tracing::debug!(location = %current_key, "Current location is not on the map");
            return scene;
        };

        let (center_x, center_y) = viewport.center();

        let Some(current_position) = current.position() else {
            scene.markers.push(marker(current, center_x, center_y, style, true));
            return scene;
        };

        let transform = ScreenTransform {
            origin_x: center_x - current_position.x * style.scale,
            origin_y: center_y + current_position.y * style.scale,
            scale: style.scale,
        };

        for (origin, destinations) in self.paths() {
            let Some(from) = self.room(origin.as_str()).and_then(Room::position) else {
                continue;
            };
            for destination in destinations {
                let Some(to) = self.room(destination.as_str()).and_then(Room::position) else {
                    continue;
                };
                let (x1, y1) = transform.apply(from.x, from.y);
                let (x2, y2) = transform.apply(to.x, to.y);
                scene.segments.push(LineSegment { x1, y1, x2, y2 });
            }
        }

        for room in self.rooms() {
            let Some(position) = room.position() else {
                continue;
            };
            let (x, y) = transform.apply(position.x, position.y);
            let is_current = room.key() == current_key;
            scene.markers.push(marker(room, x, y, style, is_current));
        }

        scene
    }
}

fn marker(room: &Room, x: f64, y: f64, style: &MapStyle, is_current: bool) -> RoomMarker {
    RoomMarker {
        room_key: room.key().clone(),
        x,
        y,
        size: style.room_size,
        is_current,
        label: room_label(room.name()),
    }
}

#[cfg(test)]
mod tests {
    use crate::aggregates::{MapReveal, MapSnapshot, MapStore};
    use crate::entities::{Exit, Room};
    use crate::keys::RoomKey;
    use crate::value_objects::{LineSegment, MapStyle, Position, Viewport};

    fn viewport() -> Viewport {
        Viewport::new(800.0, 600.0).expect("valid viewport")
    }

    fn style() -> MapStyle {
        MapStyle {
            room_size: 40.0,
            scale: 75.0,
        }
    }

    fn located(key: &str, name: &str, x: f64, y: f64) -> Room {
        Room::new(key, name).with_position(Position::new(x, y).expect("finite"))
    }

    fn village() -> MapStore {
        let mut store = MapStore::new();
        store.set_data(MapSnapshot {
            rooms: vec![
                located("gate", "Village Gate", 0.0, 0.0),
                located("square", "Square", 0.0, 1.0),
                located("well", "Old Well", 1.0, 1.0),
                Room::new("cellar", "Cellar"),
            ],
            exits: vec![
                Exit::new("gate_n", "gate", "square"),
                Exit::new("square_e", "square", "well"),
                Exit::new("square_d", "square", "cellar"),
            ],
        });
        store
    }

    #[test]
    fn test_no_current_location_renders_empty_scene() {
        let store = village();
        let scene = store.render_scene(viewport(), &style());

        assert!(scene.is_empty());
        assert_eq!((scene.width, scene.height), (800.0, 600.0));
    }

    #[test]
    fn test_unknown_current_location_renders_empty_scene() {
        let mut store = village();
        store.set_current_location(Some(RoomKey::new("moon")));

        assert!(store.render_scene(viewport(), &style()).is_empty());
    }

    #[test]
    fn test_current_room_is_centered() {
        let mut store = village();
        store.set_current_location(Some(RoomKey::new("square")));

        let scene = store.render_scene(viewport(), &style());
        let current = scene.current_marker().expect("current marker");

        assert_eq!(current.room_key, RoomKey::new("square"));
        assert_eq!((current.x, current.y), (400.0, 300.0));
        assert_eq!(scene.markers.iter().filter(|m| m.is_current).count(), 1);
    }

    #[test]
    fn test_world_y_points_up_on_screen() {
        let mut store = village();
        store.set_current_location(Some(RoomKey::new("gate")));

        let scene = store.render_scene(viewport(), &style());
        let square = scene
            .markers
            .iter()
            .find(|m| m.room_key.as_str() == "square")
            .expect("square marker");

        assert_eq!((square.x, square.y), (400.0, 225.0));
    }

    #[test]
    fn test_segments_skip_rooms_without_position() {
        let mut store = village();
        store.set_current_location(Some(RoomKey::new("gate")));

        let scene = store.render_scene(viewport(), &style());

        assert_eq!(
            scene.segments,
            vec![
                LineSegment {
                    x1: 400.0,
                    y1: 300.0,
                    x2: 400.0,
                    y2: 225.0
                },
                LineSegment {
                    x1: 400.0,
                    y1: 225.0,
                    x2: 475.0,
                    y2: 225.0
                },
            ]
        );
        // Cellar has no position
        assert_eq!(scene.markers.len(), 3);
    }

    #[test]
    fn test_current_room_without_position_draws_only_itself() {
        let mut store = village();
        store.set_current_location(Some(RoomKey::new("cellar")));

        let scene = store.render_scene(viewport(), &style());

        assert!(scene.segments.is_empty());
        assert_eq!(scene.markers.len(), 1);
        let marker = &scene.markers[0];
        assert!(marker.is_current);
        assert_eq!((marker.x, marker.y), (400.0, 300.0));
        assert_eq!(marker.label, "Cellar");
    }

    #[test]
    fn test_labels_are_stripped_and_truncated() {
        let mut store = MapStore::new();
        store.set_data(MapSnapshot {
            rooms: vec![located("mine", "<b>Abandoned Mines</b>", 0.0, 0.0)],
            exits: vec![],
        });
        store.set_current_location(Some(RoomKey::new("mine")));

        let scene = store.render_scene(viewport(), &style());

        assert_eq!(scene.markers[0].label, "Abandon...");
        assert_eq!(scene.markers[0].size, 40.0);
    }

    #[test]
    fn test_duplicate_paths_draw_duplicate_segments() {
        let mut store = village();
        store.reveal(MapReveal {
            rooms: None,
            exits: Some(vec![Exit::new("gate_n", "gate", "square")]),
        });
        store.set_current_location(Some(RoomKey::new("gate")));

        let scene = store.render_scene(viewport(), &style());

        assert_eq!(scene.segments.len(), 3);
    }

    #[test]
    fn test_render_does_not_mutate_store() {
        let mut store = village();
        store.set_current_location(Some(RoomKey::new("gate")));
        let paths_before = store.path_count();

        let first = store.render_scene(viewport(), &style());
        let second = store.render_scene(viewport(), &style());

        assert_eq!(first, second);
        assert_eq!(store.path_count(), paths_before);
    }
}
