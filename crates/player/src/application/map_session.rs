//! Map session - explored map and display settings of one game session
//!
//! A `MapSession` is created when the client joins a game and dropped when
//! the session ends. It is handed to the UI layer explicitly; there is no
//! process-wide map or settings state.

use mudmap_domain::common::none_if_empty;
use mudmap_domain::{
    AdjacencyPolicy, DomainError, MapReveal, MapSnapshot, MapStore, RoomKey,
    Scene, SettingsBag, Viewport,
};
use mudmap_shared::ServerMessage;
use serde_json::{Map, Value};

use super::localized_strings::LocalizedStrings;
use crate::ports::outbound::UiBindingPort;

/// Share of the main window height given to the map body
pub const MAP_HEIGHT_RATIO: f64 = 0.8;

/// Viewport for the map dialog body: full container width, 80% of the main
/// window height.
pub fn map_viewport(container_width: f64, window_height: f64) -> Result<Viewport, DomainError> {
    Viewport::new(container_width, window_height * MAP_HEIGHT_RATIO)
}

#[derive(Debug, Clone, Default)]
pub struct MapSession {
    map: MapStore,
    settings: SettingsBag,
}

impl MapSession {
    pub fn new(settings: SettingsBag) -> Self {
        Self {
            map: MapStore::new(),
            settings,
        }
    }

    pub fn with_adjacency_policy(mut self, policy: AdjacencyPolicy) -> Self {
        self.map = self.map.with_adjacency_policy(policy);
        self
    }

    pub fn map(&self) -> &MapStore {
        &self.map
    }

    pub fn settings(&self) -> &SettingsBag {
        &self.settings
    }

    /// Apply one server push
    pub fn handle_server_message(&mut self, message: ServerMessage, ui: &dyn UiBindingPort) {
        tracing::trace!(kind = message.kind(), "Handling server message");

        match message {
            ServerMessage::MapData(data) => {
                self.map.set_data(MapSnapshot::from(data));
            }
            ServerMessage::RevealMap(data) => {
                self.map.reveal(MapReveal::from(data));
            }
            ServerMessage::CurrentLocation { key } => {
                self.map.set_current_location(key.map(RoomKey::from));
            }
            ServerMessage::ClearMap => {
                self.map.clear();
            }
            ServerMessage::Settings { values } => {
                self.apply_settings(values, ui);
            }
            ServerMessage::Unknown => {
                tracing::warn!("Ignoring unknown server message type");
            }
        }
    }

    /// Overwrite settings key by key, then refresh the page chrome.
    ///
    /// Command box visibility is re-applied after every push. The title only
    /// changes when the server supplies a non-empty one.
    pub fn apply_settings(&mut self, values: Map<String, Value>, ui: &dyn UiBindingPort) {
        self.settings.set(values);

        ui.set_command_box_visible(self.settings.show_command_box());

        let title = self.settings.game_title();
        if let Some(title) = none_if_empty(&title) {
            ui.set_game_title(title);
        }
    }

    /// Lay out the map with the current room size and scale settings
    pub fn scene(&self, viewport: Viewport) -> Scene {
        self.map.render_scene(viewport, &self.settings.map_style())
    }

    /// Localized compass suffix for an exit button, e.g. `"(N)"`
    pub fn exit_direction_label(&self, exit: &str, strings: &LocalizedStrings) -> Option<String> {
        self.map
            .exit_compass(exit)
            .map(|direction| strings.tr(direction.localization_key()))
    }

    /// Sprite grid cell for an exit, see [`mudmap_domain::DirectionIndex`]
    pub fn exit_grid_index(&self, exit: &str) -> Option<u8> {
        self.map.exit_grid_index(exit).map(|index| index.as_u8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::localized_strings::LocalizedRecord;
    use crate::ports::outbound::MockUiBindingPort;
    use mockall::predicate::eq;
    use mudmap_shared::decode;

    fn quiet_ui() -> MockUiBindingPort {
        let mut ui = MockUiBindingPort::new();
        ui.expect_set_command_box_visible().returning(|_| ());
        ui.expect_set_game_title().returning(|_| ());
        ui
    }

    fn apply(session: &mut MapSession, frame: &str, ui: &dyn UiBindingPort) {
        session.handle_server_message(decode(frame).expect("valid frame"), ui);
    }

    fn village_session() -> MapSession {
        let ui = quiet_ui();
        let mut session = MapSession::default();
        apply(
            &mut session,
            r#"{"type":"MapData",
                "rooms":{"A":["Alpha",[0,0]],"B":["Beta",[0,1]]},
                "exits":{"e1":["A","B"]}}"#,
            &ui,
        );
        session
    }

    #[test]
    fn test_map_data_replaces_map() {
        let session = village_session();
        assert_eq!(session.map().room_count(), 2);
        assert_eq!(session.map().exit_count(), 1);
    }

    #[test]
    fn test_reveal_twice_appends_twice() {
        let ui = quiet_ui();
        let mut session = village_session();
        let frame = r#"{"type":"RevealMap","exits":{"e2":["A","B"]}}"#;

        apply(&mut session, frame, &ui);
        apply(&mut session, frame, &ui);

        assert_eq!(session.map().exit_count(), 2);
        assert_eq!(session.map().paths_from("A").len(), 3);
    }

    #[test]
    fn test_dedup_session_keeps_single_edge() {
        let ui = quiet_ui();
        let mut session = MapSession::default().with_adjacency_policy(AdjacencyPolicy::Deduplicate);
        let frame = r#"{"type":"RevealMap","exits":{"e2":["A","B"]}}"#;

        apply(&mut session, frame, &ui);
        apply(&mut session, frame, &ui);

        assert_eq!(session.map().paths_from("A").len(), 1);
    }

    #[test]
    fn test_reveal_follows_server_exit_order() {
        let ui = quiet_ui();
        let mut session = MapSession::default();
        apply(
            &mut session,
            r#"{"type":"RevealMap","exits":{"z_north":["A","C"],"a_south":["A","B"]}}"#,
            &ui,
        );

        assert_eq!(
            session.map().paths_from("A"),
            &[RoomKey::new("C"), RoomKey::new("B")]
        );
    }

    #[test]
    fn test_clear_map_message() {
        let ui = quiet_ui();
        let mut session = village_session();
        apply(&mut session, r#"{"type":"ClearMap"}"#, &ui);
        assert!(session.map().is_empty());
    }

    #[test]
    fn test_current_location_message() {
        let ui = quiet_ui();
        let mut session = village_session();

        apply(&mut session, r#"{"type":"CurrentLocation","key":"B"}"#, &ui);
        assert_eq!(session.map().current_location(), Some(&RoomKey::new("B")));

        apply(&mut session, r#"{"type":"CurrentLocation","key":null}"#, &ui);
        assert_eq!(session.map().current_location(), None);
    }

    #[test]
    fn test_unknown_message_changes_nothing() {
        let ui = MockUiBindingPort::new();
        let mut session = village_session();
        apply(&mut session, r#"{"type":"Emote"}"#, &ui);
        assert_eq!(session.map().room_count(), 2);
    }

    #[test]
    fn test_settings_push_updates_chrome() {
        let mut ui = MockUiBindingPort::new();
        ui.expect_set_command_box_visible()
            .with(eq(true))
            .times(1)
            .returning(|_| ());
        ui.expect_set_game_title()
            .with(eq("Dragon Keep"))
            .times(1)
            .returning(|_| ());

        let mut session = MapSession::default();
        apply(
            &mut session,
            r#"{"type":"Settings","values":{"show_command_box":true,"game_title":"Dragon Keep"}}"#,
            &ui,
        );

        assert!(session.settings().show_command_box());
    }

    #[test]
    fn test_empty_title_is_not_applied() {
        let mut ui = MockUiBindingPort::new();
        ui.expect_set_command_box_visible()
            .with(eq(false))
            .times(1)
            .returning(|_| ());
        ui.expect_set_game_title().never();

        let mut session = MapSession::default();
        apply(
            &mut session,
            r#"{"type":"Settings","values":{"map_scale":50}}"#,
            &ui,
        );

        assert_eq!(session.settings().map_scale(), 50.0);
    }

    #[test]
    fn test_scene_uses_settings_scale() {
        let ui = quiet_ui();
        let mut session = village_session();
        apply(&mut session, r#"{"type":"CurrentLocation","key":"A"}"#, &ui);
        apply(
            &mut session,
            r#"{"type":"Settings","values":{"map_scale":100,"map_room_size":20}}"#,
            &ui,
        );

        let scene = session.scene(map_viewport(800.0, 750.0).expect("valid viewport"));

        assert_eq!((scene.width, scene.height), (800.0, 600.0));
        let beta = scene
            .markers
            .iter()
            .find(|m| m.room_key.as_str() == "B")
            .expect("beta marker");
        assert_eq!((beta.x, beta.y), (400.0, 200.0));
        assert_eq!(beta.size, 20.0);
    }

    #[test]
    fn test_exit_direction_label_is_localized() {
        let session = village_session();
        let strings =
            LocalizedStrings::load(vec![LocalizedRecord::new("", "(N)", "(Nord)")], Vec::new());

        assert_eq!(
            session.exit_direction_label("e1", &strings),
            Some("(Nord)".to_string())
        );
        assert_eq!(session.exit_grid_index("e1"), Some(1));
        assert_eq!(session.exit_direction_label("missing", &strings), None);
    }
}
