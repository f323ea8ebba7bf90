//! Wire shapes of the map data pushed by the game server
//!
//! The server sends compact tables keyed by room and exit key:
//!
//! ```json
//! {
//!   "rooms": { "hall": ["Great Hall", [0, 0]], "attic": ["Attic", null] },
//!   "exits": { "hall_up": ["hall", "attic"] }
//! }
//! ```
//!
//! Tables keep document order, so conversion into domain types walks rooms and
//! exits in the order the server sent them.

use mudmap_domain::{Exit, MapReveal, MapSnapshot, Position, Room};
use serde::{Deserialize, Serialize};

use crate::table::WireTable;

/// `[name, [x, y] | null]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomEntry(pub String, pub Option<[f64; 2]>);

/// `[origin_key, destination_key]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitEntry(pub String, pub String);

pub type RoomTable = WireTable<RoomEntry>;
pub type ExitTable = WireTable<ExitEntry>;

/// Full map replacing everything the client knows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapSnapshotData {
    #[serde(default)]
    pub rooms: RoomTable,
    #[serde(default)]
    pub exits: ExitTable,
}

/// Newly discovered part of the map. Either table may be absent or `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapRevealData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rooms: Option<RoomTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exits: Option<ExitTable>,
}

impl From<MapSnapshotData> for MapSnapshot {
    fn from(data: MapSnapshotData) -> Self {
        Self {
            rooms: rooms_from_table(data.rooms),
            exits: exits_from_table(data.exits),
        }
    }
}

impl From<MapRevealData> for MapReveal {
    fn from(data: MapRevealData) -> Self {
        Self {
            rooms: data.rooms.map(rooms_from_table),
            exits: data.exits.map(exits_from_table),
        }
    }
}

impl From<&Room> for RoomEntry {
    fn from(room: &Room) -> Self {
        Self(
            room.name().to_string(),
            room.position().map(|p| [p.x, p.y]),
        )
    }
}

impl From<&Exit> for ExitEntry {
    fn from(exit: &Exit) -> Self {
        Self(
            exit.origin().to_string(),
            exit.destination().to_string(),
        )
    }
}

fn rooms_from_table(table: RoomTable) -> Vec<Room> {
    table
        .into_iter()
        .map(|(key, RoomEntry(name, position))| {
            let position = position.and_then(|coords| match Position::try_from(coords) {
                Ok(position) => Some(position),
                Err(err) => {
                    tracing::warn!(room = %key, error = %err, "Dropping invalid room position");
                    None
                }
            });
            Room::new(key, name).with_optional_position(position)
        })
        .collect()
}

fn exits_from_table(table: ExitTable) -> Vec<Exit> {
    table
        .into_iter()
        .map(|(key, ExitEntry(origin, destination))| Exit::new(key, origin, destination))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_snapshot_from_wire_json() {
        let data: MapSnapshotData = serde_json::from_value(json!({
            "rooms": {
                "hall": ["Great Hall", [0, 0]],
                "attic": ["Attic", null]
            },
            "exits": { "hall_up": ["hall", "attic"] }
        }))
        .expect("valid snapshot");

        let snapshot = MapSnapshot::from(data);

        assert_eq!(snapshot.rooms.len(), 2);
        // Document order: hall before attic
        assert_eq!(snapshot.rooms[1].key().as_str(), "attic");
        assert_eq!(snapshot.rooms[1].position(), None);
        assert_eq!(
            snapshot.rooms[0].position(),
            Some(Position::new(0.0, 0.0).expect("finite"))
        );
        assert_eq!(snapshot.exits[0].origin().as_str(), "hall");
        assert_eq!(snapshot.exits[0].destination().as_str(), "attic");
    }

    #[test]
    fn test_exits_keep_server_order() {
        let data: MapRevealData = serde_json::from_str(
            r#"{"exits":{"z_north":["A","C"],"a_south":["A","B"]}}"#,
        )
        .expect("valid reveal");

        let exits = MapReveal::from(data).exits.expect("exits table");
        let keys: Vec<&str> = exits.iter().map(|e| e.key().as_str()).collect();

        assert_eq!(keys, vec!["z_north", "a_south"]);
    }

    #[test]
    fn test_snapshot_tables_default_to_empty() {
        let data: MapSnapshotData = serde_json::from_value(json!({})).expect("valid snapshot");
        assert_eq!(data, MapSnapshotData::default());
    }

    #[test]
    fn test_reveal_tables_are_optional() {
        let data: MapRevealData = serde_json::from_value(json!({
            "exits": { "e2": ["A", "B"] },
            "rooms": null
        }))
        .expect("valid reveal");

        let reveal = MapReveal::from(data);

        assert!(reveal.rooms.is_none());
        assert_eq!(reveal.exits.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_reveal_without_tables_is_empty() {
        let data: MapRevealData = serde_json::from_value(json!({})).expect("valid reveal");
        assert!(MapReveal::from(data).is_empty());
    }

    #[test]
    fn test_room_entry_rejects_malformed_position() {
        let result = serde_json::from_value::<RoomEntry>(json!(["Hall", [1]]));
        assert!(result.is_err());
    }

    #[test]
    fn test_room_entry_from_domain_room() {
        let room = Room::new("hall", "Great Hall")
            .with_position(Position::new(2.0, -1.0).expect("finite"));
        assert_eq!(
            serde_json::to_value(RoomEntry::from(&room)).expect("serialize"),
            json!(["Great Hall", [2.0, -1.0]])
        );
    }
}
