use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::error::ConfigResult;
use crate::id::{ItemId, PuzzleId, RoomId};
use crate::model::{Item, Puzzle, Room};
use crate::store;

/// World-wide settings that are not part of any room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldMeta {
    /// Game title.
    pub title: String,
    /// Room every session starts in.
    pub start_room: RoomId,
    /// Verb a click triggers on the object under the pointer.
    pub examine_verb: String,
    /// Reward notice template with an `{item}` placeholder.
    pub reward_message: String,
}

/// The validated, immutable world graph.
///
/// Built once by [`crate::store`]; every reference inside it has been checked,
/// so lookups by ids taken from the world itself always succeed.
#[derive(Debug, Clone)]
pub struct World {
    /// World-wide settings.
    pub meta: WorldMeta,
    rooms: BTreeMap<RoomId, Room>,
    puzzles: HashMap<PuzzleId, Puzzle>,
    items: Option<BTreeMap<ItemId, Item>>,
    starting_inventory: Vec<ItemId>,
}

impl World {
    pub(crate) fn new(
        meta: WorldMeta,
        rooms: BTreeMap<RoomId, Room>,
        puzzles: HashMap<PuzzleId, Puzzle>,
        items: Option<BTreeMap<ItemId, Item>>,
        starting_inventory: Vec<ItemId>,
    ) -> Self {
        Self {
            meta,
            rooms,
            puzzles,
            items,
            starting_inventory,
        }
    }

    /// Load and validate a world from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        store::load(path)
    }

    /// Parse and validate a world from JSON text.
    pub fn from_json_str(source: &str) -> ConfigResult<Self> {
        store::from_json_str(source)
    }

    // -----------------------------------------------------------------------
    // Rooms
    // -----------------------------------------------------------------------

    /// Look up a room by id.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// The configured start room.
    pub fn start_room(&self) -> Option<&Room> {
        self.rooms.get(&self.meta.start_room)
    }

    /// All rooms, ordered by id.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Number of objects across all rooms.
    pub fn object_count(&self) -> usize {
        self.rooms.values().map(|r| r.objects.len()).sum()
    }

    // -----------------------------------------------------------------------
    // Puzzles
    // -----------------------------------------------------------------------

    /// Look up a puzzle by id.
    pub fn puzzle(&self, id: &str) -> Option<&Puzzle> {
        self.puzzles.get(id)
    }

    /// All puzzles, in no particular order.
    pub fn puzzles(&self) -> impl Iterator<Item = &Puzzle> {
        self.puzzles.values()
    }

    /// Number of puzzles.
    pub fn puzzle_count(&self) -> usize {
        self.puzzles.len()
    }

    // -----------------------------------------------------------------------
    // Items
    // -----------------------------------------------------------------------

    /// The item catalog, if the configuration declares one.
    pub fn items(&self) -> Option<&BTreeMap<ItemId, Item>> {
        self.items.as_ref()
    }

    /// Display name of an item: the catalog name, or the id itself.
    pub fn item_name<'a>(&'a self, id: &'a ItemId) -> &'a str {
        self.items
            .as_ref()
            .and_then(|items| items.get(id))
            .map(|item| item.name.as_str())
            .unwrap_or_else(|| id.as_str())
    }

    /// Items held when a session starts.
    pub fn starting_inventory(&self) -> &[ItemId] {
        &self.starting_inventory
    }

    /// The notice shown when `item` is granted.
    pub fn reward_notice(&self, item: &ItemId) -> String {
        self.meta
            .reward_message
            .replace("{item}", self.item_name(item))
    }
}
