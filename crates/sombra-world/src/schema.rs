//! Serde mirror of the on-disk configuration document.
//!
//! These types accept exactly what the JSON says; referential checks happen
//! in [`crate::store`] when the document is turned into a [`crate::World`].
//! The `_es` aliases accept bilingual data files keyed `name_es`, `text_es` and so on.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Default room the player starts in.
pub const DEFAULT_START_ROOM: &str = "entrance";
/// Default verb triggered by a click.
pub const DEFAULT_EXAMINE_VERB: &str = "examinar";
/// Default notice shown when a puzzle grants its reward.
pub const DEFAULT_REWARD_MESSAGE: &str = "¡Has obtenido: {item}!";

fn default_start_room() -> String {
    DEFAULT_START_ROOM.to_string()
}

fn default_examine_verb() -> String {
    DEFAULT_EXAMINE_VERB.to_string()
}

fn default_reward_message() -> String {
    DEFAULT_REWARD_MESSAGE.to_string()
}

/// Top-level configuration document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldDocument {
    /// Optional game title.
    #[serde(default)]
    pub title: Option<String>,
    /// Room the session starts in.
    #[serde(default = "default_start_room")]
    pub start_room: String,
    /// Verb a click triggers.
    #[serde(default = "default_examine_verb")]
    pub examine_verb: String,
    /// Reward notice template; `{item}` is replaced by the item name.
    #[serde(default = "default_reward_message")]
    pub reward_message: String,
    /// Items the player holds when a session starts.
    #[serde(default)]
    pub inventory: Vec<String>,
    /// Optional item catalog. When present, all item references are checked
    /// against it.
    #[serde(default)]
    pub items: Option<BTreeMap<String, ItemDocument>>,
    /// Rooms keyed by id.
    pub rooms: BTreeMap<String, RoomDocument>,
}

/// Item catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDocument {
    /// Display name.
    #[serde(alias = "name_es")]
    pub name: String,
}

/// A room as written in the configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDocument {
    /// Display name.
    #[serde(alias = "name_es")]
    pub name: String,
    /// Narrative description.
    #[serde(alias = "description_es")]
    pub description: String,
    /// Objects in declaration order.
    #[serde(default)]
    pub objects: Vec<ObjectDocument>,
}

/// An object as written in the configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectDocument {
    /// Identifier, unique within the room.
    pub id: String,
    /// Display name.
    #[serde(alias = "name_es")]
    pub name: String,
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
    /// Interactions keyed by verb.
    #[serde(default)]
    pub interactions: BTreeMap<String, InteractionDocument>,
    /// Puzzle declared on this object.
    #[serde(default)]
    pub puzzle: Option<PuzzleDocument>,
}

/// An interaction as written in the configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionDocument {
    /// Response text.
    #[serde(alias = "text_es")]
    pub text: String,
    /// Puzzle to evaluate instead of the object's own puzzle.
    #[serde(default)]
    pub puzzle: Option<String>,
}

/// A puzzle as written in the configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleDocument {
    /// Globally unique identifier.
    pub id: String,
    /// Item required to solve it.
    #[serde(default)]
    pub required_item: Option<String>,
    /// Shown while unsolved.
    #[serde(alias = "hint_es")]
    pub hint: String,
    /// Shown on solve.
    #[serde(alias = "success_es")]
    pub success: String,
    /// Item granted on solve.
    #[serde(default)]
    pub reward: Option<String>,
}
