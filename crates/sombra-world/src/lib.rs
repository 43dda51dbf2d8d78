//! World model for the Sombraportal adventure engine.
//!
//! A world is a set of rooms, each holding an ordered list of clickable
//! objects with verb-keyed interactions and optional puzzles. It is loaded
//! once from a JSON configuration file, validated in full, and never mutated
//! afterwards.

/// Error types for configuration loading.
pub mod error;
/// String identifiers for rooms, objects, puzzles and items.
pub mod id;
/// Rooms, objects, interactions, puzzles and screen geometry.
pub mod model;
/// Serde mirror of the configuration document.
pub mod schema;
/// Loading and validation of configuration files.
pub mod store;
/// The immutable world graph.
pub mod world;

/// Re-export error types.
pub use error::{ConfigError, ConfigResult};
/// Re-export identifier types.
pub use id::{ItemId, ObjectId, PuzzleId, RoomId};
/// Re-export model types.
pub use model::{GameObject, Interaction, Item, Point, Puzzle, Rect, Room};
/// Re-export world types.
pub use world::{World, WorldMeta};
