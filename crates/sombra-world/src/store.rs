//! Loading and validation of world configuration files.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{ConfigError, ConfigResult};
use crate::id::{ItemId, ObjectId, PuzzleId, RoomId};
use crate::model::{GameObject, Interaction, Item, Puzzle, Rect, Room};
use crate::schema::{ObjectDocument, WorldDocument};
use crate::world::{World, WorldMeta};

/// Read, parse and validate a world file.
pub fn load(path: impl AsRef<Path>) -> ConfigResult<World> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let world = from_json_str(&source)?;
    info!(
        path = %path.display(),
        rooms = world.room_count(),
        objects = world.object_count(),
        puzzles = world.puzzle_count(),
        "loaded world"
    );
    Ok(world)
}

/// Parse and validate a world from JSON text.
pub fn from_json_str(source: &str) -> ConfigResult<World> {
    from_document(parse_document(source)?)
}

/// Parse JSON text into the raw document without validating references.
pub fn parse_document(source: &str) -> ConfigResult<WorldDocument> {
    let mut deserializer = serde_json::Deserializer::from_str(source);
    let document: WorldDocument = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|error| {
            let path = error.path().to_string();
            ConfigError::Parse {
                path,
                message: error.into_inner().to_string(),
            }
        })?;
    deserializer.end().map_err(|error| ConfigError::Parse {
        path: ".".to_string(),
        message: error.to_string(),
    })?;
    Ok(document)
}

/// Validate a raw document and build the world graph.
pub fn from_document(document: WorldDocument) -> ConfigResult<World> {
    if document.rooms.is_empty() {
        return Err(ConfigError::EmptyWorld);
    }
    if !document.rooms.contains_key(&document.start_room) {
        return Err(ConfigError::UnknownStartRoom(document.start_room));
    }

    let items: Option<BTreeMap<ItemId, Item>> = document.items.map(|catalog| {
        catalog
            .into_iter()
            .map(|(id, item)| {
                let id = ItemId::from(id);
                let item = Item {
                    id: id.clone(),
                    name: item.name,
                };
                (id, item)
            })
            .collect()
    });

    for item in &document.inventory {
        check_item(items.as_ref(), "starting inventory", item)?;
    }

    // Puzzles first: interactions may point at a puzzle declared in any room.
    let mut puzzles: HashMap<PuzzleId, Puzzle> = HashMap::new();
    let mut declared_at: HashMap<&str, String> = HashMap::new();
    for (room_id, room) in &document.rooms {
        for object in &room.objects {
            let Some(puzzle) = &object.puzzle else {
                continue;
            };
            let location = format!("{room_id}/{}", object.id);
            if let Some(first) = declared_at.get(puzzle.id.as_str()) {
                return Err(ConfigError::DuplicatePuzzle {
                    id: puzzle.id.clone(),
                    first: first.clone(),
                    second: location,
                });
            }

            let context = format!("puzzle \"{}\"", puzzle.id);
            if let Some(item) = &puzzle.required_item {
                check_item(items.as_ref(), &context, item)?;
            }
            if let Some(item) = &puzzle.reward {
                check_item(items.as_ref(), &context, item)?;
            }

            declared_at.insert(puzzle.id.as_str(), location);
            puzzles.insert(
                PuzzleId::from(puzzle.id.as_str()),
                Puzzle {
                    id: PuzzleId::from(puzzle.id.as_str()),
                    required_item: puzzle.required_item.as_deref().map(ItemId::from),
                    hint: puzzle.hint.clone(),
                    success: puzzle.success.clone(),
                    reward: puzzle.reward.as_deref().map(ItemId::from),
                    room: RoomId::from(room_id.as_str()),
                },
            );
        }
    }

    let mut rooms = BTreeMap::new();
    for (room_id, room) in document.rooms {
        let mut seen = HashSet::new();
        let mut objects = Vec::with_capacity(room.objects.len());
        for object in room.objects {
            if !seen.insert(object.id.clone()) {
                return Err(ConfigError::DuplicateObject {
                    room: room_id,
                    object: object.id,
                });
            }
            objects.push(build_object(&room_id, object, &puzzles)?);
        }

        let id = RoomId::from(room_id);
        rooms.insert(
            id.clone(),
            Room {
                id,
                name: room.name,
                description: room.description,
                objects,
            },
        );
    }

    let meta = WorldMeta {
        title: document.title.unwrap_or_default(),
        start_room: RoomId::from(document.start_room),
        examine_verb: document.examine_verb,
        reward_message: document.reward_message,
    };
    let starting_inventory = document.inventory.into_iter().map(ItemId::from).collect();

    Ok(World::new(meta, rooms, puzzles, items, starting_inventory))
}

fn build_object(
    room: &str,
    object: ObjectDocument,
    puzzles: &HashMap<PuzzleId, Puzzle>,
) -> ConfigResult<GameObject> {
    let bounds = Rect::new(object.x, object.y, object.width, object.height);
    if !bounds.is_valid() {
        return Err(ConfigError::InvalidBounds {
            room: room.to_string(),
            object: object.id,
            width: object.width,
            height: object.height,
        });
    }

    let own_puzzle = object.puzzle.as_ref().map(|p| PuzzleId::from(p.id.as_str()));

    let mut interactions = BTreeMap::new();
    for (verb, interaction) in object.interactions {
        if !is_valid_verb(&verb) {
            return Err(ConfigError::InvalidVerb {
                room: room.to_string(),
                object: object.id,
                verb,
            });
        }

        let puzzle = match interaction.puzzle {
            Some(id) if !puzzles.contains_key(id.as_str()) => {
                return Err(ConfigError::UnknownPuzzle {
                    room: room.to_string(),
                    object: object.id,
                    verb,
                    puzzle: id,
                });
            }
            Some(id) => Some(PuzzleId::from(id)),
            None => own_puzzle.clone(),
        };

        interactions.insert(
            verb.clone(),
            Interaction {
                verb,
                text: interaction.text,
                puzzle,
            },
        );
    }

    Ok(GameObject {
        id: ObjectId::from(object.id),
        name: object.name,
        bounds,
        interactions,
        puzzle: own_puzzle,
    })
}

fn check_item(
    catalog: Option<&BTreeMap<ItemId, Item>>,
    context: &str,
    item: &str,
) -> ConfigResult<()> {
    match catalog {
        Some(catalog) if !catalog.contains_key(item) => Err(ConfigError::UnknownItem {
            context: context.to_string(),
            item: item.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Commands are lower-cased before lookup, so only lower-case verbs can match.
fn is_valid_verb(verb: &str) -> bool {
    !verb.is_empty() && verb.trim() == verb && verb.to_lowercase() == verb
}
