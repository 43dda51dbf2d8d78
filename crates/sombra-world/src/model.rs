use std::collections::BTreeMap;

use serde::Serialize;

use crate::id::{ItemId, ObjectId, PuzzleId, RoomId};

/// A screen-space position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Point {
    /// Create a point.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned screen rectangle.
///
/// Containment is half-open: the left and top edges are inside, the right
/// and bottom edges are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Rect {
    /// Create a rectangle.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the point lies inside the rectangle.
    pub fn contains(&self, point: Point) -> bool {
        let (px, py) = (i64::from(point.x), i64::from(point.y));
        let (x, y) = (i64::from(self.x), i64::from(self.y));
        px >= x
            && px < x + i64::from(self.width)
            && py >= y
            && py < y + i64::from(self.height)
    }

    /// Whether both dimensions are strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// A response triggered by a verb on an object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    /// Lower-case verb key.
    pub verb: String,
    /// Text shown when the interaction fires.
    pub text: String,
    /// Puzzle evaluated when the interaction fires.
    pub puzzle: Option<PuzzleId>,
}

/// An interactive entity inside a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameObject {
    /// Identifier, unique within the room.
    pub id: ObjectId,
    /// Display name, used for tooltips.
    pub name: String,
    /// Clickable area.
    pub bounds: Rect,
    /// Interactions keyed by verb.
    pub interactions: BTreeMap<String, Interaction>,
    /// Puzzle declared on this object, if any.
    pub puzzle: Option<PuzzleId>,
}

impl GameObject {
    /// Look up the interaction for an already lower-cased verb.
    pub fn interaction(&self, verb: &str) -> Option<&Interaction> {
        self.interactions.get(verb)
    }

    /// Iterate the verbs this object responds to.
    pub fn verbs(&self) -> impl Iterator<Item = &str> {
        self.interactions.keys().map(String::as_str)
    }
}

/// A precondition/reward pair attached to an object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// Globally unique identifier.
    pub id: PuzzleId,
    /// Item that must be held to solve the puzzle.
    ///
    /// A puzzle without a required item can never be solved; it only ever
    /// shows its hint.
    pub required_item: Option<ItemId>,
    /// Shown while the puzzle is unsolved.
    pub hint: String,
    /// Shown once, when the puzzle is solved.
    pub success: String,
    /// Granted once, when the puzzle is solved.
    pub reward: Option<ItemId>,
    /// Room the puzzle was declared in.
    pub room: RoomId,
}

/// A named location holding an ordered list of objects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Configuration key.
    pub id: RoomId,
    /// Display name.
    pub name: String,
    /// Narrative description.
    pub description: String,
    /// Objects in declaration order.
    pub objects: Vec<GameObject>,
}

impl Room {
    /// Find an object by identifier.
    pub fn object(&self, id: &str) -> Option<&GameObject> {
        self.objects.iter().find(|o| o.id == *id)
    }
}

/// An entry in the optional item catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Identifier used in puzzles and the inventory.
    pub id: ItemId,
    /// Display name.
    pub name: String,
}
