//! Read-only snapshot of session state for the render layer.

use sombra_world::{Point, Rect};

/// An object outline to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectOutline {
    /// Display name.
    pub name: String,
    /// Screen bounds.
    pub bounds: Rect,
}

/// The tooltip for the object under the pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    /// Object name.
    pub text: String,
    /// Pointer position the tooltip is anchored to.
    pub at: Point,
}

/// Everything the render layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Current room id.
    pub room_id: String,
    /// Current room name.
    pub room_name: String,
    /// Current room description.
    pub description: String,
    /// Objects in the current room, in declaration order.
    pub objects: Vec<ObjectOutline>,
    /// Messages inside the display window, oldest first.
    pub messages: Vec<String>,
    /// Tooltip under the pointer.
    pub tooltip: Option<Tooltip>,
    /// Inventory display names in acquisition order.
    pub inventory: Vec<String>,
    /// Whether the instructions panel is shown.
    pub show_instructions: bool,
}

impl Frame {
    /// The inventory line as the game shows it.
    pub fn inventory_line(&self) -> String {
        format!("Inventario: {}", self.inventory.join(", "))
    }
}
