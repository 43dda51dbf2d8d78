//! Input events delivered by the front end once per step.

use sombra_world::Point;

/// One input step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Mouse click at a screen position.
    Click(Point),
    /// A completed typed command.
    Command(String),
    /// Pointer moved; drives the tooltip.
    PointerMoved(Point),
    /// Show or hide the instructions panel.
    ToggleInstructions,
    /// Menu key. Reserved; has no effect yet.
    ToggleMenu,
}

impl InputEvent {
    /// Build a click event.
    pub fn click(x: i32, y: i32) -> Self {
        Self::Click(Point::new(x, y))
    }

    /// Build a command event.
    pub fn command(text: impl Into<String>) -> Self {
        Self::Command(text.into())
    }

    /// Build a pointer-move event.
    pub fn hover(x: i32, y: i32) -> Self {
        Self::PointerMoved(Point::new(x, y))
    }
}
