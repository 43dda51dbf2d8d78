//! Interaction engine for the Sombraportal adventure.
//!
//! Turns clicks, typed verbs and pointer movement into messages and game-state
//! changes against a loaded [`sombra_world::World`]. A [`GameSession`] owns all
//! mutable state; the world itself is never modified during play.

/// Time sources for message timestamps.
pub mod clock;
/// Error types for the engine.
pub mod error;
/// Render snapshot.
pub mod frame;
/// Input events.
pub mod input;
/// Timed message queue.
pub mod messages;
/// Puzzle state machine.
pub mod puzzle;
/// Click, command and hover resolution.
pub mod resolver;
/// Play session.
pub mod session;
/// Inventory and solved set.
pub mod state;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{EngineError, EngineResult};
pub use frame::{Frame, ObjectOutline, Tooltip};
pub use input::InputEvent;
pub use messages::{CAPACITY, DISPLAY_WINDOW, Message, MessageQueue};
pub use puzzle::PuzzleOutcome;
pub use resolver::{Trigger, Triggered};
pub use session::{GameSession, PuzzleStatus, Resolution};
pub use state::{GameState, Inventory, SolvedSet};
