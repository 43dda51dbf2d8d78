//! A single play session: the sole owner of mutable game state.

use std::path::Path;
use std::sync::Arc;

use sombra_world::{ItemId, ObjectId, Point, Puzzle, Room, RoomId, World};
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::error::{EngineError, EngineResult};
use crate::frame::{Frame, ObjectOutline, Tooltip};
use crate::input::InputEvent;
use crate::messages::MessageQueue;
use crate::puzzle::{self, PuzzleOutcome};
use crate::resolver::{self, Trigger, Triggered};
use crate::state::{GameState, Inventory, SolvedSet};

/// Puzzle involvement in one resolved input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleStatus {
    /// The interaction carries no puzzle.
    NoPuzzle,
    /// The precondition was not met; the hint was shown.
    Unsolved,
    /// This input solved the puzzle.
    JustSolved,
    /// The puzzle was solved earlier.
    AlreadySolved,
}

/// What one click or command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The object that matched.
    pub object: ObjectId,
    /// Input kind.
    pub trigger: Trigger,
    /// Messages pushed by this input, in order.
    pub messages: Vec<String>,
    /// Puzzle involvement.
    pub puzzle: PuzzleStatus,
}

/// An interactive session over a shared, immutable world.
pub struct GameSession {
    /// The world being played.
    world: Arc<World>,
    /// The room the player is in.
    room: RoomId,
    /// Inventory and solved puzzles.
    state: GameState,
    /// Recent messages.
    messages: MessageQueue,
    /// Time source for message timestamps.
    clock: Box<dyn Clock>,
    /// Last known pointer position.
    pointer: Option<Point>,
    /// Instructions panel toggle.
    show_instructions: bool,
}

impl GameSession {
    /// Create a session in the world's start room, timed by the system clock.
    pub fn new(world: Arc<World>) -> Self {
        Self::with_clock(world, SystemClock::new())
    }

    /// Create a session in the world's start room with a custom clock.
    pub fn with_clock(world: Arc<World>, clock: impl Clock + 'static) -> Self {
        let room = world.meta.start_room.clone();
        let state = GameState::with_inventory(world.starting_inventory().iter().cloned());
        Self {
            world,
            room,
            state,
            messages: MessageQueue::new(),
            clock: Box::new(clock),
            pointer: None,
            show_instructions: true,
        }
    }

    /// Create a session starting in a specific room.
    pub fn at_room(world: Arc<World>, room: &str) -> EngineResult<Self> {
        if world.room(room).is_none() {
            return Err(EngineError::RoomNotFound(room.to_string()));
        }
        let mut session = Self::new(world);
        session.room = RoomId::from(room);
        Ok(session)
    }

    /// Load a world file and start a session in its start room.
    pub fn load(path: impl AsRef<Path>) -> EngineResult<Self> {
        let world = World::load(path)?;
        Ok(Self::new(Arc::new(world)))
    }

    /// Replace the clock, keeping all other state.
    pub fn set_clock(&mut self, clock: impl Clock + 'static) {
        self.clock = Box::new(clock);
    }

    // -----------------------------------------------------------------------
    // Read access
    // -----------------------------------------------------------------------

    /// The world being played.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Id of the current room.
    pub fn current_room(&self) -> &RoomId {
        &self.room
    }

    /// The current room.
    pub fn room(&self) -> Option<&Room> {
        self.world.room(self.room.as_str())
    }

    /// Held items.
    pub fn inventory(&self) -> &Inventory {
        &self.state.inventory
    }

    /// Solved puzzles.
    pub fn solved(&self) -> &SolvedSet {
        &self.state.solved
    }

    /// Inventory and solved set together.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The message queue, including expired entries.
    pub fn messages(&self) -> &MessageQueue {
        &self.messages
    }

    /// Messages inside the display window right now.
    pub fn visible_messages(&self) -> Vec<&str> {
        self.messages.visible_at(self.clock.now())
    }

    /// Whether the instructions panel is shown.
    pub fn show_instructions(&self) -> bool {
        self.show_instructions
    }

    /// Tooltip for the object under the last pointer position.
    ///
    /// Recomputed on every call from the pointer and the current room.
    pub fn tooltip(&self) -> Option<Tooltip> {
        let at = self.pointer?;
        let room = self.room()?;
        resolver::tooltip_at(room, at).map(|name| Tooltip {
            text: name.to_string(),
            at,
        })
    }

    /// Snapshot everything the render layer draws this frame.
    pub fn frame(&self) -> Frame {
        let (room_name, description, objects) = match self.room() {
            Some(room) => (
                room.name.clone(),
                room.description.clone(),
                room.objects
                    .iter()
                    .map(|o| ObjectOutline {
                        name: o.name.clone(),
                        bounds: o.bounds,
                    })
                    .collect(),
            ),
            None => (String::new(), String::new(), Vec::new()),
        };

        Frame {
            room_id: self.room.to_string(),
            room_name,
            description,
            objects,
            messages: self
                .visible_messages()
                .into_iter()
                .map(str::to_string)
                .collect(),
            tooltip: self.tooltip(),
            inventory: self
                .state
                .inventory
                .items()
                .iter()
                .map(|item| self.world.item_name(item).to_string())
                .collect(),
            show_instructions: self.show_instructions,
        }
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    /// Dispatch one input event.
    ///
    /// Returns a [`Resolution`] for clicks and commands that hit an object.
    pub fn handle(&mut self, event: InputEvent) -> Option<Resolution> {
        match event {
            InputEvent::Click(point) => self.click(point),
            InputEvent::Command(text) => self.command(&text),
            InputEvent::PointerMoved(point) => {
                self.pointer_moved(point);
                None
            }
            InputEvent::ToggleInstructions => {
                self.toggle_instructions();
                None
            }
            InputEvent::ToggleMenu => {
                self.toggle_menu();
                None
            }
        }
    }

    /// Click at a screen position.
    ///
    /// The object's examine text is shown, then the puzzle (if any) is
    /// evaluated and may add a hint or success message. Returns `None` when
    /// the click misses or the object has nothing to trigger.
    pub fn click(&mut self, point: Point) -> Option<Resolution> {
        let world = Arc::clone(&self.world);
        let room = world.room(self.room.as_str())?;
        let Some(hit) = resolver::resolve_click(room, point, &world.meta.examine_verb) else {
            debug!(x = point.x, y = point.y, "click hit nothing");
            return None;
        };

        let mut pushed = Vec::new();
        if let Some(interaction) = hit.interaction {
            pushed.push(interaction.text.clone());
        }
        let status = match hit.puzzle.and_then(|id| world.puzzle(id.as_str())) {
            Some(puzzle) => apply_puzzle(&world, puzzle, &mut self.state, &mut pushed),
            None => PuzzleStatus::NoPuzzle,
        };

        Some(self.finish(hit, pushed, status))
    }

    /// Run a typed command.
    ///
    /// An unsolved puzzle's hint or success text replaces the interaction
    /// text; once the puzzle is solved the interaction text is shown again.
    pub fn command(&mut self, input: &str) -> Option<Resolution> {
        let world = Arc::clone(&self.world);
        let room = world.room(self.room.as_str())?;
        let Some(hit) = resolver::resolve_command(room, input) else {
            debug!(input, "command matched nothing");
            return None;
        };

        let mut pushed = Vec::new();
        let status = match hit.puzzle.and_then(|id| world.puzzle(id.as_str())) {
            Some(puzzle) => apply_puzzle(&world, puzzle, &mut self.state, &mut pushed),
            None => PuzzleStatus::NoPuzzle,
        };
        if let (PuzzleStatus::NoPuzzle | PuzzleStatus::AlreadySolved, Some(interaction)) =
            (status, hit.interaction)
        {
            pushed.push(interaction.text.clone());
        }

        Some(self.finish(hit, pushed, status))
    }

    /// Record the pointer position for tooltips.
    pub fn pointer_moved(&mut self, point: Point) {
        self.pointer = Some(point);
    }

    /// Flip the instructions panel. Returns the new state.
    pub fn toggle_instructions(&mut self) -> bool {
        self.show_instructions = !self.show_instructions;
        self.show_instructions
    }

    /// Menu key handler. Reserved for a future menu; changes nothing.
    pub fn toggle_menu(&mut self) {
        debug!("menu toggle requested");
    }

    /// Put an item in the inventory directly.
    pub fn give_item(&mut self, item: impl Into<ItemId>) {
        self.state.inventory.add(item);
    }

    fn finish(&mut self, hit: Triggered<'_>, pushed: Vec<String>, puzzle: PuzzleStatus) -> Resolution {
        let now = self.clock.now();
        for text in &pushed {
            self.messages.push(text.clone(), now);
        }
        debug!(
            object = %hit.object.id,
            trigger = ?hit.trigger,
            puzzle = ?puzzle,
            messages = pushed.len(),
            "interaction resolved"
        );
        Resolution {
            object: hit.object.id.clone(),
            trigger: hit.trigger,
            messages: pushed,
            puzzle,
        }
    }
}

fn apply_puzzle(
    world: &World,
    puzzle: &Puzzle,
    state: &mut GameState,
    pushed: &mut Vec<String>,
) -> PuzzleStatus {
    match puzzle::step(puzzle, state) {
        PuzzleOutcome::AlreadySolved => PuzzleStatus::AlreadySolved,
        PuzzleOutcome::Hint(hint) => {
            pushed.push(hint.to_string());
            PuzzleStatus::Unsolved
        }
        PuzzleOutcome::Solved { success, reward } => {
            pushed.push(success.to_string());
            if let Some(item) = reward {
                pushed.push(world.reward_notice(item));
            }
            PuzzleStatus::JustSolved
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use std::rc::Rc;
    use std::time::Duration;

    const WORLD: &str = r#"{
        "title": "Sombraportal",
        "rooms": {
            "entrance": {
                "name": "La Entrada",
                "description": "Una entrada oscura al castillo.",
                "objects": [
                    { "id": "puerta", "name": "la puerta", "x": 100, "y": 100, "width": 100, "height": 200,
                      "interactions": {
                          "examinar": { "text": "Una puerta de roble." },
                          "abrir": { "text": "La puerta cruje." }
                      },
                      "puzzle": { "id": "puerta_cerrada", "required_item": "llave",
                                  "hint": "La puerta está cerrada con llave.",
                                  "success": "¡La puerta se abre!", "reward": "daga" } },
                    { "id": "antorcha", "name": "la antorcha", "x": 150, "y": 150, "width": 50, "height": 50,
                      "interactions": { "examinar": { "text": "Una antorcha apagada." },
                                        "leer": { "text": "No hay nada que leer." } } },
                    { "id": "libro", "name": "el libro", "x": 400, "y": 100, "width": 40, "height": 30,
                      "interactions": { "leer": { "text": "Dice: la llave está bajo la alfombra." } } }
                ]
            },
            "hall": { "name": "El Salón", "description": "Un salón vacío.", "objects": [] }
        }
    }"#;

    fn session() -> (GameSession, Rc<ManualClock>) {
        let world = Arc::new(World::from_json_str(WORLD).unwrap());
        let clock = Rc::new(ManualClock::new());
        let session = GameSession::with_clock(world, Rc::clone(&clock));
        (session, clock)
    }

    const DOOR: Point = Point { x: 120, y: 120 };

    #[test]
    fn starts_in_start_room_with_instructions() {
        let (session, _) = session();
        assert_eq!(session.current_room(), &RoomId::from("entrance"));
        assert!(session.show_instructions());
        assert!(session.inventory().is_empty());
        assert!(session.messages().is_empty());
    }

    #[test]
    fn at_room_rejects_unknown_room() {
        let world = Arc::new(World::from_json_str(WORLD).unwrap());
        assert!(GameSession::at_room(Arc::clone(&world), "hall").is_ok());
        let err = GameSession::at_room(world, "sótano").err().unwrap();
        assert!(matches!(err, EngineError::RoomNotFound(room) if room == "sótano"));
    }

    #[test]
    fn click_without_item_shows_examine_and_hint() {
        let (mut session, _) = session();
        let res = session.click(DOOR).unwrap();
        assert_eq!(res.object, "puerta");
        assert_eq!(res.puzzle, PuzzleStatus::Unsolved);
        assert_eq!(
            session.visible_messages(),
            vec!["Una puerta de roble.", "La puerta está cerrada con llave."]
        );
        assert!(session.solved().is_empty());
    }

    #[test]
    fn click_with_item_solves_and_rewards_once() {
        let (mut session, _) = session();
        session.click(DOOR);
        session.give_item("llave");

        let res = session.click(DOOR).unwrap();
        assert_eq!(res.puzzle, PuzzleStatus::JustSolved);
        assert_eq!(
            res.messages,
            vec![
                "Una puerta de roble.".to_string(),
                "¡La puerta se abre!".to_string(),
                "¡Has obtenido: daga!".to_string(),
            ]
        );
        assert!(session.solved().is_solved("puerta_cerrada"));
        assert_eq!(session.inventory().count("daga"), 1);

        // Already solved: only the examine text.
        let res = session.click(DOOR).unwrap();
        assert_eq!(res.puzzle, PuzzleStatus::AlreadySolved);
        assert_eq!(res.messages, vec!["Una puerta de roble.".to_string()]);
        assert_eq!(session.inventory().count("daga"), 1);
    }

    #[test]
    fn click_solves_puzzle_named_on_examine_interaction() {
        let source = r#"{ "rooms": { "entrance": { "name": "E", "description": "D", "objects": [
            { "id": "cofre", "name": "el cofre", "x": 0, "y": 0, "width": 50, "height": 50,
              "interactions": { "examinar": { "text": "Un cofre." } },
              "puzzle": { "id": "cofre", "required_item": "llave",
                          "hint": "Necesitas una llave.", "success": "¡Se abre!", "reward": "daga" } },
            { "id": "palanca", "name": "la palanca", "x": 100, "y": 0, "width": 20, "height": 60,
              "interactions": { "examinar": { "text": "Una palanca.", "puzzle": "cofre" } } }
        ] } } }"#;
        let world = Arc::new(World::from_json_str(source).unwrap());
        let mut session = GameSession::new(world);
        let lever = Point::new(105, 10);

        let res = session.click(lever).unwrap();
        assert_eq!(res.object, "palanca");
        assert_eq!(res.puzzle, PuzzleStatus::Unsolved);
        assert_eq!(res.messages, vec!["Una palanca.".to_string(), "Necesitas una llave.".to_string()]);

        session.give_item("llave");
        let res = session.click(lever).unwrap();
        assert_eq!(res.puzzle, PuzzleStatus::JustSolved);
        assert!(session.solved().is_solved("cofre"));
        assert_eq!(session.inventory().count("daga"), 1);
    }

    #[test]
    fn click_on_inert_object_is_a_miss() {
        let source = r#"{ "rooms": { "entrance": { "name": "E", "description": "D", "objects": [
            { "id": "sombra", "name": "una sombra", "x": 0, "y": 0, "width": 50, "height": 50,
              "interactions": { "tocar": { "text": "Nada." } } }
        ] } } }"#;
        let world = Arc::new(World::from_json_str(source).unwrap());
        let mut session = GameSession::new(world);

        assert!(session.click(Point::new(10, 10)).is_none());
        assert!(session.messages().is_empty());
        session.pointer_moved(Point::new(10, 10));
        assert_eq!(session.tooltip().unwrap().text, "una sombra");
    }

    #[test]
    fn click_miss_changes_nothing() {
        let (mut session, _) = session();
        let before = session.state().clone();
        assert!(session.click(Point::new(5, 5)).is_none());
        assert!(session.messages().is_empty());
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn overlapping_click_picks_first_declared() {
        let (mut session, _) = session();
        // Inside both the door and the torch; the door is declared first.
        let res = session.click(Point::new(160, 160)).unwrap();
        assert_eq!(res.object, "puerta");
    }

    #[test]
    fn command_hint_replaces_interaction_text() {
        let (mut session, _) = session();
        let res = session.command("Abrir").unwrap();
        assert_eq!(res.puzzle, PuzzleStatus::Unsolved);
        assert_eq!(res.messages, vec!["La puerta está cerrada con llave.".to_string()]);
    }

    #[test]
    fn command_after_solve_shows_interaction_text() {
        let (mut session, _) = session();
        session.give_item("llave");
        let res = session.command("abrir").unwrap();
        assert_eq!(res.puzzle, PuzzleStatus::JustSolved);
        assert_eq!(res.messages[0], "¡La puerta se abre!");

        let res = session.command("abrir").unwrap();
        assert_eq!(res.puzzle, PuzzleStatus::AlreadySolved);
        assert_eq!(res.messages, vec!["La puerta cruje.".to_string()]);
        assert_eq!(session.inventory().count("daga"), 1);
    }

    #[test]
    fn command_without_puzzle_first_object_wins() {
        let (mut session, _) = session();
        let res = session.command("LEER").unwrap();
        assert_eq!(res.object, "antorcha");
        assert_eq!(res.puzzle, PuzzleStatus::NoPuzzle);
        assert_eq!(session.visible_messages(), vec!["No hay nada que leer."]);
    }

    #[test]
    fn unknown_command_is_silent() {
        let (mut session, _) = session();
        assert!(session.command("bailar").is_none());
        assert!(session.command("examinarx").is_none());
        assert!(session.messages().is_empty());
    }

    #[test]
    fn messages_expire_from_view() {
        let (mut session, clock) = session();
        session.command("leer");
        clock.advance(Duration::from_millis(4999));
        assert_eq!(session.visible_messages().len(), 1);
        clock.advance(Duration::from_millis(1));
        assert!(session.visible_messages().is_empty());
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn tooltip_follows_pointer() {
        let (mut session, _) = session();
        assert!(session.tooltip().is_none());

        session.handle(InputEvent::hover(410, 110));
        assert_eq!(session.tooltip().unwrap().text, "el libro");

        session.handle(InputEvent::hover(0, 0));
        assert!(session.tooltip().is_none());
        assert!(session.messages().is_empty());
    }

    #[test]
    fn toggles() {
        let (mut session, _) = session();
        assert!(session.handle(InputEvent::ToggleInstructions).is_none());
        assert!(!session.show_instructions());
        assert!(session.toggle_instructions());

        let before = session.state().clone();
        assert!(session.handle(InputEvent::ToggleMenu).is_none());
        assert_eq!(session.state(), &before);
        assert!(session.messages().is_empty());
    }

    #[test]
    fn frame_snapshot() {
        let (mut session, _) = session();
        session.give_item("llave");
        session.handle(InputEvent::click(120, 120));
        session.handle(InputEvent::hover(170, 170));

        let frame = session.frame();
        assert_eq!(frame.room_id, "entrance");
        assert_eq!(frame.room_name, "La Entrada");
        assert_eq!(frame.objects.len(), 3);
        assert_eq!(frame.objects[0].name, "la puerta");
        assert_eq!(frame.messages.len(), 3);
        assert_eq!(frame.inventory, vec!["llave".to_string(), "daga".to_string()]);
        assert_eq!(frame.tooltip.unwrap().text, "la puerta");
        assert!(frame.show_instructions);
    }

    #[test]
    fn starting_inventory_is_seeded() {
        let source = WORLD.replacen(r#""title": "Sombraportal","#, r#""inventory": ["llave"],"#, 1);
        let world = Arc::new(World::from_json_str(&source).unwrap());
        let mut session = GameSession::new(world);
        let res = session.click(DOOR).unwrap();
        assert_eq!(res.puzzle, PuzzleStatus::JustSolved);
    }
}
