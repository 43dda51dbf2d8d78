//! Resolution of clicks, typed commands and pointer hovers against a room.
//!
//! Everything here is read-only: these functions pick what was hit and leave
//! the side effects to [`crate::session::GameSession`].

use sombra_world::{GameObject, Interaction, Point, PuzzleId, Room};

/// How an interaction was triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// A click inside the object's bounds.
    Click,
    /// A typed verb.
    Command,
}

/// The result of resolving one input against a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triggered<'w> {
    /// The object that was hit.
    pub object: &'w GameObject,
    /// The interaction to show, if the object has one for this input.
    pub interaction: Option<&'w Interaction>,
    /// The puzzle to evaluate, if any.
    pub puzzle: Option<&'w PuzzleId>,
    /// Input kind.
    pub trigger: Trigger,
}

/// First object, in declaration order, whose bounds contain `point`.
pub fn hit_test(room: &Room, point: Point) -> Option<&GameObject> {
    room.objects.iter().find(|o| o.bounds.contains(point))
}

/// Resolve a click.
///
/// The first object under the point wins. Its `examine_verb` interaction is
/// triggered if it has one. The puzzle is the one that interaction names,
/// falling back to the object's own puzzle.
///
/// An object with neither an examine interaction nor a puzzle triggers
/// nothing, so the click resolves to `None` like a miss.
pub fn resolve_click<'w>(room: &'w Room, point: Point, examine_verb: &str) -> Option<Triggered<'w>> {
    let object = hit_test(room, point)?;
    let interaction = object.interaction(examine_verb);
    let puzzle = interaction
        .and_then(|i| i.puzzle.as_ref())
        .or(object.puzzle.as_ref());
    if interaction.is_none() && puzzle.is_none() {
        return None;
    }
    Some(Triggered {
        object,
        interaction,
        puzzle,
        trigger: Trigger::Click,
    })
}

/// Resolve a typed command.
///
/// The input is lower-cased and must equal a verb exactly; objects are tried
/// in declaration order and the first one that knows the verb wins.
pub fn resolve_command<'w>(room: &'w Room, input: &str) -> Option<Triggered<'w>> {
    let verb = input.to_lowercase();
    room.objects.iter().find_map(|object| {
        object.interaction(&verb).map(|interaction| Triggered {
            object,
            interaction: Some(interaction),
            puzzle: interaction.puzzle.as_ref(),
            trigger: Trigger::Command,
        })
    })
}

/// Name of the object under the pointer, for tooltips.
pub fn tooltip_at(room: &Room, point: Point) -> Option<&str> {
    hit_test(room, point).map(|o| o.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sombra_world::World;

    fn test_world() -> World {
        World::from_json_str(
            r#"{ "rooms": { "entrance": { "name": "Entrada", "description": "Una sala.",
                "objects": [
                    { "id": "cuadro", "name": "el cuadro", "x": 0, "y": 0, "width": 100, "height": 100,
                      "interactions": { "examinar": { "text": "Un cuadro viejo." },
                                        "mover": { "text": "No se mueve." } } },
                    { "id": "pared", "name": "la pared", "x": 50, "y": 50, "width": 200, "height": 200,
                      "interactions": { "examinar": { "text": "Piedra fría." },
                                        "tocar": { "text": "Húmeda." } } },
                    { "id": "cofre", "name": "el cofre", "x": 300, "y": 0, "width": 40, "height": 40,
                      "interactions": { "abrir": { "text": "Está cerrado." } },
                      "puzzle": { "id": "cofre", "required_item": "llave",
                                  "hint": "Necesitas una llave.", "success": "¡Se abre!" } },
                    { "id": "palanca", "name": "la palanca", "x": 400, "y": 0, "width": 20, "height": 60,
                      "interactions": { "examinar": { "text": "Una palanca.", "puzzle": "cofre" } } },
                    { "id": "sombra", "name": "una sombra", "x": 500, "y": 0, "width": 50, "height": 50,
                      "interactions": { "tocar": { "text": "Nada." } } }
                ] } } }"#,
        )
        .unwrap()
    }

    fn room(world: &World) -> &Room {
        world.room("entrance").unwrap()
    }

    #[test]
    fn click_first_declared_wins() {
        let world = test_world();
        // (60, 60) is inside both cuadro and pared.
        let hit = resolve_click(room(&world), Point::new(60, 60), "examinar").unwrap();
        assert_eq!(hit.object.id, "cuadro");
        assert_eq!(hit.interaction.unwrap().text, "Un cuadro viejo.");
        assert_eq!(hit.trigger, Trigger::Click);
    }

    #[test]
    fn click_outside_everything() {
        let world = test_world();
        assert!(resolve_click(room(&world), Point::new(299, 299), "examinar").is_none());
    }

    #[test]
    fn click_without_examine_still_attaches_puzzle() {
        let world = test_world();
        let hit = resolve_click(room(&world), Point::new(310, 10), "examinar").unwrap();
        assert_eq!(hit.object.id, "cofre");
        assert!(hit.interaction.is_none());
        assert_eq!(hit.puzzle.unwrap(), "cofre");
    }

    #[test]
    fn click_uses_puzzle_named_by_examine_interaction() {
        let world = test_world();
        let hit = resolve_click(room(&world), Point::new(405, 10), "examinar").unwrap();
        assert_eq!(hit.object.id, "palanca");
        assert_eq!(hit.interaction.unwrap().text, "Una palanca.");
        assert_eq!(hit.puzzle.unwrap(), "cofre");
    }

    #[test]
    fn click_on_object_with_nothing_to_trigger() {
        let world = test_world();
        // The object is hit, but it has no examine text and no puzzle.
        assert!(resolve_click(room(&world), Point::new(510, 10), "examinar").is_none());
        assert_eq!(tooltip_at(room(&world), Point::new(510, 10)), Some("una sombra"));
    }

    #[test]
    fn command_is_case_insensitive_and_exact() {
        let world = test_world();
        let lower = resolve_command(room(&world), "examinar").unwrap();
        let mixed = resolve_command(room(&world), "Examinar").unwrap();
        assert_eq!(lower.object.id, mixed.object.id);
        assert_eq!(lower.interaction, mixed.interaction);
        assert_eq!(lower.object.id, "cuadro");

        assert!(resolve_command(room(&world), "examinarx").is_none());
        assert!(resolve_command(room(&world), "examina").is_none());
        assert!(resolve_command(room(&world), " examinar").is_none());
    }

    #[test]
    fn command_falls_through_to_later_object() {
        let world = test_world();
        let hit = resolve_command(room(&world), "TOCAR").unwrap();
        assert_eq!(hit.object.id, "pared");
        assert_eq!(hit.trigger, Trigger::Command);
    }

    #[test]
    fn command_carries_interaction_puzzle() {
        let world = test_world();
        let hit = resolve_command(room(&world), "abrir").unwrap();
        assert_eq!(hit.puzzle.unwrap(), "cofre");
    }

    #[test]
    fn tooltip_names_object() {
        let world = test_world();
        assert_eq!(tooltip_at(room(&world), Point::new(200, 200)), Some("la pared"));
        assert_eq!(tooltip_at(room(&world), Point::new(5, 5)), Some("el cuadro"));
        assert_eq!(tooltip_at(room(&world), Point::new(-1, 5)), None);
    }
}
