use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use sombra_world::{GameObject, PuzzleId, Room, World};

pub fn run(path: &Path) -> Result<(), String> {
    let world = super::load_world(path)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Room", "Object", "Bounds", "Verbs", "Puzzle"]);

    for room in world.rooms() {
        if room.objects.is_empty() {
            table.add_row(vec![room.id.to_string(), "—".into(), String::new(), String::new(), String::new()]);
            continue;
        }
        for object in &room.objects {
            let b = object.bounds;
            let bounds = format!("{},{} {}x{}", b.x, b.y, b.width, b.height);
            let verbs = object.verbs().collect::<Vec<_>>().join(", ");
            let puzzle = describe_puzzles(&world, room, object);
            table.add_row(vec![room.id.to_string(), object.name.clone(), bounds, verbs, puzzle]);
        }
    }

    println!("{table}");
    println!();
    println!("  {} rooms, {} objects", world.room_count(), world.object_count());

    Ok(())
}

/// Puzzles an object can trigger: its own, then any its interactions name.
/// Puzzles declared in another room are marked with that room.
fn describe_puzzles(world: &World, room: &Room, object: &GameObject) -> String {
    let mut ids: Vec<&PuzzleId> = Vec::new();
    let named = object.interactions.values().filter_map(|i| i.puzzle.as_ref());
    for id in object.puzzle.iter().chain(named) {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }

    let described: Vec<String> = ids
        .into_iter()
        .filter_map(|id| world.puzzle(id.as_str()))
        .map(|p| {
            let mut text = p.id.to_string();
            if let Some(item) = &p.required_item {
                text.push_str(&format!(" (needs {})", world.item_name(item)));
            }
            if p.room != room.id {
                text.push_str(&format!(" in {}", p.room));
            }
            text
        })
        .collect();

    if described.is_empty() {
        "—".to_string()
    } else {
        described.join(", ")
    }
}
